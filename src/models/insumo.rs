use serde::{Deserialize, Serialize};

/// Insumo del catálogo. Lo entrega la página host como JSON en el
/// data-attribute y es de solo lectura durante toda la sesión.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Insumo {
    pub id: u32,
    #[serde(default)]
    pub codigo: Option<String>,
    pub nombre: String,
    #[serde(default)]
    pub unidad: Option<String>,
    pub stock_actual: u32,
}

/// Catálogo completo de insumos, en el orden en que lo entrega el servidor.
#[derive(Clone, Debug, Default)]
pub struct Catalogo {
    insumos: Vec<Insumo>,
}

impl Catalogo {
    pub fn new(insumos: Vec<Insumo>) -> Self {
        Self { insumos }
    }

    pub fn is_empty(&self) -> bool {
        self.insumos.is_empty()
    }

    /// Buscar un insumo por id
    pub fn find_by_id(&self, id: u32) -> Option<&Insumo> {
        self.insumos.iter().find(|i| i.id == id)
    }

    /// Búsqueda por texto: substring case-insensitive sobre nombre o código.
    /// Consultas más cortas que `min_len` no devuelven nada (freno de UX,
    /// no una regla de negocio). Como máximo `cap` resultados, conservando
    /// el orden del catálogo.
    pub fn search(&self, query: &str, min_len: usize, cap: usize) -> Vec<&Insumo> {
        if query.chars().count() < min_len {
            return Vec::new();
        }

        let termino = query.to_lowercase();
        self.insumos
            .iter()
            .filter(|i| {
                let codigo_matches = i
                    .codigo
                    .as_ref()
                    .map_or(false, |c| c.to_lowercase().contains(&termino));
                i.nombre.to_lowercase().contains(&termino) || codigo_matches
            })
            .take(cap)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insumo(id: u32, codigo: Option<&str>, nombre: &str, stock: u32) -> Insumo {
        Insumo {
            id,
            codigo: codigo.map(|c| c.to_string()),
            nombre: nombre.to_string(),
            unidad: Some("unidad".to_string()),
            stock_actual: stock,
        }
    }

    fn catalogo() -> Catalogo {
        Catalogo::new(vec![
            insumo(1, Some("GSA-01"), "Gasa estéril", 10),
            insumo(2, Some("GNT-20"), "Guantes de nitrilo", 50),
            insumo(3, None, "Jeringa 5ml", 30),
            insumo(4, Some("GSA-02"), "Gasa vaselinada", 4),
        ])
    }

    #[test]
    fn search_below_min_len_returns_empty() {
        let cat = catalogo();
        assert!(cat.search("", 2, 8).is_empty());
        assert!(cat.search("g", 2, 8).is_empty());
        assert!(cat.search("ga", 3, 8).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let cat = catalogo();
        let resultados = cat.search("GASA", 2, 8);
        assert_eq!(resultados.len(), 2);
        for r in &resultados {
            assert!(r.nombre.to_lowercase().contains("gasa"));
        }
    }

    #[test]
    fn search_matches_codigo() {
        let cat = catalogo();
        let resultados = cat.search("gnt", 2, 8);
        assert_eq!(resultados.len(), 1);
        assert_eq!(resultados[0].id, 2);
    }

    #[test]
    fn search_respects_cap_and_catalog_order() {
        let cat = catalogo();
        let resultados = cat.search("gsa", 2, 1);
        assert_eq!(resultados.len(), 1);
        assert_eq!(resultados[0].id, 1);

        let todos = cat.search("a", 1, 8);
        let ids: Vec<u32> = todos.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn find_by_id_hits_and_misses() {
        let cat = catalogo();
        assert_eq!(cat.find_by_id(3).map(|i| i.nombre.as_str()), Some("Jeringa 5ml"));
        assert!(cat.find_by_id(99).is_none());
    }

    #[test]
    fn insumo_json_matches_host_page_shape() {
        let json = r#"[{"id":7,"codigo":"ALC-96","nombre":"Alcohol 96","unidad":"litro","stock_actual":12},
                       {"id":8,"nombre":"Algodón","stock_actual":3}]"#;
        let insumos: Vec<Insumo> = serde_json::from_str(json).unwrap();
        assert_eq!(insumos.len(), 2);
        assert_eq!(insumos[0].codigo.as_deref(), Some("ALC-96"));
        assert!(insumos[1].codigo.is_none());
        assert!(insumos[1].unidad.is_none());
    }
}
