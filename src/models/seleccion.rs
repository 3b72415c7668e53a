// ============================================================================
// SELECCION - Lista de insumos elegidos para una solicitud
// ============================================================================
// Mutaciones síncronas y puras sobre la lista en memoria. La persistencia y
// el re-render los dispara quien llama (viewmodel), nunca este módulo.
// ============================================================================

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::insumo::{Catalogo, Insumo};

/// Un insumo elegido por el usuario, con la cantidad solicitada.
/// Es exactamente lo que se espeja a localStorage.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct InsumoSeleccionado {
    pub id: u32,
    #[serde(default)]
    pub codigo: Option<String>,
    pub nombre: String,
    #[serde(default)]
    pub unidad: Option<String>,
    pub stock_actual: u32,
    pub cantidad: u32,
}

impl InsumoSeleccionado {
    pub fn new(insumo: &Insumo, cantidad: u32) -> Self {
        Self {
            id: insumo.id,
            codigo: insumo.codigo.clone(),
            nombre: insumo.nombre.clone(),
            unidad: insumo.unidad.clone(),
            stock_actual: insumo.stock_actual,
            cantidad,
        }
    }
}

/// Par (id, cantidad) tal como viaja en el POST de la solicitud
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SolicitudItem {
    pub id: u32,
    pub cantidad: u32,
}

/// Errores de la selección. Ninguno es fatal para la página: todos terminan
/// como aviso transitorio al usuario.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeleccionError {
    #[error("Stock insuficiente de {nombre}: quedan {stock_actual}")]
    StockInsuficiente { nombre: String, stock_actual: u32 },
    #[error("La cantidad debe ser al menos 1")]
    CantidadInvalida,
    #[error("El insumo {id} no está en la selección")]
    NoSeleccionado { id: u32 },
    #[error("El insumo {id} no existe en el catálogo")]
    InsumoDesconocido { id: u32 },
}

/// Lista de selección: orden de inserción, a lo sumo una entrada por id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Seleccion {
    entradas: Vec<InsumoSeleccionado>,
}

impl Seleccion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstruir desde el espejo persistido. Las entradas se toman tal
    /// cual; `sanitize` las cruza después contra el catálogo vigente.
    pub fn from_entries(entradas: Vec<InsumoSeleccionado>) -> Self {
        Self { entradas }
    }

    pub fn entradas(&self) -> &[InsumoSeleccionado] {
        &self.entradas
    }

    pub fn len(&self) -> usize {
        self.entradas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entradas.is_empty()
    }

    pub fn find(&self, id: u32) -> Option<&InsumoSeleccionado> {
        self.entradas.iter().find(|e| e.id == id)
    }

    fn find_mut(&mut self, id: u32) -> Option<&mut InsumoSeleccionado> {
        self.entradas.iter_mut().find(|e| e.id == id)
    }

    /// Agregar un insumo. Si el id ya está seleccionado la cantidad se
    /// acumula sobre la entrada existente, nunca se duplica. El total
    /// acumulado no puede superar el stock disponible: en ese caso la
    /// lista queda intacta y se devuelve `StockInsuficiente`.
    pub fn add(&mut self, insumo: &Insumo, cantidad: u32) -> Result<(), SeleccionError> {
        if cantidad == 0 {
            return Err(SeleccionError::CantidadInvalida);
        }

        let previo = self.find(insumo.id).map_or(0, |e| e.cantidad);
        let total = previo.saturating_add(cantidad);
        if total > insumo.stock_actual {
            return Err(SeleccionError::StockInsuficiente {
                nombre: insumo.nombre.clone(),
                stock_actual: insumo.stock_actual,
            });
        }

        match self.find_mut(insumo.id) {
            Some(entrada) => {
                entrada.cantidad = total;
                entrada.stock_actual = insumo.stock_actual;
            }
            None => self.entradas.push(InsumoSeleccionado::new(insumo, cantidad)),
        }
        Ok(())
    }

    /// Fijar la cantidad de una entrada ya seleccionada. Acá el stock no es
    /// un tope duro: valores por encima quedan marcados por `stock_warning`
    /// pero se aceptan.
    pub fn update_cantidad(&mut self, id: u32, cantidad: u32) -> Result<(), SeleccionError> {
        if cantidad == 0 {
            return Err(SeleccionError::CantidadInvalida);
        }
        let entrada = self
            .find_mut(id)
            .ok_or(SeleccionError::NoSeleccionado { id })?;
        entrada.cantidad = cantidad;
        Ok(())
    }

    /// Quitar una entrada. Si el id no está, no pasa nada.
    pub fn remove(&mut self, id: u32) {
        self.entradas.retain(|e| e.id != id);
    }

    pub fn clear(&mut self) {
        self.entradas.clear();
    }

    /// true si alguna entrada pide más de lo que hay en stock.
    /// Es puramente informativo, nunca bloquea el envío.
    pub fn stock_warning(&self) -> bool {
        self.entradas.iter().any(|e| e.cantidad > e.stock_actual)
    }

    /// Pares ordenados (id, cantidad) listos para el POST. Con la lista
    /// vacía el que llama no debe enviar nada.
    pub fn para_solicitud(&self) -> Vec<SolicitudItem> {
        self.entradas
            .iter()
            .map(|e| SolicitudItem {
                id: e.id,
                cantidad: e.cantidad,
            })
            .collect()
    }

    /// Cruzar la lista contra el catálogo vigente después de recargarla del
    /// espejo persistido: descarta entradas con ids que ya no existen, ids
    /// repetidos (queda la primera) o cantidad cero, y refresca los datos
    /// del insumo con lo que dice el catálogo hoy.
    pub fn sanitize(&mut self, catalogo: &Catalogo) {
        let mut vistos = HashSet::new();
        self.entradas.retain(|e| {
            e.cantidad > 0 && catalogo.find_by_id(e.id).is_some() && vistos.insert(e.id)
        });
        for entrada in &mut self.entradas {
            if let Some(insumo) = catalogo.find_by_id(entrada.id) {
                entrada.codigo = insumo.codigo.clone();
                entrada.nombre = insumo.nombre.clone();
                entrada.unidad = insumo.unidad.clone();
                entrada.stock_actual = insumo.stock_actual;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insumo(id: u32, nombre: &str, stock: u32) -> Insumo {
        Insumo {
            id,
            codigo: None,
            nombre: nombre.to_string(),
            unidad: None,
            stock_actual: stock,
        }
    }

    fn catalogo() -> Catalogo {
        Catalogo::new(vec![insumo(1, "Gasa estéril", 10), insumo(2, "Guantes", 5)])
    }

    #[test]
    fn add_appends_new_entry() {
        let mut sel = Seleccion::new();
        sel.add(&insumo(1, "Gasa estéril", 10), 3).unwrap();
        assert_eq!(sel.len(), 1);
        assert_eq!(sel.find(1).unwrap().cantidad, 3);
        assert!(!sel.stock_warning());
    }

    #[test]
    fn add_same_id_accumulates_into_one_entry() {
        let gasa = insumo(1, "Gasa estéril", 10);
        let mut sel = Seleccion::new();
        sel.add(&gasa, 3).unwrap();
        sel.add(&gasa, 4).unwrap();
        assert_eq!(sel.len(), 1);
        assert_eq!(sel.find(1).unwrap().cantidad, 7);
    }

    #[test]
    fn add_over_stock_leaves_list_unchanged() {
        let gasa = insumo(1, "Gasa estéril", 10);
        let mut sel = Seleccion::new();

        let err = sel.add(&gasa, 11).unwrap_err();
        assert!(matches!(err, SeleccionError::StockInsuficiente { .. }));
        assert!(sel.is_empty());

        // También cuando el exceso aparece al acumular
        sel.add(&gasa, 6).unwrap();
        let err = sel.add(&gasa, 5).unwrap_err();
        assert!(matches!(err, SeleccionError::StockInsuficiente { .. }));
        assert_eq!(sel.find(1).unwrap().cantidad, 6);
    }

    #[test]
    fn add_zero_quantity_is_rejected() {
        let mut sel = Seleccion::new();
        let err = sel.add(&insumo(1, "Gasa estéril", 10), 0).unwrap_err();
        assert_eq!(err, SeleccionError::CantidadInvalida);
        assert!(sel.is_empty());
    }

    #[test]
    fn update_cantidad_sets_directly_and_only_warns_over_stock() {
        let mut sel = Seleccion::new();
        sel.add(&insumo(1, "Gasa estéril", 10), 3).unwrap();

        sel.update_cantidad(1, 12).unwrap();
        assert_eq!(sel.find(1).unwrap().cantidad, 12);
        assert!(sel.stock_warning());

        sel.update_cantidad(1, 2).unwrap();
        assert!(!sel.stock_warning());
    }

    #[test]
    fn update_cantidad_on_unselected_id_fails() {
        let mut sel = Seleccion::new();
        assert_eq!(
            sel.update_cantidad(9, 1).unwrap_err(),
            SeleccionError::NoSeleccionado { id: 9 }
        );
        sel.add(&insumo(1, "Gasa estéril", 10), 1).unwrap();
        assert_eq!(
            sel.update_cantidad(1, 0).unwrap_err(),
            SeleccionError::CantidadInvalida
        );
    }

    #[test]
    fn remove_drops_entry_and_ignores_absent_ids() {
        let mut sel = Seleccion::new();
        sel.add(&insumo(1, "Gasa estéril", 10), 2).unwrap();
        sel.remove(99);
        assert_eq!(sel.len(), 1);
        sel.remove(1);
        assert!(sel.is_empty());
        assert!(sel.para_solicitud().is_empty());
    }

    #[test]
    fn para_solicitud_preserves_insertion_order() {
        let mut sel = Seleccion::new();
        sel.add(&insumo(2, "Guantes", 5), 1).unwrap();
        sel.add(&insumo(1, "Gasa estéril", 10), 4).unwrap();

        let items = sel.para_solicitud();
        assert_eq!(items.len(), 2);
        assert_eq!((items[0].id, items[0].cantidad), (2, 1));
        assert_eq!((items[1].id, items[1].cantidad), (1, 4));
    }

    #[test]
    fn persisted_mirror_round_trips() {
        let mut sel = Seleccion::new();
        sel.add(&insumo(2, "Guantes", 5), 2).unwrap();
        sel.add(&insumo(1, "Gasa estéril", 10), 7).unwrap();

        let json = serde_json::to_string(sel.entradas()).unwrap();
        let entradas: Vec<InsumoSeleccionado> = serde_json::from_str(&json).unwrap();
        let recargada = Seleccion::from_entries(entradas);

        assert_eq!(recargada, sel);
        assert_eq!(recargada.para_solicitud(), sel.para_solicitud());
    }

    #[test]
    fn sanitize_drops_stale_entries_and_refreshes_stock() {
        let cat = catalogo();
        let entradas = vec![
            InsumoSeleccionado {
                id: 1,
                codigo: None,
                nombre: "Gasa estéril".to_string(),
                unidad: None,
                stock_actual: 99, // stock viejo, guardado en otra sesión
                cantidad: 3,
            },
            InsumoSeleccionado {
                id: 1, // duplicado: debe quedar solo la primera
                codigo: None,
                nombre: "Gasa estéril".to_string(),
                unidad: None,
                stock_actual: 99,
                cantidad: 8,
            },
            InsumoSeleccionado {
                id: 42, // ya no existe en el catálogo
                codigo: None,
                nombre: "Descontinuado".to_string(),
                unidad: None,
                stock_actual: 1,
                cantidad: 1,
            },
            InsumoSeleccionado {
                id: 2,
                codigo: None,
                nombre: "Guantes".to_string(),
                unidad: None,
                stock_actual: 5,
                cantidad: 0, // inválida
            },
        ];

        let mut sel = Seleccion::from_entries(entradas);
        sel.sanitize(&cat);

        assert_eq!(sel.len(), 1);
        let entrada = sel.find(1).unwrap();
        assert_eq!(entrada.cantidad, 3);
        assert_eq!(entrada.stock_actual, 10);
    }

    // Flujo completo: agregar, subir la cantidad por encima del stock,
    // eliminar. El aviso de stock aparece y desaparece con la entrada.
    #[test]
    fn full_add_update_remove_flow() {
        let cat = Catalogo::new(vec![insumo(1, "Gauze", 10)]);
        let gauze = cat.find_by_id(1).unwrap().clone();

        let mut sel = Seleccion::new();
        sel.add(&gauze, 3).unwrap();
        assert_eq!(sel.len(), 1);
        assert_eq!(sel.find(1).unwrap().cantidad, 3);
        assert!(!sel.stock_warning());

        sel.update_cantidad(1, 12).unwrap();
        assert!(sel.stock_warning());
        assert_eq!(sel.find(1).unwrap().cantidad, 12);

        sel.remove(1);
        assert!(sel.is_empty());
        assert!(!sel.stock_warning());
    }
}
