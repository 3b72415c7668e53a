// ============================================================================
// VISTA - Mapeo puro de datos a modelos de vista
// ============================================================================
// Acá se precalcula todo lo que la vista muestra (contadores, flags,
// restos de stock) para que el render no tenga lógica.
// ============================================================================

use crate::models::{Insumo, Seleccion};

/// Un resultado de búsqueda listo para pintar
#[derive(Clone, Debug, PartialEq)]
pub struct ResultadoItem {
    pub id: u32,
    pub codigo: Option<String>,
    pub nombre: String,
    pub unidad: Option<String>,
    pub stock_actual: u32,
    /// Ya está en la selección: la vista muestra el badge en lugar
    /// de los controles de agregar
    pub ya_seleccionado: bool,
}

/// Resultados de una búsqueda
#[derive(Clone, Debug, PartialEq)]
pub struct ResultadosVista {
    pub items: Vec<ResultadoItem>,
    pub total: usize,
    /// Hubo consulta válida pero sin coincidencias
    pub vacia: bool,
    /// false cuando la consulta no llegó al mínimo y el panel se oculta
    pub visible: bool,
}

impl ResultadosVista {
    pub fn new(resultados: &[&Insumo], seleccion: &Seleccion) -> Self {
        let items: Vec<ResultadoItem> = resultados
            .iter()
            .map(|insumo| ResultadoItem {
                id: insumo.id,
                codigo: insumo.codigo.clone(),
                nombre: insumo.nombre.clone(),
                unidad: insumo.unidad.clone(),
                stock_actual: insumo.stock_actual,
                ya_seleccionado: seleccion.find(insumo.id).is_some(),
            })
            .collect();

        Self {
            total: items.len(),
            vacia: items.is_empty(),
            items,
            visible: true,
        }
    }

    /// Consulta demasiado corta: no se muestra nada
    pub fn oculta() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            vacia: false,
            visible: false,
        }
    }
}

/// Una fila de la selección lista para pintar
#[derive(Clone, Debug, PartialEq)]
pub struct FilaSeleccion {
    pub id: u32,
    pub codigo: Option<String>,
    pub nombre: String,
    pub unidad: Option<String>,
    pub stock_actual: u32,
    pub cantidad: u32,
    /// Stock que quedaría después de esta solicitud; negativo si se pide
    /// más de lo que hay
    pub stock_restante: i64,
    pub excede_stock: bool,
}

/// La selección completa lista para pintar
#[derive(Clone, Debug, PartialEq)]
pub struct SeleccionVista {
    pub filas: Vec<FilaSeleccion>,
    pub total_items: usize,
    pub stock_ok: bool,
    pub puede_solicitar: bool,
}

impl SeleccionVista {
    pub fn new(seleccion: &Seleccion) -> Self {
        let filas: Vec<FilaSeleccion> = seleccion
            .entradas()
            .iter()
            .map(|e| {
                let restante = i64::from(e.stock_actual) - i64::from(e.cantidad);
                FilaSeleccion {
                    id: e.id,
                    codigo: e.codigo.clone(),
                    nombre: e.nombre.clone(),
                    unidad: e.unidad.clone(),
                    stock_actual: e.stock_actual,
                    cantidad: e.cantidad,
                    stock_restante: restante,
                    excede_stock: restante < 0,
                }
            })
            .collect();

        Self {
            total_items: filas.len(),
            stock_ok: !seleccion.stock_warning(),
            puede_solicitar: !filas.is_empty(),
            filas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Insumo;

    fn insumo(id: u32, nombre: &str, stock: u32) -> Insumo {
        Insumo {
            id,
            codigo: None,
            nombre: nombre.to_string(),
            unidad: Some("caja".to_string()),
            stock_actual: stock,
        }
    }

    #[test]
    fn resultados_flag_already_selected_items() {
        let gasa = insumo(1, "Gasa estéril", 10);
        let guantes = insumo(2, "Guantes", 5);

        let mut sel = Seleccion::new();
        sel.add(&gasa, 2).unwrap();

        let vista = ResultadosVista::new(&[&gasa, &guantes], &sel);
        assert!(vista.visible);
        assert!(!vista.vacia);
        assert_eq!(vista.total, 2);
        assert!(vista.items[0].ya_seleccionado);
        assert!(!vista.items[1].ya_seleccionado);
    }

    #[test]
    fn resultados_empty_vs_hidden() {
        let sel = Seleccion::new();
        let vacia = ResultadosVista::new(&[], &sel);
        assert!(vacia.vacia);
        assert!(vacia.visible);

        let oculta = ResultadosVista::oculta();
        assert!(!oculta.visible);
        assert!(!oculta.vacia);
    }

    #[test]
    fn seleccion_vista_computes_remaining_stock_and_flags() {
        let mut sel = Seleccion::new();
        sel.add(&insumo(1, "Gasa estéril", 10), 3).unwrap();
        sel.add(&insumo(2, "Guantes", 5), 5).unwrap();
        sel.update_cantidad(2, 8).unwrap();

        let vista = SeleccionVista::new(&sel);
        assert_eq!(vista.total_items, 2);
        assert!(vista.puede_solicitar);
        assert!(!vista.stock_ok);

        assert_eq!(vista.filas[0].stock_restante, 7);
        assert!(!vista.filas[0].excede_stock);
        assert_eq!(vista.filas[1].stock_restante, -3);
        assert!(vista.filas[1].excede_stock);
    }

    #[test]
    fn empty_selection_cannot_be_submitted() {
        let vista = SeleccionVista::new(&Seleccion::new());
        assert_eq!(vista.total_items, 0);
        assert!(!vista.puede_solicitar);
        assert!(vista.stock_ok);
    }
}
