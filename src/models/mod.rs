pub mod insumo;
pub mod seleccion;

pub use insumo::{Catalogo, Insumo};
pub use seleccion::{InsumoSeleccionado, Seleccion, SeleccionError, SolicitudItem};
