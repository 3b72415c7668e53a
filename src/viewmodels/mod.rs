pub mod insumos_viewmodel;
pub mod vista;

pub use insumos_viewmodel::InsumosViewModel;
pub use vista::{FilaSeleccion, ResultadoItem, ResultadosVista, SeleccionVista};
