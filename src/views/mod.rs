pub mod notice;
pub mod resultados;
pub mod seleccion_panel;

pub use notice::show_notice;
pub use resultados::render_resultados;
pub use seleccion_panel::render_seleccion;
