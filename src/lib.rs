// ============================================================================
// INSUMOS WIDGET - Solicitud de insumos para una historia clínica
// ============================================================================
// MVVM sin framework:
// - Views: funciones que pintan DOM (sin lógica)
// - ViewModels: estado + lógica de la solicitud
// - Services: storage y comunicación HTTP
// - State: lista de selección con Rc<RefCell> + subscribers
// - Models: catálogo y selección, puros y testeables en nativo
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;

// El App vive tanto como la página; acá se lo retiene
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🏥 Widget de solicitud de insumos iniciando...");

    let app = App::new()?;
    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}
