// ============================================================================
// APP - Orquestador del widget
// ============================================================================
// Lee el catálogo y el paciente del elemento de datos del host, arma el
// viewmodel, engancha el render de la selección como subscriber y registra
// los listeners sobre los controles que ya vienen en la plantilla.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::WidgetConfig;
use crate::dom::{get_element_by_id, on_click, on_input};
use crate::models::{Catalogo, Insumo};
use crate::viewmodels::{InsumosViewModel, SeleccionVista};
use crate::views;

/// Elemento del host con el catálogo embebido y el id del paciente
const DATA_ELEMENT_ID: &str = "insumos-data";

pub struct App {
    vm: Rc<InsumosViewModel>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let data_el = get_element_by_id(DATA_ELEMENT_ID)
            .ok_or_else(|| JsValue::from_str("No #insumos-data element found"))?;

        let raw_catalogo = data_el
            .get_attribute("data-insumos")
            .ok_or_else(|| JsValue::from_str("Falta data-insumos en #insumos-data"))?;
        let insumos: Vec<Insumo> = serde_json::from_str(&raw_catalogo)
            .map_err(|e| JsValue::from_str(&format!("Catálogo ilegible: {}", e)))?;

        let paciente_id: u32 = data_el
            .get_attribute("data-paciente-id")
            .and_then(|v| v.trim().parse().ok())
            .ok_or_else(|| JsValue::from_str("Falta data-paciente-id en #insumos-data"))?;

        log::info!(
            "📋 Catálogo con {} insumos para el paciente {}",
            insumos.len(),
            paciente_id
        );

        let vm = Rc::new(InsumosViewModel::new(
            Catalogo::new(insumos),
            paciente_id,
            WidgetConfig::default(),
        ));

        let app = Self { vm };
        app.subscribe_render();
        app.bind_events()?;

        // Primer render con lo que haya sobrevivido en el espejo
        app.vm.notify();
        Ok(app)
    }

    /// El panel de selección es un subscriber más del estado: cualquier
    /// mutación lo redibuja, sin importar desde dónde vino.
    fn subscribe_render(&self) {
        let vm = self.vm.clone();
        self.vm.subscribe(move |seleccion, _stock_warning| {
            let vista = SeleccionVista::new(seleccion);
            if let Err(e) = views::render_seleccion(&vm, &vista) {
                log::error!("❌ Error renderizando la selección: {:?}", e);
            }
        });
    }

    fn bind_events(&self) -> Result<(), JsValue> {
        let buscar = get_element_by_id("buscarInsumo")
            .ok_or_else(|| JsValue::from_str("No #buscarInsumo element found"))?;
        {
            let vm = self.vm.clone();
            on_input(&buscar, move |query| {
                let vista = vm.search(&query);
                if let Err(e) = views::render_resultados(&vm, &vista) {
                    log::error!("❌ Error renderizando resultados: {:?}", e);
                }
            })?;
        }

        let solicitar = get_element_by_id("btnSolicitarTodos")
            .ok_or_else(|| JsValue::from_str("No #btnSolicitarTodos element found"))?;
        {
            let vm = self.vm.clone();
            on_click(&solicitar, move || {
                let timeout_ms = vm.config().notice_timeout_ms;
                vm.solicitar_todos(move |mensaje| views::show_notice(&mensaje, timeout_ms));
            })?;
        }

        Ok(())
    }
}
