// ============================================================================
// INSUMOS VIEWMODEL - LÓGICA DE LA SOLICITUD DE INSUMOS
// ============================================================================
// Toda mutación exitosa sigue el mismo ciclo: mutar la lista, guardar el
// espejo, notificar a los subscribers para que la vista se redibuje.
// ============================================================================

use std::rc::Rc;

use crate::config::WidgetConfig;
use crate::models::{Catalogo, Seleccion, SeleccionError};
use crate::services::{ApiClient, StorageService};
use crate::state::SelectionState;
use crate::viewmodels::vista::ResultadosVista;

pub struct InsumosViewModel {
    catalogo: Rc<Catalogo>,
    state: SelectionState,
    storage: StorageService,
    api_client: ApiClient,
    config: WidgetConfig,
}

impl InsumosViewModel {
    /// Levanta el espejo persistido del paciente (ausente o corrupto
    /// arranca vacío) y lo cruza contra el catálogo vigente.
    pub fn new(catalogo: Catalogo, paciente_id: u32, config: WidgetConfig) -> Self {
        let storage = StorageService::new(&config.storage_prefix, paciente_id);

        let mut inicial = storage.load();
        inicial.sanitize(&catalogo);

        if catalogo.is_empty() {
            log::warn!("⚠️ El catálogo llegó vacío; la búsqueda no va a devolver nada");
        }

        Self {
            catalogo: Rc::new(catalogo),
            state: SelectionState::new(inicial),
            storage,
            api_client: ApiClient::new(),
            config,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Registrar un callback de re-render; recibe la lista actual y el
    /// flag de stock excedido después de cada mutación.
    pub fn subscribe(&self, callback: impl Fn(&Seleccion, bool) + 'static) {
        self.state.subscribe(callback);
    }

    /// Forzar una notificación (primer render)
    pub fn notify(&self) {
        self.state.notify();
    }

    /// Buscar en el catálogo. Por debajo del mínimo de caracteres el panel
    /// de resultados se oculta en lugar de mostrarse vacío.
    pub fn search(&self, query: &str) -> ResultadosVista {
        if query.chars().count() < self.config.search.min_query_len {
            return ResultadosVista::oculta();
        }
        let resultados = self.catalogo.search(
            query,
            self.config.search.min_query_len,
            self.config.search.max_resultados,
        );
        self.state
            .with(|sel| ResultadosVista::new(&resultados, sel))
    }

    pub fn add_insumo(&self, id: u32, cantidad: u32) -> Result<(), SeleccionError> {
        let insumo = self
            .catalogo
            .find_by_id(id)
            .cloned()
            .ok_or(SeleccionError::InsumoDesconocido { id })?;

        self.state.mutate(|sel| sel.add(&insumo, cantidad))?;
        log::info!("➕ Insumo {} agregado (cantidad {})", insumo.nombre, cantidad);
        self.persist_and_notify();
        Ok(())
    }

    pub fn update_cantidad(&self, id: u32, cantidad: u32) -> Result<(), SeleccionError> {
        self.state.mutate(|sel| sel.update_cantidad(id, cantidad))?;
        self.persist_and_notify();
        Ok(())
    }

    pub fn remove_insumo(&self, id: u32) {
        self.state.mutate(|sel| sel.remove(id));
        log::info!("🗑️ Insumo {} quitado de la selección", id);
        self.persist_and_notify();
    }

    /// Enviar la solicitud completa. Con la selección vacía no se hace
    /// nada. El envío es fire-and-forget: si sale bien se limpian la lista
    /// y el espejo, si falla se avisa por el callback y la selección queda
    /// como estaba para reintentar.
    pub fn solicitar_todos(&self, on_error: impl Fn(String) + 'static) {
        let items = self.state.with(|sel| sel.para_solicitud());
        if items.is_empty() {
            log::info!("📭 Nada para solicitar");
            return;
        }

        let api_client = self.api_client.clone();
        let storage = self.storage.clone();
        let state = self.state.clone();

        wasm_bindgen_futures::spawn_local(async move {
            match api_client.enviar_solicitud(&items).await {
                Ok(()) => {
                    log::info!("✅ Solicitud enviada ({} insumos)", items.len());
                    storage.clear();
                    state.mutate(|sel| sel.clear());
                    state.notify();
                }
                Err(e) => {
                    log::error!("❌ Error enviando la solicitud: {}", e);
                    on_error(format!("No se pudo enviar la solicitud: {}", e));
                }
            }
        });
    }

    fn persist_and_notify(&self) {
        self.storage.save(&self.state.snapshot());
        self.state.notify();
    }
}
