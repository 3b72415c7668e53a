// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

use crate::models::SolicitudItem;
use crate::utils::constants::SOLICITUD_ENDPOINT;

/// Cliente HTTP del widget. El único tráfico es el POST de la solicitud,
/// form-encoded, al estilo del submit clásico que recibe el servidor:
/// insumos[] con los ids y cantidades[] en paralelo, nada más.
#[derive(Clone)]
pub struct ApiClient {
    endpoint: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            endpoint: SOLICITUD_ENDPOINT.map(|e| e.to_string()),
        }
    }

    /// Sin endpoint fijado en compilación se postea a la ruta actual,
    /// igual que hacía el form sintetizado.
    fn resolve_url(&self) -> Result<String, String> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }
        web_sys::window()
            .ok_or("No hay window")?
            .location()
            .pathname()
            .map_err(|_| "No se pudo leer la ruta actual".to_string())
    }

    pub async fn enviar_solicitud(&self, items: &[SolicitudItem]) -> Result<(), String> {
        let params = UrlSearchParams::new()
            .map_err(|_| "No se pudo armar el cuerpo de la solicitud".to_string())?;
        for item in items {
            params.append("insumos[]", &item.id.to_string());
            params.append("cantidades[]", &item.cantidad.to_string());
        }

        let url = self.resolve_url()?;
        log::info!("📤 Enviando solicitud de {} insumos a {}", items.len(), url);

        let response = Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded;charset=UTF-8")
            .body(JsValue::from(params))
            .map_err(|e| format!("Request error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
