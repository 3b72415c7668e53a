use serde::{Deserialize, Serialize};

/// Configuración del widget. Los defaults reproducen el comportamiento
/// histórico de la página de solicitudes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Prefijo del espejo en localStorage; la clave completa es
    /// prefijo + id del paciente.
    pub storage_prefix: String,
    /// Cuánto queda visible un aviso transitorio
    pub notice_timeout_ms: u32,
    pub search: SearchConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_prefix: "insumos_".to_string(),
            notice_timeout_ms: 4_000,
            search: SearchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Longitud mínima de la consulta antes de filtrar
    pub min_query_len: usize,
    /// Máximo de resultados que se muestran
    pub max_resultados: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            max_resultados: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_host_page_contract() {
        let config = WidgetConfig::default();
        assert_eq!(config.storage_prefix, "insumos_");
        assert_eq!(config.notice_timeout_ms, 4_000);
        assert_eq!(config.search.min_query_len, 2);
        assert_eq!(config.search.max_resultados, 8);
    }
}
