// ============================================================================
// NOTICE VIEW - Avisos transitorios no bloqueantes
// ============================================================================

use gloo_timers::callback::Timeout;

use crate::dom::{get_element_by_id, set_display, set_text_content};

/// Mostrar un aviso transitorio en #avisoInsumos. Reemplaza a los alert()
/// de la página vieja: nunca bloquea y se borra solo. Si el host no tiene
/// el contenedor, el aviso queda al menos en la consola.
pub fn show_notice(mensaje: &str, timeout_ms: u32) {
    let aviso = match get_element_by_id("avisoInsumos") {
        Some(el) => el,
        None => {
            log::warn!("⚠️ {}", mensaje);
            return;
        }
    };

    set_text_content(&aviso, mensaje);
    let _ = set_display(&aviso, "block");

    let aviso = aviso.clone();
    Timeout::new(timeout_ms, move || {
        set_text_content(&aviso, "");
        let _ = set_display(&aviso, "none");
    })
    .forget();
}
