// ============================================================================
// EVENT HANDLING - Listeners con Closure + forget()
// ============================================================================
// Los listeners se registran sobre elementos que el propio widget crea y
// destruye con set_inner_html(""); cuando el elemento muere el navegador
// limpia sus listeners, así que forget() no acumula memoria. Listeners
// sobre elementos del host (el input de búsqueda, el botón de enviar) se
// registran UNA sola vez al inicializar.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

/// Valor actual del input que disparó el evento
fn event_input_value(event: &Event) -> String {
    event
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Click sobre un elemento
pub fn on_click(element: &Element, mut handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |_event: Event| {
        handler();
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Evento input: el handler recibe el valor actual del campo
pub fn on_input(
    element: &Element,
    mut handler: impl FnMut(String) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |event: Event| {
        handler(event_input_value(&event));
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Evento change: el handler recibe el valor actual del campo
pub fn on_change(
    element: &Element,
    mut handler: impl FnMut(String) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |event: Event| {
        handler(event_input_value(&event));
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
