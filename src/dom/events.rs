// ============================================================================
// EVENT HANDLING - Listeners con Closure + forget()
// ============================================================================
// Cuando un elemento se destruye (re-render con set_inner_html("")), el
// navegador limpia sus listeners, así que closure.forget() es seguro para
// listeners locales. Listeners globales (window/document) se registran UNA
// sola vez al inicio de la app.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, InputEvent, MouseEvent};

/// Click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    // forget() mantiene el closure vivo del lado Rust
    closure.forget();
    Ok(())
}

/// Input handler simple
pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(InputEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(InputEvent)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
