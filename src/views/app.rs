// ============================================================================
// APP VIEW - Composición de la página completa
// ============================================================================
// Navbar + página de blogs + el modal activo (si hay). Se reconstruye entera
// en cada re-render; el estado decide qué se ve, nunca el DOM.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::{ActiveModal, AppState};
use crate::views::{
    render_blog_page, render_login_modal, render_navbar, render_settings_modal,
    render_signup_modal,
};

/// Renderizar la aplicación completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let navbar = render_navbar(state)?;
    let page = render_blog_page(state)?;

    let shell = ElementBuilder::new("div")?
        .class("app-shell")
        .child(&navbar)?
        .child(&page)?
        .build();

    // El modal activo es un valor de estado explícito, como máximo uno
    let modal = match state.get_active_modal() {
        ActiveModal::None => None,
        ActiveModal::Login => Some(render_login_modal(state)?),
        ActiveModal::Signup => Some(render_signup_modal(state)?),
        ActiveModal::Settings => Some(render_settings_modal(state)?),
    };
    if let Some(ref modal) = modal {
        append_child(&shell, modal)?;
    }

    Ok(shell)
}
