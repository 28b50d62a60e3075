// ============================================================================
// LOGIN MODAL
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{alert, input_value, on_click, ElementBuilder};
use crate::state::{ActiveModal, AppState};
use crate::viewmodels::SessionViewModel;
use crate::views::reload_blogs;

/// Renderizar el modal de login
pub fn render_login_modal(state: &AppState) -> Result<Element, JsValue> {
    let overlay = ElementBuilder::new("div")?
        .class("modal fixed inset-0 flex items-center justify-center bg-black bg-opacity-50")
        .build();

    let content = ElementBuilder::new("div")?
        .class("modal-content bg-white p-6 rounded shadow-lg w-96")
        .build();

    // Cerrar con la X
    let close = ElementBuilder::new("span")?
        .class("close float-right cursor-pointer text-xl")
        .text("\u{00d7}")
        .build();
    {
        let state = state.clone();
        on_click(&close, move |_| state.close_modal())?;
    }
    content.append_child(&close)?;

    let heading = ElementBuilder::new("h2")?
        .class("text-2xl font-bold mb-4")
        .text("Login")
        .build();
    content.append_child(&heading)?;

    let name_input = ElementBuilder::new("input")?
        .id("login-display-name")?
        .attr("type", "text")?
        .attr("placeholder", "Display name")?
        .class("border p-2 w-full mb-2")
        .build();
    content.append_child(&name_input)?;

    let password_input = ElementBuilder::new("input")?
        .id("login-password")?
        .attr("type", "password")?
        .attr("placeholder", "Password")?
        .class("border p-2 w-full mb-4")
        .build();
    content.append_child(&password_input)?;

    let login_btn = ElementBuilder::new("button")?
        .class("bg-blue-500 text-white p-2 w-full rounded")
        .text("Login")
        .build();
    {
        let state = state.clone();
        on_click(&login_btn, move |_| {
            // Los values se leen en el momento del click, no al renderizar
            let display_name = input_value("login-display-name");
            let password = input_value("login-password");

            let state = state.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new();
                match vm.login(&display_name, &password).await {
                    Ok(()) => {
                        state.auth.mark_logged_in();
                        state.close_modal();
                        alert("Login successful.");
                        reload_blogs(state);
                    }
                    Err(e) => {
                        // El modal sigue abierto con los inputs intactos
                        alert(&e);
                    }
                }
            });
        })?;
    }
    content.append_child(&login_btn)?;

    // Cross-link al signup
    let signup_link = ElementBuilder::new("p")?
        .class("text-blue-500 cursor-pointer mt-4 text-center hover:underline")
        .text("Don't have an account? Sign up")
        .build();
    {
        let state = state.clone();
        on_click(&signup_link, move |_| {
            state.open_modal(ActiveModal::Signup);
        })?;
    }
    content.append_child(&signup_link)?;

    overlay.append_child(&content)?;
    Ok(overlay)
}
