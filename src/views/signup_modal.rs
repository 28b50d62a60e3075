// ============================================================================
// SIGNUP MODAL
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{alert, input_value, on_click, ElementBuilder};
use crate::state::{ActiveModal, AppState};
use crate::viewmodels::SessionViewModel;

/// Renderizar el modal de registro
pub fn render_signup_modal(state: &AppState) -> Result<Element, JsValue> {
    let overlay = ElementBuilder::new("div")?
        .class("modal fixed inset-0 flex items-center justify-center bg-black bg-opacity-50")
        .build();

    let content = ElementBuilder::new("div")?
        .class("modal-content bg-white p-6 rounded shadow-lg w-96")
        .build();

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
        .text("Sign Up")
        .build();
    content.append_child(&heading)?;

    let name_input = ElementBuilder::new("input")?
        .id("signup-display-name")?
        .attr("type", "text")?
        .attr("placeholder", "Display name")?
        .class("border p-2 w-full mb-2")
        .build();
    content.append_child(&name_input)?;

    let password_input = ElementBuilder::new("input")?
        .id("signup-password")?
        .attr("type", "password")?
        .attr("placeholder", "Password")?
        .class("border p-2 w-full mb-4")
        .build();
    content.append_child(&password_input)?;

    let signup_btn = ElementBuilder::new("button")?
        .class("bg-blue-500 text-white p-2 w-full rounded")
        .text("Sign Up")
        .build();
    {
        let state = state.clone();
        on_click(&signup_btn, move |_| {
            let display_name = input_value("signup-display-name");
            let password = input_value("signup-password");

            let state = state.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new();
                match vm.signup(&display_name, &password).await {
                    Ok(()) => {
                        // Registro creado, pero NO loguea: pasa al login
                        state.open_modal(ActiveModal::Login);
                    }
                    Err(e) => {
                        alert(&e);
                    }
                }
            });
        })?;
    }
    content.append_child(&signup_btn)?;

    // Cross-link al login
    let login_link = ElementBuilder::new("p")?
        .class("text-blue-500 cursor-pointer mt-4 text-center hover:underline")
        .text("Already have an account? Login")
        .build();
    {
        let state = state.clone();
        on_click(&login_link, move |_| {
            state.open_modal(ActiveModal::Login);
        })?;
    }
    content.append_child(&login_link)?;

    overlay.append_child(&content)?;
    Ok(overlay)
}
