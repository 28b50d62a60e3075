// ============================================================================
// SETTINGS MODAL - Perfil del usuario logueado
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{alert, input_value, on_click, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;
use crate::views::reload_blogs;

/// Renderizar el modal de ajustes de usuario
pub fn render_settings_modal(state: &AppState) -> Result<Element, JsValue> {
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
        .text("User Settings")
        .build();
    content.append_child(&heading)?;

    let name_input = ElementBuilder::new("input")?
        .id("edit-username")?
        .attr("type", "text")?
        .attr("placeholder", "New display name")?
        .class("border p-2 w-full mb-2")
        .build();
    content.append_child(&name_input)?;

    let password_input = ElementBuilder::new("input")?
        .id("edit-password")?
        .attr("type", "password")?
        .attr("placeholder", "New password")?
        .class("border p-2 w-full mb-2")
        .build();
    content.append_child(&password_input)?;

    // Confirmación: el servidor verifica la contraseña vieja
    let old_password_input = ElementBuilder::new("input")?
        .id("old-password")?
        .attr("type", "password")?
        .attr("placeholder", "Old password (required)")?
        .class("border p-2 w-full mb-4")
        .build();
    content.append_child(&old_password_input)?;

    let update_btn = ElementBuilder::new("button")?
        .class("bg-blue-500 text-white p-2 w-full rounded")
        .text("Update")
        .build();
    {
        let state = state.clone();
        on_click(&update_btn, move |_| {
            let display_name = input_value("edit-username");
            let password = input_value("edit-password");
            let old_password = input_value("old-password");

            let state = state.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new();
                match vm.update_profile(&old_password, &display_name, &password).await {
                    Ok(()) => {
                        // La sesión sigue viva tras el update
                        state.close_modal();
                        alert("User settings updated successfully.");
                    }
                    Err(e) => {
                        alert(&e);
                    }
                }
            });
        })?;
    }
    content.append_child(&update_btn)?;

    let logout_btn = ElementBuilder::new("button")?
        .class("bg-red-500 text-white p-2 w-full mt-2 rounded")
        .text("Log Out")
        .build();
    {
        let state = state.clone();
        on_click(&logout_btn, move |_| {
            let state = state.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new();
                match vm.logout().await {
                    Ok(()) => {
                        state.auth.mark_logged_out();
                        state.close_modal();
                        // Recarga para que los controles de dueño desaparezcan
                        reload_blogs(state);
                    }
                    Err(e) => {
                        // Logout fallido: la sesión sigue como estaba
                        alert(&e);
                    }
                }
            });
        })?;
    }
    content.append_child(&logout_btn)?;

    overlay.append_child(&content)?;
    Ok(overlay)
}
