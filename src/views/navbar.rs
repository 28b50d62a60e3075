// ============================================================================
// NAVBAR - Barra de navegación con el control de identidad
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{navigate_to, on_click, ElementBuilder};
use crate::state::{ActiveModal, AppState};
use crate::viewmodels::SessionViewModel;

const NAV_LINKS: &[(&str, &str)] = &[
    ("Map", "/map"),
    ("About", "/about"),
    ("Blog", "/blog"),
    ("References", "/references"),
];

/// Renderizar la navbar
pub fn render_navbar(state: &AppState) -> Result<Element, JsValue> {
    let navbar = ElementBuilder::new("nav")?
        .class("flex items-center justify-between bg-blue-900 p-4")
        .build();

    // Logo
    let logo = ElementBuilder::new("div")?
        .class("logo")
        .text("Community Insights")
        .build();
    on_click(&logo, move |_| navigate_to("/"))?;

    // Links de páginas
    let links = ElementBuilder::new("div")?.class("flex space-x-4").build();
    for (label, path) in NAV_LINKS {
        let button = nav_button(label)?;
        let path = *path;
        on_click(&button, move |_| navigate_to(path))?;
        links.append_child(&button)?;
    }

    // Control de identidad: re-deriva la sesión en cada click y decide
    // qué modal abrir. Un check fallido cuenta como deslogueado.
    let profile_btn = nav_button("Profile")?;
    {
        let state = state.clone();
        on_click(&profile_btn, move |_| {
            let state = state.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new();
                let session = vm.get_session().await;
                state.auth.apply_session(session);
                if session.logged_in {
                    state.open_modal(ActiveModal::Settings);
                } else {
                    state.open_modal(ActiveModal::Login);
                }
            });
        })?;
    }

    let identity = ElementBuilder::new("div")?
        .class("flex space-x-4")
        .child(&profile_btn)?
        .build();

    navbar.append_child(&logo)?;
    navbar.append_child(&links)?;
    navbar.append_child(&identity)?;

    Ok(navbar)
}

fn nav_button(label: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class("bg-blue-900 text-white py-2 px-4 rounded hover:bg-cyan-500 hover:bg-opacity-20 transition duration-300")
        .text(label)
        .build())
}
