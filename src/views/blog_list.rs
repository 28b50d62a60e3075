// ============================================================================
// BLOG LIST - Página de blogs: lista + editor de creación
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};

use crate::dom::{alert, on_click, on_input, ElementBuilder};
use crate::state::{ActiveModal, AppState};
use crate::viewmodels::BlogViewModel;
use crate::views::render_blog_card;

/// Recargar la lista completa desde el servidor.
///
/// Política fail-safe uniforme: si la carga falla, el snapshot anterior se
/// queda en pantalla y el error se reporta; nunca se vacía la lista antes
/// de que la respuesta resuelva.
pub fn reload_blogs(state: AppState) {
    spawn_local(async move {
        state.blogs.set_loading(true);

        let vm = BlogViewModel::new();
        match vm.load_snapshot().await {
            Ok(snapshot) => {
                state.blogs.set_snapshot(snapshot);
                // El estado de presentación (expandidos, ediciones) se resetea
                state.reset_presentation();
            }
            Err(e) => {
                log::error!("❌ Error cargando blogs: {}", e);
                state.blogs.set_error(e);
            }
        }

        state.blogs.set_loading(false);
        state.notify_subscribers();
    });
}

/// Renderizar la página de blogs
pub fn render_blog_page(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("p-6").build();

    let heading = ElementBuilder::new("h1")?
        .class("text-4xl font-bold mb-4")
        .text("Community Blogs")
        .build();
    page.append_child(&heading)?;

    // Aviso de error de carga (el contenido anterior sigue abajo)
    if let Some(error) = state.blogs.get_error() {
        let notice = ElementBuilder::new("p")?
            .class("text-red-500 mb-4")
            .text(&format!("Could not refresh blogs: {}", error))
            .build();
        page.append_child(&notice)?;
    }

    // Contenedor de posts, en el orden del servidor
    let container = ElementBuilder::new("div")?.class("blog-container").build();
    if let Some(snapshot) = state.blogs.get_snapshot() {
        for post in &snapshot.posts {
            let card = render_blog_card(state, &snapshot, post)?;
            container.append_child(&card)?;
        }
    } else if state.blogs.get_loading() {
        let loading = ElementBuilder::new("p")?.text("Loading blogs...").build();
        container.append_child(&loading)?;
    }
    page.append_child(&container)?;

    let editor = render_create_editor(state)?;
    page.append_child(&editor)?;

    Ok(page)
}

/// Editor de creación: título + contenido + botón Create
fn render_create_editor(state: &AppState) -> Result<Element, JsValue> {
    let editor = ElementBuilder::new("div")?.class("create-blog mt-6").build();

    let title_input = ElementBuilder::new("input")?
        .id("blog-title")?
        .attr("type", "text")?
        .attr("placeholder", "Blog title")?
        .class("border p-2 w-full mb-2")
        .build();
    if let Ok(input) = title_input.clone().dyn_into::<HtmlInputElement>() {
        input.set_value(&state.draft_title.borrow());
    }
    {
        let draft_title = state.draft_title.clone();
        on_input(&title_input, move |e| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                *draft_title.borrow_mut() = target.value();
            }
        })?;
    }

    let content_area = ElementBuilder::new("textarea")?
        .id("blog-content")?
        .attr("placeholder", "Write a new blog")?
        .class("border p-2 w-full")
        .build();
    if let Ok(area) = content_area.clone().dyn_into::<HtmlTextAreaElement>() {
        area.set_value(&state.draft_content.borrow());
    }
    {
        let draft_content = state.draft_content.clone();
        on_input(&content_area, move |e| {
            if let Some(target) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
            {
                *draft_content.borrow_mut() = target.value();
            }
        })?;
    }

    let create_btn = ElementBuilder::new("button")?
        .id("create-blog-btn")?
        .class("bg-green-500 text-white p-2 mt-2 rounded")
        .text("Create Blog")
        .build();
    {
        let state = state.clone();
        on_click(&create_btn, move |_| {
            // Sin sesión, el botón lleva al login (sigue siendo clickeable)
            if !state.auth.is_logged_in() {
                state.open_modal(ActiveModal::Login);
                return;
            }

            let state = state.clone();
            let title = state.draft_title.borrow().clone();
            let content = state.draft_content.borrow().clone();
            spawn_local(async move {
                let vm = BlogViewModel::new();
                match vm.create_post(&title, &content).await {
                    Ok(()) => {
                        state.clear_create_draft();
                        reload_blogs(state);
                    }
                    Err(e) => {
                        // Los inputs conservan sus valores para reintentar
                        log::error!("❌ Error creando blog: {}", e);
                        alert(&format!("Error creating blog: {}", e));
                    }
                }
            });
        })?;
    }

    editor.append_child(&title_input)?;
    editor.append_child(&content_area)?;
    editor.append_child(&create_btn)?;

    Ok(editor)
}
