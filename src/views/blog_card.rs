// ============================================================================
// BLOG CARD - Tarjeta individual de un post
// ============================================================================
// Dos modos: lectura (con toggle Read more) y edición in-place. Los controles
// Edit/Delete solo existen para el dueño del post según el snapshot actual.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};

use crate::config::CONFIG;
use crate::dom::{alert, on_click, on_input, ElementBuilder};
use crate::models::{BlogListSnapshot, BlogPost};
use crate::state::AppState;
use crate::viewmodels::BlogViewModel;
use crate::views::reload_blogs;

/// Contenido largo: pasa del umbral configurado y necesita el toggle
fn needs_read_more(content: &str, threshold: usize) -> bool {
    content.chars().count() > threshold
}

/// Renderizar la tarjeta de un post
pub fn render_blog_card(
    state: &AppState,
    snapshot: &BlogListSnapshot,
    post: &BlogPost,
) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("blog-post border rounded p-4 mb-4 shadow")
        .build();

    if state.is_editing(post.id) {
        render_edit_mode(state, post, &card)?;
    } else {
        render_read_mode(state, snapshot, post, &card)?;
    }

    Ok(card)
}

fn render_read_mode(
    state: &AppState,
    snapshot: &BlogListSnapshot,
    post: &BlogPost,
    card: &Element,
) -> Result<(), JsValue> {
    let title = ElementBuilder::new("h2")?
        .class("text-2xl font-semibold")
        .text(&post.title)
        .build();
    card.append_child(&title)?;

    let author = ElementBuilder::new("p")?
        .class("text-gray-500 text-sm mb-2")
        .text(&format!("by {}", post.username))
        .build();
    card.append_child(&author)?;

    let long = needs_read_more(&post.content, CONFIG.ui_config.read_more_threshold);
    let expanded = state.is_expanded(post.id);

    let mut content_class = String::from("blog-content whitespace-pre-wrap");
    if long && !expanded {
        content_class.push_str(" collapsed");
    }
    let content = ElementBuilder::new("p")?
        .class(&content_class)
        .text(&post.content)
        .build();
    card.append_child(&content)?;

    // Toggle solo para contenido largo; el estado vive en AppState, no en
    // clases del DOM
    if long {
        let label = if expanded { "Show less" } else { "Read more" };
        let toggle = ElementBuilder::new("button")?
            .class("text-blue-500 hover:underline")
            .text(label)
            .build();
        {
            let state = state.clone();
            let post_id = post.id;
            on_click(&toggle, move |_| state.toggle_expanded(post_id))?;
        }
        card.append_child(&toggle)?;
    }

    // Controles de dueño
    if snapshot.is_owned(post) {
        let controls = ElementBuilder::new("div")?.class("mt-2 space-x-2").build();

        let edit_btn = ElementBuilder::new("button")?
            .class("bg-yellow-500 text-white px-3 py-1 rounded")
            .text("Edit")
            .build();
        {
            let state = state.clone();
            let post_id = post.id;
            let title = post.title.clone();
            let content = post.content.clone();
            on_click(&edit_btn, move |_| {
                state.begin_edit(post_id, title.clone(), content.clone());
            })?;
        }
        controls.append_child(&edit_btn)?;

        let delete_btn = ElementBuilder::new("button")?
            .class("bg-red-500 text-white px-3 py-1 rounded")
            .text("Delete")
            .build();
        {
            let state = state.clone();
            let post_id = post.id;
            on_click(&delete_btn, move |_| {
                let state = state.clone();
                spawn_local(async move {
                    let vm = BlogViewModel::new();
                    match vm.delete_post(post_id).await {
                        Ok(()) => {
                            log::info!("🗑️ Blog {} borrado", post_id);
                            reload_blogs(state);
                        }
                        Err(e) => {
                            // Sin recarga: la lista actual sigue siendo válida
                            log::error!("❌ Error borrando blog {}: {}", post_id, e);
                            alert(&format!("Error deleting blog: {}", e));
                        }
                    }
                });
            })?;
        }
        controls.append_child(&delete_btn)?;

        card.append_child(&controls)?;
    }

    Ok(())
}

fn render_edit_mode(state: &AppState, post: &BlogPost, card: &Element) -> Result<(), JsValue> {
    let (draft_title, draft_content) = state
        .get_draft(post.id)
        .unwrap_or_else(|| (post.title.clone(), post.content.clone()));

    let title_input = ElementBuilder::new("input")?
        .id(&format!("edit-title-{}", post.id))?
        .attr("type", "text")?
        .class("border p-2 w-full mb-2")
        .build();
    if let Ok(input) = title_input.clone().dyn_into::<HtmlInputElement>() {
        input.set_value(&draft_title);
    }
    {
        let state = state.clone();
        let post_id = post.id;
        on_input(&title_input, move |e| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                let (_, content) = state.get_draft(post_id).unwrap_or_default();
                state.update_draft(post_id, target.value(), content);
            }
        })?;
    }
    card.append_child(&title_input)?;

    let content_area = ElementBuilder::new("textarea")?
        .id(&format!("edit-content-{}", post.id))?
        .class("border p-2 w-full")
        .build();
    if let Ok(area) = content_area.clone().dyn_into::<HtmlTextAreaElement>() {
        area.set_value(&draft_content);
    }
    {
        let state = state.clone();
        let post_id = post.id;
        on_input(&content_area, move |e| {
            if let Some(target) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
            {
                let (title, _) = state.get_draft(post_id).unwrap_or_default();
                state.update_draft(post_id, title, target.value());
            }
        })?;
    }
    card.append_child(&content_area)?;

    let save_btn = ElementBuilder::new("button")?
        .class("bg-blue-500 text-white px-3 py-1 mt-2 rounded")
        .text("Save")
        .build();
    {
        let state = state.clone();
        let post_id = post.id;
        on_click(&save_btn, move |_| {
            let state = state.clone();
            let (title, content) = state.get_draft(post_id).unwrap_or_default();
            spawn_local(async move {
                let vm = BlogViewModel::new();
                match vm.edit_post(post_id, &title, &content).await {
                    Ok(()) => {
                        state.end_edit(post_id);
                        reload_blogs(state);
                    }
                    Err(e) => {
                        // El post sigue en edición, el borrador no se pierde
                        log::error!("❌ Error editando blog {}: {}", post_id, e);
                        alert(&format!("Error editing blog: {}", e));
                    }
                }
            });
        })?;
    }
    card.append_child(&save_btn)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_has_no_toggle() {
        assert!(!needs_read_more("a short post", 280));
    }

    #[test]
    fn threshold_is_exclusive() {
        let exact = "x".repeat(280);
        assert!(!needs_read_more(&exact, 280));
        let over = "x".repeat(281);
        assert!(needs_read_more(&over, 280));
    }

    #[test]
    fn threshold_counts_chars_not_bytes() {
        // 281 caracteres multibyte superan el umbral igual que los ASCII
        let content = "á".repeat(281);
        assert!(needs_read_more(&content, 280));
    }
}
