// ============================================================================
// APP - Raíz de la aplicación
// ============================================================================
// Mantiene el estado global y el nodo raíz. Cada cambio de estado programa
// un re-render completo: no hay DOM diffing ni actualizaciones parciales.
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{clear_children, get_element_by_id};
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;
use crate::views::{reload_blogs, render_app};

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No se encontró el elemento #app"))?;

        let state = AppState::new();

        // El re-render se difiere con un Timeout(0) para salir del stack del
        // handler que disparó la notificación (el borrow de APP puede estar
        // tomado en ese momento)
        state.subscribe_to_changes(|| {
            Timeout::new(0, || crate::rerender_app()).forget();
        });

        Ok(Self { state, root })
    }

    /// Re-render completo: se tira todo el árbol y se vuelve a armar desde
    /// el estado actual
    pub fn render(&mut self) -> Result<(), JsValue> {
        clear_children(&self.root);
        let tree = render_app(&self.state)?;
        self.root.append_child(&tree)?;
        Ok(())
    }

    /// Arranque: resolver la sesión y cargar la lista inicial de blogs
    pub fn bootstrap(&self) {
        let state = self.state.clone();
        spawn_local(async move {
            let vm = SessionViewModel::new();
            let session = vm.get_session().await;
            state.auth.apply_session(session);
            state.notify_subscribers();
        });

        reload_blogs(self.state.clone());
    }
}
