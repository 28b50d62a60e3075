// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::state::{AuthState, BlogState};

/// Modal activo: como máximo uno a la vez. Abrir uno reemplaza al anterior;
/// es un valor de estado explícito, nunca se consulta el DOM para saberlo.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActiveModal {
    None,
    Login,
    Signup,
    Settings,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub blogs: BlogState,

    // UI State
    pub active_modal: Rc<RefCell<ActiveModal>>,
    /// Posts con el contenido expandido ("Read more"). Estado de presentación
    /// puro: se resetea en cada recarga de la lista.
    pub expanded_posts: Rc<RefCell<HashSet<i64>>>,
    /// Posts actualmente en modo edición in-place (puede haber varios)
    pub editing_posts: Rc<RefCell<HashSet<i64>>>,
    /// Borradores de edición por post: (title, content). Sobreviven a los
    /// re-renders para no perder lo que el usuario está escribiendo.
    pub edit_drafts: Rc<RefCell<HashMap<i64, (String, String)>>>,
    /// Borrador del editor de creación
    pub draft_title: Rc<RefCell<String>>,
    pub draft_content: Rc<RefCell<String>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            auth: AuthState::new(),
            blogs: BlogState::new(),
            active_modal: Rc::new(RefCell::new(ActiveModal::None)),
            expanded_posts: Rc::new(RefCell::new(HashSet::new())),
            editing_posts: Rc::new(RefCell::new(HashSet::new())),
            edit_drafts: Rc::new(RefCell::new(HashMap::new())),
            draft_title: Rc::new(RefCell::new(String::new())),
            draft_content: Rc::new(RefCell::new(String::new())),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Suscribirse a cambios de estado (re-render completo)
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify_subscribers(&self) {
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }

    // ------------------------------------------------------------------
    // Modales
    // ------------------------------------------------------------------

    pub fn get_active_modal(&self) -> ActiveModal {
        *self.active_modal.borrow()
    }

    /// Abrir un modal (cierra implícitamente cualquier otro)
    pub fn open_modal(&self, modal: ActiveModal) {
        *self.active_modal.borrow_mut() = modal;
        self.notify_subscribers();
    }

    /// Cerrar el modal activo
    pub fn close_modal(&self) {
        *self.active_modal.borrow_mut() = ActiveModal::None;
        self.notify_subscribers();
    }

    // ------------------------------------------------------------------
    // Presentación de posts
    // ------------------------------------------------------------------

    pub fn is_expanded(&self, post_id: i64) -> bool {
        self.expanded_posts.borrow().contains(&post_id)
    }

    /// Toggle de expandir/colapsar contenido largo
    pub fn toggle_expanded(&self, post_id: i64) {
        {
            let mut expanded = self.expanded_posts.borrow_mut();
            if !expanded.remove(&post_id) {
                expanded.insert(post_id);
            }
        }
        self.notify_subscribers();
    }

    pub fn is_editing(&self, post_id: i64) -> bool {
        self.editing_posts.borrow().contains(&post_id)
    }

    /// Pasar un post a modo edición, precargando el borrador con los valores
    /// actuales del snapshot
    pub fn begin_edit(&self, post_id: i64, title: String, content: String) {
        self.editing_posts.borrow_mut().insert(post_id);
        self.edit_drafts
            .borrow_mut()
            .insert(post_id, (title, content));
        self.notify_subscribers();
    }

    pub fn get_draft(&self, post_id: i64) -> Option<(String, String)> {
        self.edit_drafts.borrow().get(&post_id).cloned()
    }

    pub fn update_draft(&self, post_id: i64, title: String, content: String) {
        // Solo actualiza el borrador; no re-renderiza (el usuario está tecleando)
        self.edit_drafts
            .borrow_mut()
            .insert(post_id, (title, content));
    }

    /// Salir del modo edición de un post (guardado exitoso)
    pub fn end_edit(&self, post_id: i64) {
        self.editing_posts.borrow_mut().remove(&post_id);
        self.edit_drafts.borrow_mut().remove(&post_id);
    }

    /// Resetear todo el estado de presentación; se llama tras cada recarga
    /// exitosa de la lista
    pub fn reset_presentation(&self) {
        self.expanded_posts.borrow_mut().clear();
        self.editing_posts.borrow_mut().clear();
        self.edit_drafts.borrow_mut().clear();
    }

    /// Limpiar el editor de creación (post creado con éxito)
    pub fn clear_create_draft(&self) {
        self.draft_title.borrow_mut().clear();
        self.draft_content.borrow_mut().clear();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_modal_at_a_time() {
        let state = AppState::new();
        assert_eq!(state.get_active_modal(), ActiveModal::None);

        state.open_modal(ActiveModal::Login);
        assert_eq!(state.get_active_modal(), ActiveModal::Login);

        // Abrir otro reemplaza al anterior, no conviven
        state.open_modal(ActiveModal::Signup);
        assert_eq!(state.get_active_modal(), ActiveModal::Signup);

        state.close_modal();
        assert_eq!(state.get_active_modal(), ActiveModal::None);
    }

    #[test]
    fn modal_change_notifies_subscribers() {
        let state = AppState::new();
        let notified = Rc::new(RefCell::new(0u32));
        {
            let notified = notified.clone();
            state.subscribe_to_changes(move || {
                *notified.borrow_mut() += 1;
            });
        }

        state.open_modal(ActiveModal::Settings);
        state.close_modal();
        assert_eq!(*notified.borrow(), 2);
    }

    #[test]
    fn expand_toggle_is_reversible() {
        let state = AppState::new();
        assert!(!state.is_expanded(5));

        state.toggle_expanded(5);
        assert!(state.is_expanded(5));

        state.toggle_expanded(5);
        assert!(!state.is_expanded(5));
    }

    #[test]
    fn multiple_posts_can_be_in_edit_mode() {
        let state = AppState::new();
        state.begin_edit(1, "a".to_string(), "x".to_string());
        state.begin_edit(2, "b".to_string(), "y".to_string());

        assert!(state.is_editing(1));
        assert!(state.is_editing(2));
        assert_eq!(state.get_draft(2), Some(("b".to_string(), "y".to_string())));
    }

    #[test]
    fn draft_survives_until_successful_save() {
        let state = AppState::new();
        state.begin_edit(1, "Hello".to_string(), "World".to_string());
        state.update_draft(1, "Hello".to_string(), "Updated".to_string());

        assert_eq!(
            state.get_draft(1),
            Some(("Hello".to_string(), "Updated".to_string()))
        );

        state.end_edit(1);
        assert!(!state.is_editing(1));
        assert_eq!(state.get_draft(1), None);
    }

    #[test]
    fn reload_resets_presentation_state() {
        let state = AppState::new();
        state.toggle_expanded(3);
        state.begin_edit(4, "t".to_string(), "c".to_string());

        state.reset_presentation();

        assert!(!state.is_expanded(3));
        assert!(!state.is_editing(4));
    }
}
