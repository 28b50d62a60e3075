// ============================================================================
// BLOG STATE - Snapshot actual de la lista de posts
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::blog::BlogListSnapshot;

/// Estado de la lista de blogs
#[derive(Clone)]
pub struct BlogState {
    pub snapshot: Rc<RefCell<Option<BlogListSnapshot>>>,
    pub loading: Rc<RefCell<bool>>,
    pub error: Rc<RefCell<Option<String>>>,
}

impl BlogState {
    pub fn new() -> Self {
        Self {
            snapshot: Rc::new(RefCell::new(None)),
            loading: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
        }
    }

    /// Reemplazar el snapshot completo (carga exitosa) y limpiar el error
    pub fn set_snapshot(&self, snapshot: BlogListSnapshot) {
        *self.snapshot.borrow_mut() = Some(snapshot);
        *self.error.borrow_mut() = None;
    }

    pub fn get_snapshot(&self) -> Option<BlogListSnapshot> {
        self.snapshot.borrow().clone()
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn get_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Registrar un fallo de carga SIN tocar el snapshot anterior: una carga
    /// fallida preserva lo último que el usuario estaba viendo.
    pub fn set_error(&self, error: String) {
        *self.error.borrow_mut() = Some(error);
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }
}

impl Default for BlogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::blog::BlogPost;

    fn snapshot_with_one_post() -> BlogListSnapshot {
        BlogListSnapshot {
            posts: vec![BlogPost {
                id: 1,
                user_id: 1,
                username: "ana".to_string(),
                title: "Hello".to_string(),
                content: "World".to_string(),
            }],
            viewer_id: Some(1),
        }
    }

    #[test]
    fn failed_load_preserves_previous_snapshot() {
        let state = BlogState::new();
        state.set_snapshot(snapshot_with_one_post());

        state.set_error("Network error: timeout".to_string());

        let kept = state.get_snapshot().unwrap();
        assert_eq!(kept.posts.len(), 1);
        assert_eq!(state.get_error().unwrap(), "Network error: timeout");
    }

    #[test]
    fn successful_load_clears_previous_error() {
        let state = BlogState::new();
        state.set_error("Network error: unreachable".to_string());

        state.set_snapshot(snapshot_with_one_post());

        assert!(state.get_error().is_none());
        assert!(state.get_snapshot().is_some());
    }
}
