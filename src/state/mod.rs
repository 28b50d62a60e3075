// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod app_state;
pub mod auth_state;
pub mod blog_state;

pub use app_state::{ActiveModal, AppState};
pub use auth_state::{AuthState, SessionPhase};
pub use blog_state::BlogState;
