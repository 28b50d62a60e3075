// ============================================================================
// AUTH STATE - Máquina de estados de sesión por pestaña
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::session::Session;

/// Fase de la sesión: Unknown hasta el primer /check_login, después
/// LoggedIn o LoggedOut. Toda transición dispara un re-render completo
/// (lo maneja AppState), nunca propagación incremental.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionPhase {
    Unknown,
    LoggedOut,
    LoggedIn,
}

/// Estado de autenticación.
///
/// Sólo guarda la fase de sesión; la identidad del viewer para ownership
/// viaja dentro del snapshot de blogs, nunca se duplica acá.
#[derive(Clone)]
pub struct AuthState {
    pub phase: Rc<RefCell<SessionPhase>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            phase: Rc::new(RefCell::new(SessionPhase::Unknown)),
        }
    }

    pub fn get_phase(&self) -> SessionPhase {
        *self.phase.borrow()
    }

    pub fn is_logged_in(&self) -> bool {
        self.get_phase() == SessionPhase::LoggedIn
    }

    /// Aplicar el resultado de un check de sesión
    pub fn apply_session(&self, session: Session) {
        *self.phase.borrow_mut() = if session.logged_in {
            SessionPhase::LoggedIn
        } else {
            SessionPhase::LoggedOut
        };
    }

    /// Transición LoggedOut -> LoggedIn (login exitoso)
    pub fn mark_logged_in(&self) {
        *self.phase.borrow_mut() = SessionPhase::LoggedIn;
    }

    /// Transición LoggedIn -> LoggedOut (logout exitoso)
    pub fn mark_logged_out(&self) {
        *self.phase.borrow_mut() = SessionPhase::LoggedOut;
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unknown() {
        let auth = AuthState::new();
        assert_eq!(auth.get_phase(), SessionPhase::Unknown);
        assert!(!auth.is_logged_in());
    }

    #[test]
    fn apply_session_resolves_unknown() {
        let auth = AuthState::new();
        auth.apply_session(Session {
            logged_in: true,
            user_id: Some(7),
        });
        assert_eq!(auth.get_phase(), SessionPhase::LoggedIn);

        auth.apply_session(Session::logged_out());
        assert_eq!(auth.get_phase(), SessionPhase::LoggedOut);
    }

    #[test]
    fn login_then_logout_transitions() {
        let auth = AuthState::new();
        auth.apply_session(Session::logged_out());

        auth.mark_logged_in();
        assert!(auth.is_logged_in());

        auth.mark_logged_out();
        assert_eq!(auth.get_phase(), SessionPhase::LoggedOut);
    }

    #[test]
    fn profile_update_keeps_logged_in() {
        // LoggedIn -> LoggedIn: el update de perfil no cambia la fase
        let auth = AuthState::new();
        auth.mark_logged_in();
        auth.mark_logged_in();
        assert!(auth.is_logged_in());
    }
}
