// ============================================================================
// SESSION VIEWMODEL - LÓGICA DE SESIÓN
// ============================================================================
// Lógica de negocio de sesión - devuelve valores, las views actualizan estado
// ============================================================================

use crate::models::session::Session;
use crate::services::ApiClient;
use crate::utils::validation::validate_password;

/// ViewModel de sesión - SOLO lógica de negocio
pub struct SessionViewModel {
    api_client: ApiClient,
}

impl SessionViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Consultar la sesión actual.
    ///
    /// Nunca falla: cualquier error de transporte o protocolo se mapea a
    /// deslogueado. Se re-deriva en cada consulta, no se cachea.
    pub async fn get_session(&self) -> Session {
        let result = self.api_client.check_login().await;
        let session = Session::from_check_login(result);
        log::info!("🔍 Sesión: logged_in={}", session.logged_in);
        session
    }

    /// Login. Ok(()) sólo si el servidor confirmó success.
    pub async fn login(&self, display_name: &str, password: &str) -> Result<(), String> {
        let response = self.api_client.login(display_name, password).await?;
        let outcome = response.into_result("Invalid login credentials.");
        if outcome.is_ok() {
            log::info!("✅ Login exitoso: {}", display_name);
        }
        outcome
    }

    /// Signup con política de contraseña local (el servidor re-valida;
    /// esto es un atajo de UX, no una barrera de seguridad).
    pub async fn signup(&self, display_name: &str, password: &str) -> Result<(), String> {
        validate_password(password)?;

        let response = self.api_client.signup(display_name, password).await?;
        let outcome = response.into_result("Error signing up.");
        if outcome.is_ok() {
            log::info!("✅ Signup exitoso: {}", display_name);
        }
        outcome
    }

    /// Logout
    pub async fn logout(&self) -> Result<(), String> {
        let response = self.api_client.logout().await?;
        let outcome = response.into_result("Error logging out.");
        if outcome.is_ok() {
            log::info!("👋 Logout completado");
        }
        outcome
    }

    /// Actualizar perfil. El old_password sólo se chequea por no-vacío;
    /// la verificación real la hace el servidor.
    pub async fn update_profile(
        &self,
        old_password: &str,
        display_name: &str,
        password: &str,
    ) -> Result<(), String> {
        if old_password.is_empty() {
            return Err("Please enter your old password for confirmation.".to_string());
        }

        let response = self
            .api_client
            .update_profile(old_password, display_name, password)
            .await?;
        let outcome = response.into_result("Unknown error");
        if outcome.is_ok() {
            log::info!("✅ Perfil actualizado");
        }
        outcome
    }
}

impl Default for SessionViewModel {
    fn default() -> Self {
        Self::new()
    }
}
