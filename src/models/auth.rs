// ============================================================================
// AUTH - Requests/responses de login, signup y perfil
// ============================================================================

use serde::{Deserialize, Serialize};

/// Cuerpo de POST /login
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub display_name: String,
    pub password: String,
}

/// Cuerpo de POST /signup
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignupRequest {
    pub display_name: String,
    pub password: String,
}

/// Cuerpo de POST /update_profile
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UpdateProfileRequest {
    pub old_password: String,
    pub display_name: String,
    pub password: String,
}

/// Respuesta genérica de los comandos: success + mensaje opcional
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SimpleResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl SimpleResponse {
    /// Mensaje del servidor, o el fallback genérico si no vino ninguno
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }

    /// Resultado del comando: Ok sólo si el servidor confirmó success;
    /// si no, Err con el mensaje del servidor o el fallback
    pub fn into_result(self, fallback: &str) -> Result<(), String> {
        if self.success {
            Ok(())
        } else {
            Err(self.message_or(fallback).to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_falls_back_when_absent() {
        let response: SimpleResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(response.message_or("Unknown error"), "Unknown error");
    }

    #[test]
    fn success_flag_decides_the_outcome() {
        let ok: SimpleResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(ok.into_result("Unknown error"), Ok(()));

        let rejected: SimpleResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(
            rejected.into_result("Unknown error"),
            Err("Unknown error".to_string())
        );
    }

    #[test]
    fn server_message_wins_over_fallback() {
        let response: SimpleResponse =
            serde_json::from_str(r#"{"success": false, "message": "Display name already exists"}"#)
                .unwrap();
        assert_eq!(
            response.message_or("Unknown error"),
            "Display name already exists"
        );
    }
}
