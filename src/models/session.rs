// ============================================================================
// SESSION - Estado de autenticación derivado del backend
// ============================================================================

use serde::{Deserialize, Serialize};

/// Respuesta de GET /check_login
///
/// `logged_in` es Option para poder distinguir una respuesta bien formada
/// de una que no trae el campo (fallo de protocolo).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CheckLoginResponse {
    #[serde(default)]
    pub logged_in: Option<bool>,
}

/// Sesión del contexto actual del navegador.
///
/// Derivada transitoriamente de una llamada al servidor; no se cachea más
/// allá del ciclo de vida de la página.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Session {
    pub logged_in: bool,
    pub user_id: Option<i64>,
}

impl Session {
    /// Sesión por defecto: deslogueado (el estado menos privilegiado)
    pub fn logged_out() -> Self {
        Self {
            logged_in: false,
            user_id: None,
        }
    }

    /// Mapea el resultado de /check_login a una sesión.
    ///
    /// Fallo de transporte, respuesta malformada o campo ausente: NUNCA se
    /// propaga el error, se asume deslogueado. Un check fallido no puede
    /// confundirse con una sesión autenticada.
    pub fn from_check_login(result: Result<CheckLoginResponse, String>) -> Self {
        match result {
            Ok(CheckLoginResponse {
                logged_in: Some(logged_in),
            }) => Self {
                logged_in,
                user_id: None,
            },
            Ok(CheckLoginResponse { logged_in: None }) => {
                log::warn!("⚠️ /check_login sin campo logged_in, asumiendo deslogueado");
                Self::logged_out()
            }
            Err(e) => {
                log::warn!("⚠️ Error consultando /check_login ({}), asumiendo deslogueado", e);
                Self::logged_out()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failure_maps_to_logged_out() {
        let session = Session::from_check_login(Err("Network error: timeout".to_string()));
        assert!(!session.logged_in);
        assert_eq!(session.user_id, None);
    }

    #[test]
    fn missing_field_maps_to_logged_out() {
        let response: CheckLoginResponse = serde_json::from_str("{}").unwrap();
        let session = Session::from_check_login(Ok(response));
        assert!(!session.logged_in);
    }

    #[test]
    fn malformed_json_is_a_protocol_failure() {
        let parsed = serde_json::from_str::<CheckLoginResponse>("{\"logged_in\": \"yes\"}")
            .map_err(|e| format!("Parse error: {}", e));
        let session = Session::from_check_login(parsed);
        assert!(!session.logged_in);
    }

    #[test]
    fn well_formed_true_maps_to_logged_in() {
        let response: CheckLoginResponse = serde_json::from_str("{\"logged_in\": true}").unwrap();
        let session = Session::from_check_login(Ok(response));
        assert!(session.logged_in);
    }

    #[test]
    fn well_formed_false_maps_to_logged_out() {
        let response: CheckLoginResponse = serde_json::from_str("{\"logged_in\": false}").unwrap();
        assert!(!Session::from_check_login(Ok(response)).logged_in);
    }
}
