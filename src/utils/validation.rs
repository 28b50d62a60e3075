// ============================================================================
// VALIDATION - Política de contraseña del signup
// ============================================================================

/// Mínimo 7 caracteres, al menos una letra y un dígito.
///
/// No se restringe el charset: caracteres especiales cuentan para el largo
/// (más laxo que un check alfanumérico estricto, a propósito).
/// El servidor re-valida; este chequeo local sólo ahorra un round-trip.
pub fn validate_password(password: &str) -> Result<(), String> {
    let long_enough = password.chars().count() >= 7;
    let has_letter = password.chars().any(|c| c.is_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if long_enough && has_letter && has_digit {
        Ok(())
    } else {
        Err(
            "Password must be at least 7 characters long and contain at least one letter and one number."
                .to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_password_without_digit() {
        assert!(validate_password("abc").is_err());
        assert!(validate_password("abcdefg").is_err());
    }

    #[test]
    fn rejects_password_without_letter() {
        assert!(validate_password("1234567").is_err());
    }

    #[test]
    fn rejects_short_password() {
        assert!(validate_password("ab12").is_err());
    }

    #[test]
    fn accepts_minimal_valid_password() {
        assert!(validate_password("abcdef1").is_ok());
    }

    #[test]
    fn accepts_longer_mixed_password() {
        assert!(validate_password("s3cret-passphrase").is_ok());
    }
}
