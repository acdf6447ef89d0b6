//! Admin password policy.
//!
//! Admin accounts are the only authenticated principals in the system,
//! so their passwords carry the whole weight of back-office security.
//! [`validate_password`] enforces the account-creation policy and
//! reports every unmet rule so forms can show them all at once.
//!
//! Hashing itself happens in the admin service, next to login.

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Characters that count as "special" for the password policy.
pub const SPECIAL_CHARACTERS: &str = r##"!@#$%^&*()_+-=[]{};':"\|,.<>/?"##;

/// Result of checking a password against the policy.
#[derive(Debug, Clone)]
pub struct PasswordValidation {
    errors: Vec<&'static str>,
}

impl PasswordValidation {
    /// Returns true when every rule passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages for each unmet rule, in policy order.
    #[must_use]
    pub fn errors(&self) -> &[&'static str] {
        &self.errors
    }

    /// Consumes the validation and returns the unmet-rule messages.
    #[must_use]
    pub fn into_errors(self) -> Vec<&'static str> {
        self.errors
    }
}

/// Check a password against the admin password policy.
///
/// The policy requires at least [`MIN_PASSWORD_LENGTH`] characters, an
/// uppercase letter, a lowercase letter, a digit, and one of the
/// [`SPECIAL_CHARACTERS`]. Every unmet rule is reported.
///
/// ```
/// use kotobcom_core::password::validate_password;
///
/// assert!(validate_password("Str0ng!Passw0rd").is_valid());
/// assert!(!validate_password("short").is_valid());
/// ```
#[must_use]
pub fn validate_password(password: &str) -> PasswordValidation {
    let mut errors = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push("Password must be at least 12 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one number");
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        errors.push("Password must contain at least one special character");
    }

    PasswordValidation { errors }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        let result = validate_password("Str0ng!Passw0rd");
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_too_short() {
        let result = validate_password("Ab1!x");
        assert!(!result.is_valid());
        assert!(result
            .errors()
            .contains(&"Password must be at least 12 characters long"));
    }

    #[test]
    fn test_missing_uppercase() {
        let result = validate_password("weak!passw0rd");
        assert!(result
            .errors()
            .contains(&"Password must contain at least one uppercase letter"));
    }

    #[test]
    fn test_missing_lowercase() {
        let result = validate_password("WEAK!PASSW0RD");
        assert!(result
            .errors()
            .contains(&"Password must contain at least one lowercase letter"));
    }

    #[test]
    fn test_missing_number() {
        let result = validate_password("Weak!Password");
        assert!(result
            .errors()
            .contains(&"Password must contain at least one number"));
    }

    #[test]
    fn test_missing_special_character() {
        let result = validate_password("Weak1Password");
        assert!(result
            .errors()
            .contains(&"Password must contain at least one special character"));
    }

    #[test]
    fn test_all_rules_reported_at_once() {
        let result = validate_password("");
        assert_eq!(result.errors().len(), 5);
    }

    #[test]
    fn test_every_special_character_counts() {
        for special in SPECIAL_CHARACTERS.chars() {
            let password = format!("Abcdefghij1{special}");
            assert!(
                validate_password(&password).is_valid(),
                "special character {special:?} was not accepted"
            );
        }
    }

    #[test]
    fn test_non_ascii_letters_do_not_satisfy_rules() {
        // Arabic letters have no case, so they satisfy neither letter rule
        let result = validate_password("كلمةسرطويلةجدا");
        assert!(!result.is_valid());
    }
}
