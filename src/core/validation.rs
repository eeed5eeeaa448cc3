//! Field validation for the auth forms.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$").expect("valid email regex")
});

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
    InvalidEmail,
    PasswordTooShort,
    PasswordMissingUppercase,
    PasswordMissingDigit,
    PasswordMismatch,
    UsernameTooShort,
    UsernameTooLong,
    UsernameInvalidChars,
    TermsNotAccepted,
    /// The reset form was submitted with nothing in it.
    MissingResetTarget(ResetMethod),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ValidationError::MissingFields => "Please fill in all fields",
            ValidationError::InvalidEmail => "Please enter a valid email address",
            ValidationError::PasswordTooShort => "Password must be at least 8 characters",
            ValidationError::PasswordMissingUppercase => {
                "Password must contain an uppercase letter"
            }
            ValidationError::PasswordMissingDigit => "Password must contain a number",
            ValidationError::PasswordMismatch => "Passwords do not match",
            ValidationError::UsernameTooShort => "Username must be at least 3 characters",
            ValidationError::UsernameTooLong => "Username must be less than 20 characters",
            ValidationError::UsernameInvalidChars => {
                "Username can only contain letters, numbers, underscore, and period"
            }
            ValidationError::TermsNotAccepted => {
                "Please agree to the Terms of Service and Privacy Policy"
            }
            ValidationError::MissingResetTarget(method) => {
                return write!(f, "Please enter your {}", method.noun());
            }
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ValidationError {}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordMissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordMissingDigit);
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let len = username.chars().count();
    if len < MIN_USERNAME_LEN {
        Err(ValidationError::UsernameTooShort)
    } else if len > MAX_USERNAME_LEN {
        Err(ValidationError::UsernameTooLong)
    } else if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '.')
    {
        Err(ValidationError::UsernameInvalidChars)
    } else {
        Ok(())
    }
}

/// Checks run before a sign-in attempt is sent.
pub fn validate_sign_in(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    validate_email(email)
}

/// Where a password reset code is delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResetMethod {
    #[default]
    Email,
    Phone,
}

impl ResetMethod {
    pub fn label(&self) -> &'static str {
        match self {
            ResetMethod::Email => "Email",
            ResetMethod::Phone => "Phone",
        }
    }

    /// Lowercase form used inside messages ("check your email").
    pub fn noun(&self) -> &'static str {
        match self {
            ResetMethod::Email => "email",
            ResetMethod::Phone => "phone",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            ResetMethod::Email => ResetMethod::Phone,
            ResetMethod::Phone => ResetMethod::Email,
        }
    }
}

/// A reset target must be present; only email targets are format-checked.
pub fn validate_reset_target(method: ResetMethod, target: &str) -> Result<(), ValidationError> {
    if target.is_empty() {
        return Err(ValidationError::MissingResetTarget(method));
    }
    match method {
        ResetMethod::Email => validate_email(target),
        ResetMethod::Phone => Ok(()),
    }
}

/// Everything the signup form collects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub agreed_to_terms: bool,
}

impl SignupForm {
    /// Checks run in the order the fields appear: contact details,
    /// then account details, then the terms agreement.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }
        validate_email(&self.email)?;
        if self.phone_number.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }
        validate_username(&self.username)?;
        validate_password(&self.password)?;
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if !self.agreed_to_terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            full_name: "Loop Zy".to_string(),
            email: "new@loopzy.com".to_string(),
            phone_number: "+1 555 0100".to_string(),
            username: "loop.zy_1".to_string(),
            password: "Secret123".to_string(),
            confirm_password: "Secret123".to_string(),
            agreed_to_terms: true,
        }
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("demo@loopzy.com"));
        assert!(is_valid_email("first.last+tag@sub.example.io"));
        assert!(!is_valid_email("demo@loopzy"));
        assert!(!is_valid_email("demo loopzy.com"));
        assert!(!is_valid_email("demo@loopzy.c"));
        assert!(!is_valid_email(" demo@loopzy.com"));
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(validate_password("Short1"), Err(ValidationError::PasswordTooShort));
        assert_eq!(
            validate_password("lowercase1"),
            Err(ValidationError::PasswordMissingUppercase)
        );
        assert_eq!(
            validate_password("NoDigitsHere"),
            Err(ValidationError::PasswordMissingDigit)
        );
        assert_eq!(validate_password("Secret123"), Ok(()));
    }

    #[test]
    fn test_username_rules() {
        assert_eq!(validate_username("ab"), Err(ValidationError::UsernameTooShort));
        assert_eq!(
            validate_username(&"a".repeat(21)),
            Err(ValidationError::UsernameTooLong)
        );
        assert_eq!(
            validate_username("bad-name"),
            Err(ValidationError::UsernameInvalidChars)
        );
        assert_eq!(validate_username("good.name_1"), Ok(()));
    }

    #[test]
    fn test_sign_in_checks_order() {
        assert_eq!(validate_sign_in("", "x"), Err(ValidationError::MissingFields));
        assert_eq!(
            validate_sign_in("demo@loopzy.com", ""),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_sign_in("nope", "password"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate_sign_in("demo@loopzy.com", "password"), Ok(()));
    }

    #[test]
    fn test_signup_form() {
        assert_eq!(valid_form().validate(), Ok(()));

        let mut form = valid_form();
        form.confirm_password = "Secret124".to_string();
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));

        let mut form = valid_form();
        form.full_name = "  ".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_signup_requires_phone_number() {
        let mut form = valid_form();
        form.phone_number = " ".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_signup_requires_terms_agreement() {
        let mut form = valid_form();
        form.agreed_to_terms = false;
        assert_eq!(form.validate(), Err(ValidationError::TermsNotAccepted));
        assert_eq!(
            ValidationError::TermsNotAccepted.to_string(),
            "Please agree to the Terms of Service and Privacy Policy"
        );
    }

    #[test]
    fn test_reset_target_depends_on_method() {
        assert_eq!(
            validate_reset_target(ResetMethod::Email, ""),
            Err(ValidationError::MissingResetTarget(ResetMethod::Email))
        );
        assert_eq!(
            validate_reset_target(ResetMethod::Phone, ""),
            Err(ValidationError::MissingResetTarget(ResetMethod::Phone))
        );
        assert_eq!(
            validate_reset_target(ResetMethod::Email, "5550100"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate_reset_target(ResetMethod::Phone, "5550100"), Ok(()));
        assert_eq!(validate_reset_target(ResetMethod::Email, "me@loopzy.com"), Ok(()));
    }

    #[test]
    fn test_missing_reset_target_names_the_method() {
        assert_eq!(
            ValidationError::MissingResetTarget(ResetMethod::Email).to_string(),
            "Please enter your email"
        );
        assert_eq!(
            ValidationError::MissingResetTarget(ResetMethod::Phone).to_string(),
            "Please enter your phone"
        );
        assert_eq!(ResetMethod::Email.toggle(), ResetMethod::Phone);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }
}
