use crate::models::Registration;

pub const PASSWORD_POLICY: &str =
    "Password must be 6+ chars, with 1 uppercase and 1 lowercase letter.";

/// At least six characters, one ASCII uppercase and one ASCII lowercase letter.
pub fn password_is_valid(password: &str) -> bool {
    password.chars().count() >= 6
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn validate(form: &Registration) -> Result<(), String> {
    let required = [
        ("nid", &form.nid),
        ("name", &form.name),
        ("email", &form.email),
        ("contact", &form.contact),
        ("password", &form.password),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(format!("{field} is required"));
    }

    if !form.email.contains('@') {
        return Err("email is invalid".to_string());
    }

    if !password_is_valid(&form.password) {
        return Err(PASSWORD_POLICY.to_string());
    }

    Ok(())
}
