//! Per-field validation rules for the contact and enquiry forms.
//!
//! Rules are applied in a fixed order and the first failure wins, so a
//! field failing "required" never also reports a type-specific message.
//! Field kinds are inferred from the input type and the field name, the
//! same way the original site keyed off `name`/`id` substrings.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const MSG_REQUIRED: &str = "Please complete this field.";
pub const MSG_EMAIL: &str = "Please enter a valid email.";
pub const MSG_PHONE: &str = "Please enter a phone number of 9-15 digits.";
pub const MSG_PASSWORD: &str = "Password must be at least 6 characters and include a digit.";
pub const MSG_TOO_SHORT: &str = "Please enter at least 10 characters.";

/// What a field's non-empty value must look like.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Phone,
    Password,
    /// Multi-line message body (textarea).
    Message,
}

/// Static description of one validated form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, required: bool, kind: FieldKind) -> Self {
        Self { name, label, required, kind }
    }
}

/// Infer a field's kind from its input type, name, and multi-line flag.
///
/// Precedence mirrors the rule order: an explicit email type wins over a
/// "phone"/"tel" or "password" substring in the name.
pub fn kind_for(name: &str, input_type: &str, multiline: bool) -> FieldKind {
    if multiline {
        return FieldKind::Message;
    }
    if input_type.eq_ignore_ascii_case("email") {
        return FieldKind::Email;
    }
    let name = name.to_lowercase();
    if name.contains("phone") || name.contains("tel") {
        FieldKind::Phone
    } else if name.contains("password") {
        FieldKind::Password
    } else {
        FieldKind::Text
    }
}

/// Validate a value against a field spec.
///
/// Returns the first failing rule's message, or `None` when the value
/// passes. Optional fields left empty always pass.
pub fn validate(spec: &FieldSpec, value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return spec.required.then_some(MSG_REQUIRED);
    }

    match spec.kind {
        FieldKind::Text => None,
        FieldKind::Email => (!valid_email(trimmed)).then_some(MSG_EMAIL),
        FieldKind::Phone => (!valid_phone(trimmed)).then_some(MSG_PHONE),
        FieldKind::Password => (!valid_password(value)).then_some(MSG_PASSWORD),
        FieldKind::Message => (trimmed.chars().count() < 10).then_some(MSG_TOO_SHORT),
    }
}

/// `non-space '@' non-space '.' non-space`, no whitespace anywhere.
fn valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain
            .match_indices('.')
            .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// 9 to 15 ASCII digits, nothing else.
fn valid_phone(value: &str) -> bool {
    let digits = value.chars().count();
    (9..=15).contains(&digits) && value.chars().all(|c| c.is_ascii_digit())
}

/// At least 6 characters with at least one digit.
fn valid_password(value: &str) -> bool {
    value.chars().count() >= 6 && value.chars().any(|c| c.is_ascii_digit())
}
