use super::*;

fn spec(required: bool, kind: FieldKind) -> FieldSpec {
    FieldSpec::new("field", "Field", required, kind)
}

// =============================================================
// Required rule
// =============================================================

#[test]
fn required_field_empty_fails() {
    assert_eq!(validate(&spec(true, FieldKind::Text), ""), Some(MSG_REQUIRED));
}

#[test]
fn required_field_whitespace_only_fails() {
    assert_eq!(validate(&spec(true, FieldKind::Text), "   "), Some(MSG_REQUIRED));
}

#[test]
fn optional_field_empty_passes() {
    assert_eq!(validate(&spec(false, FieldKind::Phone), ""), None);
}

#[test]
fn required_wins_over_kind_rule() {
    // An empty required email reports the required message, not the email one.
    assert_eq!(validate(&spec(true, FieldKind::Email), " "), Some(MSG_REQUIRED));
}

// =============================================================
// Email rule
// =============================================================

#[test]
fn email_without_domain_dot_fails() {
    assert_eq!(validate(&spec(true, FieldKind::Email), "a@b"), Some(MSG_EMAIL));
}

#[test]
fn email_with_domain_dot_passes() {
    assert_eq!(validate(&spec(true, FieldKind::Email), "a@b.c"), None);
}

#[test]
fn email_with_whitespace_fails() {
    assert_eq!(validate(&spec(true, FieldKind::Email), "a b@c.d"), Some(MSG_EMAIL));
}

#[test]
fn email_missing_local_part_fails() {
    assert_eq!(validate(&spec(true, FieldKind::Email), "@b.c"), Some(MSG_EMAIL));
}

#[test]
fn email_trailing_dot_fails() {
    assert_eq!(validate(&spec(true, FieldKind::Email), "a@b."), Some(MSG_EMAIL));
}

// =============================================================
// Phone rule
// =============================================================

#[test]
fn phone_too_short_fails() {
    assert_eq!(validate(&spec(false, FieldKind::Phone), "12345"), Some(MSG_PHONE));
}

#[test]
fn phone_nine_digits_passes() {
    assert_eq!(validate(&spec(false, FieldKind::Phone), "123456789"), None);
}

#[test]
fn phone_fifteen_digits_passes() {
    assert_eq!(validate(&spec(false, FieldKind::Phone), "123456789012345"), None);
}

#[test]
fn phone_sixteen_digits_fails() {
    assert_eq!(validate(&spec(false, FieldKind::Phone), "1234567890123456"), Some(MSG_PHONE));
}

#[test]
fn phone_with_separators_fails() {
    assert_eq!(validate(&spec(false, FieldKind::Phone), "012-345-6789"), Some(MSG_PHONE));
}

// =============================================================
// Password rule
// =============================================================

#[test]
fn password_with_digit_and_length_passes() {
    assert_eq!(validate(&spec(true, FieldKind::Password), "abc12345"), None);
}

#[test]
fn password_without_digit_fails() {
    assert_eq!(validate(&spec(true, FieldKind::Password), "abcdefgh"), Some(MSG_PASSWORD));
}

#[test]
fn password_too_short_fails() {
    assert_eq!(validate(&spec(true, FieldKind::Password), "ab1"), Some(MSG_PASSWORD));
}

// =============================================================
// Message rule
// =============================================================

#[test]
fn message_shorter_than_ten_chars_fails() {
    assert_eq!(validate(&spec(true, FieldKind::Message), "short"), Some(MSG_TOO_SHORT));
}

#[test]
fn message_long_enough_passes() {
    assert_eq!(validate(&spec(true, FieldKind::Message), "this is long enough"), None);
}

// =============================================================
// Kind inference
// =============================================================

#[test]
fn kind_for_textarea_is_message() {
    assert_eq!(kind_for("message", "text", true), FieldKind::Message);
}

#[test]
fn kind_for_email_type_wins_over_name() {
    // Explicit email type takes precedence over a "phone" substring.
    assert_eq!(kind_for("phone-contact", "email", false), FieldKind::Email);
}

#[test]
fn kind_for_phone_and_tel_substrings() {
    assert_eq!(kind_for("phone", "text", false), FieldKind::Phone);
    assert_eq!(kind_for("work-tel", "text", false), FieldKind::Phone);
}

#[test]
fn kind_for_password_substring() {
    assert_eq!(kind_for("reg-password", "text", false), FieldKind::Password);
}

#[test]
fn kind_for_plain_text() {
    assert_eq!(kind_for("name", "text", false), FieldKind::Text);
}
