use super::*;

fn registered_users() -> Vec<UserRecord> {
    let mut users = Vec::new();
    register(&mut users, "Thandi", "thandi@example.com", "pass123");
    users
}

// =============================================================
// Register
// =============================================================

#[test]
fn register_appends_a_record() {
    let mut users = Vec::new();
    let outcome = register(&mut users, "Thandi", "thandi@example.com", "pass123");
    assert_eq!(outcome, RegisterOutcome::Registered);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "thandi@example.com");
}

#[test]
fn register_rejects_empty_fields() {
    let mut users = Vec::new();
    assert_eq!(register(&mut users, "", "a@b.c", "pass123"), RegisterOutcome::EmptyField);
    assert_eq!(register(&mut users, "A", "  ", "pass123"), RegisterOutcome::EmptyField);
    assert_eq!(register(&mut users, "A", "a@b.c", ""), RegisterOutcome::EmptyField);
    assert!(users.is_empty());
}

#[test]
fn register_rejects_a_duplicate_email() {
    let mut users = registered_users();
    let outcome = register(&mut users, "Other", "thandi@example.com", "different1");
    assert_eq!(outcome, RegisterOutcome::AlreadyRegistered);
    assert_eq!(users.len(), 1);
}

#[test]
fn register_trims_name_and_email() {
    let mut users = Vec::new();
    register(&mut users, "  Thandi ", " thandi@example.com ", "pass123");
    assert_eq!(users[0].name, "Thandi");
    assert_eq!(users[0].email, "thandi@example.com");
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_with_correct_credentials_yields_a_session() {
    let users = registered_users();
    let session = login(&users, "thandi@example.com", "pass123").unwrap();
    assert_eq!(session, Session { name: "Thandi".to_owned(), email: "thandi@example.com".to_owned() });
}

#[test]
fn login_with_wrong_password_is_rejected() {
    let users = registered_users();
    assert_eq!(login(&users, "thandi@example.com", "wrong"), None);
}

#[test]
fn login_with_unknown_email_is_rejected() {
    let users = registered_users();
    assert_eq!(login(&users, "nobody@example.com", "pass123"), None);
}

#[test]
fn login_trims_the_email() {
    let users = registered_users();
    assert!(login(&users, " thandi@example.com ", "pass123").is_some());
}
