use super::*;

// =============================================================
// email
// =============================================================

#[test]
fn email_required() {
    assert_eq!(email(""), Some("Email is required"));
    assert_eq!(email("   "), Some("Email is required"));
}

#[test]
fn email_must_be_well_formed() {
    assert_eq!(email("no-at-sign"), Some("Enter a valid email"));
    assert_eq!(email("@example.com"), Some("Enter a valid email"));
    assert_eq!(email("user@"), Some("Enter a valid email"));
    assert_eq!(email("user@nodot"), Some("Enter a valid email"));
}

#[test]
fn email_accepts_valid_address() {
    assert_eq!(email("user@example.com"), None);
    assert_eq!(email("  user@example.com  "), None);
}

// =============================================================
// password
// =============================================================

#[test]
fn password_required() {
    assert_eq!(password(""), Some("Password is required"));
}

#[test]
fn password_minimum_length() {
    assert_eq!(
        password("short"),
        Some("Password should be of minimum 8 char length")
    );
    assert_eq!(password("1234567"), password("short"));
}

#[test]
fn password_accepts_long_enough() {
    assert_eq!(password("12345678"), None);
    assert_eq!(password("correct horse battery staple"), None);
}

// =============================================================
// first_name
// =============================================================

#[test]
fn first_name_required() {
    assert_eq!(first_name(""), Some("First name is required"));
    assert_eq!(first_name("  "), Some("First name is required"));
}

#[test]
fn first_name_accepts_any_non_blank() {
    assert_eq!(first_name("Ada"), None);
}
