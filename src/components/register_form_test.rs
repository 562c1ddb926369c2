use super::*;

// =============================================================
// registration_payload
// =============================================================

#[test]
fn payload_built_from_complete_fields() {
    let req = registration_payload("Ana Li", "ana@x.com", "555-0100").unwrap();
    assert_eq!(req.name, "Ana Li");
    assert_eq!(req.email, "ana@x.com");
    assert_eq!(req.phone, "555-0100");
}

#[test]
fn payload_trims_surrounding_whitespace() {
    let req = registration_payload("  Ana Li ", " ana@x.com", "555-0100 ").unwrap();
    assert_eq!(req.name, "Ana Li");
    assert_eq!(req.email, "ana@x.com");
    assert_eq!(req.phone, "555-0100");
}

#[test]
fn payload_rejects_any_empty_field() {
    assert_eq!(registration_payload("", "ana@x.com", "555-0100"), None);
    assert_eq!(registration_payload("Ana Li", "", "555-0100"), None);
    assert_eq!(registration_payload("Ana Li", "ana@x.com", ""), None);
}

#[test]
fn payload_rejects_whitespace_only_fields() {
    assert_eq!(registration_payload("   ", "ana@x.com", "555-0100"), None);
}

// =============================================================
// submit_label
// =============================================================

#[test]
fn submit_label_shows_busy_state() {
    assert_eq!(submit_label(false), "Register Client");
    assert_eq!(submit_label(true), "Registering...");
}

// =============================================================
// transport-failure message
// =============================================================

#[test]
fn transport_failure_message_is_generic() {
    assert_eq!(REGISTRATION_FAILED, "Registration failed");
}
