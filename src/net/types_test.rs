use super::*;

// =============================================================
// ClientRecord
// =============================================================

#[test]
fn client_record_parses_full_payload() {
    let json = r#"{
        "client_id": "AA0001",
        "name": "Ana Li",
        "email": "ana@x.com",
        "phone": "555-0100",
        "bot_id": "BA0001",
        "created_at": "12-03-2025"
    }"#;
    let record: ClientRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.client_id, "AA0001");
    assert_eq!(record.bot_id, "BA0001");
    assert_eq!(record.created_at.as_deref(), Some("12-03-2025"));
}

#[test]
fn client_record_created_at_is_optional() {
    let json = r#"{
        "client_id": "AA0001",
        "name": "Ana Li",
        "email": "ana@x.com",
        "phone": "555-0100",
        "bot_id": "BA0001"
    }"#;
    let record: ClientRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.created_at, None);
}

#[test]
fn client_record_created_at_accepts_explicit_null() {
    let json = r#"{
        "client_id": "AA0001",
        "name": "Ana Li",
        "email": "ana@x.com",
        "phone": "555-0100",
        "bot_id": "BA0001",
        "created_at": null
    }"#;
    let record: ClientRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.created_at, None);
}

#[test]
fn client_record_list_parses_in_order() {
    let json = r#"[
        {"client_id": "AA0001", "name": "A", "email": "a@x.com", "phone": "1", "bot_id": "BA0001"},
        {"client_id": "AB0002", "name": "B", "email": "b@x.com", "phone": "2", "bot_id": "BB0002"}
    ]"#;
    let records: Vec<ClientRecord> = serde_json::from_str(json).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].client_id, "AA0001");
    assert_eq!(records[1].client_id, "AB0002");
}

// =============================================================
// StatsResponse
// =============================================================

#[test]
fn stats_response_parses_counters() {
    let json = r#"{"total_clients": 3, "total_bots": 3, "active_bots": 2}"#;
    let stats: StatsResponse = serde_json::from_str(json).unwrap();
    assert_eq!(stats.total_clients, 3);
    assert_eq!(stats.total_bots, 3);
    assert_eq!(stats.active_bots, 2);
}

#[test]
fn stats_response_default_is_zeroed() {
    let stats = StatsResponse::default();
    assert_eq!(stats.total_clients, 0);
    assert_eq!(stats.total_bots, 0);
    assert_eq!(stats.active_bots, 0);
}

// =============================================================
// RegisterRequest / RegisterResponse
// =============================================================

#[test]
fn register_request_serializes_all_fields() {
    let req = RegisterRequest {
        name: "Ana Li".to_owned(),
        email: "ana@x.com".to_owned(),
        phone: "555-0100".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["name"], "Ana Li");
    assert_eq!(value["email"], "ana@x.com");
    assert_eq!(value["phone"], "555-0100");
}

#[test]
fn register_response_parses_success_payload() {
    let json = r#"{"success": true, "client_id": "AA0001", "bot_id": "BA0001"}"#;
    let resp: RegisterResponse = serde_json::from_str(json).unwrap();
    assert!(resp.success);
    assert_eq!(resp.client_id.as_deref(), Some("AA0001"));
    assert_eq!(resp.bot_id.as_deref(), Some("BA0001"));
    assert_eq!(resp.error, None);
}

#[test]
fn register_response_parses_failure_payload() {
    let json = r#"{"success": false, "error": "Email or phone already exists"}"#;
    let resp: RegisterResponse = serde_json::from_str(json).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.client_id, None);
    assert_eq!(resp.error.as_deref(), Some("Email or phone already exists"));
}

// =============================================================
// VerifyRequest / VerifyResponse
// =============================================================

#[test]
fn verify_request_serializes_bot_id() {
    let req = VerifyRequest {
        bot_id: "BA0001".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["bot_id"], "BA0001");
}

#[test]
fn verify_response_parses_both_outcomes() {
    let yes: VerifyResponse = serde_json::from_str(r#"{"authorized": true}"#).unwrap();
    let no: VerifyResponse = serde_json::from_str(r#"{"authorized": false}"#).unwrap();
    assert!(yes.authorized);
    assert!(!no.authorized);
}
