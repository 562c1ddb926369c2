use super::*;

fn record(client_id: &str, bot_id: &str) -> ClientRecord {
    ClientRecord {
        client_id: client_id.to_owned(),
        name: "Ana Li".to_owned(),
        email: "ana@x.com".to_owned(),
        phone: "555-0100".to_owned(),
        bot_id: bot_id.to_owned(),
        created_at: None,
    }
}

#[test]
fn directory_starts_empty() {
    let state = DirectoryState::default();
    assert!(state.clients.is_empty());
}

#[test]
fn replace_swaps_the_full_list() {
    let mut state = DirectoryState::default();
    state.replace(vec![record("AA0001", "BA0001")]);
    assert_eq!(state.clients.len(), 1);

    // A refresh after a successful registration carries the new record.
    state.replace(vec![record("AA0001", "BA0001"), record("AB0002", "BB0002")]);
    assert_eq!(state.clients.len(), 2);
    assert!(state.clients.iter().any(|c| c.client_id == "AB0002" && c.bot_id == "BB0002"));
}

#[test]
fn replace_never_merges_stale_rows() {
    let mut state = DirectoryState::default();
    state.replace(vec![record("AA0001", "BA0001"), record("AB0002", "BB0002")]);

    // A refresh after a successful delete drops the removed record.
    state.replace(vec![record("AB0002", "BB0002")]);
    assert_eq!(state.clients.len(), 1);
    assert!(!state.clients.iter().any(|c| c.client_id == "AA0001"));
}

#[test]
fn replace_preserves_backend_order() {
    let mut state = DirectoryState::default();
    state.replace(vec![record("AC0003", "BC0003"), record("AA0001", "BA0001")]);
    assert_eq!(state.clients[0].client_id, "AC0003");
    assert_eq!(state.clients[1].client_id, "AA0001");
}
