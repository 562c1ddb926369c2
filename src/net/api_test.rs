use super::*;

#[test]
fn clients_endpoint_targets_list_route() {
    assert_eq!(clients_endpoint(), format!("{}/clients", api_base()));
}

#[test]
fn stats_endpoint_targets_stats_route() {
    assert_eq!(stats_endpoint(), format!("{}/stats", api_base()));
}

#[test]
fn register_endpoint_targets_register_route() {
    assert_eq!(register_endpoint(), format!("{}/register", api_base()));
}

#[test]
fn verify_endpoint_targets_verify_route() {
    assert_eq!(verify_endpoint(), format!("{}/verify", api_base()));
}

#[test]
fn delete_endpoint_embeds_client_id_in_path() {
    assert_eq!(delete_endpoint("AA0001"), format!("{}/delete/AA0001", api_base()));
}

#[test]
fn api_base_has_no_trailing_slash() {
    assert!(!api_base().ends_with('/'));
}

#[test]
fn request_failed_message_formats_operation_and_status() {
    assert_eq!(request_failed_message("register", 500), "register request failed: 500");
    assert_eq!(request_failed_message("delete", 404), "delete request failed: 404");
}
