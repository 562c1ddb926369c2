use super::*;

#[test]
fn created_at_label_passes_backend_value_through() {
    assert_eq!(created_at_label(Some("12-03-2025")), "12-03-2025");
}

#[test]
fn created_at_label_falls_back_to_na() {
    assert_eq!(created_at_label(None), "N/A");
}

#[test]
fn row_class_alternates_by_index() {
    assert_eq!(row_class(0), "even");
    assert_eq!(row_class(1), "odd");
    assert_eq!(row_class(2), "even");
}

#[test]
fn delete_prompt_names_the_action() {
    assert_eq!(DELETE_PROMPT, "Are you sure you want to delete this client?");
}
