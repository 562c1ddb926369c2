use super::*;

#[test]
fn tab_class_marks_selected_tab() {
    assert_eq!(tab_class(true), "nav-item nav-item--active");
    assert_eq!(tab_class(false), "nav-item");
}
