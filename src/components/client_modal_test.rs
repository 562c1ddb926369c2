use super::*;

#[test]
fn modal_row_class_alternates_by_index() {
    assert_eq!(modal_row_class(0, false), "even");
    assert_eq!(modal_row_class(1, false), "odd");
}

#[test]
fn modal_row_class_marks_selected_record() {
    assert_eq!(modal_row_class(0, true), "even is-selected");
    assert_eq!(modal_row_class(3, true), "odd is-selected");
}
