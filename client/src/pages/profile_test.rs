use super::*;

#[test]
fn save_label_reflects_progress() {
    assert_eq!(save_label(false), "Сохранить");
    assert_eq!(save_label(true), "Сохранение...");
}
