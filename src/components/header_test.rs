use super::*;

fn alice() -> User {
    User { id: "u-1".to_owned(), username: "alice".to_owned(), picture_url: String::new() }
}

#[test]
fn menu_label_waits_for_profile() {
    assert_eq!(menu_label(None, false), None);
}

#[test]
fn menu_label_uses_username() {
    assert_eq!(menu_label(Some(&alice()), false), Some("alice".to_owned()));
}

#[test]
fn menu_label_falls_back_when_profile_fails() {
    assert_eq!(menu_label(None, true), Some(FALLBACK_MENU_LABEL.to_owned()));
}
