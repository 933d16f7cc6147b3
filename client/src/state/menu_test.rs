use super::*;

#[test]
fn menu_state_default_is_closed() {
    assert!(!MenuState::default().is_open());
}

#[test]
fn toggle_opens_then_closes() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(menu.is_open());
    menu.toggle();
    assert!(!menu.is_open());
}

#[test]
fn double_toggle_restores_any_state() {
    for start_open in [false, true] {
        let mut menu = MenuState::default();
        if start_open {
            menu.toggle();
        }
        let before = menu;
        menu.toggle();
        assert_ne!(menu, before);
        menu.toggle();
        assert_eq!(menu, before);
    }
}
