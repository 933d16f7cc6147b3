//! Open/closed state of the collapsible navigation drawer.
//!
//! DESIGN
//! ======
//! One `MenuState` lives inside each layout shell. The shell hands the same
//! read signal and the same toggle callback to both the header and the
//! sidebar, so the two can never disagree about whether the drawer is open.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Drawer visibility on narrow viewports. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}
