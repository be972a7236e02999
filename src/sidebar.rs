#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub is_open: bool,
}

impl SidebarState {
    pub fn open(&mut self) -> Self {
        self.is_open = true;
        *self
    }

    pub fn close(&mut self) -> Self {
        self.is_open = false;
        *self
    }

    pub fn toggle(&mut self) -> Self {
        self.is_open = !self.is_open;
        *self
    }

    /// Following a sidebar link only dismisses the drawer on narrow viewports;
    /// wide layouts keep it where the user left it.
    pub fn navigated(&mut self, viewport_width: f64, compact_breakpoint: f64) -> Self {
        if viewport_width < compact_breakpoint {
            self.close()
        } else {
            *self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!SidebarState::default().is_open);
    }

    #[test]
    fn toggle_from_closed_opens() {
        let mut state = SidebarState::default();
        assert!(state.toggle().is_open);
        assert!(!state.toggle().is_open);
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = SidebarState::default();
        state.open();
        assert!(!state.close().is_open);
        assert!(!state.close().is_open);
        assert_eq!(state, SidebarState::default());
    }

    #[test]
    fn navigation_closes_only_on_compact_viewports() {
        let mut state = SidebarState { is_open: true };
        assert!(state.navigated(1280.0, 1024.0).is_open);
        assert!(!state.navigated(800.0, 1024.0).is_open);

        let mut state = SidebarState { is_open: true };
        assert!(state.navigated(1024.0, 1024.0).is_open);
    }
}
