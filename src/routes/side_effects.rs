use serde::{Deserialize, Serialize};

/// Button label shown while the panel is hidden.
pub const SHOW_LABEL: &str = "Show Common Side Effects";

/// Button label shown while the panel is visible.
pub const HIDE_LABEL: &str = "Hide Common Side Effects";

/// Visibility of the side-effects info panel.
///
/// The toggle button's label is derived from visibility, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelState {
    pub visible: bool,
}

impl PanelState {
    /// Label the toggle button should carry in this state.
    pub fn button_label(&self) -> &'static str {
        if self.visible {
            HIDE_LABEL
        } else {
            SHOW_LABEL
        }
    }
}

impl Default for PanelState {
    /// Panels start hidden.
    fn default() -> Self {
        Self { visible: false }
    }
}

/// Side effects route function name constants
pub const GET_PANEL_STATE: &str = "get_panel_state";
pub const TOGGLE_PANEL: &str = "toggle_panel";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_starts_hidden() {
        let state = PanelState::default();
        assert!(!state.visible);
        assert_eq!(state.button_label(), SHOW_LABEL);
    }

    #[test]
    fn test_visible_panel_offers_hide() {
        let state = PanelState { visible: true };
        assert_eq!(state.button_label(), HIDE_LABEL);
    }

    #[test]
    fn test_panel_state_copy() {
        let state = PanelState { visible: true };
        let copied = state;
        assert_eq!(state, copied);
    }

    #[test]
    fn test_const_values() {
        assert_eq!(GET_PANEL_STATE, "get_panel_state");
        assert_eq!(TOGGLE_PANEL, "toggle_panel");
    }
}
