//! Side-effects panel visibility toggle.

use crate::routes::side_effects::PanelState;

/// Flip the panel's visibility. The button label follows from the new
/// state via [`PanelState::button_label`].
pub fn toggle(state: PanelState) -> PanelState {
    PanelState {
        visible: !state.visible,
    }
}
