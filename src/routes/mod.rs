pub mod age;
pub mod dose;
pub mod medications;
pub mod side_effects;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Test that all route module constants are accessible
        assert_eq!(super::age::CHECK_AGE, "check_age");
        assert_eq!(super::dose::GET_NEXT_DOSE, "get_next_dose");
        assert_eq!(super::medications::LIST_MEDICATIONS, "list_medications");
        assert_eq!(super::side_effects::GET_PANEL_STATE, "get_panel_state");
        assert_eq!(super::side_effects::TOGGLE_PANEL, "toggle_panel");
    }
}
