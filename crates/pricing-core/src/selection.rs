//! Frequency Selection
//!
//! The pricing page's only mutable state: which billing frequency the
//! visitor currently has selected.

use crate::model::FrequencyOption;

/// The currently selected billing frequency.
///
/// Exactly one option is selected at all times, starting with the first in
/// the list. [`select`](Self::select) is the only way to change it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencySelection {
    options: Vec<FrequencyOption>,
    selected: usize,
}

impl FrequencySelection {
    /// Create a selection over the given options, with the first selected.
    ///
    /// # Panics
    ///
    /// Panics if `options` is empty; the catalog invariant guarantees at
    /// least one frequency.
    pub fn new(options: Vec<FrequencyOption>) -> Self {
        assert!(!options.is_empty(), "at least one frequency option required");
        Self { options, selected: 0 }
    }

    /// Switch to the option with the given frequency value.
    ///
    /// Unknown values leave the selection unchanged.
    pub fn select(&mut self, value: &str) {
        if let Some(index) = self.options.iter().position(|o| o.value == value) {
            self.selected = index;
        }
    }

    /// The currently selected option
    pub fn selected(&self) -> &FrequencyOption {
        &self.options[self.selected]
    }

    /// Whether the option with this value is the selected one
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected().value == value
    }

    /// All options, in display order
    pub fn options(&self) -> &[FrequencyOption] {
        &self.options
    }

    /// The selector control is only shown when there is a choice to make
    pub fn show_selector(&self) -> bool {
        self.options.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_options() -> Vec<FrequencyOption> {
        vec![
            FrequencyOption::new("1", "1", "Quarter", "/quarter"),
            FrequencyOption::new("2", "2", "Annually", "/year"),
        ]
    }

    #[test]
    fn test_initial_selection_is_first_option() {
        let selection = FrequencySelection::new(two_options());
        assert_eq!(selection.selected().value, "1");
        assert!(selection.is_selected("1"));
        assert!(!selection.is_selected("2"));
    }

    #[test]
    fn test_select_switches_and_sticks() {
        let mut selection = FrequencySelection::new(two_options());
        selection.select("2");
        assert_eq!(selection.selected().value, "2");
        assert!(selection.is_selected("2"));
        assert!(!selection.is_selected("1"));
    }

    #[test]
    fn test_unknown_value_is_ignored() {
        let mut selection = FrequencySelection::new(two_options());
        selection.select("99");
        assert_eq!(selection.selected().value, "1");
    }

    #[test]
    fn test_single_option_hides_selector() {
        let only = vec![FrequencyOption::new("1", "1", "Monthly", "/month")];
        let mut selection = FrequencySelection::new(only);
        assert!(!selection.show_selector());

        // The sole option stays selected no matter what
        selection.select("2");
        assert_eq!(selection.selected().value, "1");
    }

    #[test]
    fn test_multiple_options_show_selector() {
        let selection = FrequencySelection::new(two_options());
        assert!(selection.show_selector());
    }
}
