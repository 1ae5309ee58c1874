//! Selection/value controller.
//!
//! Owns the committed value, separate from the focused cursor. Browsing the
//! calendar never touches it; only explicit commits and text edits do.

use chrono::NaiveDate;

use crate::models::picker_event::PickerEvent;
use crate::services::adapter::{DateAdapter, IsoDateAdapter, DATE_FACTORY};
use crate::utils::date::print_iso_date;

/// Result of feeding raw input text through the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOutcome {
    /// The text with disallowed characters removed; hosts write it back into
    /// the input when it differs from what was typed.
    pub cleaned: String,
    /// Present when the edit committed a value (or cleared it).
    pub event: Option<PickerEvent>,
}

/// Keeps digits and the `.` `/` `-` separators.
pub fn strip_disallowed(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '/' | '-'))
        .collect()
}

pub struct SelectionController {
    value: Option<NaiveDate>,
    adapter: Box<dyn DateAdapter>,
    component: String,
}

impl SelectionController {
    pub fn new(component: impl Into<String>, value: Option<NaiveDate>) -> Self {
        Self::with_adapter(component, value, Box::new(IsoDateAdapter))
    }

    pub fn with_adapter(
        component: impl Into<String>,
        value: Option<NaiveDate>,
        adapter: Box<dyn DateAdapter>,
    ) -> Self {
        Self {
            value,
            adapter,
            component: component.into(),
        }
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    /// Canonical ISO text of the committed value, empty when none.
    pub fn value_text(&self) -> String {
        self.value.map(print_iso_date).unwrap_or_default()
    }

    /// The committed value rendered by the active adapter.
    pub fn formatted(&self) -> String {
        self.value
            .map(|date| self.adapter.format(date))
            .unwrap_or_default()
    }

    pub fn set_adapter(&mut self, adapter: Box<dyn DateAdapter>) {
        self.adapter = adapter;
    }

    /// Replace the value without raising a notification (host-driven sync).
    pub fn set_value_silently(&mut self, value: Option<NaiveDate>) {
        self.value = value;
    }

    /// Store `date` as the committed value and build the change notification.
    pub fn commit(&mut self, date: Option<NaiveDate>) -> PickerEvent {
        self.value = date;
        log::debug!(
            "Committed value {:?} for {}",
            self.value_text(),
            self.component
        );
        PickerEvent::Change {
            component: self.component.clone(),
            value: self.value_text(),
            formatted: self.formatted(),
            value_as_date: date,
        }
    }

    /// Handle a raw text edit. Parsed dates commit, empty text clears, and
    /// anything else leaves the value alone while the user keeps typing.
    pub fn parse_external_input(&mut self, text: &str) -> InputOutcome {
        let cleaned = strip_disallowed(text);
        let parsed = self.adapter.parse(&cleaned, DATE_FACTORY);

        let event = if parsed.is_some() || cleaned.is_empty() {
            Some(self.commit(parsed))
        } else {
            log::trace!("Ignoring partial input {:?}", cleaned);
            None
        };

        InputOutcome { cleaned, event }
    }
}

impl std::fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionController")
            .field("value", &self.value)
            .field("component", &self.component)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::adapter::MockDateAdapter;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_strip_disallowed() {
        assert_eq!(strip_disallowed("2021-03-03"), "2021-03-03");
        assert_eq!(strip_disallowed(" 2021a-03 -03!"), "2021-03-03");
        assert_eq!(strip_disallowed("3.3/2021"), "3.3/2021");
        assert_eq!(strip_disallowed("abc"), "");
    }

    #[test]
    fn test_commit_emits_change() {
        let mut controller = SelectionController::new("dob", None);
        let event = controller.commit(Some(date(2021, 3, 3)));

        assert_eq!(
            event,
            PickerEvent::Change {
                component: "dob".to_string(),
                value: "2021-03-03".to_string(),
                formatted: "2021-03-03".to_string(),
                value_as_date: Some(date(2021, 3, 3)),
            }
        );
        assert_eq!(controller.value(), Some(date(2021, 3, 3)));
    }

    #[test]
    fn test_valid_input_commits() {
        let mut controller = SelectionController::new("dob", None);
        let outcome = controller.parse_external_input("2021-03-03");
        assert!(outcome.event.is_some());
        assert_eq!(controller.value(), Some(date(2021, 3, 3)));
    }

    #[test]
    fn test_invalid_calendar_date_is_ignored() {
        let mut controller = SelectionController::new("dob", Some(date(2020, 1, 1)));
        let outcome = controller.parse_external_input("2021-02-30");
        assert_eq!(outcome.event, None);
        assert_eq!(controller.value(), Some(date(2020, 1, 1)));
    }

    #[test]
    fn test_partial_input_is_ignored() {
        let mut controller = SelectionController::new("dob", Some(date(2020, 1, 1)));
        let outcome = controller.parse_external_input("2021-0");
        assert_eq!(outcome.event, None);
        assert_eq!(outcome.cleaned, "2021-0");
        assert_eq!(controller.value(), Some(date(2020, 1, 1)));
    }

    #[test]
    fn test_empty_input_clears() {
        let mut controller = SelectionController::new("dob", Some(date(2020, 1, 1)));
        let outcome = controller.parse_external_input("");
        assert_eq!(
            outcome.event,
            Some(PickerEvent::Change {
                component: "dob".to_string(),
                value: String::new(),
                formatted: String::new(),
                value_as_date: None,
            })
        );
        assert_eq!(controller.value(), None);
    }

    #[test]
    fn test_only_disallowed_characters_clears() {
        let mut controller = SelectionController::new("dob", Some(date(2020, 1, 1)));
        let outcome = controller.parse_external_input("abc");
        assert_eq!(outcome.cleaned, "");
        assert!(outcome.event.is_some());
        assert_eq!(controller.value(), None);
    }

    #[test]
    fn test_adapter_receives_cleaned_text() {
        let mut adapter = MockDateAdapter::new();
        adapter
            .expect_parse()
            .withf(|text, _| text == "03.03.2021")
            .times(1)
            .returning(|_, create| create(2021, 3, 3));
        adapter
            .expect_format()
            .returning(|date| date.format("%d.%m.%Y").to_string());

        let mut controller = SelectionController::with_adapter("dob", None, Box::new(adapter));
        let outcome = controller.parse_external_input("03.03.2021 x");

        match outcome.event {
            Some(PickerEvent::Change {
                value, formatted, ..
            }) => {
                assert_eq!(value, "2021-03-03");
                assert_eq!(formatted, "03.03.2021");
            }
            other => panic!("expected change event, got {:?}", other),
        }
    }
}
