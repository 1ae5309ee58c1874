//! Notifications raised by the picker towards its host.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Component name used when the picker has no identifier of its own.
pub const COMPONENT_NAME: &str = "date-picker";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PickerEvent {
    /// A value was committed (or cleared).
    Change {
        component: String,
        /// Canonical `YYYY-MM-DD`, empty when cleared
        value: String,
        /// The value as rendered by the active date adapter
        formatted: String,
        value_as_date: Option<NaiveDate>,
    },
    Focus {
        component: String,
    },
    Blur {
        component: String,
    },
}

impl PickerEvent {
    pub fn component(&self) -> &str {
        match self {
            Self::Change { component, .. } | Self::Focus { component } | Self::Blur { component } => {
                component
            }
        }
    }

    pub fn is_change(&self) -> bool {
        matches!(self, Self::Change { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_change_event_serializes_for_host() {
        let event = PickerEvent::Change {
            component: COMPONENT_NAME.to_string(),
            value: "2021-03-03".to_string(),
            formatted: "2021-03-03".to_string(),
            value_as_date: NaiveDate::from_ymd_opt(2021, 3, 3),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "change");
        assert_eq!(json["value_as_date"], "2021-03-03");
        assert_eq!(event.component(), "date-picker");
    }

    #[test]
    fn test_cleared_change_has_null_date() {
        let event = PickerEvent::Change {
            component: "dob".to_string(),
            value: String::new(),
            formatted: String::new(),
            value_as_date: None,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert!(json["value_as_date"].is_null());
        assert!(event.is_change());
    }
}
