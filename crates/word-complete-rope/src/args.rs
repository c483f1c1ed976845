//! Command arguments as hosts pass them (usually a JSON object from a key binding).

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use word_complete::CycleDirection;

/// Arguments of one completion command invocation.
///
/// ```json
/// { "cycle": "previous", "default": "\t" }
/// ```
///
/// Both keys are optional: `cycle` defaults to `"next"` (any unrecognized value also means
/// `"next"`), `default` to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompletionArgs {
    #[serde(default, deserialize_with = "deserialize_direction")]
    /// Cycle direction.
    pub cycle: CycleDirection,

    #[serde(default)]
    /// Text inserted when there is no word before the caret.
    pub default: String,
}

impl CompletionArgs {
    /// Arguments for a forward cycle with no default text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse arguments from a JSON value (`null` means all defaults).
    pub fn from_json(value: &Value) -> Result<Self, serde_json::Error> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Self::deserialize(value)
    }
}

fn deserialize_direction<'de, D>(deserializer: D) -> Result<CycleDirection, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name
        .as_deref()
        .map(CycleDirection::from_name)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let args = CompletionArgs::from_json(&json!({})).unwrap();
        assert_eq!(args, CompletionArgs::new());
        assert_eq!(CompletionArgs::from_json(&Value::Null).unwrap(), args);
    }

    #[test]
    fn test_previous_and_default_text() {
        let args = CompletionArgs::from_json(&json!({ "cycle": "previous", "default": "\t" }))
            .unwrap();
        assert_eq!(args.cycle, CycleDirection::Previous);
        assert_eq!(args.default, "\t");
    }

    #[test]
    fn test_unknown_cycle_means_next() {
        let args = CompletionArgs::from_json(&json!({ "cycle": "backwards" })).unwrap();
        assert_eq!(args.cycle, CycleDirection::Next);
        let args = CompletionArgs::from_json(&json!({ "cycle": null })).unwrap();
        assert_eq!(args.cycle, CycleDirection::Next);
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        assert!(CompletionArgs::from_json(&json!({ "default": 3 })).is_err());
    }
}
