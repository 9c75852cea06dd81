//! Tri-state fields for partial updates.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A settable field that distinguishes "leave alone" from "clear".
///
/// `Unset` fields are omitted from the request body, `Null` is sent as JSON
/// `null`, and `Value` is sent as-is. Pair with
/// `#[serde(default, skip_serializing_if = "Patch::is_unset")]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Not provided; the server keeps its current value.
    #[default]
    Unset,
    /// Explicitly cleared.
    Null,
    /// Set to a value.
    Value(T),
}

impl<T> Patch<T> {
    /// Whether the field was left unset.
    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }

    /// Whether the field is explicitly cleared.
    pub fn is_null(&self) -> bool {
        matches!(self, Patch::Null)
    }

    /// Borrow the value, if one is set.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Value(value)
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Value(v) => v.serialize(serializer),
            Patch::Unset | Patch::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Body {
        #[serde(default, skip_serializing_if = "Patch::is_unset")]
        reason: Patch<String>,
    }

    #[test]
    fn test_unset_is_omitted() {
        let body = Body::default();
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({}));
    }

    #[test]
    fn test_null_is_sent() {
        let body = Body { reason: Patch::Null };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "reason": null }));
    }

    #[test]
    fn test_value_is_sent() {
        let body = Body {
            reason: "timeout".to_string().into(),
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "reason": "timeout" }));
    }

    #[test]
    fn test_deserialize_keeps_three_states() {
        let missing: Body = serde_json::from_value(json!({})).unwrap();
        assert!(missing.reason.is_unset());

        let null: Body = serde_json::from_value(json!({ "reason": null })).unwrap();
        assert!(null.reason.is_null());

        let set: Body = serde_json::from_value(json!({ "reason": "x" })).unwrap();
        assert_eq!(set.reason.as_value().map(String::as_str), Some("x"));
    }
}
