use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A phone or email slot of a registry record, decoded once from whatever
/// JSON shape the registry happened to send.
///
/// `null`, `false`, `0`, `""` and missing fields all decode to `Empty`, so a
/// slot is "present" exactly when it would have been worth looking at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RawContact {
    #[default]
    Empty,
    Text(String),
    Structured(StructuredContact),
    Entries(Vec<RawContact>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredContact {
    pub number: Option<String>,
    pub value: Option<String>,
    pub area: Option<String>,
    pub country_code: Option<String>,
    pub address: Option<String>,
}

impl RawContact {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self::Entries(items.iter().map(Self::from_value).collect()),
            Value::Object(map) => Self::Structured(StructuredContact::from_map(map)),
            other => scalar_text(other).map(Self::Text).unwrap_or_default(),
        }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// First element of a non-empty sequence. Scalars and objects have none.
    pub fn first_entry(&self) -> Option<&RawContact> {
        match self {
            Self::Entries(items) => items.first(),
            _ => None,
        }
    }
}

impl StructuredContact {
    fn from_map(map: &Map<String, Value>) -> Self {
        let field = |name: &str| map.get(name).and_then(scalar_text);
        Self {
            number: field("number"),
            value: field("value"),
            area: field("area"),
            country_code: field("countryCode"),
            address: field("address"),
        }
    }

    /// Digits of a phone entry: `number`, else `value`.
    pub fn phone_digits(&self) -> Option<&str> {
        self.number.as_deref().or(self.value.as_deref())
    }

    /// Address of an email entry: `address`, else `value`.
    pub fn email_address(&self) -> Option<&str> {
        self.address.as_deref().or(self.value.as_deref())
    }
}

impl<'de> Deserialize<'de> for RawContact {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Text form of a JSON scalar. Empty strings and zero count as absent;
/// numbers are rendered in decimal.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => {
            let rendered = number.to_string();
            if rendered.chars().all(|ch| matches!(ch, '0' | '.' | '-')) {
                None
            } else {
                Some(rendered)
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{RawContact, StructuredContact};
    use serde_json::json;

    #[test]
    fn decodes_each_shape() {
        assert_eq!(
            RawContact::from_value(&json!("11 4078-7777")),
            RawContact::Text("11 4078-7777".to_string())
        );
        assert_eq!(
            RawContact::from_value(&json!(1140787777u64)),
            RawContact::Text("1140787777".to_string())
        );

        let structured = RawContact::from_value(&json!({
            "area": "21",
            "number": "988887777",
            "countryCode": 55,
            "type": "MOBILE"
        }));
        assert_eq!(
            structured,
            RawContact::Structured(StructuredContact {
                number: Some("988887777".to_string()),
                value: None,
                area: Some("21".to_string()),
                country_code: Some("55".to_string()),
                address: None,
            })
        );

        let entries = RawContact::from_value(&json!(["a@b.com", null]));
        assert_eq!(
            entries,
            RawContact::Entries(vec![
                RawContact::Text("a@b.com".to_string()),
                RawContact::Empty
            ])
        );
    }

    #[test]
    fn falsy_values_are_not_present() {
        for value in [json!(null), json!(""), json!(0), json!(false), json!(true)] {
            assert!(!RawContact::from_value(&value).is_present(), "{value}");
        }
        assert!(RawContact::from_value(&json!({})).is_present());
        assert!(RawContact::from_value(&json!([])).is_present());
        assert!(RawContact::from_value(&json!(" ")).is_present());
    }

    #[test]
    fn first_entry_only_applies_to_sequences() {
        let entries = RawContact::from_value(&json!(["x", "y"]));
        assert_eq!(
            entries.first_entry(),
            Some(&RawContact::Text("x".to_string()))
        );
        assert_eq!(RawContact::from_value(&json!([])).first_entry(), None);
        assert_eq!(RawContact::from_value(&json!("x")).first_entry(), None);
    }

    #[test]
    fn structured_fallback_fields() {
        let entry = StructuredContact {
            value: Some("40787777".to_string()),
            ..StructuredContact::default()
        };
        assert_eq!(entry.phone_digits(), Some("40787777"));
        assert_eq!(entry.email_address(), Some("40787777"));
    }
}
