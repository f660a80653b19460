use crate::domain::contact::{scalar_text, RawContact};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One company as returned by the registry. Decoding is lenient: any JSON
/// value produces a record, with unknown or mistyped fields left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyRecord {
    pub tax_id: Option<String>,
    pub legal_name: Option<String>,
    pub founded: Option<String>,
    pub status: Option<String>,
    pub state: Option<String>,
    pub phones: RawContact,
    pub company_phone: RawContact,
    pub phone: RawContact,
    pub phone_alt: RawContact,
    pub company_email: RawContact,
    pub emails: RawContact,
    pub email: RawContact,
}

impl CompanyRecord {
    pub fn from_value(value: &Value) -> Self {
        let text = |pointer: &str| value.pointer(pointer).and_then(scalar_text);
        let contact = |pointer: &str| {
            value
                .pointer(pointer)
                .map(RawContact::from_value)
                .unwrap_or_default()
        };

        Self {
            tax_id: text("/taxId"),
            legal_name: text("/company/name"),
            founded: text("/founded"),
            status: text("/status/text"),
            state: text("/address/state"),
            phones: contact("/phones"),
            company_phone: contact("/company/phone"),
            phone: contact("/phone"),
            phone_alt: contact("/phone_alt"),
            company_email: contact("/company/email"),
            emails: contact("/emails"),
            email: contact("/email"),
        }
    }
}

impl<'de> Deserialize<'de> for CompanyRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
