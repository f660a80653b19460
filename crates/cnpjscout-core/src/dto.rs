use crate::domain::cnpj::format_cnpj;
use crate::domain::record::CompanyRecord;
use crate::rules::extract::{extract_email, extract_phone};
use crate::time::{format_founded_date, NOT_AVAILABLE};
use serde::Serialize;

/// Display form of one company: every field is filled, missing data
/// reads as `N/A`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRow {
    pub cnpj: String,
    pub legal_name: String,
    pub email: String,
    pub phone: String,
    pub founded: String,
    pub status: String,
}

impl ContactRow {
    pub fn from_record(record: &CompanyRecord) -> Self {
        Self {
            cnpj: record
                .tax_id
                .as_deref()
                .map(format_cnpj)
                .unwrap_or_else(not_available),
            legal_name: record.legal_name.clone().unwrap_or_else(not_available),
            email: extract_email(record).unwrap_or_else(not_available),
            phone: extract_phone(record).unwrap_or_else(not_available),
            founded: format_founded_date(record.founded.as_deref()),
            status: record.status.clone().unwrap_or_else(not_available),
        }
    }
}

/// Records returned by one search, in registry order. Each search produces
/// a fresh value; rendering and export only ever read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    records: Vec<CompanyRecord>,
}

impl SearchResults {
    pub fn new(records: Vec<CompanyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CompanyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rows(&self) -> Vec<ContactRow> {
        self.records.iter().map(ContactRow::from_record).collect()
    }
}

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

#[cfg(test)]
mod tests {
    use super::{ContactRow, SearchResults};
    use crate::domain::record::CompanyRecord;
    use serde_json::json;

    #[test]
    fn builds_display_row() {
        let record = CompanyRecord::from_value(&json!({
            "taxId": "12345678000195",
            "founded": "2024-03-15",
            "company": { "name": "Padaria Central" },
            "status": { "text": "Ativa" },
            "address": { "state": "SP" },
            "phones": [{ "number": "40787777" }],
            "emails": [{ "address": "contato@padaria.com.br" }]
        }));
        let row = ContactRow::from_record(&record);
        assert_eq!(
            row,
            ContactRow {
                cnpj: "12.345.678/0001-95".to_string(),
                legal_name: "Padaria Central".to_string(),
                email: "contato@padaria.com.br".to_string(),
                phone: "5511940787777".to_string(),
                founded: "15/03/2024".to_string(),
                status: "Ativa".to_string(),
            }
        );
    }

    #[test]
    fn missing_fields_read_as_not_available() {
        let row = ContactRow::from_record(&CompanyRecord::default());
        for value in [
            &row.cnpj,
            &row.legal_name,
            &row.email,
            &row.phone,
            &row.founded,
            &row.status,
        ] {
            assert_eq!(value, "N/A");
        }
    }

    #[test]
    fn rows_keep_registry_order() {
        let results = SearchResults::new(vec![
            CompanyRecord::from_value(&json!({ "company": { "name": "B" } })),
            CompanyRecord::from_value(&json!({ "company": { "name": "A" } })),
        ]);
        let names: Vec<String> = results.rows().into_iter().map(|row| row.legal_name).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(results.len(), 2);
        assert!(SearchResults::default().is_empty());
    }
}
