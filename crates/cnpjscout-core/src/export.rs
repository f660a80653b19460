//! Text encoders for the three export documents.

use crate::dto::ContactRow;
use crate::time::NOT_AVAILABLE;
use serde::Serialize;

pub const CSV_HEADER: [&str; 6] = [
    "CNPJ",
    "Razão Social",
    "Email",
    "Telefone",
    "Data de Abertura",
    "Status",
];

const CSV_DELIMITER: char = ';';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Emails,
    Phones,
}

impl ExportFormat {
    pub fn default_file_name(self) -> &'static str {
        match self {
            ExportFormat::Csv => "empresas_mei_export.csv",
            ExportFormat::Emails => "emails_mei_export.txt",
            ExportFormat::Phones => "telefones_mei_export.txt",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "records",
            ExportFormat::Emails => "emails",
            ExportFormat::Phones => "phones",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub data: String,
    pub count: usize,
}

pub fn export_rows(format: ExportFormat, rows: &[ContactRow]) -> ExportDocument {
    match format {
        ExportFormat::Csv => ExportDocument {
            data: encode_csv(rows),
            count: rows.len(),
        },
        ExportFormat::Emails => encode_column(rows.iter().map(|row| row.email.as_str())),
        ExportFormat::Phones => encode_column(rows.iter().map(|row| row.phone.as_str())),
    }
}

/// `;`-separated CSV with an unquoted header and every data field quoted.
pub fn encode_csv(rows: &[ContactRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADER.join(&CSV_DELIMITER.to_string()));
    for row in rows {
        let fields = [
            &row.cnpj,
            &row.legal_name,
            &row.email,
            &row.phone,
            &row.founded,
            &row.status,
        ];
        let quoted: Vec<String> = fields.iter().map(|field| quote_field(field)).collect();
        lines.push(quoted.join(&CSV_DELIMITER.to_string()));
    }
    lines.join("\n")
}

/// One value per line, dropping `N/A` and blank values. No deduplication.
pub fn encode_lines<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    encode_column(values).data
}

fn encode_column<I, S>(values: I) -> ExportDocument
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let kept: Vec<S> = values
        .into_iter()
        .filter(|value| {
            let value = value.as_ref();
            value != NOT_AVAILABLE && !value.trim().is_empty()
        })
        .collect();
    let count = kept.len();
    let data = kept
        .iter()
        .map(|value| value.as_ref())
        .collect::<Vec<&str>>()
        .join("\n");
    ExportDocument { data, count }
}

fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
