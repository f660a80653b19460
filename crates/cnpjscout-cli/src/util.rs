use cnpjscout_core::ContactRow;

const TABLE_HEADER: [&str; 6] = ["CNPJ", "LEGAL NAME", "EMAIL", "PHONE", "FOUNDED", "STATUS"];
const COLUMN_GAP: &str = "  ";

/// Plain-text table of rows, one line per company, columns padded to the
/// widest cell. Trailing whitespace is trimmed from every line.
pub fn format_table(rows: &[ContactRow]) -> String {
    let cells: Vec<[&str; 6]> = rows
        .iter()
        .map(|row| {
            [
                row.cnpj.as_str(),
                row.legal_name.as_str(),
                row.email.as_str(),
                row.phone.as_str(),
                row.founded.as_str(),
                row.status.as_str(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADER.map(|title| title.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &TABLE_HEADER, &widths);
    for line in &cells {
        push_line(&mut out, line, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[&str; 6], widths: &[usize; 6]) {
    let mut line = String::new();
    for (idx, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if idx > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(cell);
        let padding = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat(' ').take(padding));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
