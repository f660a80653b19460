use crate::domain::phone::digits_only;

/// Formats a CNPJ as `NN.NNN.NNN/NNNN-NN`. Values that don't reduce to
/// exactly 14 digits are returned untouched.
pub fn format_cnpj(value: &str) -> String {
    let digits = digits_only(value);
    if digits.len() != 14 {
        return value.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &digits[0..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..14]
    )
}
