use std::ops::RangeInclusive;

pub const DEFAULT_COUNTRY_CODE: &str = "55";

/// Area codes whose mobile numbers carry the extra leading 9.
pub const NINTH_DIGIT_AREA_CODES: RangeInclusive<u8> = 11..=29;

/// Normalizes a Brazilian phone number into `country + area + subscriber`.
///
/// The country code is stripped first when what remains looks like a
/// national number (10 or 11 digits). A bare subscriber number (8 or 9
/// digits) borrows `area_code` when one is known. National numbers are then
/// rewritten to the numbering plan: areas 11..=29 always get the ninth digit,
/// every other area never has it. Anything that doesn't reconstruct into a
/// national number comes back as its bare digits.
///
/// Returns `None` when the input holds no digits at all.
pub fn normalize_phone(
    raw: Option<&str>,
    country_code: &str,
    area_code: Option<&str>,
) -> Option<String> {
    let raw = raw?;
    let mut digits = digits_only(raw);
    if digits.is_empty() {
        return None;
    }

    if !country_code.is_empty() {
        if let Some(national) = digits.strip_prefix(country_code) {
            if matches!(national.len(), 10 | 11) {
                digits = national.to_string();
            }
        }
    }

    if matches!(digits.len(), 8 | 9) {
        if let Some(area) = area_code.map(digits_only).filter(|area| !area.is_empty()) {
            digits.insert_str(0, &area);
        }
    }

    if !matches!(digits.len(), 10 | 11) {
        return Some(digits);
    }

    let (area, subscriber) = digits.split_at(2);
    Some(format_national(country_code, area, subscriber))
}

fn format_national(country_code: &str, area: &str, subscriber: &str) -> String {
    let needs_ninth_digit = area
        .parse::<u8>()
        .is_ok_and(|value| NINTH_DIGIT_AREA_CODES.contains(&value));

    if needs_ninth_digit {
        if subscriber.len() == 8 {
            return format!("{country_code}{area}9{subscriber}");
        }
    } else if subscriber.len() == 9 {
        if let Some(trimmed) = subscriber.strip_prefix('9') {
            return format!("{country_code}{area}{trimmed}");
        }
    }

    format!("{country_code}{area}{subscriber}")
}

pub(crate) fn digits_only(value: &str) -> String {
    value.chars().filter(|ch| ch.is_ascii_digit()).collect()
}
