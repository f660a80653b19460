//! Picks one phone number and one email address out of a registry record.
//!
//! Each field has an ordered list of candidate slots; the first present slot
//! wins and is resolved according to its shape. Nothing here fails: a record
//! without usable contact data simply yields `None`.

use crate::domain::area_code::area_code_for_state;
use crate::domain::contact::RawContact;
use crate::domain::phone::{normalize_phone, DEFAULT_COUNTRY_CODE};
use crate::domain::record::CompanyRecord;

type Slot = for<'a> fn(&'a CompanyRecord) -> Option<&'a RawContact>;

/// Scalar phone slots, consulted only when `phones` is not a non-empty list.
const PHONE_SLOTS: [Slot; 3] = [company_phone, bare_phone, phone_alt];

const EMAIL_SLOTS: [Slot; 3] = [company_email, first_email_entry, bare_email];

pub fn extract_phone(record: &CompanyRecord) -> Option<String> {
    let inferred_area = record.state.as_deref().and_then(area_code_for_state);

    let candidate = record
        .phones
        .first_entry()
        .or_else(|| first_present(record, &PHONE_SLOTS));

    candidate
        .and_then(|candidate| resolve_phone(candidate, inferred_area))
        // Same rule as above whenever `phones` had an entry; kept so a
        // failed primary pick always ends on `phones[0]`.
        .or_else(|| {
            record
                .phones
                .first_entry()
                .and_then(|entry| resolve_phone(entry, inferred_area))
        })
}

pub fn extract_email(record: &CompanyRecord) -> Option<String> {
    first_present(record, &EMAIL_SLOTS)
        .and_then(resolve_email)
        .or_else(|| record.emails.first_entry().and_then(resolve_email))
}

fn first_present<'a>(record: &'a CompanyRecord, slots: &[Slot]) -> Option<&'a RawContact> {
    slots.iter().find_map(|slot| slot(record))
}

fn resolve_phone(candidate: &RawContact, inferred_area: Option<&str>) -> Option<String> {
    match candidate {
        RawContact::Text(text) if !text.trim().is_empty() => {
            normalize_phone(Some(text), DEFAULT_COUNTRY_CODE, inferred_area)
        }
        RawContact::Structured(entry) => {
            let digits = entry.phone_digits()?;
            let area = entry.area.as_deref().or(inferred_area);
            let country_code = entry
                .country_code
                .as_deref()
                .unwrap_or(DEFAULT_COUNTRY_CODE);
            normalize_phone(Some(digits), country_code, area)
        }
        _ => None,
    }
}

fn resolve_email(candidate: &RawContact) -> Option<String> {
    match candidate {
        RawContact::Text(text) if !text.trim().is_empty() => Some(text.clone()),
        RawContact::Structured(entry) => entry.email_address().map(str::to_string),
        _ => None,
    }
}

fn present(slot: &RawContact) -> Option<&RawContact> {
    slot.is_present().then_some(slot)
}

fn company_phone(record: &CompanyRecord) -> Option<&RawContact> {
    present(&record.company_phone)
}

fn bare_phone(record: &CompanyRecord) -> Option<&RawContact> {
    present(&record.phone)
}

fn phone_alt(record: &CompanyRecord) -> Option<&RawContact> {
    present(&record.phone_alt)
}

fn company_email(record: &CompanyRecord) -> Option<&RawContact> {
    present(&record.company_email)
}

fn first_email_entry(record: &CompanyRecord) -> Option<&RawContact> {
    record.emails.first_entry().and_then(present)
}

fn bare_email(record: &CompanyRecord) -> Option<&RawContact> {
    present(&record.email)
}
