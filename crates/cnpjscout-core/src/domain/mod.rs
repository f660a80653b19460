pub mod area_code;
pub mod cnpj;
pub mod contact;
pub mod phone;
pub mod record;
pub mod window;

pub use area_code::area_code_for_state;
pub use cnpj::format_cnpj;
pub use contact::{RawContact, StructuredContact};
pub use phone::{normalize_phone, DEFAULT_COUNTRY_CODE, NINTH_DIGIT_AREA_CODES};
pub use record::CompanyRecord;
pub use window::{
    parse_date, validate_window_days, SearchWindow, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
