//! Stateless field checks and text normalization shared by every service.
//!
//! None of these touch storage; calling them repeatedly is idempotent.

use chrono::{Local, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::error::DomainError;

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_CODE_LEN: usize = 2;
pub const MIN_DEPARTMENT_LEN: usize = 2;
pub const MIN_DESCRIPTION_LEN: usize = 5;
pub const MIN_CREDITS: i32 = 1;
pub const MAX_CREDITS: i32 = 10;
pub const MAX_AGE_YEARS: u32 = 100;

/// Status assumed when none is given.
pub const DEFAULT_STATE: &str = "active";

/// Accepted status words, compared case-insensitively after trimming.
const VALID_STATES: [&str; 4] = ["active", "inactive", "activo", "inactivo"];

/// Formats tried in order by [`parse_date`]: dd/MM/yyyy, yyyy-MM-dd, dd-MM-yyyy.
const DATE_FORMATS: [&str; 3] = ["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y"];

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@([A-Za-z0-9.-]+\.[A-Za-z]{2,})$").expect("valid email regex")
});

static IDENTIFICATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{9,12}$").expect("valid identification regex"));

pub fn is_not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    is_not_empty(email) && EMAIL_RE.is_match(email.trim())
}

/// 9 to 12 ASCII digits once surrounding whitespace is removed.
pub fn is_valid_identification(identification: &str) -> bool {
    is_not_empty(identification) && IDENTIFICATION_RE.is_match(identification.trim())
}

pub fn is_valid_state(state: &str) -> bool {
    let lowered = state.trim().to_lowercase();
    VALID_STATES.contains(&lowered.as_str())
}

/// Non-empty once trimmed and at least `min` characters long.
pub fn is_valid_length(text: &str, min: usize) -> bool {
    is_not_empty(text) && text.trim().chars().count() >= min
}

pub fn is_valid_credits(credits: i32) -> bool {
    (MIN_CREDITS..=MAX_CREDITS).contains(&credits)
}

/// Birth date must not be in the future nor more than [`MAX_AGE_YEARS`] back.
pub fn is_valid_birth_date(date: NaiveDate) -> bool {
    is_valid_birth_date_on(date, Local::now().date_naive())
}

pub fn is_valid_birth_date_on(date: NaiveDate, today: NaiveDate) -> bool {
    let Some(min_date) = today.checked_sub_months(Months::new(MAX_AGE_YEARS * 12)) else {
        return false;
    };
    date <= today && date >= min_date
}

/// Missing or blank → [`DEFAULT_STATE`]; otherwise trimmed and lowercased.
pub fn normalize_state(state: Option<&str>) -> String {
    match state {
        Some(s) if is_not_empty(s) => s.trim().to_lowercase(),
        _ => DEFAULT_STATE.to_string(),
    }
}

pub fn clean_text(text: &str) -> String {
    text.trim().to_string()
}

/// Parse a date trying each accepted format in order.
pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    if !is_not_empty(value) {
        return Err(DomainError::validation("date", "date cannot be empty"));
    }
    let trimmed = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| {
            DomainError::validation(
                "date",
                format!("invalid date '{trimmed}', use dd/MM/yyyy, yyyy-MM-dd or dd-MM-yyyy"),
            )
        })
}

pub fn empty_field_message(field: &str) -> String {
    format!("field '{field}' cannot be empty")
}

pub fn invalid_format_message(field: &str) -> String {
    format!("field '{field}' has an invalid format")
}
