//! Validation rules for employee records.
//!
//! Every rule is evaluated independently so a single pass reports all
//! violations. Date rules take `today` explicitly; callers pass
//! [`local_today`] unless they need a fixed clock.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::employee::{Department, EmployeeDraft, EmployeeField, FieldErrors, NewEmployee};

/// Unanchored on purpose: `a b@c.d` passes because `b@c.d` matches.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

pub const PHONE_NUMBER_LEN: usize = 10;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date in the local timezone of the running process.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Required fields that are absent (empty string).
pub fn missing_fields(draft: &EmployeeDraft) -> Vec<EmployeeField> {
    EmployeeField::REQUIRED
        .into_iter()
        .filter(|f| draft.get(*f).is_empty())
        .collect()
}

/// Run every rule against `draft` and collect one message per failing field.
pub fn validate(draft: &EmployeeDraft, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.first_name.is_empty() {
        errors.insert(EmployeeField::FirstName, "First Name is required");
    }
    if draft.last_name.is_empty() {
        errors.insert(EmployeeField::LastName, "Last Name is required");
    }
    if draft.employee_id.is_empty() {
        errors.insert(EmployeeField::EmployeeId, "Employee ID is required");
    }
    if !is_valid_email(&draft.email) {
        errors.insert(EmployeeField::Email, "Valid Email is required");
    }
    if !is_valid_phone_number(&draft.phone_number) {
        errors.insert(EmployeeField::PhoneNumber, "Phone Number must be 10 digits");
    }
    if let Some(message) = check_department(&draft.department) {
        errors.insert(EmployeeField::Department, message);
    }
    if let Some(message) = check_date_of_joining(&draft.date_of_joining, today) {
        errors.insert(EmployeeField::DateOfJoining, message);
    }
    if draft.role.is_empty() {
        errors.insert(EmployeeField::Role, "Role is required");
    }

    errors
}

/// Validate and convert in one step. `countryCode` stays empty when absent.
pub fn parse(draft: &EmployeeDraft, today: NaiveDate) -> Result<NewEmployee, FieldErrors> {
    let errors = validate(draft, today);
    match (
        errors.is_empty(),
        Department::parse(&draft.department),
        parse_date(&draft.date_of_joining),
    ) {
        (true, Some(department), Some(date_of_joining)) => Ok(NewEmployee {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            employee_id: draft.employee_id.clone(),
            email: draft.email.clone(),
            phone_number: draft.phone_number.clone(),
            country_code: draft.country_code.clone(),
            department,
            date_of_joining,
            role: draft.role.clone(),
        }),
        _ => Err(errors),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_PATTERN.is_match(email)
}

/// Length-only check: counts characters, not digits.
pub fn is_valid_phone_number(phone_number: &str) -> bool {
    phone_number.chars().count() == PHONE_NUMBER_LEN
}

pub fn check_department(department: &str) -> Option<&'static str> {
    if department.is_empty() {
        Some("Department is required")
    } else if Department::parse(department).is_none() {
        Some("Department must be one of HR, Engineering, Marketing")
    } else {
        None
    }
}

/// A joining date equal to `today` is accepted; any later date is not.
pub fn check_date_of_joining(value: &str, today: NaiveDate) -> Option<&'static str> {
    if value.is_empty() {
        return Some("Date of Joining is required");
    }
    match parse_date(value) {
        None => Some("Date of Joining must be a valid date"),
        Some(date) if date > today => Some("Date of Joining cannot be a future date"),
        Some(_) => None,
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}
