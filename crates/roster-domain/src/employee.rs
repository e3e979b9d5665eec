//! Employee domain types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Department an employee joins.
///
/// Wire format: `"HR"`, `"Engineering"`, `"Marketing"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "HR")]
    Hr,
    Engineering,
    Marketing,
}

impl Department {
    pub const ALL: [Self; 3] = [Self::Hr, Self::Engineering, Self::Marketing];

    /// Parse the wire value. Returns `None` for unknown departments.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "HR" => Some(Self::Hr),
            "Engineering" => Some(Self::Engineering),
            "Marketing" => Some(Self::Marketing),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hr => "HR",
            Self::Engineering => "Engineering",
            Self::Marketing => "Marketing",
        }
    }
}

/// A field of the employee record, named by its camelCase wire key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmployeeField {
    FirstName,
    LastName,
    EmployeeId,
    Email,
    PhoneNumber,
    CountryCode,
    Department,
    DateOfJoining,
    Role,
}

impl EmployeeField {
    pub const ALL: [Self; 9] = [
        Self::FirstName,
        Self::LastName,
        Self::EmployeeId,
        Self::Email,
        Self::PhoneNumber,
        Self::CountryCode,
        Self::Department,
        Self::DateOfJoining,
        Self::Role,
    ];

    /// Every field except `countryCode`.
    pub const REQUIRED: [Self; 8] = [
        Self::FirstName,
        Self::LastName,
        Self::EmployeeId,
        Self::Email,
        Self::PhoneNumber,
        Self::Department,
        Self::DateOfJoining,
        Self::Role,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::EmployeeId => "employeeId",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::CountryCode => "countryCode",
            Self::Department => "department",
            Self::DateOfJoining => "dateOfJoining",
            Self::Role => "role",
        }
    }

    pub fn from_camel_case(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }

    pub fn is_required(self) -> bool {
        self != Self::CountryCode
    }

    /// The uniqueness key this field carries, if any.
    pub fn unique(self) -> Option<UniqueField> {
        match self {
            Self::EmployeeId => Some(UniqueField::EmployeeId),
            Self::Email => Some(UniqueField::Email),
            Self::PhoneNumber => Some(UniqueField::PhoneNumber),
            _ => None,
        }
    }
}

/// Fields that must be globally unique across stored employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UniqueField {
    EmployeeId,
    Email,
    PhoneNumber,
}

impl UniqueField {
    pub const ALL: [Self; 3] = [Self::EmployeeId, Self::Email, Self::PhoneNumber];

    pub fn field(self) -> EmployeeField {
        match self {
            Self::EmployeeId => EmployeeField::EmployeeId,
            Self::Email => EmployeeField::Email,
            Self::PhoneNumber => EmployeeField::PhoneNumber,
        }
    }

    pub fn from_camel_case(s: &str) -> Option<Self> {
        EmployeeField::from_camel_case(s).and_then(EmployeeField::unique)
    }

    pub fn duplicate_message(self) -> &'static str {
        match self {
            Self::EmployeeId => "Employee ID already exists.",
            Self::Email => "Email already exists.",
            Self::PhoneNumber => "Phone number already exists.",
        }
    }
}

/// Field name → human readable message, ordered by field.
///
/// Serializes as a flat JSON object keyed by camelCase field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<EmployeeField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: EmployeeField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: EmployeeField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: EmployeeField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = EmployeeField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmployeeField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl FromIterator<(EmployeeField, String)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (EmployeeField, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Employee record as entered, before validation. Empty string means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub employee_id: String,
    pub email: String,
    pub phone_number: String,
    pub country_code: String,
    pub department: String,
    pub date_of_joining: String,
    pub role: String,
}

impl EmployeeDraft {
    pub fn get(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::FirstName => &self.first_name,
            EmployeeField::LastName => &self.last_name,
            EmployeeField::EmployeeId => &self.employee_id,
            EmployeeField::Email => &self.email,
            EmployeeField::PhoneNumber => &self.phone_number,
            EmployeeField::CountryCode => &self.country_code,
            EmployeeField::Department => &self.department,
            EmployeeField::DateOfJoining => &self.date_of_joining,
            EmployeeField::Role => &self.role,
        }
    }

    pub fn set(&mut self, field: EmployeeField, value: impl Into<String>) {
        let slot = match field {
            EmployeeField::FirstName => &mut self.first_name,
            EmployeeField::LastName => &mut self.last_name,
            EmployeeField::EmployeeId => &mut self.employee_id,
            EmployeeField::Email => &mut self.email,
            EmployeeField::PhoneNumber => &mut self.phone_number,
            EmployeeField::CountryCode => &mut self.country_code,
            EmployeeField::Department => &mut self.department,
            EmployeeField::DateOfJoining => &mut self.date_of_joining,
            EmployeeField::Role => &mut self.role,
        };
        *slot = value.into();
    }
}

/// A fully validated employee ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub employee_id: String,
    pub email: String,
    pub phone_number: String,
    pub country_code: String,
    pub department: Department,
    pub date_of_joining: NaiveDate,
    pub role: String,
}

impl NewEmployee {
    pub fn unique_value(&self, field: UniqueField) -> &str {
        match field {
            UniqueField::EmployeeId => &self.employee_id,
            UniqueField::Email => &self.email,
            UniqueField::PhoneNumber => &self.phone_number,
        }
    }
}
