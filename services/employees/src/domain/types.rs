use chrono::{DateTime, NaiveDate, Utc};

use roster_domain::employee::{Department, NewEmployee, UniqueField};

/// A stored employee record.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub employee_id: String,
    pub email: String,
    pub phone_number: String,
    pub country_code: String,
    pub department: Department,
    pub date_of_joining: NaiveDate,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    pub fn unique_value(&self, field: UniqueField) -> &str {
        match field {
            UniqueField::EmployeeId => &self.employee_id,
            UniqueField::Email => &self.email,
            UniqueField::PhoneNumber => &self.phone_number,
        }
    }
}

/// Unique fields of `candidate` already taken by any of `existing`, in field order.
pub fn conflicting_fields(existing: &[Employee], candidate: &NewEmployee) -> Vec<UniqueField> {
    UniqueField::ALL
        .into_iter()
        .filter(|f| {
            existing
                .iter()
                .any(|e| e.unique_value(*f) == candidate.unique_value(*f))
        })
        .collect()
}
