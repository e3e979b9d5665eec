//! Headless form state.
//!
//! [`FormState`] owns the in-progress draft and a status per field. It never
//! performs I/O: remote duplicate checks are handed out as [`DuplicateCheck`]
//! tickets and their answers fed back through
//! [`FormState::apply_duplicate_check`].

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use roster_domain::employee::{EmployeeDraft, EmployeeField, FieldErrors, UniqueField};
use roster_domain::validation;

/// Per-field lifecycle: `Untouched → Edited → {Valid, Invalid}`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Edited,
    Valid,
    Invalid(String),
}

impl FieldStatus {
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Invalid(message) => Some(message),
            _ => None,
        }
    }
}

/// A remote "does this value already exist" request, tagged with a per-field
/// sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateCheck {
    pub field: UniqueField,
    pub value: String,
    pub seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    InFlight,
    /// Stored with the generated id. The form has been cleared.
    Succeeded(i64),
    /// Generic failure signal. The form keeps its values for correction.
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    draft: EmployeeDraft,
    status: BTreeMap<EmployeeField, FieldStatus>,
    issued: HashMap<UniqueField, u64>,
    applied: HashMap<UniqueField, u64>,
    submission: Submission,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    pub fn value(&self, field: EmployeeField) -> &str {
        self.draft.get(field)
    }

    pub fn status(&self, field: EmployeeField) -> FieldStatus {
        self.status.get(&field).cloned().unwrap_or_default()
    }

    /// Messages of every `Invalid` field.
    pub fn errors(&self) -> FieldErrors {
        self.status
            .iter()
            .filter_map(|(field, status)| status.error().map(|m| (*field, m.to_owned())))
            .collect()
    }

    pub fn submission(&self) -> Submission {
        self.submission
    }

    /// Record a new value. Returns the duplicate check to dispatch when the
    /// field is one of the unique keys.
    pub fn change(
        &mut self,
        field: EmployeeField,
        value: impl Into<String>,
        today: NaiveDate,
    ) -> Option<DuplicateCheck> {
        let value = value.into();
        self.draft.set(field, value.clone());

        if field == EmployeeField::DateOfJoining {
            // Presence is enforced on submit.
            let status = if value.is_empty() {
                FieldStatus::Edited
            } else {
                match validation::check_date_of_joining(&value, today) {
                    Some(message) => FieldStatus::Invalid(message.to_owned()),
                    None => FieldStatus::Valid,
                }
            };
            self.status.insert(field, status);
            return None;
        }

        self.status.insert(field, FieldStatus::Edited);
        let unique = field.unique()?;
        let seq = self.issued.entry(unique).or_default();
        *seq += 1;
        Some(DuplicateCheck {
            field: unique,
            value,
            seq: *seq,
        })
    }

    /// Apply a duplicate-check answer. Returns `false` when the answer is
    /// older than one already applied and was dropped.
    pub fn apply_duplicate_check(&mut self, check: &DuplicateCheck, exists: bool) -> bool {
        let applied = self.applied.entry(check.field).or_default();
        if check.seq <= *applied {
            return false;
        }
        *applied = check.seq;
        let status = if exists {
            FieldStatus::Invalid(check.field.duplicate_message().to_owned())
        } else {
            FieldStatus::Valid
        };
        self.status.insert(check.field.field(), status);
        true
    }

    /// Run the full validation rules. On success marks the submission in
    /// flight and returns the draft to send.
    pub fn begin_submit(&mut self, today: NaiveDate) -> Result<EmployeeDraft, FieldErrors> {
        let errors = validation::validate(&self.draft, today);
        for field in EmployeeField::REQUIRED {
            let status = match errors.get(field) {
                Some(message) => FieldStatus::Invalid(message.to_owned()),
                None => FieldStatus::Valid,
            };
            self.status.insert(field, status);
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        self.submission = Submission::InFlight;
        Ok(self.draft.clone())
    }

    /// Record the endpoint's answer. Success clears the form; any failure
    /// leaves it populated.
    pub fn finish_submit(&mut self, outcome: Option<i64>) {
        match outcome {
            Some(id) => {
                self.draft = EmployeeDraft::default();
                self.status.clear();
                // Answers to checks still in flight refer to the old values.
                self.applied.clone_from(&self.issued);
                self.submission = Submission::Succeeded(id);
            }
            None => self.submission = Submission::Failed,
        }
    }
}
