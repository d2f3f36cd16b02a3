//! Employee domain types and input validation
//!
//! `NewEmployee` is the raw tool input. Validation produces a
//! `ValidatedEmployee`, the only shape the store will persist, so no
//! statement can ever be issued from unchecked input. Checks run in a
//! fixed order and the first failure wins.

use chrono::{Local, NaiveDate};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected employee input. Always raised before any database
/// interaction, so a failed validation never leaves a partial row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field is empty after trimming surrounding whitespace
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Salary is zero, negative, or not a representable number
    #[error("salary must be a positive number")]
    NonPositiveSalary,

    /// Hire date string does not parse as a calendar date
    #[error("invalid hire date '{value}': expected YYYY-MM-DD")]
    InvalidHireDate { value: String },
}

/// Employee record as returned by both tools.
///
/// `hire_date` serializes as an ISO-8601 date string, or `null` when
/// the stored date is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    pub hire_date: Option<NaiveDate>,
}

/// Raw `add_employee` input as received from the tool surface.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    #[serde(default)]
    pub hire_date: Option<String>,
}

/// Employee input that has passed validation: trimmed text fields, a
/// strictly positive salary, and a resolved hire date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEmployee {
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: Decimal,
    pub hire_date: NaiveDate,
}

impl NewEmployee {
    /// Validate the input, defaulting a missing hire date to today's
    /// local calendar date.
    pub fn validate(&self) -> Result<ValidatedEmployee, ValidationError> {
        self.validate_with_today(Local::now().date_naive())
    }

    /// Validation with an explicit "today", so date defaulting is
    /// deterministic under test.
    pub fn validate_with_today(
        &self,
        today: NaiveDate,
    ) -> Result<ValidatedEmployee, ValidationError> {
        let name = non_empty("name", &self.name)?;
        let position = non_empty("position", &self.position)?;
        let department = non_empty("department", &self.department)?;

        if self.salary.is_nan() || self.salary <= 0.0 {
            return Err(ValidationError::NonPositiveSalary);
        }
        // NUMERIC column: reject values a Decimal cannot carry (infinities,
        // out-of-range magnitudes) instead of letting the insert fail.
        let salary = Decimal::from_f64(self.salary).ok_or(ValidationError::NonPositiveSalary)?;

        let hire_date = match self.hire_date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(raw) => raw.parse().map_err(|_| ValidationError::InvalidHireDate {
                value: raw.to_owned(),
            })?,
        };

        Ok(ValidatedEmployee {
            name,
            position,
            department,
            salary,
            hire_date,
        })
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}
