//! Jobs and their compensation schemes

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Compensation {
    /// Rate paid per hour worked
    Hourly(f64),
    /// Fixed annual amount, independent of hours
    Salary(u64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    title: String,
    compensation: Compensation,
}

impl Job {
    pub fn new(title: impl Into<String>, compensation: Compensation) -> Self {
        Self {
            title: title.into(),
            compensation,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn compensation(&self) -> Compensation {
        self.compensation
    }

    /// Income for the given hours. Salaries ignore `hours`; hourly pay is
    /// truncated to a whole amount.
    pub fn calculate_income(&self, hours: i64) -> i64 {
        match self.compensation {
            Compensation::Salary(annual) => i64::try_from(annual).unwrap_or(i64::MAX),
            Compensation::Hourly(rate) => (rate * hours as f64) as i64,
        }
    }

    /// Add a fixed amount to the salary or hourly rate.
    ///
    /// Salaries are truncated to whole units; a negative raise that would go
    /// below zero leaves a salary of zero.
    pub fn raise_by_amount(&mut self, amount: f64) {
        self.compensation = match self.compensation {
            Compensation::Salary(annual) => Compensation::Salary((annual as f64 + amount) as u64),
            Compensation::Hourly(rate) => Compensation::Hourly(rate + amount),
        };
    }

    /// Raise by a fraction of the current pay (0.1 = 10%). The fraction is
    /// not range-checked.
    pub fn raise_by_percent(&mut self, fraction: f64) {
        self.compensation = match self.compensation {
            Compensation::Salary(annual) => {
                let annual = annual as f64;
                Compensation::Salary((annual + annual * fraction) as u64)
            }
            Compensation::Hourly(rate) => Compensation::Hourly(rate + rate * fraction),
        };
    }
}
