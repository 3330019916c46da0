//! Household finance model
//!
//! Money with fixed-rate currency conversion, jobs paid hourly or by salary,
//! people with age-gated employment and marriage, and families that add up
//! their household income.

pub mod community;
pub mod components;
pub mod error;
pub mod family;
pub mod job;
pub mod money;
pub mod person;

pub use community::Community;
pub use components::{Person, PersonId};
pub use error::ModelError;
pub use family::{Family, HouseholdReport, MemberReport, HOUSEHOLD_HOURS, MIN_PARENT_AGE};
pub use job::{Compensation, Job};
pub use money::{CurrencyCode, Money};
pub use person::{MIN_MARRIAGE_AGE, MIN_WORKING_AGE};
