//! Error type for the fallible entry points of the model.
//!
//! The age-gated setters and family operations reject silently; only the
//! `try_*` setters surface a `ModelError`.

use thiserror::Error;

use crate::components::PersonId;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Handle does not name a person in this community
    #[error("no person with handle {0:?} in this community")]
    UnknownPerson(PersonId),

    #[error("a person aged {age} cannot hold a job (minimum {minimum})")]
    TooYoungForJob { age: u32, minimum: u32 },

    #[error("a person aged {age} cannot have a spouse (minimum {minimum})")]
    TooYoungToMarry { age: u32, minimum: u32 },
}
