//! ECS Components for people in a community

use crate::job::Job;

// ============================================================================
// Identity
// ============================================================================

/// Handle to a person stored in a [`Community`](crate::Community).
///
/// Handles do not own anything; a handle whose person is gone (or that came
/// from another community) simply resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonId(pub(crate) hecs::Entity);

// ============================================================================
// Person Components
// ============================================================================

#[derive(Debug, Clone)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age {
    pub years: u32,
}

/// Present only while the person holds a job
#[derive(Debug, Clone)]
pub struct Employment(pub Job);

/// Non-owning link to the person's spouse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spouse(pub PersonId);
