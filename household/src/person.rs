//! Person operations - age-gated job and spouse assignment, descriptions
//!
//! The guards run at assignment time only. The silent setters never fail:
//! an under-age write leaves the field absent, nothing more.

use tracing::debug;

use crate::community::Community;
use crate::components::{Employment, PersonId, Spouse};
use crate::error::ModelError;
use crate::job::Job;

/// Minimum age to hold a job
pub const MIN_WORKING_AGE: u32 = 16;

/// Minimum age to have a spouse
pub const MIN_MARRIAGE_AGE: u32 = 18;

impl Community {
    /// Assign or clear a person's job, silently dropping it if they are
    /// under [`MIN_WORKING_AGE`].
    pub fn set_job(&mut self, id: PersonId, job: Option<Job>) {
        if let Err(err) = self.try_set_job(id, job) {
            debug!("job assignment rejected: {}", err);
        }
    }

    /// Like [`set_job`](Self::set_job) but reports why a job was refused.
    /// A refused job still leaves the person unemployed.
    pub fn try_set_job(&mut self, id: PersonId, job: Option<Job>) -> Result<(), ModelError> {
        let age = self.age(id).ok_or(ModelError::UnknownPerson(id))?;

        let _ = self.world.remove_one::<Employment>(id.0);
        let Some(job) = job else {
            return Ok(());
        };

        if age < MIN_WORKING_AGE {
            return Err(ModelError::TooYoungForJob {
                age,
                minimum: MIN_WORKING_AGE,
            });
        }

        self.world
            .insert_one(id.0, Employment(job))
            .map_err(|_| ModelError::UnknownPerson(id))
    }

    /// Point a person at their spouse (one direction only), silently dropping
    /// the link if they are under [`MIN_MARRIAGE_AGE`].
    ///
    /// Mutual links are established by [`Family::new`](crate::Family::new).
    pub fn set_spouse(&mut self, id: PersonId, spouse: Option<PersonId>) {
        if let Err(err) = self.try_set_spouse(id, spouse) {
            debug!("spouse assignment rejected: {}", err);
        }
    }

    /// Like [`set_spouse`](Self::set_spouse) but reports why a link was
    /// refused. An unknown spouse handle leaves the current link untouched;
    /// an under-age refusal leaves the person unmarried.
    pub fn try_set_spouse(
        &mut self,
        id: PersonId,
        spouse: Option<PersonId>,
    ) -> Result<(), ModelError> {
        let age = self.age(id).ok_or(ModelError::UnknownPerson(id))?;
        if let Some(spouse) = spouse.filter(|&spouse| !self.contains(spouse)) {
            return Err(ModelError::UnknownPerson(spouse));
        }

        let _ = self.world.remove_one::<Spouse>(id.0);
        let Some(spouse) = spouse else {
            return Ok(());
        };

        if age < MIN_MARRIAGE_AGE {
            return Err(ModelError::TooYoungToMarry {
                age,
                minimum: MIN_MARRIAGE_AGE,
            });
        }

        self.world
            .insert_one(id.0, Spouse(spouse))
            .map_err(|_| ModelError::UnknownPerson(id))
    }

    /// Text summary of a person and their spouse.
    ///
    /// Format: `[Person: firstName:F lastName:L age:N job:TITLE spouse:S]`,
    /// where a missing job or spouse prints as `none`. The spouse is expanded
    /// one level; inside it, the spouse's own spouse is printed by name as
    /// `<First Last>`.
    pub fn describe(&self, id: PersonId) -> Option<String> {
        self.describe_at(id, 0)
    }

    fn describe_at(&self, id: PersonId, depth: u8) -> Option<String> {
        let person = self.person(id)?;
        let age = self.age(id)?;
        let job = self
            .job(id)
            .map(|job| job.title().to_string())
            .unwrap_or_else(|| "none".to_string());

        let spouse = match self.spouse(id) {
            None => "none".to_string(),
            Some(spouse) if depth == 0 => self
                .describe_at(spouse, depth + 1)
                .unwrap_or_else(|| "none".to_string()),
            Some(spouse) => self
                .person(spouse)
                .map(|p| format!("<{}>", p.full_name()))
                .unwrap_or_else(|| "none".to_string()),
        };

        Some(format!(
            "[Person: firstName:{} lastName:{} age:{} job:{} spouse:{}]",
            person.first_name, person.last_name, age, job, spouse
        ))
    }
}
