//! Community - registry that owns every person
//!
//! People are entities in a `hecs::World`. Jobs and spouse links are optional
//! components, so "unemployed" and "unmarried" are simply missing components.

use hecs::World;

use crate::components::{Age, Employment, Person, PersonId, Spouse};
use crate::job::Job;

pub struct Community {
    pub(crate) world: World,
}

impl Community {
    pub fn new() -> Self {
        Self {
            world: World::new(),
        }
    }

    /// Add a person with no job and no spouse
    pub fn spawn_person(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
    ) -> PersonId {
        let entity = self.world.spawn((
            Person {
                first_name: first_name.into(),
                last_name: last_name.into(),
            },
            Age { years: age },
        ));
        PersonId(entity)
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.world.contains(id.0)
    }

    /// Number of people in the community
    pub fn population(&self) -> usize {
        self.world.query::<&Person>().iter().count()
    }

    /// Handles of everyone in the community
    pub fn people(&self) -> Vec<PersonId> {
        self.world
            .query::<&Person>()
            .iter()
            .map(|(entity, _)| PersonId(entity))
            .collect()
    }

    pub fn person(&self, id: PersonId) -> Option<Person> {
        self.world.get::<&Person>(id.0).ok().map(|p| (*p).clone())
    }

    pub fn age(&self, id: PersonId) -> Option<u32> {
        self.world.get::<&Age>(id.0).ok().map(|age| age.years)
    }

    /// Change a person's age. Existing job and spouse are kept even if the
    /// new age would not have allowed them; the age guards run on assignment.
    pub fn set_age(&mut self, id: PersonId, years: u32) {
        if let Ok(mut age) = self.world.get::<&mut Age>(id.0) {
            age.years = years;
        }
    }

    pub fn job(&self, id: PersonId) -> Option<Job> {
        self.world
            .get::<&Employment>(id.0)
            .ok()
            .map(|employment| employment.0.clone())
    }

    /// Mutable access to a person's job, e.g. to give a raise
    pub fn job_mut(&mut self, id: PersonId) -> Option<&mut Job> {
        self.world
            .query_one_mut::<&mut Employment>(id.0)
            .ok()
            .map(|employment| &mut employment.0)
    }

    pub fn spouse(&self, id: PersonId) -> Option<PersonId> {
        self.world.get::<&Spouse>(id.0).ok().map(|spouse| spouse.0)
    }

    pub fn is_married(&self, id: PersonId) -> bool {
        self.spouse(id).is_some()
    }
}

impl Default for Community {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Community {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Community")
            .field("population", &self.population())
            .finish()
    }
}
