//! Family - two founding spouses plus their children
//!
//! A family holds handles into a [`Community`]; it never owns the people.
//! Rule violations are silent: construction yields an empty family and
//! `have_child` returns false.

use serde::Serialize;
use tracing::debug;

use crate::community::Community;
use crate::components::PersonId;

/// Founding spouse must be strictly older than this to add a child
pub const MIN_PARENT_AGE: u32 = 21;

/// Hours worked assumed for every member when computing household income
pub const HOUSEHOLD_HOURS: i64 = 2000;

#[derive(Debug, Clone, Default)]
pub struct Family {
    members: Vec<PersonId>,
}

impl Family {
    /// Marry two unmarried people and found a family.
    ///
    /// If either is already married (or unknown, or both handles are the same
    /// person) the family is empty and nobody is touched.
    pub fn new(community: &mut Community, spouse1: PersonId, spouse2: PersonId) -> Self {
        let eligible = spouse1 != spouse2
            && community.contains(spouse1)
            && community.contains(spouse2)
            && !community.is_married(spouse1)
            && !community.is_married(spouse2);

        if !eligible {
            debug!("family not founded: spouses unknown, identical or already married");
            return Self::default();
        }

        // Age guards on the spouse links still apply; members are recorded
        // either way.
        community.set_spouse(spouse1, Some(spouse2));
        community.set_spouse(spouse2, Some(spouse1));

        debug!("family founded");
        Self {
            members: vec![spouse1, spouse2],
        }
    }

    /// Add a child if the family is exactly its two founding spouses and one
    /// of them is older than [`MIN_PARENT_AGE`]. Returns whether the child
    /// was added; once a child is in, later calls return false.
    pub fn have_child(&mut self, community: &Community, child: PersonId) -> bool {
        let &[a, b] = self.members.as_slice() else {
            debug!("child rejected: family has {} members, not 2", self.members.len());
            return false;
        };
        if !community.contains(child) {
            return false;
        }

        let old_enough = [a, b]
            .iter()
            .any(|&parent| community.age(parent).is_some_and(|age| age > MIN_PARENT_AGE));
        if !old_enough {
            debug!("child rejected: no founding spouse older than {}", MIN_PARENT_AGE);
            return false;
        }

        self.members.push(child);
        true
    }

    /// Sum of every member's income at [`HOUSEHOLD_HOURS`]; the unemployed
    /// contribute nothing. Saturates at `i64::MAX`.
    pub fn household_income(&self, community: &Community) -> i64 {
        self.members
            .iter()
            .filter_map(|&member| community.job(member))
            .map(|job| job.calculate_income(HOUSEHOLD_HOURS))
            .fold(0, i64::saturating_add)
    }

    /// Members in order: the two founding spouses, then children as added
    pub fn members(&self) -> &[PersonId] {
        &self.members
    }

    pub fn founding_spouses(&self) -> Option<(PersonId, PersonId)> {
        match self.members.as_slice() {
            [a, b, ..] => Some((*a, *b)),
            _ => None,
        }
    }

    pub fn children(&self) -> &[PersonId] {
        self.members.get(2..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Per-member breakdown of the household income
    pub fn report(&self, community: &Community) -> HouseholdReport {
        let members: Vec<MemberReport> = self
            .members
            .iter()
            .filter_map(|&id| {
                let person = community.person(id)?;
                let job = community.job(id);
                Some(MemberReport {
                    name: person.full_name(),
                    age: community.age(id)?,
                    job_title: job.as_ref().map(|j| j.title().to_string()),
                    income: job.map_or(0, |j| j.calculate_income(HOUSEHOLD_HOURS)),
                })
            })
            .collect();

        HouseholdReport {
            total_income: members.iter().map(|m| m.income).fold(0, i64::saturating_add),
            members,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HouseholdReport {
    pub members: Vec<MemberReport>,
    pub total_income: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberReport {
    pub name: String,
    pub age: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    pub income: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{Compensation, Job};

    fn couple(town: &mut Community, age1: u32, age2: u32) -> (PersonId, PersonId) {
        (
            town.spawn_person("Ted", "Neward", age1),
            town.spawn_person("Charlotte", "Neward", age2),
        )
    }

    #[test]
    fn test_family_links_spouses() {
        let mut town = Community::new();
        let (ted, charlotte) = couple(&mut town, 45, 45);

        let family = Family::new(&mut town, ted, charlotte);
        assert_eq!(family.members(), &[ted, charlotte]);
        assert_eq!(town.spouse(ted), Some(charlotte));
        assert_eq!(town.spouse(charlotte), Some(ted));
    }

    #[test]
    fn test_married_spouse_yields_empty_family() {
        let mut town = Community::new();
        let (ted, charlotte) = couple(&mut town, 45, 45);
        let other = town.spawn_person("Sam", "Other", 30);
        let _ = Family::new(&mut town, ted, charlotte);

        let family = Family::new(&mut town, ted, other);
        assert!(family.is_empty());
        assert!(family.founding_spouses().is_none());
        assert_eq!(town.spouse(ted), Some(charlotte));
        assert!(town.spouse(other).is_none());
    }

    #[test]
    fn test_same_person_twice_yields_empty_family() {
        let mut town = Community::new();
        let ted = town.spawn_person("Ted", "Neward", 45);

        let family = Family::new(&mut town, ted, ted);
        assert!(family.is_empty());
        assert!(town.spouse(ted).is_none());
    }

    #[test]
    fn test_underage_spouse_is_still_a_member() {
        let mut town = Community::new();
        let (adult, minor) = couple(&mut town, 30, 17);

        let family = Family::new(&mut town, adult, minor);
        assert_eq!(family.len(), 2);
        assert_eq!(town.spouse(adult), Some(minor));
        assert!(town.spouse(minor).is_none());
    }

    #[test]
    fn test_young_parents_cannot_have_children() {
        let mut town = Community::new();
        let (a, b) = couple(&mut town, 21, 20);
        let child = town.spawn_person("Baby", "Neward", 0);
        let mut family = Family::new(&mut town, a, b);

        assert!(!family.have_child(&town, child));
        assert_eq!(family.len(), 2);
    }

    #[test]
    fn test_only_one_child_while_family_is_two_members() {
        let mut town = Community::new();
        let (a, b) = couple(&mut town, 45, 45);
        let first = town.spawn_person("Mike", "Neward", 0);
        let second = town.spawn_person("Matt", "Neward", 0);
        let mut family = Family::new(&mut town, a, b);

        assert!(family.have_child(&town, first));
        assert_eq!(family.len(), 3);
        assert!(!family.have_child(&town, second));
        assert_eq!(family.len(), 3);
        assert_eq!(family.children(), &[first]);
    }

    #[test]
    fn test_older_spouse_in_second_slot_can_have_child() {
        let mut town = Community::new();
        let (a, b) = couple(&mut town, 19, 22);
        let child = town.spawn_person("Mike", "Neward", 0);
        let mut family = Family::new(&mut town, a, b);

        assert!(family.have_child(&town, child));
        assert_eq!(family.members(), &[a, b, child]);
    }

    #[test]
    fn test_empty_family_cannot_have_children() {
        let mut town = Community::new();
        let (ted, charlotte) = couple(&mut town, 45, 45);
        let other = town.spawn_person("Sam", "Other", 30);
        let child = town.spawn_person("Baby", "Other", 0);
        let _ = Family::new(&mut town, ted, charlotte);
        let mut family = Family::new(&mut town, other, ted);

        assert!(!family.have_child(&town, child));
        assert!(family.is_empty());
    }

    #[test]
    fn test_household_income() {
        let mut town = Community::new();
        let (ted, charlotte) = couple(&mut town, 45, 45);
        let kid = town.spawn_person("Mike", "Neward", 15);
        town.set_job(ted, Some(Job::new("Guest Lecturer", Compensation::Salary(1000))));
        town.set_job(charlotte, Some(Job::new("Janitor", Compensation::Hourly(10.0))));

        let mut family = Family::new(&mut town, ted, charlotte);
        assert!(family.have_child(&town, kid));
        assert_eq!(family.household_income(&town), 1000 + 20000);
    }

    #[test]
    fn test_household_income_saturates() {
        let mut town = Community::new();
        let (ted, charlotte) = couple(&mut town, 45, 45);
        town.set_job(ted, Some(Job::new("Heir", Compensation::Salary(u64::MAX))));
        town.set_job(charlotte, Some(Job::new("Janitor", Compensation::Hourly(10.0))));
        let family = Family::new(&mut town, ted, charlotte);

        assert_eq!(family.household_income(&town), i64::MAX);
        assert_eq!(family.report(&town).total_income, i64::MAX);
    }

    #[test]
    fn test_report_breaks_down_income() {
        let mut town = Community::new();
        let (ted, charlotte) = couple(&mut town, 45, 45);
        town.set_job(ted, Some(Job::new("Guest Lecturer", Compensation::Salary(1000))));
        let family = Family::new(&mut town, ted, charlotte);

        let report = family.report(&town);
        assert_eq!(report.total_income, 1000);
        assert_eq!(report.members.len(), 2);
        assert_eq!(report.members[0].job_title.as_deref(), Some("Guest Lecturer"));
        assert_eq!(report.members[1].income, 0);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["members"][1].get("job_title").is_none());
    }
}
