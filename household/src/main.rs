//! Household demo
//!
//! Builds a sample family, gives out a raise and logs the results.

use household::{Community, Compensation, Family, Job, Money};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut town = Community::new();
    let ted = town.spawn_person("Ted", "Neward", 45);
    let charlotte = town.spawn_person("Charlotte", "Neward", 45);
    let mike = town.spawn_person("Mike", "Neward", 15);

    town.set_job(ted, Some(Job::new("Guest Lecturer", Compensation::Salary(1000))));
    town.set_job(charlotte, Some(Job::new("Janitor", Compensation::Hourly(10.0))));
    town.set_job(mike, Some(Job::new("Paper Route", Compensation::Hourly(5.0))));

    let mut family = Family::new(&mut town, ted, charlotte);
    let admitted = family.have_child(&town, mike);
    info!("Family founded with {} members (child admitted: {})", family.len(), admitted);

    if let Some(description) = town.describe(ted) {
        info!("{}", description);
    }
    info!("Household income: {}", family.household_income(&town));

    if let Some(job) = town.job_mut(ted) {
        job.raise_by_percent(0.1);
    }
    info!("After a 10% raise: {}", family.household_income(&town));

    let income = Money::new(family.household_income(&town), "USD");
    info!("In other currencies: {} / {} / {}", income.convert("GBP"), income.convert("EUR"), income.convert("CAN"));

    let report = family.report(&town);
    info!("Report: {}", serde_json::to_string(&report)?);

    Ok(())
}
