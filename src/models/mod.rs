mod dataset;
mod opportunity;
mod organization;
mod person;

pub use dataset::{Dataset, DatasetSummary};
pub use opportunity::{ListEntry, Opportunity};
pub use organization::Organization;
pub use person::{Person, PersonType};
