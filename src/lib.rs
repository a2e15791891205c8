pub mod cli;
pub mod config;
pub mod error;
pub mod faker;
pub mod generator;
pub mod models;

pub use config::GeneratorConfig;
pub use error::GenerateError;
pub use faker::Faker;
pub use generator::{pick_with_fallback, write_dataset, Generator};
pub use models::Dataset;
