use anyhow::{Context, Result};
use tracing::info;

use super::Cli;
use crate::config::GeneratorConfig;
use crate::faker::Faker;
use crate::generator::{write_dataset, Generator};
use crate::models::DatasetSummary;

/// Execute the generate command
pub fn run_generate(cli: &Cli) -> Result<DatasetSummary> {
    let config = match cli.config {
        Some(ref path) => GeneratorConfig::load(path)
            .with_context(|| format!("Could not load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    let faker = match cli.seed {
        Some(seed) => Faker::new(seed),
        None => Faker::from_entropy(),
    };
    info!(seed = faker.seed(), "generating dataset");

    let mut generator = Generator::new(config, faker)?;
    let dataset = generator.generate()?;
    write_dataset(&dataset, &cli.output)?;

    let summary = dataset.summary();
    if summary.fallback_links > 0 {
        info!(
            count = summary.fallback_links,
            "opportunities linked to a person outside their organization"
        );
    }

    println!("✅ {} generated successfully! ({})", cli.output.display(), summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_run_generate_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("affinity_db.json");
        let cli = Cli::parse_from(["affinity-mock", "--output", output.to_str().unwrap(), "--seed", "1"]);

        let summary = run_generate(&cli).unwrap();
        assert_eq!(summary.organizations, 160);
        assert_eq!(summary.persons, 200);
        assert_eq!(summary.opportunities, 150);
        assert!(output.exists());
    }

    #[test]
    fn test_run_generate_with_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("gen.json");
        let mut file = std::fs::File::create(&config_path).unwrap();
        write!(file, r#"{{"organization_count": 4, "person_count": 3, "opportunity_count": 2}}"#).unwrap();

        let output = dir.path().join("small.json");
        let cli = Cli::parse_from([
            "affinity-mock",
            "-o",
            output.to_str().unwrap(),
            "-c",
            config_path.to_str().unwrap(),
        ]);

        let summary = run_generate(&cli).unwrap();
        assert_eq!((summary.organizations, summary.persons, summary.opportunities), (4, 3, 2));
    }

    #[test]
    fn test_run_generate_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from([
            "affinity-mock",
            "-o",
            dir.path().join("db.json").to_str().unwrap(),
            "-c",
            dir.path().join("missing.json").to_str().unwrap(),
        ]);

        let err = run_generate(&cli).unwrap_err();
        assert!(err.to_string().contains("Could not load config"));
        assert!(!dir.path().join("db.json").exists());
    }
}
