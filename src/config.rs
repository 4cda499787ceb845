use crate::backend::SimulatedBackend;
use crate::cli::CliArgs;
use crate::forms::DATE_FORMAT;
use crate::model::FileIntakePolicy;
use crate::session::Clinician;
use crate::utils::BYTES_PER_MB;
use anyhow::{ensure, Context, Result};
use chrono::NaiveDate;
use std::time::Duration;

/// Application configuration derived from CLI arguments and defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub clinician: Clinician,
    pub intake: FileIntakePolicy,
    pub backend: SimulatedBackend,
    pub today: NaiveDate,
}

impl Config {
    pub fn from_cli(cli: &CliArgs) -> Result<Self> {
        let doctor = cli.doctor.trim();
        ensure!(!doctor.is_empty(), "doctor name must not be empty");
        ensure!(
            cli.max_file_size_mb > 0,
            "max-file-size-mb must be greater than zero"
        );
        let max_file_bytes = cli
            .max_file_size_mb
            .checked_mul(BYTES_PER_MB)
            .context("max-file-size-mb is too large")?;

        let today = match &cli.as_of {
            Some(text) => NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
                .with_context(|| format!("invalid --as-of date `{text}` (expected YYYY-MM-DD)"))?,
            None => chrono::Local::now().date_naive(),
        };

        Ok(Self {
            clinician: Clinician {
                name: doctor.to_string(),
                specialty: cli.specialty.trim().to_string(),
            },
            intake: FileIntakePolicy::new(max_file_bytes),
            backend: SimulatedBackend::new(Duration::from_millis(cli.latency_ms)),
            today,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("horalix-pulse").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn explicit_arguments_flow_into_config() {
        let cli = parse(&[
            "--doctor",
            "house",
            "--max-file-size-mb",
            "2",
            "--as-of",
            "2024-03-15",
        ]);
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.clinician.name, "house");
        assert_eq!(config.intake.max_file_bytes, 2 * BYTES_PER_MB);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn zero_size_ceiling_is_rejected() {
        let cli = parse(&["--max-file-size-mb", "0"]);
        assert!(Config::from_cli(&cli).is_err());
    }

    #[test]
    fn malformed_as_of_date_is_rejected() {
        let cli = parse(&["--as-of", "March 15"]);
        let err = Config::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("March 15"));
    }
}
