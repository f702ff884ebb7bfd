use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "jobseed",
    about = "Populate the document store with fake workers, jobs and swipes"
)]
pub struct Config {
    /// Document store backend
    #[arg(long, env = "SEED_STORE", value_enum, default_value = "firestore")]
    pub store: StoreKind,

    /// Google Cloud project that owns the Firestore database
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    pub project: Option<String>,

    /// Firestore database id
    #[arg(long, env = "FIRESTORE_DATABASE", default_value = "(default)")]
    pub database: String,

    /// Firestore emulator host:port; when set, requests go over plain HTTP
    #[arg(long, env = "FIRESTORE_EMULATOR_HOST")]
    pub emulator_host: Option<String>,

    /// OAuth access token for the hosted Firestore API
    #[arg(long, env = "FIRESTORE_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Seed for the random source; omit for an OS-seeded run
    #[arg(long, env = "SEED")]
    pub seed: Option<u64>,

    /// JSON file overriding the candidate value tables
    #[arg(long, env = "SEED_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Print every stored document as JSON after the run (memory store only)
    #[arg(long, default_value = "false")]
    pub dump: bool,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Firestore,
    Memory,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(clap::Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Populate workers, jobs and optionally swipes (default when no subcommand given)
    Populate {
        /// Number of fake workers to create
        #[arg(long, default_value = "10")]
        workers: usize,

        /// Number of fake jobs to create
        #[arg(long, default_value = "10")]
        jobs: usize,

        /// Number of unique fake businesses to create job references for
        #[arg(long, alias = "business_count", default_value = "3")]
        business_count: usize,

        /// Sample like/dislike swipes linking the new workers to the new jobs
        #[arg(long, default_value = "false")]
        swipes: bool,
    },
}

impl Config {
    /// Resolve the command, defaulting to Populate with default counts.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Populate {
            workers: 10,
            jobs: 10,
            business_count: 3,
            swipes: false,
        })
    }

    /// Base URL of the Firestore REST API, honouring the emulator.
    pub fn firestore_base_url(&self) -> String {
        match &self.emulator_host {
            Some(host) => format!("http://{host}/v1"),
            None => "https://firestore.googleapis.com/v1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_populate() {
        let config = Config::try_parse_from(["jobseed", "--store", "memory"]).unwrap();
        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(
            config.resolved_command(),
            Command::Populate {
                workers: 10,
                jobs: 10,
                business_count: 3,
                swipes: false,
            }
        );
    }

    #[test]
    fn parses_populate_flags() {
        let config = Config::try_parse_from([
            "jobseed",
            "--seed",
            "42",
            "populate",
            "--workers",
            "25",
            "--jobs",
            "40",
            "--business-count",
            "5",
            "--swipes",
        ])
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(
            config.resolved_command(),
            Command::Populate {
                workers: 25,
                jobs: 40,
                business_count: 5,
                swipes: true,
            }
        );
    }

    #[test]
    fn emulator_host_switches_base_url() {
        let mut config = Config::try_parse_from(["jobseed"]).unwrap();
        config.emulator_host = None;
        assert_eq!(
            config.firestore_base_url(),
            "https://firestore.googleapis.com/v1"
        );
        config.emulator_host = Some("localhost:8081".to_string());
        assert_eq!(config.firestore_base_url(), "http://localhost:8081/v1");
    }

    #[test]
    fn rejects_negative_counts() {
        let result = Config::try_parse_from(["jobseed", "populate", "--workers", "-3"]);
        assert!(result.is_err());
    }

    #[test]
    fn accepts_underscore_business_count() {
        let config =
            Config::try_parse_from(["jobseed", "populate", "--business_count", "4"]).unwrap();
        assert!(matches!(
            config.resolved_command(),
            Command::Populate { business_count: 4, .. }
        ));
    }
}
