mod config;
mod error;
mod models;
mod seed;
mod store;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use crate::config::{Command, Config, LogFormat, StoreKind};
use crate::seed::runner::{self, PopulateCounts};
use crate::seed::{Catalog, Seeder};
use crate::store::{DocumentStore, FirestoreStore, MemoryStore};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("jobseed=info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(config.log_format);

    let catalog = match &config.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::default(),
    };

    let rng = match config.seed {
        Some(seed) => {
            tracing::info!("Using random seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let memory = MemoryStore::new();
    let firestore;
    let store: &dyn DocumentStore = match config.store {
        StoreKind::Memory => &memory,
        StoreKind::Firestore => {
            firestore = FirestoreStore::from_config(&config)?;
            tracing::info!(
                "Writing to Firestore at {}",
                config.firestore_base_url()
            );
            &firestore
        }
    };

    match config.resolved_command() {
        Command::Populate {
            workers,
            jobs,
            business_count,
            swipes,
        } => {
            let mut seeder = Seeder::new(store, &catalog, rng);
            let counts = PopulateCounts {
                workers,
                jobs,
                businesses: business_count,
                swipes,
            };
            runner::populate(&mut seeder, counts)
                .await
                .context("Seeding failed")?;
        }
    }

    if config.store == StoreKind::Memory {
        tracing::info!("Memory store applied {} commits", memory.commit_count());
    }

    if config.dump {
        if config.store == StoreKind::Memory {
            println!("{}", serde_json::to_string_pretty(&memory.snapshot()?)?);
        } else {
            tracing::warn!("--dump only applies to the memory store");
        }
    }

    Ok(())
}
