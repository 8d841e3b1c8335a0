use std::sync::Arc;

use crate::commands::CommandResult;
use shopfront_core::config::{AppConfig, LoadOptions};
use shopfront_db::{connect_with_settings, migrations, SeedLoader, SqlProductStore};

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "seed",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                "seed",
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                3,
            );
        }
    };

    let result = runtime.block_on(async {
        let pool = connect_with_settings(
            &config.database.url,
            config.database.max_connections,
            config.database.timeout_secs,
        )
        .await
        .map_err(|error| ("db_connectivity", error.to_string(), 4u8))?;

        migrations::run_pending(&pool)
            .await
            .map_err(|error| ("migration", error.to_string(), 5u8))?;

        let loader = SeedLoader::new(Arc::new(SqlProductStore::new(pool.clone())));

        let outcome = loader
            .run()
            .await
            .map_err(|error| ("seed_execution", error.to_string(), 5u8))?;

        let run_result: Result<SeedOutput, (&'static str, String, u8)> = if outcome.applied {
            let verification = loader
                .verify()
                .await
                .map_err(|error| ("seed_verification", error.to_string(), 6u8))?;

            if verification.all_present {
                Ok(SeedOutput {
                    applied: true,
                    product_names: outcome
                        .inserted
                        .iter()
                        .map(|product| product.name.clone())
                        .collect(),
                })
            } else {
                let failed_checks = verification
                    .checks
                    .iter()
                    .filter_map(|(check, passed)| (!passed).then_some(*check))
                    .collect::<Vec<_>>();
                let message = if failed_checks.is_empty() {
                    "Some seed data failed to load".to_string()
                } else {
                    format!("Seed verification failed for checks: {}", failed_checks.join(", "))
                };
                Err(("seed_verification", message, 6u8))
            }
        } else {
            Ok(SeedOutput { applied: false, product_names: Vec::new() })
        };

        pool.close().await;
        run_result
    });

    match result {
        Ok(output) if output.applied => {
            let message = format!(
                "catalog seeded with {} products:\n  - {}",
                output.product_names.len(),
                output.product_names.join("\n  - ")
            );
            CommandResult::success("seed", message)
        }
        Ok(_) => CommandResult::success(
            "seed",
            "catalog already contains products; seed skipped (already-run guard)",
        ),
        Err((error_class, message, exit_code)) => {
            CommandResult::failure("seed", error_class, message, exit_code)
        }
    }
}

struct SeedOutput {
    applied: bool,
    product_names: Vec<String>,
}
