use std::time::{Duration, Instant};

use anyhow::Context;
use colored::Colorize;
use keysweep_batch::{BatchProcessor, KeyList, KeySource};
use keysweep_predicate::{DeletionPredicate, PredicateConfig};
use keysweep_store::{connect, StoreTimeouts};
use tracing::error;

use crate::cli::Cli;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    println!("Reading keys from:  {}", cli.key_file.display().to_string().bold());
    println!("Connecting to host: {}", cli.host.bold());
    println!("Accessing bucket:   {}", cli.bucket.bold());
    if cli.password.is_some() {
        println!("Using a bucket password");
    } else {
        println!("Not using a bucket password");
    }

    let config = predicate_config(&cli)?;
    if config.is_inert() {
        println!(
            "{}",
            "No deletion rules configured; this run will not delete anything.".yellow()
        );
    }

    // Timeouts are a property of the connection, fixed before the loop.
    let timeouts = StoreTimeouts::uniform(Duration::from_secs(cli.timeout_secs));
    let started = Instant::now();
    let store = connect(&cli.host, &cli.bucket, cli.password.as_deref(), timeouts)
        .with_context(|| format!("failed to open bucket {} on {}", cli.bucket, cli.host))?;
    println!(
        "Store connection established in {} ms.",
        started.elapsed().as_millis()
    );

    let started = Instant::now();
    let list = match KeySource::load(&cli.key_file) {
        Ok(list) => list,
        Err(e) => {
            // No keys could be read at all; the run proceeds over nothing
            // and reports zero counts rather than aborting.
            error!(error = %e, "could not read key file");
            println!("{}", format!("Could not read key file: {e}").red());
            KeyList::empty()
        }
    };
    if let Some(e) = &list.error {
        println!(
            "{}",
            format!(
                "Key file read failed part-way ({e}); proceeding with the {} keys read so far.",
                list.len()
            )
            .yellow()
        );
    }
    println!(
        "Read {} keys in {} ms; processing them now.",
        list.len().to_string().bold(),
        started.elapsed().as_millis()
    );

    let predicate = DeletionPredicate::new(config);
    let summary = BatchProcessor::run(list.keys, store.as_ref(), &predicate);

    println!("Done processing key list.");
    println!(
        "Total number of keys:                  {}",
        summary.total_keys().to_string().bold()
    );
    println!(
        "Number that matched deletion criteria: {}",
        summary.candidates().to_string().bold()
    );
    println!(
        "Total number successfully deleted:     {}",
        summary.deleted().to_string().green().bold()
    );

    println!("Closing store connection.");
    drop(store);
    Ok(())
}

/// Resolve the predicate configuration from the command line.
///
/// `--delete-all` and `--dry-run` take precedence over `--rules`; with none
/// of the three the default (rules mode, empty rule list) applies, which
/// selects nothing.
fn predicate_config(cli: &Cli) -> anyhow::Result<PredicateConfig> {
    if cli.delete_all {
        return Ok(PredicateConfig::all());
    }
    if cli.dry_run {
        return Ok(PredicateConfig::none());
    }
    match &cli.rules {
        Some(path) => PredicateConfig::from_json_file(path)
            .with_context(|| format!("failed to load rules from {}", path.display())),
        None => Ok(PredicateConfig::default()),
    }
}
