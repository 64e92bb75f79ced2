use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "keysweep",
    about = "Batch-delete documents from a key-value store, driven by a key list",
    version,
)]
pub struct Cli {
    /// Plain-text file with one document key per line.
    pub key_file: PathBuf,

    /// Store host: `mem:` for an in-memory store, or a directory path.
    pub host: String,

    /// Bucket to open on the host.
    pub bucket: String,

    /// Optional bucket password.
    pub password: Option<String>,

    /// JSON file with deletion rules (field, operator, literal).
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Delete every document on the list, bypassing rules.
    #[arg(long, conflicts_with = "dry_run")]
    pub delete_all: bool,

    /// Evaluate nothing for deletion; report counts only.
    #[arg(long)]
    pub dry_run: bool,

    /// Connect/read/query timeout for the store connection, in seconds.
    #[arg(long, default_value = "10", value_name = "SECS")]
    pub timeout_secs: u64,

    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal() {
        let cli = Cli::try_parse_from(["keysweep", "keys.txt", "/data/store", "events"]).unwrap();
        assert_eq!(cli.key_file, PathBuf::from("keys.txt"));
        assert_eq!(cli.host, "/data/store");
        assert_eq!(cli.bucket, "events");
        assert_eq!(cli.password, None);
        assert_eq!(cli.timeout_secs, 10);
    }

    #[test]
    fn parse_with_password() {
        let cli =
            Cli::try_parse_from(["keysweep", "keys.txt", "/data", "events", "s3cret"]).unwrap();
        assert_eq!(cli.password, Some("s3cret".into()));
    }

    #[test]
    fn missing_positionals_is_an_error() {
        assert!(Cli::try_parse_from(["keysweep"]).is_err());
        assert!(Cli::try_parse_from(["keysweep", "keys.txt"]).is_err());
        assert!(Cli::try_parse_from(["keysweep", "keys.txt", "/data"]).is_err());
    }

    #[test]
    fn parse_rules_file() {
        let cli = Cli::try_parse_from([
            "keysweep", "keys.txt", "/data", "events", "--rules", "rules.json",
        ])
        .unwrap();
        assert_eq!(cli.rules, Some(PathBuf::from("rules.json")));
    }

    #[test]
    fn parse_delete_all() {
        let cli =
            Cli::try_parse_from(["keysweep", "keys.txt", "/data", "events", "--delete-all"])
                .unwrap();
        assert!(cli.delete_all);
        assert!(!cli.dry_run);
    }

    #[test]
    fn delete_all_conflicts_with_dry_run() {
        let result = Cli::try_parse_from([
            "keysweep", "keys.txt", "/data", "events", "--delete-all", "--dry-run",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_timeout_and_verbose() {
        let cli = Cli::try_parse_from([
            "keysweep",
            "keys.txt",
            "/data",
            "events",
            "--timeout-secs",
            "30",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.timeout_secs, 30);
        assert!(cli.verbose);
    }
}
