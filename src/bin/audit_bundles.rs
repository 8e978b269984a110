//! Audit binary - checks a translation bundle for missing and malformed labels
//!
//! Usage:
//!   cargo run --bin audit                          # Bundle path from I18NT_TRANSLATIONS
//!   cargo run --bin audit -- path/to/bundle.json   # Explicit bundle path
//!
//! Environment variables:
//! - I18NT_TRANSLATIONS (required unless a path argument is given)
//! - I18NT_REFERENCE_LANGUAGE (optional, defaults to comparing against all labels)
//! - I18NT_STRICT (optional, "true" makes warnings fail the run)

use anyhow::{bail, Context, Result};
use i18nt::{config::AuditConfig, load_table_from_path, BundleAuditor};
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("i18nt=info".parse()?),
        )
        .init();

    let path_arg = std::env::args().nth(1);
    let config = AuditConfig::from_lookup(|key: &str| match (key, &path_arg) {
        ("I18NT_TRANSLATIONS", Some(path)) => Some(path.clone()),
        _ => std::env::var(key).ok(),
    })?;

    info!("Auditing bundle {}", config.translations_path);
    let table = load_table_from_path(&config.translations_path)
        .with_context(|| format!("Failed to load bundle {}", config.translations_path))?;
    info!("Loaded {} languages", table.len());

    let report = BundleAuditor::audit(&table, config.reference_language.as_deref());

    for message in &report.errors {
        error!("{}", message);
    }
    for message in &report.warnings {
        warn!("{}", message);
    }

    if report.has_errors() {
        bail!("Bundle has {} errors", report.errors.len());
    }
    if config.strict && report.has_warnings() {
        bail!("Bundle has {} warnings (strict mode)", report.warnings.len());
    }

    info!(
        "Audit finished: {} errors, {} warnings",
        report.errors.len(),
        report.warnings.len()
    );
    Ok(())
}
