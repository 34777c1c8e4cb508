//! Tracing subscriber setup
//!
//! The terminal belongs to the UI, so everything is logged to a file.

use crate::model::Submission;
use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber writing to `log_file_path`.
///
/// Returns false if the file could not be created; the app then runs
/// without logging.
pub fn init_global(log_file_path: &Path) -> bool {
    if let Some(dir) = log_file_path.parent() {
        if fs::create_dir_all(dir).is_err() {
            return false;
        }
    }
    let Ok(log_file) = File::create(log_file_path) else {
        return false;
    };

    build_subscriber(log_file).try_init().is_ok()
}

/// File subscriber honouring `RUST_LOG`, `info` otherwise
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_ansi(false).with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}

/// Record a contact form submission. This is the only place it goes.
pub fn record_submission(submission: &Submission) {
    tracing::info!(
        name = %submission.name,
        email = %submission.email,
        message_len = submission.message.chars().count(),
        submitted_at = %submission.submitted_at.to_rfc3339(),
        "contact form submitted"
    );
}
