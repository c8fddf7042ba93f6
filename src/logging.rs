//! Opt-in log file for hosts that want the reducer trace events.
//!
//! The library itself only emits `tracing` events; nothing here runs unless
//! the host calls [`init_tracing`] or [`install_file_subscriber`].

use std::ffi::OsStr;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Env var naming the log file base path.
pub const LOG_ENV_VAR: &str = "MAP_STATE_REDUCER_LOG";

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info";

/// Errors that can occur when installing the file subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("A global tracing subscriber is already installed")]
    AlreadyInstalled,

    #[error("Failed to create log file '{path}': {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Log file for `base`, suffixed with the start time and pid:
/// `{base}.{unix_seconds}.{pid}`.
pub fn log_file_path(base: &OsStr) -> PathBuf {
    let started = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);

    let mut name = base.to_os_string();
    name.push(format!(".{}.{}", started, std::process::id()));
    PathBuf::from(name)
}

/// Installs a global subscriber writing plain-text events under `base`.
///
/// Returns the path of the file that was created.
pub fn install_file_subscriber(base: impl AsRef<Path>) -> Result<PathBuf, LoggingError> {
    // Checked up front so a second call never truncates a live log file.
    if tracing::dispatcher::has_been_set() {
        return Err(LoggingError::AlreadyInstalled);
    }

    let path = log_file_path(base.as_ref().as_os_str());
    let file = File::create(&path).map_err(|source| LoggingError::CreateFile {
        path: path.clone(),
        source,
    })?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let layer = fmt::layer().with_writer(file).with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)?;

    tracing::debug!(path = %path.display(), "file logging enabled");
    Ok(path)
}

/// Installs the file subscriber when `MAP_STATE_REDUCER_LOG` is set.
///
/// Returns whether this call installed it. Failures other than an existing
/// subscriber are reported on stderr, since there is no log to send them to.
pub fn init_tracing() -> bool {
    let Some(base) = std::env::var_os(LOG_ENV_VAR) else {
        return false;
    };

    match install_file_subscriber(base) {
        Ok(_) => true,
        Err(LoggingError::AlreadyInstalled) => false,
        Err(e) => {
            eprintln!("Warning: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_path_appends_time_and_pid() {
        let path = log_file_path(OsStr::new("/tmp/reducer.log"));
        let name = path.to_string_lossy();
        let suffix = format!(".{}", std::process::id());

        assert!(name.starts_with("/tmp/reducer.log."));
        assert!(name.ends_with(&suffix));

        let started = name
            .trim_start_matches("/tmp/reducer.log.")
            .trim_end_matches(&suffix);
        assert!(started.parse::<u64>().is_ok());
    }

    #[test]
    fn create_failure_names_the_path() {
        let err = LoggingError::CreateFile {
            path: PathBuf::from("/nowhere/log"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/nowhere/log"));
    }
}
