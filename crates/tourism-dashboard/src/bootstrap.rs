use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Name of the per-user application directory under `$HOME`.
pub const APP_DIR_NAME: &str = ".tourism-dashboard";

/// Dataset looked up relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data/travel_province_data.csv";

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the `~/.tourism-dashboard/` hierarchy exists and return its root.
pub fn ensure_directories() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    ensure_directories_in(&home)
}

/// Create `<home>/.tourism-dashboard/` with its `logs/` and `data/`
/// subdirectories (including any missing parents).
pub fn ensure_directories_in(home: &Path) -> anyhow::Result<PathBuf> {
    let app_dir = home.join(APP_DIR_NAME);
    std::fs::create_dir_all(&app_dir)?;
    std::fs::create_dir_all(app_dir.join("logs"))?;
    std::fs::create_dir_all(app_dir.join("data"))?;
    Ok(app_dir)
}

/// Log file used by the interactive dashboard when none is given.
pub fn default_log_file(app_dir: &Path) -> PathBuf {
    app_dir.join("logs").join("tourism-dashboard.log")
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a CLI level name onto an [`EnvFilter`] directive.
///
/// Unknown names are passed through, so `"tourism_data=trace"` style
/// directives also work.
pub fn level_directive(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        // `tracing` has no level above ERROR.
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.to_string(),
    }
}

/// Initialise the global `tracing` subscriber.
///
/// With `log_file` set, output is appended to that file without ANSI colour;
/// otherwise it goes to stderr. `RUST_LOG` is not consulted so the CLI level
/// stays authoritative.
pub fn setup_logging(log_level: &str, log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(level_directive(log_level)).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let stderr_layer = log_file.is_none().then(|| {
        fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}

// ── Data-path discovery ────────────────────────────────────────────────────────

/// Decide which CSV file or directory to load.
///
/// Checks, in order:
/// 1. the explicit `--data-path` (returned even if missing, so the loader can
///    report it),
/// 2. `<cwd>/data/travel_province_data.csv`,
/// 3. `<app_dir>/data/` when it holds at least one entry.
///
/// Returns `None` when nothing is found.
pub fn discover_data_path(explicit: Option<&Path>, cwd: &Path, app_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = cwd.join(DEFAULT_DATA_FILE);
    if local.is_file() {
        return Some(local);
    }

    let user_data = app_dir.join("data");
    let has_entries = std::fs::read_dir(&user_data)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false);
    has_entries.then_some(user_data)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
