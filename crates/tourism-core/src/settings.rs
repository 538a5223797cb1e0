use clap::{CommandFactory, Parser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{BASE_YEAR, DEFAULT_MONTH, DEFAULT_YEAR_OFFSET};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Canadian tourism dashboard by province and month
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tourism-dashboard",
    about = "Canadian tourism dashboard by province and month",
    version
)]
pub struct Settings {
    /// CSV file or directory of CSV files (auto-discovered if not specified)
    #[arg(long, env = "TOURISM_DATA_PATH")]
    pub data_path: Option<PathBuf>,

    /// View mode
    #[arg(long, default_value = "dashboard", value_parser = ["dashboard", "summary", "json"])]
    pub view: String,

    /// Year to display (2000-2099)
    #[arg(long, default_value_t = BASE_YEAR + DEFAULT_YEAR_OFFSET, value_parser = clap::value_parser!(u32).range(2000..=2099))]
    pub year: u32,

    /// Month to display (1-12)
    #[arg(long, default_value_t = DEFAULT_MONTH, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "classic", "auto"])]
    pub theme: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Clear saved configuration
    #[arg(long)]
    pub clear: bool,
}

// ── LastUsedParams ─────────────────────────────────────────────────────────────

/// Persisted last-used parameters saved to `~/.tourism-dashboard/last_used.json`.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct LastUsedParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
}

impl LastUsedParams {
    /// Default path to the persisted config file.
    pub fn config_path() -> PathBuf {
        Self::config_path_in(&dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Config path rooted at `base_dir`.
    pub fn config_path_in(base_dir: &std::path::Path) -> PathBuf {
        base_dir.join(".tourism-dashboard").join("last_used.json")
    }

    /// Load persisted params from an explicit path.
    /// Returns `Default` when the file is absent or cannot be parsed.
    pub fn load_from(path: &std::path::Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable last-used params");
            Self::default()
        })
    }

    /// Atomically write params to an explicit path, creating parent
    /// directories if needed.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, path)?;

        Ok(())
    }

    /// Delete the config file at an explicit path if it exists.
    pub fn clear_at(path: &std::path::Path) -> Result<(), std::io::Error> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments and merge with last-used params where no explicit
    /// CLI value was provided, then persist the result.
    pub fn load_with_last_used() -> Self {
        Self::load_with_last_used_impl(
            std::env::args_os().collect(),
            &LastUsedParams::config_path(),
        )
    }

    /// Full implementation with explicit args and config path.
    pub fn load_with_last_used_impl(
        args: Vec<std::ffi::OsString>,
        config_path: &std::path::Path,
    ) -> Self {
        let matches = Settings::command().get_matches_from(args.clone());
        let mut settings = Settings::parse_from(args);

        if settings.clear {
            if let Err(e) = LastUsedParams::clear_at(config_path) {
                tracing::warn!(error = %e, "failed to clear last-used params");
            }
            return settings.apply_debug_flag();
        }

        let last = LastUsedParams::load_from(config_path);

        // CLI always wins over persisted values.
        if !is_arg_explicitly_set(&matches, "view") {
            if let Some(v) = last.view {
                settings.view = v;
            }
        }
        if !is_arg_explicitly_set(&matches, "theme") {
            if let Some(v) = last.theme {
                settings.theme = v;
            }
        }
        if !is_arg_explicitly_set(&matches, "year") {
            if let Some(v) = last.year.filter(|y| (2000..=2099).contains(y)) {
                settings.year = v;
            }
        }
        if !is_arg_explicitly_set(&matches, "month") {
            if let Some(v) = last.month.filter(|m| (1..=12).contains(m)) {
                settings.month = v;
            }
        }
        if settings.data_path.is_none() {
            settings.data_path = last.data_path;
        }

        settings = settings.apply_debug_flag();

        let params = LastUsedParams::from(&settings);
        if let Err(e) = params.save_to(config_path) {
            tracing::warn!(error = %e, "failed to persist last-used params");
        }

        settings
    }

    /// Selected year as a two-digit offset from 2000.
    pub fn year_offset(&self) -> u32 {
        self.year.saturating_sub(BASE_YEAR)
    }

    fn apply_debug_flag(mut self) -> Self {
        if self.debug {
            self.log_level = "DEBUG".to_string();
        }
        self
    }
}

// ── Conversion ─────────────────────────────────────────────────────────────────

impl From<&Settings> for LastUsedParams {
    fn from(s: &Settings) -> Self {
        LastUsedParams {
            theme: Some(s.theme.clone()),
            view: Some(s.view.clone()),
            year: Some(s.year),
            month: Some(s.month),
            data_path: s.data_path.clone(),
        }
    }
}

/// Returns `true` when `name` was supplied explicitly on the command line.
fn is_arg_explicitly_set(matches: &clap::ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(clap::parser::ValueSource::CommandLine)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tmp_config_path(tmp: &TempDir) -> PathBuf {
        LastUsedParams::config_path_in(tmp.path())
    }

    #[test]
    fn test_last_used_params_save_load() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp_config_path(&tmp);
        let params = LastUsedParams {
            theme: Some("dark".to_string()),
            view: Some("summary".to_string()),
            year: Some(2015),
            month: Some(3),
            data_path: Some(PathBuf::from("/srv/tourism.csv")),
        };
        params.save_to(&path).expect("save");

        let loaded = LastUsedParams::load_from(&path);
        assert_eq!(loaded.theme, Some("dark".to_string()));
        assert_eq!(loaded.view, Some("summary".to_string()));
        assert_eq!(loaded.year, Some(2015));
        assert_eq!(loaded.month, Some(3));
        assert_eq!(loaded.data_path, Some(PathBuf::from("/srv/tourism.csv")));
    }

    #[test]
    fn test_last_used_params_default_when_missing_or_corrupt() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp_config_path(&tmp);
        assert!(LastUsedParams::load_from(&path).year.is_none());

        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();
        assert!(LastUsedParams::load_from(&path).theme.is_none());
    }

    #[test]
    fn test_last_used_params_clear() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp_config_path(&tmp);
        LastUsedParams::default().save_to(&path).expect("save");
        assert!(path.exists());
        LastUsedParams::clear_at(&path).expect("clear");
        assert!(!path.exists());
    }

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::parse_from(["tourism-dashboard"]);
        assert_eq!(settings.view, "dashboard");
        assert_eq!(settings.year, 2010);
        assert_eq!(settings.month, 7);
        assert_eq!(settings.theme, "auto");
        assert_eq!(settings.log_level, "INFO");
        assert!(settings.log_file.is_none());
        assert!(!settings.debug);
        assert!(!settings.clear);
        assert_eq!(settings.year_offset(), 10);
    }

    #[test]
    fn test_settings_rejects_out_of_range_month() {
        let result = Settings::try_parse_from(["tourism-dashboard", "--month", "13"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_rejects_out_of_range_year() {
        let result = Settings::try_parse_from(["tourism-dashboard", "--year", "1999"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_with_last_used_merges_persisted_period() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);
        LastUsedParams {
            year: Some(2014),
            month: Some(2),
            theme: Some("light".to_string()),
            ..Default::default()
        }
        .save_to(&config_path)
        .expect("save");

        let settings =
            Settings::load_with_last_used_impl(vec!["tourism-dashboard".into()], &config_path);
        assert_eq!(settings.year, 2014);
        assert_eq!(settings.month, 2);
        assert_eq!(settings.theme, "light");
    }

    #[test]
    fn test_load_with_last_used_cli_overrides_persisted() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);
        LastUsedParams {
            month: Some(2),
            ..Default::default()
        }
        .save_to(&config_path)
        .expect("save");

        let settings = Settings::load_with_last_used_impl(
            vec!["tourism-dashboard".into(), "--month".into(), "11".into()],
            &config_path,
        );
        assert_eq!(settings.month, 11);
    }

    #[test]
    fn test_load_with_last_used_ignores_out_of_range_persisted_values() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);
        LastUsedParams {
            month: Some(42),
            year: Some(1850),
            ..Default::default()
        }
        .save_to(&config_path)
        .expect("save");

        let settings =
            Settings::load_with_last_used_impl(vec!["tourism-dashboard".into()], &config_path);
        assert_eq!(settings.month, 7);
        assert_eq!(settings.year, 2010);
    }

    #[test]
    fn test_load_with_last_used_clear_removes_file() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);
        LastUsedParams::default()
            .save_to(&config_path)
            .expect("save");

        Settings::load_with_last_used_impl(
            vec!["tourism-dashboard".into(), "--clear".into()],
            &config_path,
        );
        assert!(!config_path.exists());
    }

    #[test]
    fn test_load_with_last_used_debug_overrides_log_level() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);
        let settings = Settings::load_with_last_used_impl(
            vec!["tourism-dashboard".into(), "--debug".into()],
            &config_path,
        );
        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_load_with_last_used_persists_after_run() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);
        Settings::load_with_last_used_impl(
            vec!["tourism-dashboard".into(), "--year".into(), "2018".into()],
            &config_path,
        );
        let loaded = LastUsedParams::load_from(&config_path);
        assert_eq!(loaded.year, Some(2018));
    }
}
