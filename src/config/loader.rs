//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{is_builtin, ConfigWarning, ConfigWarningKind};
use crate::error::{GreenHabitsError, GreenHabitsResult};

use super::types::{ColorMode, Config};

pub(crate) const ENV_DATA_FILE: &str = "GREEN_HABITS_DATA_FILE";
pub(crate) const ENV_COLOR: &str = "GREEN_HABITS_COLOR";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> GreenHabitsResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| GreenHabitsError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    for (activity, factor) in &config.factors {
        if !factor.is_finite() || *factor < 0.0 {
            return Err(GreenHabitsError::InvalidFactor {
                activity: activity.clone(),
                factor: *factor,
                file: path.to_path_buf(),
            });
        }
    }

    let mut warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                kind: ConfigWarningKind::UnknownKey {
                    suggestion: suggest_key(&key),
                },
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    warnings.extend(
        config
            .factors
            .keys()
            .filter(|activity| is_builtin(activity))
            .map(|activity| ConfigWarning {
                key: activity.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, activity),
                kind: ConfigWarningKind::BuiltinFactor,
            }),
    );

    Ok((config, warnings))
}

/// Load from an explicit config, the user config, or defaults.
///
/// An explicit path must exist and parse. A broken user config is logged
/// and skipped.
pub fn load_or_default(
    explicit: Option<&Path>,
) -> GreenHabitsResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            match load_with_warnings(&user_config) {
                Ok((config, warnings)) => return Ok((with_env_overrides(config), warnings)),
                Err(e) => {
                    tracing::warn!(path = %user_config.display(), error = %e, "ignoring user config");
                }
            }
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// `<config_dir>/green-habits/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("green-habits").join("config.toml"))
}

/// Apply environment variable overrides (GREEN_HABITS_* prefix)
fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(path) = get_env(ENV_DATA_FILE).filter(|p| !p.trim().is_empty()) {
        config.storage.data_file = PathBuf::from(path);
    }

    if let Some(color) = get_env(ENV_COLOR) {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["storage", "data_file", "output", "color", "unicode", "factors"];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, edit_distance(unknown, candidate)))
        .filter(|(_, dist)| *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(candidate, _)| candidate.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diag
            } else {
                1 + diag.min(above).min(row[j])
            };
            diag = above;
        }
    }

    row[b.len()]
}
