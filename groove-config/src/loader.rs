use std::fmt::{self, Display};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use groove_core::Tuning;

use crate::error::ConfigLoadError;
use crate::overrides::RuntimeOverrides;
use crate::validation::{ConfigWarnings, apply_guard_rails};

/// Path to a TOML or JSON override file.
pub const CONFIG_PATH_ENV: &str = "GROOVE_CONFIG_PATH";
/// Inline JSON overrides.
pub const CONFIG_JSON_ENV: &str = "GROOVE_CONFIG_JSON";

const CANDIDATES: &[&str] = &[
    "groove.toml",
    "groove.json",
    "config/groove.toml",
    "config/groove.json",
];

/// Source that produced the overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    /// Passed explicitly, e.g. `groovectl --config`.
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    /// One of the default candidate files.
    File(PathBuf),
}

impl Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "built-in defaults"),
            ConfigSource::Explicit(path) => write!(f, "{}", path.display()),
            ConfigSource::EnvPath(path) => {
                write!(f, "{} (${CONFIG_PATH_ENV})", path.display())
            }
            ConfigSource::EnvInline => write!(f, "${CONFIG_JSON_ENV}"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl RuntimeOverrides {
    /// Load overrides using environment variables.
    /// Evaluation order:
    /// 1) `$GROOVE_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$GROOVE_CONFIG_JSON` (inline JSON),
    /// 3) the first existing default candidate file,
    /// 4) defaults.
    pub fn load_from_env() -> Result<(Self, ConfigSource), ConfigLoadError> {
        Self::load_with(|key| env::var(key).ok(), Path::new(""))
    }

    /// [`RuntimeOverrides::load_from_env`] with the environment lookup and
    /// the directory searched for candidate files supplied by the caller.
    pub fn load_with<F>(
        lookup: F,
        search_root: &Path,
    ) -> Result<(Self, ConfigSource), ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let overrides = Self::load_from_file(&path)?;
            return Ok((overrides, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw, CONFIG_JSON_ENV)?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(search_root) {
            let overrides = Self::load_from_file(&path)?;
            return Ok((overrides, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let origin = path.display().to_string();

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents, &origin),
            Some("toml") | Some("tml") => toml::from_str(&contents)
                .map_err(|source| ConfigLoadError::Toml { origin, source }),
            _ => Self::parse_from_str(&contents, &origin),
        }
    }

    /// Try TOML first, then JSON.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> Result<Self, ConfigLoadError> {
        toml::from_str(contents).or_else(|toml| {
            serde_json::from_str(contents).map_err(|json| {
                ConfigLoadError::Unrecognized {
                    origin: origin.to_owned(),
                    toml,
                    json,
                }
            })
        })
    }

    pub fn parse_json(raw: &str, origin: &str) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(raw).map_err(|source| ConfigLoadError::Json {
            origin: origin.to_owned(),
            source,
        })
    }

    fn find_default_file(root: &Path) -> Option<PathBuf> {
        CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.is_file())
    }
}

/// Resolved tuning plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub tuning: Tuning,
    pub source: ConfigSource,
    pub warnings: ConfigWarnings,
}

/// Resolve overrides (an explicit path wins over the environment), build the
/// tuning and run the guard rails.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigLoadError> {
    let (overrides, source) = match explicit {
        Some(path) => (
            RuntimeOverrides::load_from_file(path)?,
            ConfigSource::Explicit(path.to_path_buf()),
        ),
        None => RuntimeOverrides::load_from_env()?,
    };
    finish(overrides, source)
}

/// Build and validate a [`LoadedConfig`] from already-parsed overrides.
pub fn finish(
    overrides: RuntimeOverrides,
    source: ConfigSource,
) -> Result<LoadedConfig, ConfigLoadError> {
    let tuning = overrides.to_tuning();
    let warnings = apply_guard_rails(&tuning)?;

    if overrides.is_empty() {
        debug!(%source, "using default tuning");
    } else {
        info!(%source, "loaded tuning overrides");
    }

    Ok(LoadedConfig {
        tuning,
        source,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_then_json_fallback() {
        let from_toml =
            RuntimeOverrides::parse_from_str("[input]\nswipe_threshold = 70.0\n", "t")
                .unwrap();
        assert_eq!(from_toml.input.swipe_threshold, Some(70.0));

        let from_json = RuntimeOverrides::parse_from_str(
            r#"{"stack": {"render_radius": 3}}"#,
            "j",
        )
        .unwrap();
        assert_eq!(from_json.stack.render_radius, Some(3));
    }

    #[test]
    fn garbage_reports_both_parsers() {
        let err = RuntimeOverrides::parse_from_str("{{ nope", "inline").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("inline"));
        assert!(message.contains("toml error"));
        assert!(message.contains("json error"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(
            RuntimeOverrides::parse_from_str("[input]\nswipe_treshold = 70.0\n", "t")
                .is_err()
        );
    }

    #[test]
    fn source_display_names_env_vars() {
        assert_eq!(ConfigSource::EnvInline.to_string(), "$GROOVE_CONFIG_JSON");
        assert_eq!(ConfigSource::Default.to_string(), "built-in defaults");
    }
}
