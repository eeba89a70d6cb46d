//! Export configuration: RON file plus command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use node2md_core::{AssetRewriter, DEFAULT_COVER_PREFIX, DEFAULT_STORAGE_SCHEME};
use node2md_engine::{ErrorPolicy, ExportOptions, DEFAULT_MANIFEST_FILENAME};
use serde::{Deserialize, Serialize};
use url::Url;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "node2md.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// SQLite copy of the content database.
    pub database: Option<PathBuf>,
    /// Public site URL; `<site_url>/files/` is stripped from body HTML.
    pub site_url: String,
    pub output_dir: PathBuf,
    pub storage_scheme: String,
    pub cover_prefix: String,
    /// Asset manifest filename inside `output_dir`; `None` disables it.
    pub manifest: Option<String>,
    pub skip_failed: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            database: None,
            site_url: String::new(),
            output_dir: PathBuf::from("content"),
            storage_scheme: DEFAULT_STORAGE_SCHEME.to_string(),
            cover_prefix: DEFAULT_COVER_PREFIX.to_string(),
            manifest: Some(DEFAULT_MANIFEST_FILENAME.to_string()),
            skip_failed: false,
        }
    }
}

/// Values given on the command line; `None` keeps the file value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub database: Option<PathBuf>,
    pub site_url: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub no_manifest: bool,
    pub skip_failed: bool,
}

impl ExportConfig {
    /// Load from `explicit` if given (must exist), else from
    /// [`DEFAULT_CONFIG_FILE`] if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    return Ok(Self::default());
                }
                fallback
            }
        };
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        ron::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(database) = overrides.database {
            self.database = Some(database);
        }
        if let Some(site_url) = overrides.site_url {
            self.site_url = site_url;
        }
        if let Some(output_dir) = overrides.output_dir {
            self.output_dir = output_dir;
        }
        if overrides.no_manifest {
            self.manifest = None;
        }
        if overrides.skip_failed {
            self.skip_failed = true;
        }
    }

    /// Checks required fields and normalizes `site_url` (no trailing slash).
    pub fn validate(mut self) -> Result<Self> {
        if self.database.is_none() {
            bail!("no database configured; pass --database or set `database` in the config file");
        }
        if self.storage_scheme.is_empty() {
            bail!("storage_scheme must not be empty");
        }
        if !self.site_url.is_empty() {
            let parsed = Url::parse(&self.site_url)
                .with_context(|| format!("invalid site_url: {}", self.site_url))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                bail!("site_url must be an http(s) URL: {}", self.site_url);
            }
            self.site_url = self.site_url.trim_end_matches('/').to_string();
        }
        Ok(self)
    }

    pub fn rewriter(&self) -> AssetRewriter {
        AssetRewriter::new(self.storage_scheme.clone(), self.cover_prefix.clone())
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            output_dir: self.output_dir.clone(),
            manifest_filename: self.manifest.clone(),
            error_policy: if self.skip_failed {
                ErrorPolicy::Skip
            } else {
                ErrorPolicy::Abort
            },
        }
    }

    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())
            .context("failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_database() -> ExportConfig {
        ExportConfig {
            database: Some(PathBuf::from("cms.sqlite")),
            ..ExportConfig::default()
        }
    }

    #[test]
    fn defaults_match_export_conventions() {
        let config = ExportConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("content"));
        assert_eq!(config.storage_scheme, "public://");
        assert_eq!(config.cover_prefix, "/assets/");
        assert_eq!(config.manifest.as_deref(), Some("assets.json"));
        assert!(!config.skip_failed);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("node2md.ron");
        fs::write(
            &path,
            r#"(database: Some("dump.sqlite"), site_url: "https://blog.example.it/")"#,
        )
        .unwrap();

        let config = ExportConfig::from_file(&path).unwrap();
        assert_eq!(config.database, Some(PathBuf::from("dump.sqlite")));
        assert_eq!(config.site_url, "https://blog.example.it/");
        assert_eq!(config.output_dir, PathBuf::from("content"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("nope.ron");
        let err = ExportConfig::load(Some(missing.as_path())).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn config_round_trips_through_ron() {
        let config = with_database();
        let text = config.to_ron().unwrap();
        let parsed: ExportConfig = ron::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn overrides_take_precedence() {
        let mut config = with_database();
        config.apply(Overrides {
            database: Some(PathBuf::from("other.sqlite")),
            site_url: Some("https://example.com".to_string()),
            output_dir: Some(PathBuf::from("out")),
            no_manifest: true,
            skip_failed: true,
        });

        assert_eq!(config.database, Some(PathBuf::from("other.sqlite")));
        assert_eq!(config.site_url, "https://example.com");
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.manifest, None);
        assert_eq!(config.export_options().error_policy, ErrorPolicy::Skip);
    }

    #[test]
    fn empty_overrides_keep_file_values() {
        let mut config = with_database();
        config.site_url = "https://example.com".to_string();
        let before = config.clone();
        config.apply(Overrides::default());
        assert_eq!(config, before);
    }

    #[test]
    fn validate_requires_database() {
        let err = ExportConfig::default().validate().unwrap_err();
        assert!(err.to_string().contains("no database configured"));
    }

    #[test]
    fn validate_normalizes_site_url() {
        let mut config = with_database();
        config.site_url = "https://example.com/".to_string();
        assert_eq!(config.validate().unwrap().site_url, "https://example.com");
    }

    #[test]
    fn validate_rejects_non_http_site_url() {
        let mut config = with_database();
        config.site_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = with_database();
        config.site_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }
}
