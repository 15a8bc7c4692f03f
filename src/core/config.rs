//! Configuration for a restforge generation run.
//!
//! Configuration is read from a TOML or YAML file (see [`Config::load`]) and
//! then overridden field by field from the command line. Every field has a
//! default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::error::{Error, Result};
use crate::core::utils::is_go_identifier;
use crate::design::{DesignOptions, DuplicatePolicy, LocationStrategy};

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "restforge.toml";

/// Environment variable consulted for the output directory
pub const OUTPUT_DIR_ENV: &str = "RESTFORGE_OUTPUT_DIR";

/// Output directory used when nothing else is configured
pub const DEFAULT_OUTPUT_DIR: &str = "generated";

/// File name of the generated module file, written only when `go_module` is set
pub const GO_MODULE_FILE: &str = "go.mod";

/// Characters a route prefix may not contain. Gin reads `:` and `*` as
/// wildcards and `{`/`}` would become path parameters nothing binds.
const FORBIDDEN_PREFIX_CHARS: &[char] = &[':', '*', '{', '}', '?', '#'];

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory the artifacts are written to
    pub output_dir: Option<PathBuf>,
    /// Go package clause of the generated handler and test files
    pub package_name: String,
    /// `info.title` of the OpenAPI document
    pub api_title: String,
    /// `info.version` of the OpenAPI document
    pub api_version: String,
    /// Prefix prepended to every derived route, e.g. `/api/v1`
    pub api_prefix: String,
    /// Artifact file names
    pub files: OutputFiles,
    /// Module path for the generated `go.mod`; no `go.mod` is written when unset
    pub go_module: Option<String>,
    /// Directory whose templates override the embedded ones
    pub template_dir: Option<PathBuf>,
    /// What to do when two functions design to the same method and path
    pub duplicates: DuplicatePolicy,
    /// How endpoint parameter locations are assigned
    pub parameter_locations: LocationStrategy,
    /// Function names that never become endpoints
    pub exclude_functions: Vec<String>,
}

/// File names of the generated artifacts, relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputFiles {
    pub handlers: String,
    pub openapi: String,
    pub tests: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            package_name: "main".to_string(),
            api_title: "Generated API".to_string(),
            api_version: "1.0.0".to_string(),
            api_prefix: String::new(),
            files: OutputFiles::default(),
            go_module: None,
            template_dir: None,
            duplicates: DuplicatePolicy::default(),
            parameter_locations: LocationStrategy::default(),
            exclude_functions: Vec::new(),
        }
    }
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            handlers: "generated_handlers.go".to_string(),
            openapi: "openapi.json".to_string(),
            tests: "generated_handlers_test.go".to_string(),
        }
    }
}

impl Config {
    /// Load a configuration file. `.yaml` and `.yml` files are parsed as YAML,
    /// everything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let config = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Load `restforge.toml` from `dir` if it exists, otherwise return defaults.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Check the configuration for values that would produce broken output.
    pub fn validate(&self) -> Result<()> {
        if !is_go_identifier(&self.package_name) {
            return Err(Error::config(format!(
                "package name '{}' is not a valid Go identifier",
                self.package_name
            )));
        }

        if self.api_title.trim().is_empty() {
            return Err(Error::config("API title cannot be empty"));
        }

        if self.api_version.trim().is_empty() {
            return Err(Error::config("API version cannot be empty"));
        }

        if !self.api_prefix.is_empty()
            && (!self.api_prefix.starts_with('/') || self.api_prefix.ends_with('/'))
        {
            return Err(Error::config(format!(
                "API prefix '{}' must start with '/' and must not end with '/'",
                self.api_prefix
            )));
        }

        if let Some(bad) = self
            .api_prefix
            .chars()
            .find(|c| c.is_whitespace() || FORBIDDEN_PREFIX_CHARS.contains(c))
        {
            return Err(Error::config(format!(
                "API prefix '{}' must not contain {bad:?}",
                self.api_prefix
            )));
        }

        if let Some(module) = &self.go_module {
            if module.trim().is_empty() || module.chars().any(char::is_whitespace) {
                return Err(Error::config(format!(
                    "Go module path '{module}' must be non-empty and contain no whitespace"
                )));
            }
        }

        let names = [
            self.files.handlers.as_str(),
            self.files.openapi.as_str(),
            self.files.tests.as_str(),
        ];
        for name in names {
            if name.is_empty() || name.contains('/') || name.contains('\\') {
                return Err(Error::config(format!(
                    "output file name '{name}' must be a plain, non-empty file name"
                )));
            }
        }

        let mut seen = HashSet::new();
        if self.go_module.is_some() {
            seen.insert(GO_MODULE_FILE);
        }
        for name in names {
            if !seen.insert(name) {
                return Err(Error::config(format!(
                    "output file name '{name}' is used by more than one artifact"
                )));
            }
        }

        Ok(())
    }

    /// Options handed to the endpoint designer
    pub fn design_options(&self) -> DesignOptions {
        DesignOptions {
            locations: self.parameter_locations,
            duplicates: self.duplicates,
            path_prefix: self.api_prefix.clone(),
        }
    }

    /// Resolve the output directory.
    ///
    /// Precedence: explicit `cli_dir`, then `output_dir` from the file, then
    /// `RESTFORGE_OUTPUT_DIR`, then `./generated`. The result is absolute.
    pub fn resolve_output_dir(&self, cli_dir: Option<&Path>) -> io::Result<PathBuf> {
        resolve_output_dir_with(
            cli_dir,
            self.output_dir.as_deref(),
            std::env::var(OUTPUT_DIR_ENV).ok(),
        )
    }
}

fn resolve_output_dir_with(
    cli_dir: Option<&Path>,
    config_dir: Option<&Path>,
    env_dir: Option<String>,
) -> io::Result<PathBuf> {
    let output_path = if let Some(dir) = cli_dir {
        debug!("Using output directory from command line: {}", dir.display());
        dir.to_path_buf()
    } else if let Some(dir) = config_dir {
        debug!("Using output directory from configuration: {}", dir.display());
        dir.to_path_buf()
    } else if let Some(dir) = env_dir.filter(|d| !d.is_empty()) {
        debug!("Using {OUTPUT_DIR_ENV}: {dir}");
        PathBuf::from(dir)
    } else {
        PathBuf::from(DEFAULT_OUTPUT_DIR)
    };

    let absolute_path = if output_path.is_absolute() {
        output_path
    } else {
        std::env::current_dir()
            .map_err(|e| io::Error::other(format!("Failed to get current directory: {e}")))?
            .join(output_path)
    };

    debug!("Resolved output path: {}", absolute_path.display());
    Ok(absolute_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.package_name, "main");
        assert_eq!(config.files.openapi, "openapi.json");
        assert_eq!(config.duplicates, DuplicatePolicy::Reject);
        assert_eq!(config.parameter_locations, LocationStrategy::Body);
    }

    #[test]
    fn test_load_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("restforge.toml");
        std::fs::write(
            &path,
            r#"
package_name = "api"
api_title = "Inventory"
api_prefix = "/api/v1"
duplicates = "allow"
parameter_locations = "inferred"
exclude_functions = ["main", "init"]

[files]
openapi = "swagger.json"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.package_name, "api");
        assert_eq!(config.api_title, "Inventory");
        assert_eq!(config.api_version, "1.0.0");
        assert_eq!(config.duplicates, DuplicatePolicy::Allow);
        assert_eq!(config.parameter_locations, LocationStrategy::Inferred);
        assert_eq!(config.files.openapi, "swagger.json");
        assert_eq!(config.files.handlers, "generated_handlers.go");
        assert_eq!(config.exclude_functions, vec!["main", "init"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "output_dir: out\ngo_module: example.com/api\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
        assert_eq!(config.go_module.as_deref(), Some("example.com/api"));
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("restforge.toml");
        std::fs::write(&path, "enable_swagger = true\n").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_discover_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Config::discover(dir.path()).unwrap(), Config::default());

        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "api_version = \"2.0.0\"\n").unwrap();
        assert_eq!(Config::discover(dir.path()).unwrap().api_version, "2.0.0");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config {
            package_name: "my-pkg".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config = Config {
            api_prefix: "api".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config = Config {
            api_prefix: "/api/".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config = Config::default();
        config.files.tests = config.files.handlers.clone();
        assert!(config.validate().is_err());

        config = Config::default();
        config.files.openapi = "docs/openapi.json".to_string();
        assert!(config.validate().is_err());

        config = Config {
            go_module: Some("bad module".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config = Config {
            package_name: "func".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_wildcards_in_prefix() {
        for prefix in ["/api/:version", "/api/{v}", "/files/*rest", "/api v1", "/api?x"] {
            let config = Config {
                api_prefix: prefix.to_string(),
                ..Default::default()
            };
            let error = config.validate().unwrap_err();
            assert!(error.to_string().contains("must not contain"), "{prefix}");
        }

        let config = Config {
            api_prefix: "/api/v1.2_beta-x".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_reserves_go_mod_when_module_is_set() {
        let mut config = Config::default();
        config.files.handlers = GO_MODULE_FILE.to_string();
        // No go.mod is written without a module path
        assert!(config.validate().is_ok());

        config.go_module = Some("example.com/users".to_string());
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("'go.mod' is used by more than one artifact"));
    }

    #[test]
    fn test_design_options_follow_config() {
        let config = Config {
            api_prefix: "/v2".to_string(),
            duplicates: DuplicatePolicy::Allow,
            ..Default::default()
        };
        let options = config.design_options();
        assert_eq!(options.path_prefix, "/v2");
        assert_eq!(options.duplicates, DuplicatePolicy::Allow);
        assert_eq!(options.locations, LocationStrategy::Body);
    }

    #[test]
    fn test_resolve_output_dir_precedence() {
        let cli = PathBuf::from("/tmp/from-cli");
        let file = PathBuf::from("/tmp/from-file");

        let resolved = resolve_output_dir_with(
            Some(&cli),
            Some(&file),
            Some("/tmp/from-env".to_string()),
        )
        .unwrap();
        assert_eq!(resolved, cli);

        let resolved =
            resolve_output_dir_with(None, Some(&file), Some("/tmp/from-env".to_string())).unwrap();
        assert_eq!(resolved, file);

        let resolved = resolve_output_dir_with(None, None, Some("/tmp/from-env".to_string())).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/from-env"));

        let resolved = resolve_output_dir_with(None, None, None).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with(DEFAULT_OUTPUT_DIR));
    }
}
