use crate::config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, OUTPUT_EXTENSIONS};
use crate::core::report::DEFAULT_TOP_UNIVERSITIES;
use crate::core::ConfigProvider;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_positive_number, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings file, e.g.:
///
/// ```toml
/// [input]
/// path = "exports/${SHEET_NAME}.txt"
///
/// [output]
/// path = "web/contracts_data_full.js"
/// dry_run = false
///
/// [report]
/// top_universities = 15
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    pub dry_run: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_top_universities")]
    pub top_universities: usize,
}

fn default_input_path() -> String {
    DEFAULT_INPUT_PATH.to_string()
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_top_universities() -> usize {
    DEFAULT_TOP_UNIVERSITIES
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            dry_run: None,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_universities: default_top_universities(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ConvertError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConvertError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConvertError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// The command-line `--dry-run` flag wins over the file.
    pub fn apply_dry_run_override(&mut self, dry_run: bool) {
        if dry_run {
            tracing::info!("🔧 Dry run enabled from the command line");
            self.output.dry_run = Some(true);
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn top_universities(&self) -> usize {
        self.report.top_universities
    }

    fn dry_run(&self) -> bool {
        self.output.dry_run.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.path", &self.input.path)?;
        validate_path("output.path", &self.output.path)?;
        validate_file_extension("output.path", &self.output.path, OUTPUT_EXTENSIONS)?;
        validate_positive_number("report.top_universities", self.report.top_universities, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[input]
path = "exports/march.txt"

[output]
path = "web/contracts.js"
dry_run = true

[report]
top_universities = 5
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input_path(), "exports/march.txt");
        assert_eq!(config.output_path(), "web/contracts.js");
        assert_eq!(config.top_universities(), 5);
        assert!(config.dry_run());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.input_path(), "raw_contracts.txt");
        assert_eq!(config.output_path(), "contracts_data_full.js");
        assert_eq!(config.top_universities(), 10);
        assert!(!config.dry_run());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CONTRACT_ETL_TEST_SHEET", "april");

        let toml_content = r#"
[input]
path = "exports/${CONTRACT_ETL_TEST_SHEET}.txt"

[output]
path = "${CONTRACT_ETL_TEST_UNSET_VAR}.js"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input_path(), "exports/april.txt");
        assert_eq!(config.output_path(), "${CONTRACT_ETL_TEST_UNSET_VAR}.js");

        std::env::remove_var("CONTRACT_ETL_TEST_SHEET");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[output]
path = "contracts.csv"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[report]
top_universities = 0
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[input\npath = 1").unwrap_err();
        assert!(matches!(err, ConvertError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_dry_run_override() {
        let mut config = TomlConfig::from_toml_str("[output]\ndry_run = false\n").unwrap();
        config.apply_dry_run_override(false);
        assert!(!config.dry_run());
        config.apply_dry_run_override(true);
        assert!(config.dry_run());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[report]\ntop_universities = 3\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.top_universities(), 3);
    }
}
