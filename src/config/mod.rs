pub mod cli;
pub mod toml_config;

use crate::core::report::DEFAULT_TOP_UNIVERSITIES;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_positive_number, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_PATH: &str = "raw_contracts.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "contracts_data_full.js";
pub const OUTPUT_EXTENSIONS: &[&str] = &["js", "mjs"];

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "contract-etl")]
#[command(about = "Convert tab-separated contract records into a JavaScript data file")]
pub struct CliConfig {
    /// Tab-separated export to read
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    pub input: String,

    /// JavaScript file to write
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: String,

    /// Directory relative paths are resolved against
    #[arg(long, default_value = ".")]
    pub dir: String,

    /// Number of universities listed in the report
    #[arg(long, default_value_t = DEFAULT_TOP_UNIVERSITIES)]
    pub top_universities: usize,

    /// TOML file with input, output and report settings
    #[arg(short, long)]
    pub config: Option<String>,

    /// Parse and report without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn top_universities(&self) -> usize {
        self.top_universities
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        validate_file_extension("output", &self.output, OUTPUT_EXTENSIONS)?;
        validate_path("dir", &self.dir)?;
        validate_positive_number("top_universities", self.top_universities, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["contract-etl"]);
        assert_eq!(config.input_path(), "raw_contracts.txt");
        assert_eq!(config.output_path(), "contracts_data_full.js");
        assert_eq!(config.top_universities(), 10);
        assert!(!config.dry_run());
        assert!(config.config.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::parse_from([
            "contract-etl",
            "--input",
            "export.tsv",
            "--output",
            "web/data.mjs",
            "--top-universities",
            "5",
            "--dry-run",
            "-v",
        ]);
        assert_eq!(config.input_path(), "export.tsv");
        assert_eq!(config.output_path(), "web/data.mjs");
        assert_eq!(config.top_universities(), 5);
        assert!(config.dry_run());
        assert!(config.verbose);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let zero_top = CliConfig::parse_from(["contract-etl", "--top-universities", "0"]);
        assert!(zero_top.validate().is_err());

        let json_output = CliConfig::parse_from(["contract-etl", "--output", "data.json"]);
        assert!(json_output.validate().is_err());
    }
}
