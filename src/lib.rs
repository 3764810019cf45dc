pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use crate::core::{
    date::parse_date,
    etl::ConvertEngine,
    parser::process_contract_line,
    pipeline::ContractPipeline,
    report::StatsReport,
};
pub use domain::model::{ContractRecord, RunSummary};
pub use utils::error::{ConvertError, Result};
