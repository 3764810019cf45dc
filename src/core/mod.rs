pub mod date;
pub mod etl;
pub mod js_output;
pub mod parser;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{ContractRecord, ExtractResult, RunSummary, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
