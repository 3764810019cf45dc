use crate::core::js_output::render_js_module;
use crate::core::parser::process_contract_line;
use crate::core::{ConfigProvider, ExtractResult, Pipeline, Storage, TransformResult};
use crate::utils::error::{ConvertError, Result};
use std::io::ErrorKind;
use std::time::Instant;

/// Reads the tab-separated export, parses each row and writes the JavaScript module.
pub struct ContractPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> ContractPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

/// Console warning for a row that could not be parsed.
pub fn invalid_line_warning(line_number: usize) -> String {
    format!("⚠️ warning: line {} invalid", line_number)
}

/// Splits on `\r\n`, `\r` or `\n`. A final terminator does not start an extra line.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<&str> = text
        .split("\r\n")
        .flat_map(|chunk| chunk.split(['\r', '\n']))
        .collect();
    if text.ends_with(['\r', '\n']) {
        lines.pop();
    }
    lines
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ContractPipeline<S, C> {
    async fn extract(&self) -> Result<ExtractResult> {
        let path = self.config.input_path();
        tracing::debug!("Reading contract data from: {}", path);

        let bytes = match self.storage.read_file(path).await {
            Ok(bytes) => bytes,
            Err(ConvertError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
                return Err(ConvertError::InputNotFound {
                    path: path.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        let text = String::from_utf8(bytes).map_err(|_| ConvertError::EncodingError {
            path: path.to_string(),
        })?;

        // Spreadsheet "Unicode Text" exports often start with a byte-order mark.
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
        let lines: Vec<String> = split_lines(text).into_iter().map(str::to_owned).collect();

        tracing::debug!("Read {} lines ({} bytes)", lines.len(), text.len());

        Ok(ExtractResult {
            source: path.to_string(),
            lines,
        })
    }

    async fn transform(&self, data: ExtractResult) -> Result<TransformResult> {
        let started = Instant::now();
        let mut result = TransformResult::default();

        for (index, line) in data.lines.iter().enumerate() {
            let line_number = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            match process_contract_line(line) {
                Some(record) => result.records.push(record),
                None => {
                    println!("{}", invalid_line_warning(line_number));
                    tracing::warn!(
                        line = line_number,
                        columns = line.split('\t').count(),
                        "Skipping row with too few columns"
                    );
                    result.invalid_lines.push(line_number);
                }
            }
        }

        tracing::info!(
            records = result.records.len(),
            invalid = result.error_count(),
            elapsed = ?started.elapsed(),
            "Parsed {}",
            data.source
        );

        Ok(result)
    }

    async fn load(&self, result: &TransformResult) -> Result<String> {
        let output_path = self.config.output_path().to_string();
        let module = render_js_module(&result.records)?;

        tracing::debug!(
            "Writing {} records ({} bytes) to {}",
            result.records.len(),
            module.len(),
            output_path
        );
        self.storage.write_file(&output_path, module.as_bytes()).await?;

        Ok(output_path)
    }
}
