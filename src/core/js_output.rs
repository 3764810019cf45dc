use crate::domain::model::ContractRecord;
use crate::utils::error::{ConvertError, Result};

/// Name of the global the dashboard reads.
pub const DATA_VARIABLE: &str = "contractsData";

const HEADER: &str = "// Accreditation contracts data\n\
                      // Generated automatically - All Contracts Data\n";

/// Renders the records as a JavaScript source file.
///
/// The JSON is indented by two spaces and keeps non-ASCII text as-is.
pub fn render_js_module(records: &[ContractRecord]) -> Result<String> {
    let json = serde_json::to_string_pretty(records)?;

    let mut out = String::with_capacity(json.len() + 256);
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(&format!("const {} = ", DATA_VARIABLE));
    out.push_str(&json);
    out.push_str(";\n\n");
    out.push_str(&format!(
        "console.log(`Loaded ${{{}.length}} contracts`);\n",
        DATA_VARIABLE
    ));

    Ok(out)
}

/// Pulls the records back out of a rendered module.
pub fn parse_js_module(source: &str) -> Result<Vec<ContractRecord>> {
    let prefix = format!("const {} = ", DATA_VARIABLE);
    let start = source
        .find(&prefix)
        .map(|pos| pos + prefix.len())
        .ok_or_else(|| ConvertError::MalformedOutputError {
            message: format!("no `{}` assignment found", DATA_VARIABLE),
        })?;

    let mut stream =
        serde_json::Deserializer::from_str(&source[start..]).into_iter::<Vec<ContractRecord>>();
    match stream.next() {
        Some(records) => Ok(records?),
        None => Ok(Vec::new()),
    }
}
