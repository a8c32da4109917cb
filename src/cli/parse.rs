use linkwatch_core::format::OutputFormat;
use linkwatch_core::model::{Severity, SourceType, Status};

/// Parse source type from string
pub fn parse_source_type(s: &str) -> std::result::Result<SourceType, String> {
    s.parse::<SourceType>().map_err(|e| e.to_string())
}

/// Parse severity from string
pub fn parse_severity(s: &str) -> std::result::Result<Severity, String> {
    s.parse::<Severity>().map_err(|e| e.to_string())
}

/// Parse handling status from string
pub fn parse_status(s: &str) -> std::result::Result<Status, String> {
    s.parse::<Status>().map_err(|e| e.to_string())
}

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
