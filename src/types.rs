use clap::ValueEnum;
use serde::Deserialize;

/// How the assignment report is rendered.
///
/// - `Text`: human-readable lines, one per program (default).
/// - `Json`: pretty-printed JSON document with the annotated records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}
