//! Output formatting for CLI

use crate::cli::error::CliError;
use crate::profile::DescriptorSet;

const RULE: &str = "---------------------------------------";

/// Output format for a descriptor set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Render a descriptor set in the requested format
pub fn render(set: &DescriptorSet, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => format_text_output(set),
        OutputFormat::Json => {
            serde_json::to_string_pretty(set).map_err(|e| CliError::OutputError(e.to_string()))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(set).map_err(|e| CliError::OutputError(e.to_string()))
        }
    }
}

/// Format a descriptor set as a human-readable listing
///
/// Descriptor fields are listed in alphabetical order with JSON-rendered
/// values, one column block per column.
pub fn format_text_output(set: &DescriptorSet) -> Result<String, CliError> {
    let mut output = String::new();

    output.push_str(&format!("Descriptor Set for table '{}':\n", set.table));
    output.push_str(RULE);
    output.push('\n');

    for (name, descriptor) in &set.columns {
        output.push_str(&format!("Column: {}\n", name));

        let fields = serde_json::to_value(descriptor)
            .map_err(|e| CliError::OutputError(e.to_string()))?;
        if let serde_json::Value::Object(map) = fields {
            let mut entries: Vec<_> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            for (key, value) in entries {
                output.push_str(&format!("  {}: {}\n", key, value));
            }
        }

        output.push_str(RULE);
        output.push('\n');
    }

    output.push_str("Multi-Column Candidate Keys:\n");
    if set.multi_candidate_keys.is_empty() {
        output.push_str("  None\n");
    } else {
        for key in &set.multi_candidate_keys {
            output.push_str(&format!("  [ {} ]\n", key.join(", ")));
        }
    }
    output.push_str(RULE);
    output.push('\n');

    Ok(output)
}
