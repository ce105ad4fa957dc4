//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use linefit_core::defaults;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the window and label vocabulary to match your scripts");
        println!("2. Validate your configuration:");
        println!("   linefit validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   linefit process -i script.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Commented configuration holding every default value
fn generate_template() -> String {
    let cut_punctuation: Vec<String> = defaults::CUT_PUNCTUATION
        .iter()
        .map(|c| c.to_string())
        .collect();

    format!(
        r#"# linefit configuration
#
# Every key is optional; removing one falls back to the built-in default.

# Fixed seed for reproducible output. Leave unset for a fresh seed per run.
# seed = 42

# Character window every emitted line should fall into
[window]
min = {min}
max = {max}

# Paragraphs starting with one of the names, or matching one of the regex
# patterns, are copied through as section labels
[labels]
names = {labels}
patterns = []
# Treat every paragraph as text
disabled = false

# Strategic cut inside the second half of a split sentence
[splitter]
# Words that may open a new idea
connectives = {connectives}
# Word-final characters that close a clause
cut_punctuation = {cut_punctuation}
# Characters that must follow the cut
min_remainder = {min_remainder}
# Position of the fallback cut as a share of the line length
fallback_fraction = {fallback_fraction}

# Padding of short lines with their own words
[fitter]
max_passes = {max_passes}

# Highlighting of overlap repeated from the next line
[propagator]
enabled = true
# Markers tried in order when the overlap starts too early in the line
natural_breaks = {natural_breaks}
# Characters that must stay unhighlighted at the start of the line
min_prefix = {min_prefix}
# Characters of the next line's text used to find the overlap
key_length = {key_length}

[input]
# Remove [HEADER]...[/HEADER] sections before processing
strip_header_sections = false
"#,
        min = defaults::MIN_CHARS,
        max = defaults::MAX_CHARS,
        labels = toml_array(defaults::LABELS),
        connectives = toml_array(defaults::CONNECTIVES),
        cut_punctuation = toml_array(&cut_punctuation),
        min_remainder = defaults::MIN_REMAINDER,
        fallback_fraction = defaults::FALLBACK_FRACTION,
        max_passes = defaults::FITTER_MAX_PASSES,
        natural_breaks = toml_array(defaults::NATURAL_BREAKS),
        min_prefix = defaults::MIN_NORMAL_PREFIX,
        key_length = defaults::OVERLAP_KEY_LEN,
    )
}

/// Inline TOML array of strings
fn toml_array<S: AsRef<str>>(items: &[S]) -> String {
    toml::Value::Array(
        items
            .iter()
            .map(|item| toml::Value::String(item.as_ref().to_string()))
            .collect(),
    )
    .to_string()
}
