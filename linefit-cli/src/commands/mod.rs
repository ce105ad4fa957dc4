//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fit script files into voice-over lines
    Process(process::ProcessArgs),

    /// Check a TOML configuration file
    Validate(validate::ValidateArgs),

    /// Write a commented configuration file with the default values
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the default section labels
    Labels,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }

    fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Labels => linefit_core::defaults::LABELS
                .iter()
                .map(|label| label.to_string())
                .collect(),
            ListCommands::Formats => process::OutputFormat::ALL
                .iter()
                .map(|(name, description)| format!("{name:<10} {description}"))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_labels() {
        let lines = ListCommands::Labels.lines();
        assert_eq!(lines.first().map(String::as_str), Some("HOOKS:"));
        assert!(lines.iter().any(|l| l == "CTA1"));
    }

    #[test]
    fn test_list_formats() {
        let lines = ListCommands::Formats.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("text "));
        assert!(lines[1].starts_with("json "));
        assert!(lines[2].starts_with("markdown "));
    }
}
