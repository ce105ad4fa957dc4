//! Validate command implementation

use anyhow::Result;
use clap::Args;
use linefit_core::Config;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match Config::from_file(&self.config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Window: {} chars", config.window());
                println!(
                    "  Labels: {} names, {} patterns",
                    config.labels().names().len(),
                    config.labels().patterns().count()
                );
                println!(
                    "  Propagation: {}",
                    if config.propagate() { "on" } else { "off" }
                );
                match config.seed() {
                    Some(seed) => println!("  Seed: {seed}"),
                    None => println!("  Seed: random"),
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn validate(content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();

        ValidateArgs {
            config: temp_file.path().to_path_buf(),
        }
        .execute()
    }

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
seed = 7

[window]
min = 100
max = 110

[labels]
names = ["H1:", "CTA1"]
patterns = ["^SCENA \\d+$"]
"#;
        assert!(validate(toml_content).is_ok());
    }

    #[test]
    fn test_validate_empty_config_uses_defaults() {
        assert!(validate("").is_ok());
    }

    #[test]
    fn test_validate_inverted_window() {
        let err = validate("[window]\nmin = 130\nmax = 120\n").unwrap_err();
        assert!(err.to_string().contains("Validation failed"));
    }

    #[test]
    fn test_validate_unknown_key() {
        assert!(validate("[window]\nminimum = 100\n").is_err());
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            config: PathBuf::from("/nonexistent/linefit.toml"),
        };
        assert!(args.execute().is_err());
    }
}
