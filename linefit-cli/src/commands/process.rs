//! Process command implementation

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use linefit_core::{
    Config, ConfigBuilder, ConfigFile, Entry, Input, ProcessingReport, ScriptProcessor,
};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "LINEFIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Window minimum in characters
    #[arg(long, value_name = "N")]
    pub min: Option<usize>,

    /// Window maximum in characters
    #[arg(long, value_name = "N")]
    pub max: Option<usize>,

    /// Seed for reproducible output
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Skip the overlap propagation pass
    #[arg(long)]
    pub no_propagate: bool,

    /// Remove [HEADER]...[/HEADER] sections before processing
    #[arg(long)]
    pub strip_headers: bool,

    /// Marker written before a highlight in text output
    #[arg(long, value_name = "STR", default_value = "[[")]
    pub mark_open: String,

    /// Marker written after a highlight in text output
    #[arg(long, value_name = "STR", default_value = "]]")]
    pub mark_close: String,

    /// Suppress progress output and the anomaly summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, highlights between markers and a length suffix
    Text,
    /// JSON entries with highlight offsets and a summary
    Json,
    /// Markdown with bold labels and red highlights
    Markdown,
}

impl OutputFormat {
    /// Every format with its description, for `list formats`
    pub const ALL: &'static [(&'static str, &'static str)] = &[
        ("text", "Plain text, highlights between markers and a length suffix"),
        ("json", "JSON entries with highlight offsets and a summary"),
        ("markdown", "Markdown with bold labels and red highlights"),
    ];
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting script processing");
        log::debug!("Arguments: {:?}", self);

        let config = self.build_config()?;
        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s), window {}", files.len(), config.window());

        let processor = ScriptProcessor::with_config(config);
        let mut formatter = self.create_formatter()?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut report = ProcessingReport::new(processor.config().window());
        for path in &files {
            let script = FileReader::read_script(path)?;
            let output = processor
                .process(Input::from_text(script.text.as_str()))
                .map_err(CliError::from)
                .with_context(|| format!("Failed to process {}", path.display()))?;
            log::info!(
                "{}: {} lines in {:?} (seed {})",
                script.display_name(),
                output.metadata.stats.lines,
                output.metadata.duration,
                output.metadata.seed
            );

            for entry in output.document.entries() {
                match entry {
                    Entry::Label { text } => formatter.format_label(text)?,
                    Entry::Text(line) => formatter.format_line(line)?,
                }
            }
            progress.file_completed(&script.display_name(), output.metadata.stats.lines);
            report.merge(output.report);
        }

        formatter.finish(&report)?;
        progress.finish();

        if !self.quiet {
            print_summary(&report);
        }
        Ok(())
    }

    /// Layer command-line overrides on top of the configuration file
    fn build_config(&self) -> Result<Config> {
        let mut builder = match &self.config {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                ConfigFile::from_toml_str(&content)
                    .map_err(CliError::from)
                    .with_context(|| format!("Invalid config file: {}", path.display()))?
                    .into_builder()
            }
            None => ConfigBuilder::new(),
        };

        if let Some(min) = self.min {
            builder = builder.min_chars(min);
        }
        if let Some(max) = self.max {
            builder = builder.max_chars(max);
        }
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }
        if self.no_propagate {
            builder = builder.propagate(false);
        }
        if self.strip_headers {
            builder = builder.strip_header_sections(true);
        }

        Ok(builder.build().map_err(CliError::from)?)
    }

    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::with_markers(
                writer,
                self.mark_open.as_str(),
                self.mark_close.as_str(),
            )),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };
        Ok(formatter)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger installed earlier in the process stays in place.
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

fn print_summary(report: &ProcessingReport) {
    let out_of_window = report.out_of_window();
    eprintln!(
        "{} blocks, {} fitted, {} split, {} highlights propagated",
        report.blocks, report.fitted_lines, report.split_sentences, report.propagated_highlights
    );
    if report.anomalies.is_empty() {
        return;
    }
    eprintln!(
        "anomalies: {} under length, {} without strategic cut, {} without overlap match, {} outside the window",
        report.under_length_count(),
        report.missing_cut_count(),
        report.missing_overlap_count(),
        out_of_window.len()
    );
    for (index, length) in out_of_window {
        log::warn!("entry {index} has {length} chars, outside the window");
    }
}
