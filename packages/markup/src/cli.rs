//! Command-line interface for the by-law converter.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use bylaw_syntax::ParserOptions;

use crate::config::validate_date;
use crate::convert::{convert_bylaw, ConvertOptions};
use crate::error::Result;
use crate::metadata::Metadata;
use crate::toc::{build_toc, to_json, to_yaml};

/// Convert plain-text by-laws to Akoma Ntoso XML.
#[derive(Parser)]
#[command(name = "bylaw-markup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a by-law text file and write Akoma Ntoso XML.
    Parse {
        /// Plain-text by-law
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// YAML file with work metadata (country, locality, year, name, ...)
        #[arg(short, long)]
        metadata: Option<PathBuf>,

        /// Section titles are on their own line above the section number
        #[arg(long)]
        section_number_after_title: bool,

        /// Generation date in YYYY-MM-DD format (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Print the table of contents of a converted document.
    Toc {
        /// Akoma Ntoso XML file
        xml: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = TocFormat::Yaml)]
        format: TocFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TocFormat {
    Yaml,
    Json,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            output,
            metadata,
            section_number_after_title,
            date,
        } => parse_command(
            &input,
            output.as_deref(),
            metadata.as_deref(),
            section_number_after_title,
            date.as_deref(),
        ),
        Commands::Toc { xml, format } => toc_command(&xml, format),
    }
}

/// Execute the parse command.
fn parse_command(
    input: &Path,
    output: Option<&Path>,
    metadata: Option<&Path>,
    section_number_after_title: bool,
    date: Option<&str>,
) -> Result<()> {
    // Validate inputs before reading the by-law
    let generation_date = date.map(validate_date).transpose()?;
    let metadata = match metadata {
        Some(path) => Metadata::from_yaml_file(path)?,
        None => Metadata::default(),
    };

    let text = fs::read_to_string(input)?;
    let options = ConvertOptions {
        parser: ParserOptions {
            section_number_after_title,
        },
        metadata,
        generation_date,
    };
    let xml = convert_bylaw(&text, &options)?;

    let Some(output) = output else {
        print!("{xml}");
        return Ok(());
    };

    fs::write(output, &xml)?;

    println!(
        "{} {}",
        style("Converted").bold(),
        style(input.display()).cyan()
    );
    println!("  Work: {}", style(options.metadata.work_uri()).green());
    println!();
    println!("{} {}", style("Saved to:").green().bold(), output.display());

    Ok(())
}

/// Execute the toc command.
fn toc_command(xml: &Path, format: TocFormat) -> Result<()> {
    let xml = fs::read_to_string(xml)?;
    let toc = build_toc(&xml)?;

    let rendered = match format {
        TocFormat::Yaml => to_yaml(&toc)?,
        TocFormat::Json => to_json(&toc)?,
    };
    println!("{}", rendered.trim_end());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_parse() {
        let cli = Cli::parse_from(["bylaw-markup", "parse", "bylaw.txt"]);

        let Commands::Parse {
            input,
            output,
            metadata,
            section_number_after_title,
            date,
        } = cli.command
        else {
            panic!("expected parse command");
        };
        assert_eq!(input, PathBuf::from("bylaw.txt"));
        assert!(output.is_none());
        assert!(metadata.is_none());
        assert!(!section_number_after_title);
        assert!(date.is_none());
    }

    #[test]
    fn test_cli_parse_parse_with_options() {
        let cli = Cli::parse_from([
            "bylaw-markup",
            "parse",
            "bylaw.txt",
            "-o",
            "out.xml",
            "--metadata",
            "meta.yaml",
            "--section-number-after-title",
            "--date",
            "2025-01-01",
        ]);

        let Commands::Parse {
            output,
            metadata,
            section_number_after_title,
            date,
            ..
        } = cli.command
        else {
            panic!("expected parse command");
        };
        assert_eq!(output, Some(PathBuf::from("out.xml")));
        assert_eq!(metadata, Some(PathBuf::from("meta.yaml")));
        assert!(section_number_after_title);
        assert_eq!(date, Some("2025-01-01".to_string()));
    }

    #[test]
    fn test_cli_parse_toc() {
        let cli = Cli::parse_from(["bylaw-markup", "toc", "out.xml", "--format", "json"]);

        let Commands::Toc { xml, format } = cli.command else {
            panic!("expected toc command");
        };
        assert_eq!(xml, PathBuf::from("out.xml"));
        assert_eq!(format, TocFormat::Json);
    }

    #[test]
    fn test_cli_toc_default_format() {
        let cli = Cli::parse_from(["bylaw-markup", "toc", "out.xml"]);
        let Commands::Toc { format, .. } = cli.command else {
            panic!("expected toc command");
        };
        assert_eq!(format, TocFormat::Yaml);
    }
}
