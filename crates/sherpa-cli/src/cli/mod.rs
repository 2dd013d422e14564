use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sherpa` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sherpa",
    version,
    about = "Standards Sherpa - rubric and standards coverage exports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format for command results: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub output: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding `<document-id>.json` result sets
    #[arg(long, global = true)]
    pub source_dir: Option<String>,

    /// Directory artifacts are written to
    #[arg(long, global = true)]
    pub out_dir: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            output: self.output,
            quiet: self.quiet,
            verbose: self.verbose,
            source_dir: self.source_dir.clone(),
            out_dir: self.out_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use sherpa_core::ExportFormat;

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn export_parses_format_wire_name() {
        let cli = Cli::try_parse_from(["sherpa", "export", "doc-1", "--format", "rubric-pdf"])
            .expect("cli should parse");

        let Commands::Export(args) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(args.document_id, "doc-1");
        assert_eq!(args.format, ExportFormat::RubricPdf);
    }

    #[test]
    fn export_accepts_every_format() {
        for format in ExportFormat::ALL {
            let cli = Cli::try_parse_from(["sherpa", "export", "d", "-f", format.as_str()])
                .expect("cli should parse");
            assert!(matches!(cli.command, Commands::Export(args) if args.format == format));
        }
    }

    #[test]
    fn export_rejects_unknown_format() {
        let parsed = Cli::try_parse_from(["sherpa", "export", "doc-1", "--format", "docx"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn export_requires_format() {
        assert!(Cli::try_parse_from(["sherpa", "export", "doc-1"]).is_err());
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "sherpa",
            "--output",
            "json",
            "--verbose",
            "coverage",
            "doc-1",
        ])
        .expect("cli should parse");

        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Coverage(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["sherpa", "export-all", "doc-1", "--output", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.output, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::ExportAll(_)));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from([
            "sherpa",
            "--source-dir",
            "fixtures",
            "--out-dir",
            "/tmp/out",
            "coverage",
            "doc-1",
        ])
        .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.source_dir.as_deref(), Some("fixtures"));
        assert_eq!(flags.out_dir.as_deref(), Some("/tmp/out"));
        assert_eq!(flags.output, OutputFormat::Table);
    }
}
