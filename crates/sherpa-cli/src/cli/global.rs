use clap::ValueEnum;

/// How command results are printed to stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub output: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub source_dir: Option<String>,
    pub out_dir: Option<String>,
}
