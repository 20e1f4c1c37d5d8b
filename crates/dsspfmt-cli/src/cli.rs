use clap::{Parser, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Render a classified secondary-structure annotation as the classic DSSP report or as mmCIF conformation records.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the annotation document produced by the classification engine (TOML).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path. Writes to standard output when omitted.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format. When omitted it is chosen from the output extension
    /// ('.dssp' selects the classic report, anything else mmCIF).
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The classic fixed-column DSSP report.
    Dssp,
    /// mmCIF conformation records.
    Mmcif,
}

impl Cli {
    /// The effective output format: the explicit flag wins, then the output
    /// file extension, then mmCIF.
    pub fn resolved_format(&self) -> OutputFormat {
        if let Some(format) = self.output_format {
            return format;
        }
        match &self.output {
            Some(path)
                if path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("dssp")) =>
            {
                OutputFormat::Dssp
            }
            _ => OutputFormat::Mmcif,
        }
    }
}
