use clap::{Parser, ValueEnum};
use std::fmt;

#[derive(Parser)]
#[command(name = "lastseen")]
#[command(about = "Report when users last logged in", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(help = "User id to report on; omit to report across all users")]
    pub uid: Option<String>,

    #[arg(long, help = "Select the users who have been seen least recently")]
    pub least_recent: bool,

    #[arg(
        long,
        value_name = "EXPR",
        help = "Select users last seen before a point in time, e.g. \"2016-09-21\" or \"2 days ago\""
    )]
    pub before: Option<String>,

    #[arg(
        long,
        value_name = "N",
        default_value_t = 10,
        allow_negative_numbers = true,
        help = "Maximum number of users a batch report returns"
    )]
    pub limit: i64,

    #[arg(long, default_value = "plain", help = "Output format")]
    pub output: OutputFormat,

    #[arg(
        long,
        value_name = "PATH",
        help = "Data directory (defaults to $LASTSEEN_PATH, then the XDG data dir, then ~/.lastseen)"
    )]
    pub data_dir: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
