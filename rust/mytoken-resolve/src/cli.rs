use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "resolve")]
#[command(bin_name = "resolve")]
#[command(about = "Reduce mytoken capability lists to a minimal covering set", long_about = None)]
pub struct ResolveCli {
    /// Capabilities of the requested token. Read from stdin, one per line,
    /// when none are given.
    pub capabilities: Vec<String>,

    /// Capabilities of subtokens created with the requested token.
    #[arg(short, long = "subtoken", value_name = "CAPABILITY")]
    pub subtoken: Vec<String>,

    /// Reject malformed capability identifiers instead of passing them
    /// through.
    #[arg(long)]
    pub strict: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Json, env = "MYTOKEN_CAPABILITY_FORMAT")]
    pub format: Format,

    /// Print description and danger level next to each capability (lines
    /// format only).
    #[arg(short, long)]
    pub describe: bool,

    /// Log filter, e.g. `debug` or `mytoken_capability=trace`.
    #[arg(long, default_value = "warn", env = "MYTOKEN_LOG")]
    pub log: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The JSON request body fields.
    Json,
    /// One capability per line.
    Lines,
}
