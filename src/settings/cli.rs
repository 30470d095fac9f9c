use super::Parser;

/// Command line of the `logger_demo` binary.
#[derive(Parser, Debug)]
#[command(about = "Writes sample records to the trace log")]
pub struct Cli {
    /// TOML settings file, `settings/dev.toml` in debug builds when omitted.
    #[arg(long, short)]
    pub settings: Option<String>,
}
