use crate::commands::CommandLine;

pub struct Config {
    /// Hides headers and summaries, leaving only the results on stdout.
    pub quiet: bool,
    /// Number of `-v` flags. Raises the default log level when `RUST_LOG` is unset.
    pub verbose: u8,
    /// Disables colored output, including the log formatter.
    pub no_color: bool,
}

impl From<&CommandLine> for Config {
    fn from(commands: &CommandLine) -> Self {
        Self {
            quiet: commands.quiet,
            verbose: commands.verbose,
            no_color: commands.no_color,
        }
    }
}
