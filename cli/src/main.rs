mod commands;
mod config;
mod terminal;

use commands::{CommandLine, Commands, classify, count, mask, sort};
use config::Config;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = Config::from(&commands);

    logging::init_logging(&cfg);

    match commands.command {
        Commands::Sort { by, tokens } => sort::sort(by, tokens, &cfg),
        Commands::Classify { tokens } => classify::classify(tokens, &cfg),
        Commands::Mask { mask, from_prefix } => mask::mask(mask, from_prefix, &cfg),
        Commands::Count {
            tokens,
            counters,
            breakdown,
        } => count::count(tokens, &counters, breakdown, &cfg),
    }
}
