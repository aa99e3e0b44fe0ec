mod commands;
mod terminal;

use commands::{CommandLine, Commands, create, info, validate};
use shipr_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    logging::init_logging(cfg.quiet);
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Info => {
            print::header("container constants", cfg.quiet);
            info::info(&cfg)
        }
        Commands::Create(args) => {
            print::header("creating containers", cfg.quiet);
            create::create(args, &cfg)
        }
        Commands::Validate { codes } => {
            print::header("validating identity codes", cfg.quiet);
            validate::validate(&codes, &cfg)
        }
    }
}
