pub mod create;
pub mod info;
pub mod validate;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "shipr")]
#[command(about = "Build shipping containers and their ISO 6346 identity codes.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output; repeat for less (-qq prints identity codes only)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show container dimensions and temperature limits
    #[command(alias = "i")]
    Info,
    /// Create one or more containers and print their details
    #[command(alias = "c")]
    Create(CreateArgs),
    /// Check existing identity codes
    #[command(alias = "v")]
    Validate {
        #[arg(required = true)]
        codes: Vec<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// Ambient container
    Base,
    /// Refrigerated container, capped at 4°C
    Refrigerated,
    /// Heated refrigerated container, -20°C to 4°C
    Heated,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Three-letter owner code, e.g. MAE
    pub owner_code: String,

    /// Length in feet
    pub length_ft: f64,

    #[arg(short, long, value_enum, default_value_t = Kind::Base)]
    pub kind: Kind,

    /// Initial temperature in Celsius (refrigerated kinds)
    #[arg(short, long, allow_negative_numbers = true, conflicts_with = "fahrenheit")]
    pub celsius: Option<f64>,

    /// Initial temperature in Fahrenheit (refrigerated kinds)
    #[arg(short, long, allow_negative_numbers = true)]
    pub fahrenheit: Option<f64>,

    /// Item to load; repeat for more. Without items the container is created empty
    #[arg(short, long = "item")]
    pub items: Vec<String>,

    /// Number of identical containers to create
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
