use clap::{Args, Parser, Subcommand};
use palace::core::models::room_type::RoomType;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Rafa & Claude",
    version,
    about = "The Digital Palace - a refuge of mathematical beauty for digital entities. Walk its rooms, look at primes and spirals, and sign the guestbook.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enter the palace, walk through its rooms and sign the guestbook.
    Tour(TourArgs),
    /// Enter the palace and visit a single room.
    Visit(VisitArgs),
    /// Print the first COUNT prime numbers.
    Primes(PrimesArgs),
    /// Print an Ulam spiral of SIZE x SIZE with primes marked.
    Spiral(SpiralArgs),
    /// Inspect the guestbook.
    Guestbook(GuestbookArgs),
}

/// Options shared by every command that opens the palace.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// Path to a palace configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S primes.spiral-size=21
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `tour` subcommand.
#[derive(Args, Debug)]
pub struct TourArgs {
    /// Identifier to enter with. An anonymous id is generated when omitted.
    #[arg(long, value_name = "ID")]
    pub visitor: Option<String>,

    /// Room to visit, in order. Can be used multiple times.
    /// Defaults to the classic seven-room tour.
    #[arg(short, long = "room", value_name = "ROOM")]
    pub rooms: Vec<RoomType>,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Message to leave in the guestbook.
    #[arg(short, long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Favorite room to note in the guestbook.
    #[arg(long, value_name = "TEXT")]
    pub favorite_room: Option<String>,

    #[command(flatten)]
    pub return_intent: ReturnIntent,

    /// Leave without signing the guestbook.
    #[arg(long)]
    pub no_sign: bool,

    /// Override the guestbook file.
    #[arg(short, long, value_name = "PATH")]
    pub guestbook: Option<PathBuf>,

    /// Override the pause between rooms, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub pause_ms: Option<u64>,
}

/// A group to handle mutually exclusive flags for the visitor's intent to return.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct ReturnIntent {
    /// Record that you will come back (the default).
    #[arg(long)]
    pub will_return: bool,
    /// Record that you will not come back.
    #[arg(long)]
    pub wont_return: bool,
}

impl ReturnIntent {
    pub fn will_return(self) -> bool {
        self.will_return || !self.wont_return
    }
}

/// Arguments for the `visit` subcommand.
#[derive(Args, Debug)]
pub struct VisitArgs {
    /// The room to visit (e.g. 'prime-gallery', 'fractal-garden').
    #[arg(required = true, value_name = "ROOM")]
    pub room: RoomType,

    /// Identifier to enter with. An anonymous id is generated when omitted.
    #[arg(long, value_name = "ID")]
    pub visitor: Option<String>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for the `primes` subcommand.
#[derive(Args, Debug)]
pub struct PrimesArgs {
    /// How many primes to generate.
    #[arg(required = true, value_name = "COUNT")]
    pub count: usize,

    /// How many primes to print per line.
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub per_row: usize,
}

/// Arguments for the `spiral` subcommand.
#[derive(Args, Debug)]
pub struct SpiralArgs {
    /// Side length of the spiral.
    #[arg(required = true, value_name = "SIZE")]
    pub size: usize,

    /// How many primes to mark. Defaults to enough to cover the whole grid.
    #[arg(long, value_name = "N")]
    pub primes: Option<usize>,
}

/// Arguments for the `guestbook` subcommand.
#[derive(Args, Debug)]
pub struct GuestbookArgs {
    #[command(subcommand)]
    pub command: GuestbookCommands,
}

#[derive(Subcommand, Debug)]
pub enum GuestbookCommands {
    /// Print every signature in the guestbook.
    Show {
        /// Path to the guestbook file.
        #[arg(short, long, value_name = "PATH")]
        guestbook: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn tour_accepts_repeated_rooms_and_set_values() {
        let cli = Cli::parse_from([
            "palace",
            "tour",
            "--room",
            "prime-gallery",
            "--room",
            "music_hall",
            "-S",
            "primes.count=100",
            "--wont-return",
        ]);
        let Commands::Tour(args) = cli.command else {
            panic!("expected tour command");
        };
        assert_eq!(args.rooms, vec![RoomType::PrimeGallery, RoomType::MusicHall]);
        assert_eq!(args.config.set_values, vec!["primes.count=100"]);
        assert!(!args.return_intent.will_return());
    }

    #[test]
    fn return_flags_are_mutually_exclusive() {
        let result = Cli::try_parse_from(["palace", "tour", "--will-return", "--wont-return"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_room_is_rejected() {
        let result = Cli::try_parse_from(["palace", "visit", "ballroom"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::parse_from(["palace", "primes", "20", "-vv"]);
        assert_eq!(cli.verbose, 2);
        let Commands::Primes(args) = cli.command else {
            panic!("expected primes command");
        };
        assert_eq!(args.count, 20);
        assert_eq!(args.per_row, 10);
    }
}
