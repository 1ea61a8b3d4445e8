//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Command-line front end for the password generator.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use rpawogen::configtool::{GenConfig, GenOverrides};
use rpawogen::{logger, setclip, PassGenError};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rpawogen")]
#[command(about = "Generate random passwords and estimate their strength", long_about = None)]
struct Cli {
    /// Print debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    /// Path to the settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Generate a new random password
    Gen(GenArgs),

    /// Estimate strength for a length and alphabet size
    Strength {
        /// Password length
        #[arg(short, long)]
        length: usize,

        /// Number of distinct characters in the alphabet
        #[arg(short, long)]
        alphabet_size: usize,
    },

    /// Test password strength and properties
    Testpass(TestpassArgs),

    /// Write a settings file with the default values
    Init {
        /// Overwrite an existing settings file
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

#[derive(Debug, clap::Args)]
struct TestpassArgs {
    /// Password to test
    password: String,

    /// Check for visually confusing characters
    #[arg(short = 'c', long, default_value_t = false)]
    check_confusion: bool,
}

#[derive(Debug, clap::Args)]
struct GenArgs {
    /// Length of the password (clamped to 8..=256)
    #[arg(short, long)]
    length: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    no_numbers: bool,

    /// Exclude special characters
    #[arg(long, default_value_t = false)]
    no_special: bool,

    /// Avoid visually confusing characters
    #[arg(short = 'c', long, default_value_t = false)]
    avoid_confusion: bool,

    /// Copy the password to the clipboard
    #[arg(long, default_value_t = false)]
    copy: bool,

    /// Seed for a reproducible password (testing only)
    #[arg(long)]
    seed: Option<u64>,
}

impl From<&GenArgs> for GenOverrides {
    fn from(args: &GenArgs) -> Self {
        Self {
            length: args.length,
            no_uppercase: args.no_uppercase,
            no_lowercase: args.no_lowercase,
            no_numbers: args.no_numbers,
            no_special: args.no_special,
            avoid_confusion: args.avoid_confusion,
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Gen(args) => {
            let config = GenConfig::load(cli.config.as_deref())?;
            commands::password_gen::generate_random(
                &config,
                &GenOverrides::from(&args),
                args.copy,
                args.seed,
            )
        }
        Command::Strength { length, alphabet_size } => {
            commands::strength::show_estimate(length, alphabet_size)
        }
        Command::Testpass(args) => {
            commands::testpass::test_password(&args.password, args.check_confusion)
        }
        Command::Init { force } => {
            commands::init::write_default_config(cli.config.as_deref(), force)
        }
    }
}

fn main() {
    // Re-entered as the delayed clipboard wiper.
    if let Some(delay) = setclip::daemon_delay() {
        logger::init(false);
        if let Err(e) = setclip::run_daemon(delay) {
            log::error!("{}", e);
            process::exit(1);
        }
        return;
    }

    let cli = Cli::parse();
    logger::init(cli.verbose);

    if let Err(e) = run(cli) {
        match e.downcast_ref::<PassGenError>() {
            Some(err) => eprintln!("{}", err.user_message()),
            None => eprintln!("Error: {:#}", e),
        }
        process::exit(1);
    }
}
