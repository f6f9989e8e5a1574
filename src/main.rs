use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aeyla::config::Settings;
use aeyla::models::{Money, StudentId};
use aeyla::shell::Shell;

#[derive(Parser)]
#[command(
    name = "aeyla",
    version,
    about = "Interactive terminal student management system",
    long_about = "Aeyla keeps an in-memory roster of students. Add students, enroll \
                  them in courses, check balances and take fee payments from an \
                  interactive menu. Nothing is saved when the program exits."
)]
struct Cli {
    /// ID given to the first student added
    #[arg(long, value_name = "ID", default_value = "10000")]
    first_id: StudentId,

    /// Balance every new student starts with (e.g., "100" or "250.50")
    #[arg(long, value_name = "AMOUNT", default_value = "100")]
    opening_balance: Money,

    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let settings = Settings::default()
        .with_first_id(cli.first_id)
        .with_opening_balance(cli.opening_balance)
        .with_banner(!cli.no_banner);
    settings.validate()?;

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), settings);
    shell.run().context("interactive session failed")?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
