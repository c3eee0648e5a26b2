use anyhow::Result;
use clap::Parser;
use lexitree_cli::commands::Commands;

/// Parse text into a document tree, evaluating inline arithmetic
#[derive(Debug, Parser)]
#[command(name = "lexitree", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress log and progress output
    #[arg(short, long, global = true)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    lexitree_cli::init_logging(cli.verbose, cli.quiet);

    log::debug!("Arguments: {:?}", cli);
    cli.command.execute(cli.quiet)
}
