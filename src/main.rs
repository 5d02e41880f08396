use clap::{ArgAction, Parser};
use randpick::logging;
use randpick::{load_candidates, select_from_file, SelectionSeed};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "randpick")]
#[command(about = "Pick one reproducible random item from a .txt, .csv or .json file")]
struct Args {
    file: PathBuf,

    /// Seed for the selection; any u64 or negative i64
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    seed: SelectionSeed,

    /// Print every candidate instead of picking one
    #[arg(short, long)]
    list: bool,

    /// Raise log detail; repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_subscriber(args.verbose, args.quiet);

    let output = if args.list {
        load_candidates(&args.file).map(|set| set.into_vec().join("\n"))
    } else {
        select_from_file(&args.file, args.seed)
    };

    // Errors are part of the result channel, so they go to stdout as well.
    match output {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
