use std::fs;

use clap::Parser;
use jnr::{interpreter::dialect::Dialect, run_program};

/// jnr is a small imperative scripting language with typed literals,
/// assignment, and line-oriented input/output.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells jnr to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// The grammar revision to parse with: print, show-list, or show.
    #[arg(short, long, default_value_t = Dialect::Show)]
    dialect: Dialect,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    if let Err(e) = run_program(&script, args.dialect, &mut input, &mut output) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
