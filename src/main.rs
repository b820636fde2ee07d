use std::{fs, io, process::ExitCode};

use clap::Parser;
use tokcalc::{
    Capacities, ViewKind, interpreter::view::chunked::DEFAULT_CAPACITY, render, shell::Shell,
};
use tracing_subscriber::EnvFilter;

/// tokcalc evaluates arithmetic expressions and shows them as a chain, as
/// capacity-bounded queues, or as a flat list, together with their even and
/// odd literals.
///
/// Run without an expression to start the interactive calculator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tokcalc to read expressions from a file, one per line, instead
    /// of taking a single expression from the command line.
    #[arg(short, long)]
    file: bool,

    /// Which view to print.
    #[arg(long, default_value_t = ViewKind::Flat)]
    view: ViewKind,

    /// Capacity of the queues holding the input literals (chunked view).
    #[arg(long,
          env = "TOKCALC_INPUT_CAPACITY",
          default_value_t = DEFAULT_CAPACITY,
          allow_negative_numbers = true)]
    input_capacity: i64,

    /// Capacity of the queues holding the even and odd literals (chunked
    /// view).
    #[arg(long,
          env = "TOKCALC_BUCKET_CAPACITY",
          default_value_t = DEFAULT_CAPACITY,
          allow_negative_numbers = true)]
    bucket_capacity: i64,

    /// Increases log verbosity; repeat for more detail. `RUST_LOG` takes
    /// precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate, or a path when `--file` is given.
    contents: Option<String>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .try_init()
                             .ok();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let Some(contents) = args.contents else {
        let stdin = io::stdin();
        let mut shell = Shell::new(stdin.lock(), io::stdout());
        return match shell.run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("I/O error: {e}");
                ExitCode::FAILURE
            },
        };
    };

    let sources = if args.file {
        match fs::read_to_string(&contents) {
            Ok(text) => text.lines()
                            .map(str::trim)
                            .filter(|line| !line.is_empty())
                            .map(str::to_string)
                            .collect::<Vec<_>>(),
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        vec![contents]
    };

    let capacities = Capacities { input:  args.input_capacity,
                                  bucket: args.bucket_capacity, };

    let mut failed = false;
    for (i, source) in sources.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match render(source, args.view, capacities) {
            Ok(view) => println!("{view}"),
            Err(e) => {
                eprintln!("{source}: {e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
