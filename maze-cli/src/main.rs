use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use maze_cli::{Args, CliError, Outcome, Settings, read_maze, run};
use maze_crossterm::CrosstermPrinter;

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default.as_str()))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn execute(args: &Args) -> Result<Outcome, CliError> {
    let settings = Settings::from_args(args)?;
    log::info!("reading maze from {}", args.path.display());
    let text = read_maze(&args.path)?;

    let printer = match settings.color {
        Some(enabled) => CrosstermPrinter::new().with_color(enabled),
        None => CrosstermPrinter::for_stdout(),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&text, &settings, &printer, &mut out)
}

fn main() -> ExitCode {
    // Wrong arity exits here with a usage message and status 2.
    let args = Args::parse();
    init_logging(args.verbose);

    match execute(&args) {
        Ok(Outcome::Solved(_)) => ExitCode::SUCCESS,
        Ok(Outcome::Unsolvable { .. }) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
