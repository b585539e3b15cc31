// file: src/bin/convert.rs
// description: temperature converter entry point (`convert <value> <F|C>`)
// reference: application bootstrap

use clap::{ArgAction, Parser};
use tracing::{debug, error};
use utilkit::Temperature;
use utilkit::utils::logging::{format_error, init_logger};

#[derive(Parser)]
#[command(name = "convert")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Convert a temperature between Fahrenheit and Celsius", long_about = None)]
#[command(allow_negative_numbers = true)]
#[command(after_help = "Examples:\n  convert 32 F     # prints 0 C\n  convert 100 C    # prints 212 F\n  convert -40 C    # prints -40 F")]
struct Cli {
    /// Temperature magnitude, e.g. 98.6
    value: String,

    /// Unit of the given value: F or C
    unit: String,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    init_logger(cli.color, cli.verbose);

    std::process::exit(run(&cli));
}

/// Returns the process exit code: 0 on success, 1 on invalid input.
fn run(cli: &Cli) -> i32 {
    let temperature = match Temperature::parse(&cli.value, &cli.unit) {
        Ok(t) => t,
        Err(e) => {
            error!("Rejected input {:?} {:?}: {}", cli.value, cli.unit, e);
            eprintln!("{}", format_error(&e.to_string()));
            return 1;
        }
    };

    debug!("Converting {}", temperature);
    println!("{}", temperature.convert());

    0
}
