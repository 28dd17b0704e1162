use clap::Parser;
use radixa::{Base, convert, error::ConversionError};

/// radixa converts values between numeral bases (2-16) and text.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The base the input is written in: 2-16, or "text".
    #[arg(short, long, default_value = "10")]
    from: Base,

    /// The base to render the result in: 2-16, or "text".
    #[arg(short, long, default_value = "16")]
    to: Base,

    /// The value to convert.
    input: String,
}

fn main() {
    let args = Args::parse();

    if args.input.trim().is_empty() {
        return;
    }

    if args.from == args.to {
        println!("TIP: Source and target bases cannot be the same.");
        return;
    }

    match convert(&args.input, args.from, args.to) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{}", friendly_message(&e));
            std::process::exit(1);
        },
    }
}

/// Maps an engine error to the message shown to the user, keyed on the
/// error kind rather than its text.
fn friendly_message(error: &ConversionError) -> String {
    match error {
        ConversionError::InvalidDigit { .. } | ConversionError::UnsupportedFeature => {
            format!("INVALID INPUT: {error}")
        },

        ConversionError::CodePointOutOfRange { .. } => {
            format!("INVALID NUMBER: {error}")
        },
    }
}
