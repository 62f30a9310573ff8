use std::fs;

use clap::Parser;
use log::LevelFilter;
use shuntcalc::{
    error::ExpressionError,
    interpreter::{
        converter::{convert, render_postfix},
        evaluator::evaluate,
        lexer::tokenize,
    },
};

/// shuntcalc evaluates arithmetic expressions with `+ - * /`, parentheses and
/// `sin`/`cos` in degrees.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as a path and evaluate every non-blank line of the
    /// file.
    #[arg(short, long)]
    file: bool,

    /// Print the postfix form of each expression before its result.
    #[arg(short, long)]
    postfix: bool,

    /// Raise the log level: once for debug, twice for trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn run(expression: &str, show_postfix: bool) -> Result<f64, ExpressionError> {
    let postfix = convert(&tokenize(expression))?;
    if show_postfix {
        println!("{}", render_postfix(&postfix));
    }
    Ok(evaluate(&postfix)?)
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();

    let expressions: Vec<String> = if args.file {
        let script = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                   &args.contents);
                         std::process::exit(1);
                     });
        script.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect()
    } else {
        vec![args.contents]
    };

    let mut failed = false;
    for expression in &expressions {
        match run(expression, args.postfix) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{expression}: {e}");
                failed = true;
            },
        }
    }

    if failed {
        std::process::exit(1);
    }
}
