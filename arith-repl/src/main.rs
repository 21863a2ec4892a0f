use arith_compute::{
    commute::commuted_expressions,
    eval::Eval,
    fmt::fmt_compact,
    simplify::simplify_step,
};
use arith_parser::parser::{self, error::Error};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{io::{self, IsTerminal, Read}, process::ExitCode};

/// Parses and evaluates the input, printing `{expression} = {value}` with the
/// expression rendered canonically.
fn print_value(input: &str) -> Result<(), Error> {
    let expr = parser::parse(input)?;
    println!("{} = {}", expr, expr.eval());
    Ok(())
}

/// Prints the worked solution line by line, starting from the canonical
/// rendering and evaluating one operation per line until a number remains.
fn print_steps(input: &str) -> Result<(), Error> {
    let mut current = parser::parse(input)?.to_string();
    println!("{current}");
    loop {
        let next = simplify_step(&current, fmt_compact)?;
        if next == current {
            return Ok(());
        }
        println!("{next}");
        current = next;
    }
}

/// Prints every commuted form of the input, one per line.
fn print_commutations(input: &str) -> Result<(), Error> {
    for form in commuted_expressions(input)? {
        println!("{form}");
    }
    Ok(())
}

/// Prints the offending input with a caret under the failure offset, then the
/// error message.
fn report_plain(input: &str, err: &Error) {
    eprintln!("{input}");
    eprintln!("{}^", " ".repeat(err.index()));
    eprintln!("{}", err.message());
}

/// Evaluates a single input string and exits.
fn run_once(input: &str, steps: bool, commute: bool) -> ExitCode {
    let result = if commute {
        print_commutations(input)
    } else if steps {
        print_steps(input)
    } else {
        print_value(input)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_plain(input, &err);
            ExitCode::FAILURE
        },
    }
}

/// Runs the interactive prompt, reporting errors as highlighted spans.
fn repl() -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        },
    };

    fn process_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        match parser::parse(&input) {
            Ok(expr) => println!("{} = {}", expr, expr.eval()),
            Err(err) => {
                let _ = err
                    .build_report("input")
                    .eprint(("input", ariadne::Source::from(input)));
            },
        }
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{}", err),
            }
            break;
        }
    }

    ExitCode::SUCCESS
}

/// Removes `flag` from the arguments, reporting whether it was present.
fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|arg| arg != flag);
    args.len() != before
}

fn main() -> ExitCode {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let steps = take_flag(&mut args, "--steps");
    let commute = take_flag(&mut args, "--commute");

    if !args.is_empty() {
        // expression given on the command line, possibly split across arguments
        let input = args.join(" ");
        run_once(&input, steps, commute)
    } else if !io::stdin().is_terminal() {
        // read the expression from stdin
        let mut input = String::new();
        if io::stdin().read_to_string(&mut input).is_err() {
            return ExitCode::FAILURE;
        }
        let input = input.trim();
        if input.is_empty() {
            return ExitCode::SUCCESS;
        }
        run_once(input, steps, commute)
    } else {
        repl()
    }
}
