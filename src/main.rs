use std::{env, process::ExitCode};

use logger::Severity;

static USAGE: &str = "Usage: levelprint [-v|--verbose] [--color|--no-color] <level> <message>...";

fn main() -> ExitCode {
    let mut severity = None;
    let mut words = Vec::new();

    for arg in env::args().skip(1) {
        if severity.is_some() {
            words.push(arg);
            continue;
        }
        match arg.as_str() {
            "-v" | "--verbose" => logger::set_verbose(true),
            "--color" => logger::set_color(true),
            "--no-color" => logger::set_color(false),
            "-h" | "--help" => {
                println!("{}", USAGE);
                return ExitCode::SUCCESS;
            }
            _ => match arg.parse::<Severity>() {
                Ok(parsed) => severity = Some(parsed),
                Err(e) => {
                    eprintln!("{}\n{}", e, USAGE);
                    return ExitCode::from(2);
                }
            },
        }
    }

    let Some(severity) = severity else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    logger::emit(severity, format_args!("{}", words.join(" ")));
    ExitCode::SUCCESS
}
