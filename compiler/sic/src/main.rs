//! S interpreter CLI.

use sic::commands::{
    interpret_stdin, parse_run_options, print_language_help, run_file, CommandStatus, RunOptions,
};

fn main() {
    sic::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        finish(interpret_stdin(&RunOptions::default()));
        return;
    };

    match command.as_str() {
        "run" => {
            let (options, positional) = options_or_exit(&args[2..]);
            let [path] = positional.as_slice() else {
                eprintln!("Usage: s run <file> [--max-depth=<n>]");
                std::process::exit(1);
            };
            finish(run_file(path, &options));
        }
        "interpret" => {
            let (options, positional) = options_or_exit(&args[2..]);
            if !positional.is_empty() {
                eprintln!("Usage: s interpret [--max-depth=<n>]");
                std::process::exit(1);
            }
            finish(interpret_stdin(&options));
        }
        "help-lang" | "--help-s" => {
            print_language_help(&s_eval::stdout_handler());
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" => {
            println!("S Interpreter {}", env!("CARGO_PKG_VERSION"));
        }
        _ if command.starts_with("--max-depth=") => {
            let (options, positional) = options_or_exit(&args[1..]);
            match positional.as_slice() {
                [] => finish(interpret_stdin(&options)),
                [path] => finish(run_file(path, &options)),
                _ => {
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        _ => {
            // A path to an existing file runs it.
            if std::path::Path::new(command).is_file() {
                let (options, _) = options_or_exit(&args[2..]);
                finish(run_file(command, &options));
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn options_or_exit(args: &[String]) -> (RunOptions, Vec<&str>) {
    match parse_run_options(args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

fn finish(status: CommandStatus) {
    if status != CommandStatus::Success {
        std::process::exit(status.exit_code());
    }
}

fn print_usage() {
    println!("S Interpreter");
    println!();
    println!("Usage: s [command] [options]");
    println!();
    println!("Commands:");
    println!("  run <file>           Run an S program");
    println!("  <file>               Same as `run <file>`");
    println!("  interpret            Type a program, end it with an empty line (default)");
    println!("  help-lang, --help-s  Show the S language reference");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --max-depth=<n>      Maximum function call depth (default: 1000, 0 = unlimited)");
    println!();
    println!("Environment:");
    println!("  S_LOG=<filter>       Log to stderr, e.g. S_LOG=s_eval=debug");
    println!();
    println!("Examples:");
    println!("  s run hello.s");
    println!("  s hello.s --max-depth=0");
    println!("  s help-lang");
}
