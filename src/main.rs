//! CLI tool to inspect and validate tag documents.

use std::fs;
use std::process::ExitCode;

use tagtree::config::{Config, LogLevel};
use tagtree::{Error, Position, Token};

fn usage() {
    eprintln!("Usage: tagtree <command> [options] [files...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  dump      Print the parsed tag tree of each file");
    eprintln!("  validate  Check if file(s) parse without errors");
    eprintln!("  tokens    Print the token stream of each file");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --log-level <level>  trace, debug, info, warn or error");
    eprintln!("  --one-based          Report line and column numbers from 1");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TAGTREE_LOG_LEVEL, TAGTREE_ONE_BASED");
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        usage();
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let mut log_level = None;
    let mut one_based = false;
    let mut files = Vec::new();

    let mut rest = args[2..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--one-based" => one_based = true,
            "--log-level" => {
                let Some(value) = rest.next() else {
                    eprintln!("Error: --log-level needs a value");
                    return ExitCode::from(2);
                };
                match value.parse::<LogLevel>() {
                    Ok(level) => log_level = Some(level),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        return ExitCode::from(2);
                    }
                }
            }
            _ => files.push(arg.as_str()),
        }
    }

    let config = match Config::from_env() {
        Ok(config) => config.apply_overrides(log_level, one_based),
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };
    tagtree::logging::init_logging(&config);

    if !matches!(command, "dump" | "validate" | "tokens") {
        eprintln!("Unknown command: {command}");
        return ExitCode::from(2);
    }

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        let result = match command {
            "dump" => tagtree::parse_str(&content).map(|tags| {
                print!("{}", tagtree::outline(&tags));
            }),
            "validate" => tagtree::parse_str(&content).map(|tags| {
                let roots = tags.len();
                let total: usize = tags.iter().map(tagtree::ParsedTag::node_count).sum();
                eprintln!("{path}: valid ({roots} root tag(s), {total} tag(s))");
            }),
            _ => tagtree::tokenize(&content)
                .map(|tokens| print_tokens(&tokens, &config))
                .map_err(Error::from),
        };

        if let Err(e) = result {
            let at = present(e.position(), &config);
            eprintln!("{path}: {} at {at}", e.message());
            had_error = true;
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

const fn present(position: Position, config: &Config) -> Position {
    if config.one_based {
        position.one_based()
    } else {
        position
    }
}

fn print_tokens(tokens: &[Token], config: &Config) {
    for token in tokens {
        let at = present(token.position(), config);
        match token {
            Token::Value { content, end, .. } => {
                let end = present(*end, config);
                println!("{at}-{end}\tValue\t{content:?}");
            }
            Token::OpenTag { .. } => println!("{at}\tOpenTag"),
            Token::CloseTag { .. } => println!("{at}\tCloseTag"),
            Token::PropertyJoin { .. } => println!("{at}\tPropertyJoin"),
        }
    }
}
