use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::{ArgAction, Parser as ClapParser};
use monkey_syntax::{
    format_error,
    lexer::lexer::{tokenize, Lexer},
    Parser, ParserConfig, Recovery,
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Tokenizes or parses a Monkey source file and prints the result.
#[derive(Debug, ClapParser)]
#[command(name = "monkey-syntax", version, about)]
struct Cli {
    /// Source file to read; standard input when omitted
    path: Option<PathBuf>,

    /// Print the token stream instead of the parsed program
    #[arg(long)]
    tokens: bool,

    /// Skip to the next statement boundary after a statement with errors
    #[arg(long)]
    synchronize: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(io::stderr)
        .init();

    let file_name = cli
        .path
        .as_deref()
        .map_or_else(|| "<stdin>".to_string(), |path| path.display().to_string());

    let source = match read_source(cli.path.as_deref()) {
        Ok(source) => source,
        Err(err) => {
            error!(file = %file_name, "failed to read source");
            eprintln!("Error: could not read {}: {}", file_name, err);
            return ExitCode::from(2);
        }
    };

    if cli.tokens {
        for token in tokenize(source.as_str()) {
            println!("{}", token);
        }
        return ExitCode::SUCCESS;
    }

    let config = ParserConfig {
        recovery: if cli.synchronize {
            Recovery::Synchronize
        } else {
            Recovery::Lenient
        },
    };

    let start = Instant::now();
    let mut parser = Parser::with_config(Lexer::new(source.as_str()), config);
    let program = parser.parse_program();
    debug!(elapsed = ?start.elapsed(), "parsed {}", file_name);

    println!("{}", program);

    if parser.diagnostics().is_empty() {
        return ExitCode::SUCCESS;
    }

    for diagnostic in parser.diagnostics() {
        eprint!("{}", format_error(diagnostic, &source, &file_name));
    }
    eprintln!("{} error(s) in {}", parser.diagnostics().len(), file_name);

    ExitCode::FAILURE
}

fn read_source(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    // The binary and the library share the `monkey_syntax` target.
    match v {
        0 => "monkey_syntax=warn",
        1 => "monkey_syntax=debug",
        _ => "monkey_syntax=trace",
    }
}
