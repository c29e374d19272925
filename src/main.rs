use clap::{Parser as ClapParser, Subcommand};
use fexpr::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "fexpr")]
#[command(about = "fexpr - a filter expression language front end")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a query and validate its syntax
    Check {
        /// The query to parse (reads from stdin if not provided)
        query: Option<String>,

        /// Print the parsed AST as JSON
        #[arg(long)]
        ast: bool,

        /// Pretty-print the AST output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Dump the token stream of a query
    Tokens {
        /// The query to lex (reads from stdin if not provided)
        query: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { query, ast, pretty } => run_check(query, ast, pretty),
        Commands::Tokens { query } => run_tokens(query),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_query(query: Option<String>) -> Result<String, CliError> {
    match query {
        Some(q) => Ok(q),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Ok(buffer)
        }
        None => Err(CliError::NoQuery),
    }
}

fn run_check(query: Option<String>, ast: bool, pretty: bool) -> Result<(), CliError> {
    let options = CheckOptions {
        query: read_query(query)?,
        ast,
        pretty,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Ast(json) => {
            let rendered = if pretty {
                serde_json::to_string_pretty(&json)
            } else {
                serde_json::to_string(&json)
            }
            .map_err(|e| CliError::Io(io::Error::other(e)))?;
            println!("{}", rendered);
        }
    }
    Ok(())
}

fn run_tokens(query: Option<String>) -> Result<(), CliError> {
    let query = read_query(query)?;
    for line in cli::dump_tokens(&query)? {
        println!("{}", line);
    }
    Ok(())
}
