//! CodeMorph Driver
//!
//! Command-line interface for the C-to-Python translator. Reads C source
//! from a file or stdin, and can emit the generated Python, the token
//! stream, or the parsed syntax tree.

use clap::{Parser, Subcommand};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use morph_common::{CompilerError, Diagnostic, ErrorReporter};
use morph_frontend::ast::printer;
use morph_frontend::lexer::{tokenize, TokenKind};
use morph_frontend::{parse, translate};

#[derive(Parser)]
#[command(name = "cmorph")]
#[command(about = "CodeMorph C-to-Python translator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate C source to Python
    Translate {
        /// Input C source file (stdin when omitted)
        input: Option<PathBuf>,

        /// Output Python file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Dump the token stream and captured macro definitions
    Tokens {
        /// Input C source file (stdin when omitted)
        input: Option<PathBuf>,

        /// Emit the dump as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the parsed syntax tree
    Ast {
        /// Input C source file (stdin when omitted)
        input: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Translate { input, output } => {
            translate_command(input.as_deref(), output.as_deref())
        }
        Commands::Tokens { input, json } => tokens_command(input.as_deref(), json),
        Commands::Ast { input } => ast_command(input.as_deref()),
    };

    match result {
        Ok(0) => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn read_source(input: Option<&Path>) -> Result<String, CompilerError> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Print diagnostics to stderr and return the number of errors
fn report_diagnostics(diagnostics: &[Diagnostic]) -> usize {
    let mut reporter = ErrorReporter::new();
    for diagnostic in diagnostics {
        reporter.report(diagnostic.clone());
    }
    reporter.print_diagnostics();
    if !diagnostics.is_empty() {
        eprintln!("{}", reporter.summary());
    }
    reporter.error_count()
}

fn translate_command(
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<usize, CompilerError> {
    let source = read_source(input)?;
    let result = translate(&source);
    let error_count = report_diagnostics(&result.diagnostics);

    match output {
        Some(path) => fs::write(path, &result.python)?,
        None => print!("{}", result.python),
    }

    Ok(error_count)
}

fn tokens_command(input: Option<&Path>, json: bool) -> Result<usize, CompilerError> {
    let source = read_source(input)?;
    let (tokens, macros) = tokenize(&source);

    if json {
        let value = serde_json::json!({
            "tokens": tokens,
            "macros": macros,
        });
        let text =
            serde_json::to_string_pretty(&value).map_err(|e| CompilerError::InternalError {
                message: e.to_string(),
            })?;
        println!("{}", text);
    } else {
        for token in &tokens {
            println!("{}", token);
        }
        if !macros.is_empty() {
            println!();
            println!("Macros:");
            for m in &macros {
                let shape = if m.is_function_like {
                    format!("({})", m.parameters.join(", "))
                } else {
                    String::new()
                };
                let validity = if m.is_valid { "" } else { "  [invalid]" };
                println!(
                    "  {}{} = {:?} (line {}){}",
                    m.name, shape, m.body, m.defining_line, validity
                );
            }
        }
    }

    let error_count = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Error)
        .count();
    Ok(error_count)
}

fn ast_command(input: Option<&Path>) -> Result<usize, CompilerError> {
    let source = read_source(input)?;
    let (tokens, _) = tokenize(&source);
    let (program, diagnostics) = parse(tokens);
    let error_count = report_diagnostics(&diagnostics);

    print!("{}", printer::dump(&program));
    Ok(error_count)
}
