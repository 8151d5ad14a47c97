//! RPN Generator Driver
//!
//! Reads the lexer's token stream as JSON, runs the generator and prints
//! the postfix program with its label table.

use clap::{Parser, Subcommand};
use log::info;
use rpn_generator::{GeneratorOptions, RpnGenerator, RpnProgram, Token};
use serde::Deserialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rpng")]
#[command(about = "Postfix program generator")]
#[command(version = "0.1.0")]
struct Cli {
    /// Log generator progress (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the postfix program for a lexed token stream
    Generate {
        /// Lexer output: `{"tokens": [...]}` or a bare token array
        input: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include the step-by-step trace
        #[arg(long)]
        steps: bool,

        /// Emit the whole result as JSON
        #[arg(long)]
        json: bool,

        /// The input has no `program <name> { ... }` frame
        #[arg(long)]
        no_frame: bool,
    },
}

/// Token stream as written by the lexer
#[derive(Deserialize)]
#[serde(untagged)]
enum LexerOutput {
    Framed { tokens: Vec<Token> },
    Bare(Vec<Token>),
}

impl LexerOutput {
    fn into_tokens(self) -> Vec<Token> {
        match self {
            LexerOutput::Framed { tokens } | LexerOutput::Bare(tokens) => tokens,
        }
    }
}

/// What to print and how
struct Report {
    steps: bool,
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Generate { input, output, steps, json, no_frame } => {
            let options = GeneratorOptions {
                strip_frame: !no_frame,
                record_steps: steps || json,
            };
            let report = Report { steps, json };
            if let Err(e) = generate_file(&input, output.as_deref(), options, &report) {
                eprintln!("Error generating RPN: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn generate_file(
    input_path: &Path,
    output_path: Option<&Path>,
    options: GeneratorOptions,
    report: &Report,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Reading tokens from {}", input_path.display());
    let source = fs::read_to_string(input_path)?;
    let text = generate_source(&source, options, report)?;

    match output_path {
        Some(path) => {
            fs::write(path, &text)?;
            println!("Result written to: {}", path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}

fn generate_source(
    source: &str,
    options: GeneratorOptions,
    report: &Report,
) -> Result<String, Box<dyn std::error::Error>> {
    let tokens = serde_json::from_str::<LexerOutput>(source)?.into_tokens();
    let program = RpnGenerator::with_options(options).generate(&tokens)?;

    if report.json {
        let mut text = serde_json::to_string_pretty(&program)?;
        text.push('\n');
        return Ok(text);
    }

    Ok(render(&program, report.steps)?)
}

fn render(program: &RpnProgram, with_steps: bool) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "RPN: {}", program)?;

    writeln!(out, "\nLabels:")?;
    for (label, position) in &program.label_positions {
        writeln!(out, "  LABEL[{}] -> {}", label, position)?;
    }

    if with_steps {
        writeln!(out, "\nSteps:")?;
        for (index, step) in program.steps.iter().enumerate() {
            writeln!(out, "  {:>3}  {}", index, step)?;
        }
    }

    Ok(out)
}
