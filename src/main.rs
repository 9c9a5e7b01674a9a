//! Prompt Stencil CLI
//!
//! Usage:
//!   prompt-stencil scan [FILE]
//!   prompt-stencil check [FILE]
//!   prompt-stencil render [FILE] --variables vars.toml --set name=value
//!   prompt-stencil extract [FILE] [--list]
//!
//! The template is read from FILE, or from stdin when no file is given.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use prompt_stencil::{
    extract_candidates, render, scan_variables, validate_template, Value, ValueMap, VariableFile,
};

#[derive(Parser)]
#[command(name = "prompt-stencil")]
#[command(about = "Template engine for reusable prompts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the variables referenced in a template
    Scan {
        /// Template file (reads from stdin if not provided)
        input: Option<PathBuf>,
    },

    /// Validate template syntax
    Check {
        /// Template file (reads from stdin if not provided)
        input: Option<PathBuf>,
    },

    /// Render a template with supplied values
    Render {
        /// Template file (reads from stdin if not provided)
        input: Option<PathBuf>,

        /// Variable declarations (TOML, [[variable]] entries)
        #[arg(short = 'V', long)]
        variables: Option<PathBuf>,

        /// Values file (TOML table of name = value)
        #[arg(long)]
        values: Option<PathBuf>,

        /// Set one value as name=value (repeatable, overrides the file)
        #[arg(short = 's', long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },

    /// Propose placeholders for a plain prompt
    Extract {
        /// Prompt file (reads from stdin if not provided)
        input: Option<PathBuf>,

        /// Print detected variable names instead of the rewritten prompt
        #[arg(short, long)]
        list: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan { input } => {
            let (content, _) = read_input(input.as_deref());
            for name in scan_variables(&content) {
                println!("{}", name);
            }
            ExitCode::SUCCESS
        }

        Command::Check { input } => {
            let (content, filename) = read_input(input.as_deref());
            let report = validate_template(&content);
            if report.is_valid() {
                let count = scan_variables(&content).len();
                println!("template is valid ({} variables)", count);
                ExitCode::SUCCESS
            } else {
                for error in &report.errors {
                    eprintln!("{}", error.format(&content, &filename));
                }
                ExitCode::FAILURE
            }
        }

        Command::Render {
            input,
            variables,
            values,
            set,
        } => {
            let (content, _) = read_input(input.as_deref());

            let specs = match &variables {
                Some(path) => match VariableFile::from_file(path) {
                    Ok(file) => file.variables,
                    Err(e) => {
                        eprintln!("Error loading variables '{}': {}", path.display(), e);
                        return ExitCode::FAILURE;
                    }
                },
                None => Vec::new(),
            };

            let mut value_map = match &values {
                Some(path) => match load_values(path) {
                    Ok(map) => map,
                    Err(message) => {
                        eprintln!("Error loading values '{}': {}", path.display(), message);
                        return ExitCode::FAILURE;
                    }
                },
                None => ValueMap::new(),
            };
            for pair in &set {
                match pair.split_once('=') {
                    Some((name, value)) => {
                        value_map.insert(name.to_string(), Value::from(value));
                    }
                    None => {
                        eprintln!("Error: --set expects name=value, got '{}'", pair);
                        return ExitCode::FAILURE;
                    }
                }
            }

            let outcome = render(&content, &specs, &value_map);
            if outcome.validation.is_valid() {
                println!("{}", outcome.text);
                ExitCode::SUCCESS
            } else {
                for message in outcome.validation.messages() {
                    eprintln!("{}", message);
                }
                ExitCode::FAILURE
            }
        }

        Command::Extract { input, list } => {
            let (content, _) = read_input(input.as_deref());
            let extraction = extract_candidates(&content);
            if list {
                for name in &extraction.detected_variables {
                    println!("{}", name);
                }
            } else {
                println!("{}", extraction.templated_content);
            }
            ExitCode::SUCCESS
        }
    }
}

/// Read the template from a file, or stdin when no path is given.
/// Returns the content and a display name for error reports.
fn read_input(path: Option<&Path>) -> (String, String) {
    match path {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

/// Load a flat TOML table of `name = value` pairs
fn load_values(path: &Path) -> Result<ValueMap, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let map: HashMap<String, Value> = toml::from_str(&content).map_err(|e| e.to_string())?;
    Ok(map)
}
