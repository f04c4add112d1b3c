// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod input;
mod output;

use std::{io::Write, path::{Path, PathBuf}, process::exit};

use anyhow::Context;
use clap::Subcommand;
use colored::Colorize;
use log::{debug, LevelFilter};
use tiger::{ast, cfg, ConfigRoot};
use tiger_compiler::{bytecode::Translator, CEmitter};

use self::{
    input::{load_config, read_program},
    output::{c_output_path, write_atomically},
};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints a control-flow graph program (JSON) as C.
    C {
        /// The program to read, or `-` for stdin.
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Translates a typed syntax tree (JSON) to stack-machine bytecode.
    Bytecode {
        /// The program to read, or `-` for stdin.
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Writes the instructions as JSON records instead of a listing.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let args = Args::parse_args();

    let config = match load_config(Path::new(input::CONFIG_FILE_NAME)) {
        Ok(config) => config,
        Err(e) => report_and_exit(&e),
    };

    initialize_logger(args.verbose || config.log.debug);

    let result = match args.command {
        Commands::C { input, output } => compile_c(&config, &input, output),
        Commands::Bytecode { input, output, json } => compile_bytecode(&input, output, json),
    };

    if let Err(e) = result {
        report_and_exit(&e);
    }
}

fn initialize_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    env_logger::builder()
        .filter_level(level)
        .parse_env("TIGER_LOG")
        .init();
}

fn compile_c(config: &ConfigRoot, input: &Path, output: Option<PathBuf>) -> anyhow::Result<()> {
    let program: cfg::Program = read_program(input)?;
    let path = c_output_path(input, output, &config.output);
    debug!("Writing C for {} to {}", input.display(), path.display());

    write_atomically(&path, |file| {
        CEmitter::new(file).emit_program(&program)?;
        Ok(())
    })
}

fn compile_bytecode(input: &Path, output: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let program: ast::Program = read_program(input)?;

    let mut translator = Translator::new();
    let program = translator.translate_program(&program)
        .with_context(|| format!("failed to translate {}", input.display()))?;

    let render = |writer: &mut dyn Write| -> anyhow::Result<()> {
        if json {
            serde_json::to_writer_pretty(&mut *writer, &program)?;
            writeln!(writer)?;
        } else {
            write!(writer, "{program}")?;
        }
        Ok(())
    };

    match output {
        Some(path) => write_atomically(&path, |file| render(file)),
        None => render(&mut std::io::stdout().lock()),
    }
}

fn report_and_exit(error: &anyhow::Error) -> ! {
    eprintln!("{}: {}", "error".red().bold(), error.to_string().bold());

    for cause in error.chain().skip(1) {
        eprintln!("  {} {cause}", "caused by:".bright_black());
    }

    exit(1);
}
