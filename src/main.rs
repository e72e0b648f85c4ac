// src/main.rs
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use caption_core::diagnostic::describe;
use caption_core::{builtin_palette, load_palette, render, MarkupParser};
use captionkit::dump::dump_elements;
use captionkit::{AnsiRenderer, Cli};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let source = cli.read_source()?;
    let palette = match &cli.palette {
        Some(path) => load_palette(path)
            .with_context(|| format!("loading palette {}", path.display()))?,
        None => builtin_palette(),
    };
    let config = cli.caption_config()?;

    let parser = MarkupParser::new(&palette).with_options(config.parse_options());
    let elements = match parser.parse(&source) {
        Ok(elements) => elements,
        Err(err) => {
            eprintln!("{}", describe(&source, &err));
            return Ok(ExitCode::FAILURE);
        }
    };
    debug!(elements = elements.len(), "caption parsed");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.dump {
        dump_elements(&mut out, &elements)?;
        out.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut renderer = AnsiRenderer::new(out);
    if cli.no_color {
        renderer = renderer.without_color();
    }
    let layout = render(&elements, &mut renderer, &config)?;
    renderer.close(layout.line_count)?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("captionkit: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
