//! Marklet CLI - Convert Markdown files to HTML pages
//!
//! Usage:
//!   marklet [OPTIONS] [COMMAND] <FILE>...
//!
//! Commands:
//!   render    Render each file to an HTML page (default)
//!   tokens    Print the token stream of each file

mod config;
mod dump;
mod error;
mod job;
mod logger;
mod page;

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

use config::{Action, Command, Config};
use error::CliError;
use job::Output;

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let config = match config::parse_args(args)? {
        Action::Run(config) => config,
        Action::Help => {
            config::print_help();
            return Ok(());
        }
        Action::Version => {
            println!("marklet {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
    };

    logger::init(config.verbosity);

    match config.command {
        Command::Render => cmd_render(&config),
        Command::Tokens => cmd_tokens(&config),
    }
}

fn cmd_render(config: &Config) -> Result<(), CliError> {
    let css = page::load_css(config.css.as_deref())?;
    if let Some(dir) = &config.out_dir {
        if !config.to_stdout {
            fs::create_dir_all(dir).map_err(|e| CliError::write(dir, e))?;
        }
    }

    let targets = if config.to_stdout {
        None
    } else {
        Some(job::plan_outputs(&config.files, config.out_dir.as_deref()))
    };

    let results = job::run_pool(config.files.len(), config.jobs, |i| -> Result<Output, CliError> {
        let target = match &targets {
            Some(planned) => Some(planned[i].clone()?),
            None => None,
        };
        job::render_document(&config.files[i], target.as_deref(), config, &css)
    });

    let mut printed = Vec::new();
    let failed = collect(results, |output| match output {
        Output::Written(path) => log::info!("wrote {}", path.display()),
        Output::Stdout(html) => printed.push(html),
    });

    print_all(&printed)?;
    finish(failed, config.files.len())
}

fn cmd_tokens(config: &Config) -> Result<(), CliError> {
    let results = job::run_pool(config.files.len(), config.jobs, |i| {
        job::dump_document(&config.files[i], config)
    });

    let mut printed = Vec::new();
    let failed = collect(results, |dump| printed.push(dump));

    print_all(&printed)?;
    finish(failed, config.files.len())
}

/// Hand successful results to `ok`, log the failures, and count them.
fn collect<T>(results: Vec<Result<T, CliError>>, mut ok: impl FnMut(T)) -> usize {
    let mut failed = 0;
    for result in results {
        match result {
            Ok(value) => ok(value),
            Err(e) => {
                log::warn!("{}", e);
                failed += 1;
            }
        }
    }
    failed
}

fn print_all(outputs: &[String]) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for text in outputs {
        out.write_all(text.as_bytes())
            .map_err(|e| CliError::new(error::CliErrorKind::Write, format!("stdout: {}", e)))?;
    }
    out.flush()
        .map_err(|e| CliError::new(error::CliErrorKind::Write, format!("stdout: {}", e)))
}

fn finish(failed: usize, total: usize) -> Result<(), CliError> {
    if failed > 0 {
        Err(CliError::partial(failed, total))
    } else {
        Ok(())
    }
}
