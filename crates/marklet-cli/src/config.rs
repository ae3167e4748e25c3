//! Command-line parsing.

use std::path::PathBuf;
use std::thread;

use crate::error::CliError;

/// What the command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Run(Config),
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub command: Command,
    pub files: Vec<PathBuf>,
    /// Directory for rendered pages; `None` writes next to each input.
    pub out_dir: Option<PathBuf>,
    pub to_stdout: bool,
    /// Skip the page wrapper and emit the bare fragment.
    pub fragment: bool,
    pub css: Option<PathBuf>,
    pub title: Option<String>,
    pub jobs: usize,
    pub format: OutputFormat,
    pub verbosity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Render,
    Tokens,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn parse_args(args: &[String]) -> Result<Action, CliError> {
    let mut config = Config {
        command: Command::Render,
        files: Vec::new(),
        out_dir: None,
        to_stdout: false,
        fragment: false,
        css: None,
        title: None,
        jobs: default_jobs(),
        format: OutputFormat::Text,
        verbosity: 0,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Action::Help),
            "-V" | "--version" => return Ok(Action::Version),
            "-v" | "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
            "-vv" => config.verbosity = config.verbosity.saturating_add(2),
            "--json" => config.format = OutputFormat::Json,
            "--stdout" => config.to_stdout = true,
            "--fragment" => config.fragment = true,
            "-o" | "--out-dir" => config.out_dir = Some(value(&mut iter, arg)?.into()),
            "--css" => config.css = Some(value(&mut iter, arg)?.into()),
            "--title" => config.title = Some(value(&mut iter, arg)?.to_string()),
            "-j" | "--jobs" => {
                let raw = value(&mut iter, arg)?;
                config.jobs = match raw.parse::<usize>() {
                    Ok(n) if n > 0 => n,
                    _ => return Err(CliError::usage(format!("invalid job count: {}", raw))),
                };
            }
            "render" => config.command = Command::Render,
            "tokens" => config.command = Command::Tokens,
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(CliError::usage(format!("unknown option: {}", arg)));
            }
            _ => config.files.push(PathBuf::from(arg)),
        }
    }

    if config.files.is_empty() {
        return Err(CliError::usage("no input file specified"));
    }

    Ok(Action::Run(config))
}

fn value<'a>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<&'a str, CliError> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| CliError::usage(format!("{} requires a value", flag)))
}

fn default_jobs() -> usize {
    thread::available_parallelism().map_or(1, |n| n.get())
}

pub fn print_help() {
    eprintln!(
        r#"marklet - convert Markdown files to HTML

USAGE:
    marklet [OPTIONS] [COMMAND] <FILE>...

COMMANDS:
    render      Render each file to an HTML page (default)
    tokens      Print the token stream of each file

OPTIONS:
    -o, --out-dir <DIR>   Write pages into DIR instead of next to the input
        --stdout          Print rendered HTML instead of writing files
        --fragment        Emit the HTML fragment without the page wrapper
        --css <FILE>      Use FILE as the page stylesheet
        --title <TEXT>    Page title (default: input file stem)
    -j, --jobs <N>        Number of worker threads
        --json            Print tokens as JSON (tokens command)
    -v, --verbose         More logging; repeat for more detail
    -h, --help            Print help information
    -V, --version         Print version information

EXAMPLES:
    marklet notes.md                  Write notes.html next to notes.md
    marklet -o site/ a.md b.md        Render two files into site/
    marklet --stdout --fragment a.md  Print the bare HTML fragment
    marklet tokens --json a.md        Dump tokens as JSON
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("marklet")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    fn config(list: &[&str]) -> Config {
        match parse_args(&args(list)).unwrap() {
            Action::Run(config) => config,
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn defaults() {
        let config = config(&["a.md"]);
        assert_eq!(config.command, Command::Render);
        assert_eq!(config.files, vec![PathBuf::from("a.md")]);
        assert!(!config.fragment && !config.to_stdout);
        assert!(config.jobs >= 1);
        assert_eq!(config.verbosity, 0);
    }

    #[test]
    fn flags_and_values() {
        let config = config(&[
            "tokens", "--json", "-o", "out", "--css", "x.css", "--title", "T", "-j", "3", "-vv",
            "a.md", "b.md",
        ]);
        assert_eq!(config.command, Command::Tokens);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.out_dir, Some(PathBuf::from("out")));
        assert_eq!(config.css, Some(PathBuf::from("x.css")));
        assert_eq!(config.title.as_deref(), Some("T"));
        assert_eq!(config.jobs, 3);
        assert_eq!(config.verbosity, 2);
        assert_eq!(config.files.len(), 2);
    }

    #[test]
    fn help_and_version() {
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), Action::Help);
        assert_eq!(parse_args(&args(&["-V", "a.md"])).unwrap(), Action::Version);
    }

    #[test]
    fn usage_errors() {
        for bad in [
            &[][..],
            &["--bogus", "a.md"][..],
            &["-j", "0", "a.md"][..],
            &["a.md", "--css"][..],
        ] {
            let err = parse_args(&args(bad)).unwrap_err();
            assert_eq!(err.kind, crate::error::CliErrorKind::Usage, "{:?}", bad);
        }
    }
}
