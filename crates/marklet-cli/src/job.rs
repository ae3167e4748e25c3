//! Per-document work and the worker pool that runs it.

use std::collections::hash_map::{Entry, HashMap};
use std::ffi::OsStr;
use std::fs;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use marklet_core::{Lexer, Renderer};

use crate::config::{Config, OutputFormat};
use crate::dump;
use crate::error::CliError;
use crate::page;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Where a rendered document ended up.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Written(PathBuf),
    Stdout(String),
}

// =============================================================================
// Worker Pool
// =============================================================================

/// Run `work` for every index in `0..count` on up to `jobs` threads.
///
/// Workers pull the next index from a shared counter, so completion order is
/// arbitrary; the returned results are in index order.
pub fn run_pool<T, F>(count: usize, jobs: usize, work: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    let workers = jobs.clamp(1, count.max(1));
    let next = AtomicUsize::new(0);

    let mut results: Vec<(usize, T)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                scope.spawn(|| {
                    let mut done = Vec::new();
                    loop {
                        let index = next.fetch_add(1, Ordering::Relaxed);
                        if index >= count {
                            break;
                        }
                        done.push((index, work(index)));
                    }
                    done
                })
            })
            .collect();

        let mut all = Vec::with_capacity(count);
        for handle in handles {
            match handle.join() {
                Ok(done) => all.extend(done),
                Err(payload) => panic::resume_unwind(payload),
            }
        }
        all
    });

    log::debug!("{} document(s) processed by {} worker(s)", count, workers);
    results.sort_unstable_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, result)| result).collect()
}

// =============================================================================
// Documents
// =============================================================================

/// Render one document to a page (or fragment).
///
/// With a `target` the page is written there; without one it is returned
/// for stdout.
pub fn render_document(
    path: &Path,
    target: Option<&Path>,
    config: &Config,
    css: &str,
) -> Result<Output, CliError> {
    let source = read_source(path)?;

    let fragment = Renderer::new().render(&Lexer::new(&source).tokenize());
    let html = if config.fragment {
        fragment
    } else {
        let stem = stem(path);
        let title = config.title.as_deref().unwrap_or(&stem);
        page::wrap(&fragment, title, css)
    };

    let Some(target) = target else {
        return Ok(Output::Stdout(html));
    };
    fs::write(target, html).map_err(|e| CliError::write(target, e))?;
    log::debug!("wrote {}", target.display());
    Ok(Output::Written(target.to_path_buf()))
}

/// Dump the token stream of one document.
pub fn dump_document(path: &Path, config: &Config) -> Result<String, CliError> {
    let source = read_source(path)?;
    let tokens = Lexer::new(&source).tokenize();
    let name = path.display().to_string();
    match config.format {
        OutputFormat::Text => Ok(dump::text(&name, &tokens)),
        OutputFormat::Json => dump::json(&name, &tokens),
    }
}

fn read_source(path: &Path) -> Result<String, CliError> {
    let source = fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;
    log::debug!(
        "read {} ({})",
        path.display(),
        human_size(source.len() as u64)
    );
    Ok(source)
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| OsStr::new("document"))
        .to_string_lossy()
        .into_owned()
}

/// Output targets for every input, in input order.
///
/// When several inputs map to the same target, the first keeps it and the
/// others fail instead of overwriting it.
pub fn plan_outputs(
    inputs: &[PathBuf],
    out_dir: Option<&Path>,
) -> Vec<Result<PathBuf, CliError>> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::with_capacity(inputs.len());
    inputs
        .iter()
        .map(|input| {
            let target = output_path(input, out_dir)?;
            match claimed.entry(target) {
                Entry::Occupied(owner) => Err(CliError::write(
                    owner.key(),
                    format!("output already produced from '{}'", owner.get().display()),
                )),
                Entry::Vacant(slot) => {
                    let target = slot.key().clone();
                    slot.insert(input);
                    Ok(target)
                }
            }
        })
        .collect()
}

/// `<dir>/<stem>.html`, where `dir` is `out_dir` or the input's own directory.
pub fn output_path(input: &Path, out_dir: Option<&Path>) -> Result<PathBuf, CliError> {
    let dir = match out_dir {
        Some(dir) => dir,
        None => input.parent().unwrap_or_else(|| Path::new("")),
    };
    let target = dir.join(format!("{}.html", stem(input)));
    if target == input {
        return Err(CliError::write(&target, "output would overwrite the input"));
    }
    Ok(target)
}

/// Byte count in the largest unit that keeps the value at least one.
pub fn human_size(bytes: u64) -> String {
    let mut size = bytes;
    let mut unit = 0;
    while size >= 1024 && unit < UNITS.len() - 1 {
        size /= 1024;
        unit += 1;
    }
    format!("{} {}", size, UNITS[unit])
}
