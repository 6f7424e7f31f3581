// xtask - cargo x tasks for gb-window
//
// Thin wrappers around cargo that know this crate's module layout and the
// demo host's configuration file.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

/// Library modules that can be tested on their own
const MODULES: [&str; 3] = ["input", "display", "plugin"];

/// Config written for `demo --headless`
const HEADLESS_CONFIG: &str = "target/xtask/headless_window.toml";

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Tasks for the gb-window crate")]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Format the workspace (or only verify formatting)
    Fmt {
        #[arg(long)]
        check: bool,
    },
    /// Lint every target with warnings denied
    Clippy,
    /// Run the test suite, optionally narrowed to library modules
    Test {
        /// Module to test: input, display or plugin (repeatable)
        #[arg(long = "module", short = 'm')]
        modules: Vec<String>,
        /// Also run doc tests
        #[arg(long)]
        doc: bool,
    },
    /// Run the criterion benchmarks
    Bench {
        /// Benchmark name filter passed to criterion
        filter: Option<String>,
    },
    /// Run the demo host
    Demo {
        /// Window configuration file
        config: Option<PathBuf>,
        /// Run with the null window instead of opening one
        #[arg(long, conflicts_with = "config")]
        headless: bool,
        #[arg(long)]
        release: bool,
    },
}

fn main() -> Result<()> {
    let started = Instant::now();

    let (label, result) = match Cli::parse().command {
        Task::Fmt { check } => ("fmt", fmt(check)),
        Task::Clippy => ("clippy", clippy()),
        Task::Test { modules, doc } => ("test", test(&modules, doc)),
        Task::Bench { filter } => ("bench", bench(filter.as_deref())),
        Task::Demo {
            config,
            headless,
            release,
        } => ("demo", demo(config, headless, release)),
    };

    match &result {
        Ok(()) => println!(
            "{} {} finished in {:.2}s",
            "✓".green().bold(),
            label.bold(),
            started.elapsed().as_secs_f64()
        ),
        Err(err) => eprintln!("{} {} failed: {:#}", "✗".red().bold(), label.bold(), err),
    }
    result
}

fn fmt(check: bool) -> Result<()> {
    let mut args = vec!["fmt", "--all"];
    if check {
        args.extend(["--", "--check"]);
    }
    cargo(&args)
}

fn clippy() -> Result<()> {
    cargo(&[
        "clippy",
        "--workspace",
        "--all-targets",
        "--",
        "-D",
        "warnings",
    ])
}

fn test(modules: &[String], doc: bool) -> Result<()> {
    let modules = module_filters(modules)?;

    if modules.is_empty() {
        cargo(&["test", "--workspace", "--lib", "--bins", "--tests"])?;
    } else {
        for module in modules {
            println!("{} {} module", "→".blue(), module.bold());
            // Unit tests live under `<module>::`; integration tests are not split
            let filter = format!("{}::", module);
            cargo(&["test", "--lib", filter.as_str()])?;
        }
    }

    if doc {
        cargo(&["test", "--doc"])?;
    }
    Ok(())
}

/// Validate `--module` values against the library's module list
fn module_filters(requested: &[String]) -> Result<Vec<&'static str>> {
    let mut selected = Vec::new();
    for name in requested {
        let Some(&module) = MODULES.iter().find(|module| **module == name.as_str()) else {
            bail!(
                "unknown module '{}' (expected one of: {})",
                name,
                MODULES.join(", ")
            );
        };
        if !selected.contains(&module) {
            selected.push(module);
        }
    }
    Ok(selected)
}

fn bench(filter: Option<&str>) -> Result<()> {
    let mut args = vec!["bench", "--bench", "event_bench"];
    if let Some(filter) = filter {
        args.extend(["--", filter]);
    }
    cargo(&args)
}

fn demo(config: Option<PathBuf>, headless: bool, release: bool) -> Result<()> {
    let config = if headless {
        Some(write_headless_config()?)
    } else {
        config
    };

    let mut args = vec!["run".to_string(), "--bin".into(), "gb-window".into()];
    if release {
        args.push("--release".into());
    }
    if let Some(path) = &config {
        println!("{} window config {}", "→".blue(), path.display());
        args.push("--".into());
        args.push(path.display().to_string());
    }

    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    cargo(&args)
}

/// Write a config selecting the null window and return its path
fn write_headless_config() -> Result<PathBuf> {
    let path = Path::new(HEADLESS_CONFIG);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    fs::write(path, "window_type = \"null\"\n")
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path.to_path_buf())
}

/// Run cargo with `args`, streaming its output
fn cargo(args: &[&str]) -> Result<()> {
    println!("{} cargo {}", "$".dimmed(), args.join(" "));
    let status = Command::new(env!("CARGO"))
        .args(args)
        .status()
        .context("failed to start cargo")?;

    if !status.success() {
        bail!("cargo {} exited with {}", args[0], status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_no_modules_selects_everything() {
        assert!(module_filters(&[]).expect("empty filter").is_empty());
    }

    #[test]
    fn test_modules_are_deduplicated_in_order() {
        let selected = module_filters(&names(&["plugin", "input", "plugin"])).expect("filter");
        assert_eq!(selected, vec!["plugin", "input"]);
    }

    #[test]
    fn test_unknown_module_is_rejected() {
        let err = module_filters(&names(&["cpu"])).expect_err("cpu is not a module");
        assert!(err.to_string().contains("unknown module 'cpu'"));
    }
}
