use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::GeneratorConfig;
use crate::logging::{init_logging_with_config, LogConfig};
use crate::registry::{GatherReport, ResourceRegistry};
use crate::routes::plan_routes;
use crate::source::{load_input, DiscoveredFile};

#[allow(clippy::expect_used)]
static INPUT_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*)\.(rs|json|ya?ml)$").expect("input suffix regex"));

/// Command-line interface for restgen
///
/// Introspects REST resource types and reports their handlers, hooks and
/// routes.
#[derive(Parser, Debug)]
#[command(name = "restgen", version)]
#[command(about = "REST resource introspection for route generation", long_about = None)]
pub struct Cli {
    /// YAML config file (url_prefix, jobs, types)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Introspection threads (overrides config and RESTGEN_JOBS)
    #[arg(long, global = true)]
    pub jobs: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Introspect resources and write the gather report
    Gather {
        /// Rust source file, or a JSON/YAML descriptor manifest
        input: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Print the report to stdout instead of writing a file
        #[arg(long, default_value_t = false)]
        stdout: bool,

        /// Output file (default: INPUT with `_resources.<format>` in place of its extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a per-resource summary to stderr
        #[arg(short, long, default_value_t = false)]
        verbose: bool,
    },
    /// Print the resolved route plan
    Routes {
        input: PathBuf,

        /// URL prefix (overrides config and RESTGEN_URL_PREFIX)
        #[arg(long)]
        prefix: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print introspection warnings
    Check {
        input: PathBuf,

        /// Exit with an error if any warning is found
        #[arg(long, default_value_t = false)]
        deny_warnings: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    fn render<T: Serialize>(self, value: &T) -> anyhow::Result<String> {
        match self {
            OutputFormat::Json => {
                serde_json::to_string_pretty(value).context("Failed to serialize JSON")
            }
            OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to serialize YAML"),
        }
    }
}

/// Parse arguments, install logging and execute the chosen command
///
/// # Errors
///
/// Returns an error if:
/// - The config file or input cannot be read or parsed
/// - The report cannot be written
/// - A report names an unknown handler kind (`routes`)
/// - `check --deny-warnings` finds warnings
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut log_config = LogConfig::from_env();
    if matches!(cli.command, Commands::Gather { verbose: true, .. }) {
        log_config = log_config.verbose();
    }
    let _guard = init_logging_with_config(&log_config)?;
    run(cli)
}

/// Execute an already parsed command line
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = GeneratorConfig::load(cli.config.as_deref())?;
    if let Some(jobs) = cli.jobs {
        config.jobs = jobs.max(1);
    }
    match cli.command {
        Commands::Gather {
            input,
            format,
            stdout,
            output,
            verbose,
        } => {
            let file = load_input(&input, &config.types)?;
            let report = gather(&file, &config);
            if verbose {
                eprint!("{}", verbose_summary(&file, &report));
            }
            let rendered = match format {
                OutputFormat::Json => report.to_json()?,
                OutputFormat::Yaml => report.to_yaml()?,
            };
            if stdout {
                println!("{}", rendered);
                if verbose {
                    eprintln!("Output File   : STDOUT");
                }
            } else {
                let path = match output {
                    Some(p) => p,
                    None => default_output_path(&input, format),
                };
                std::fs::write(&path, rendered + "\n")
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!(output = %path.display(), "wrote gather report");
                if verbose {
                    eprintln!("Output File   : {}", path.display());
                }
            }
            Ok(())
        }
        Commands::Routes {
            input,
            prefix,
            format,
        } => {
            let file = load_input(&input, &config.types)?;
            let report = gather(&file, &config);
            let prefix = prefix.unwrap_or(config.url_prefix);
            let plan = plan_routes(report.reports(), &prefix)?;
            println!("{}", format.render(&plan)?);
            Ok(())
        }
        Commands::Check {
            input,
            deny_warnings,
        } => {
            let file = load_input(&input, &config.types)?;
            let report = gather(&file, &config);
            for r in report.reports() {
                for warning in &r.warnings {
                    println!("{}: {}", r.struct_name, warning);
                }
            }
            let count = report.warning_count();
            eprintln!(
                "{} resource(s), {} warning(s)",
                report.reports().len(),
                count
            );
            if deny_warnings && count > 0 {
                bail!("{} warning(s) found in {}", count, input.display());
            }
            Ok(())
        }
    }
}

fn gather(file: &DiscoveredFile, config: &GeneratorConfig) -> GatherReport {
    let mut registry = ResourceRegistry::new();
    registry.extend(file.resources.iter().cloned());
    registry.run_with_jobs(config.jobs)
}

/// `src/todos.rs` -> `src/todos_resources.json`
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let input = input.to_string_lossy();
    let replacement = format!("${{1}}_resources.{}", format.extension());
    if INPUT_SUFFIX.is_match(&input) {
        PathBuf::from(INPUT_SUFFIX.replace(&input, replacement.as_str()).into_owned())
    } else {
        PathBuf::from(format!("{}_resources.{}", input, format.extension()))
    }
}

/// Human-readable summary printed by `gather --verbose`
pub fn verbose_summary(file: &DiscoveredFile, report: &GatherReport) -> String {
    let mut lines = vec![format!("Module Name   : {}", file.module)];
    lines.extend(file.resources.iter().map(|r| format!("  Struct      : {}", r.name)));
    lines.push(format!("Resources     : {}", report.reports().len()));
    for r in report.reports() {
        lines.push(format!("  Struct '{}'", r.struct_name));
        lines.push(format!("    Handlers   : {}", r.handler_summary()));
        lines.push(format!("    BeforeOne  : {}", r.has_before_one));
        lines.push(format!("    BeforeMany : {}", r.has_before_many));
        lines.push(format!("    BeforeAll  : {}", r.has_before_all));
        if !r.warnings.is_empty() {
            lines.push("    Warnings   :".to_string());
            lines.extend(r.warnings.iter().map(|w| format!("      - {}", w)));
        }
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
