use std::process::ExitCode;

use anyhow::Context;
use ciede2000_parity::compare::TagComparison;
use ciede2000_parity::report::{self, ComparisonReport};
use ciede2000_parity::{
    Cli, DEFAULT_COUNT, Dots, HarnessConfig, Mode, compare_file, compare_tags, evaluator,
    generate_file, logger,
};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse_lenient(std::env::args_os()).unwrap_or_else(|e| e.exit());
    logger::init(cli.verbose);

    let config = HarnessConfig::from(cli);
    tracing::debug!(?config, "configuration");

    match config.mode.clone() {
        Mode::Generate { count, fallback } => {
            if fallback {
                tracing::warn!("invalid record count");
                println!("Invalid input, using default value {}.", DEFAULT_COUNT);
            }
            run_generate(&config, count)
        }
        Mode::Compare { tags } => run_compare(&config, &tags),
    }
}

fn run_generate(config: &HarnessConfig, count: usize) -> anyhow::Result<ExitCode> {
    if config.report.is_some() {
        tracing::warn!("--report only applies to comparisons, ignored");
    }

    let path = config.output_path();
    println!("Generating {} records into {}", count, path.display());
    generate_file(&path, count, config.seed, &evaluator::local(), &mut Dots::stdout())
        .with_context(|| format!("writing {}", path.display()))?;

    Ok(ExitCode::SUCCESS)
}

fn run_compare(config: &HarnessConfig, tags: &[String]) -> anyhow::Result<ExitCode> {
    let runs = match tags {
        [tag] => {
            let path = config.dataset_path(tag);
            println!("Comparing {} with the local evaluator", path.display());
            let outcome = compare_file(&path, &evaluator::local(), &mut Dots::stdout());
            vec![TagComparison {
                tag: tag.clone(),
                path,
                outcome,
            }]
        }
        _ => {
            tracing::info!(count = tags.len(), "comparing datasets concurrently");
            compare_tags(&config.data_dir, tags, &evaluator::local())
        }
    };

    let mut failed = false;
    for run in &runs {
        let prefix = if runs.len() > 1 {
            format!("[{}] ", run.tag)
        } else {
            String::new()
        };
        match &run.outcome {
            Ok(comparison) => {
                if !comparison.verdict.is_pass() {
                    failed = true;
                    tracing::error!(tag = %run.tag, verdict = %comparison.verdict, "comparison failed");
                }
                println!("{}{}", prefix, comparison.verdict);
            }
            Err(e) if e.is_not_found() => {
                tracing::warn!(tag = %run.tag, path = %run.path.display(), "dataset not found");
                println!("{}{}", prefix, e);
            }
            Err(e) => {
                failed = true;
                tracing::error!(tag = %run.tag, error = %e, "comparison aborted");
                println!("{}{}", prefix, e);
            }
        }
    }

    if let Some(path) = &config.report {
        let reports: Vec<ComparisonReport> = runs.iter().map(ComparisonReport::from).collect();
        report::write_json_file(path, &reports)
            .with_context(|| format!("writing report {}", path.display()))?;
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
