use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use evaluator::EvaluationJob;
use evaluator::report::{EvaluationReport, EvaluationRequest, EvaluationResponse};
use std::fs::{File, create_dir_all};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_appender::rolling;
use util::config;

#[derive(ValueEnum, Clone, Debug)]
enum OutputFormat {
    /// Response envelope with submission id and timestamp
    Full,
    /// Only plagiarism_risk, feedback_summary and score
    Minimal,
}

#[derive(Parser, Debug)]
#[command(version, about = "Evaluate a submission against its assignment's corpus")]
struct Args {
    /// Request JSON ({"candidate": {...}, "corpus": [...]}). Reads stdin when omitted.
    input: Option<PathBuf>,
    /// Also write the JSON output to this path
    #[arg(long)]
    out: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Full)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = init_logging(&config::log_file());
    let args = Args::parse();

    let request = match &args.input {
        Some(path) => EvaluationRequest::load(path)
            .with_context(|| format!("reading request {}", path.display()))?,
        None => EvaluationRequest::from_reader(io::stdin().lock())
            .context("reading request from stdin")?,
    };

    let limit = config::max_corpus_size();
    if limit > 0 && request.corpus.len() > limit {
        warn!(
            "Corpus has {} submissions; only the first {limit} will be compared",
            request.corpus.len()
        );
    }

    let submission_id = request.candidate.id.clone();
    info!(
        candidate = %submission_id,
        peers = request.corpus.len(),
        "{} evaluating submission",
        config::project_name()
    );

    let result = EvaluationJob::new(request.candidate, request.corpus)
        .with_corpus_limit(limit)
        .evaluate()
        .await;

    let report = EvaluationReport::new(submission_id, result);
    info!(
        risk = %report.plagiarism_risk,
        score = report.score,
        "evaluation finished at {}",
        report.evaluated_at
    );

    let json = match args.format {
        OutputFormat::Minimal => serde_json::to_string_pretty(&report.result())?,
        OutputFormat::Full => {
            let response: EvaluationResponse = report.into();
            serde_json::to_string_pretty(&response)?
        }
    };
    println!("{json}");

    if let Some(out) = &args.out {
        save_json(&json, out)?;
        eprintln!("Saved evaluation to {out}");
    }
    Ok(())
}

fn save_json(json: &str, path_str: &str) -> Result<()> {
    let path = Path::new(path_str);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    io::Write::write_all(&mut file, json.as_bytes()).context("writing JSON")
}

fn init_logging(log_file: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    // stdout is reserved for the JSON result
    let console_layer = config::log_to_stderr().then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(true)
            .with_target(true)
            .with_thread_ids(true)
    });

    let env_filter = EnvFilter::try_new(config::log_level())
        .unwrap_or_else(|_| EnvFilter::new("evaluator=info,evaluate=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
