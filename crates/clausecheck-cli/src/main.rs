//! CLI entry point for clausecheck.
//!
//! This module is intentionally thin: it handles argument parsing, IO, and
//! exit codes. All business logic lives in the `clausecheck-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use clausecheck_app::{
    parse_report_json, parse_scan_request, render_annotations, render_markdown, run_scan,
    score_exit_code, serialize_report, to_renderable, ScanInput,
};
use clausecheck_domain::Judge;
use clausecheck_judge::{HttpJudge, JudgeConfig, OfflineJudge};
use clausecheck_settings::{Overrides, ResolvedJudge};
use clausecheck_types::ScanReport;
use std::io::Read;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "clausecheck",
    version,
    about = "Contract compliance scanner with keyword and LLM judgment rules"
)]
struct Cli {
    /// Path to clausecheck config TOML.
    #[arg(long, default_value = "clausecheck.toml")]
    config: Utf8PathBuf,

    /// Override the judgment provider endpoint (chat-completions URL).
    #[arg(long)]
    judge_endpoint: Option<String>,

    /// Override the judgment provider model.
    #[arg(long)]
    judge_model: Option<String>,

    /// Override the judgment call timeout in milliseconds.
    #[arg(long)]
    judge_timeout_ms: Option<u64>,

    /// Exit non-zero when the overall score falls below this threshold.
    #[arg(long)]
    fail_under: Option<u32>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a document and write the report artifact.
    Scan {
        /// Document to scan; `-` reads from stdin.
        #[arg(long, short, default_value = "-")]
        input: Utf8PathBuf,

        /// JSON scan request file (contractText + rules); replaces --input
        /// and the configured rule set.
        #[arg(long, conflicts_with = "input")]
        request: Option<Utf8PathBuf>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/clausecheck/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/clausecheck/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/clausecheck/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/clausecheck/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Print the effective rule set as JSON.
    Rules,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Scan {
            ref input,
            ref request,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_scan(
            &cli,
            input.clone(),
            request.clone(),
            report_out.clone(),
            write_markdown,
            markdown_out.clone(),
        ),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Rules => cmd_rules(&cli),
    }
}

fn overrides_from(cli: &Cli) -> Overrides {
    Overrides {
        judge_endpoint: cli.judge_endpoint.clone(),
        judge_model: cli.judge_model.clone(),
        judge_timeout_ms: cli.judge_timeout_ms,
        fail_under: cli.fail_under,
    }
}

fn read_config_text(cli: &Cli) -> String {
    // Missing file is allowed (defaults apply).
    std::fs::read_to_string(&cli.config).unwrap_or_default()
}

/// Build the judge from resolved settings. The API key is looked up here so
/// the settings layer never touches the environment.
fn build_judge(resolved: Option<&ResolvedJudge>) -> anyhow::Result<Box<dyn Judge>> {
    let Some(judge) = resolved else {
        return Ok(Box::new(OfflineJudge));
    };

    let api_key = match judge.api_key_env.as_deref() {
        Some(var) => std::env::var(var).ok(),
        None => None,
    };

    let http = HttpJudge::new(JudgeConfig {
        endpoint: judge.endpoint.clone(),
        model: judge.model.clone(),
        api_key,
        timeout: Duration::from_millis(judge.timeout_ms),
    })
    .map_err(|e| anyhow::anyhow!("configure judge: {e}"))?;

    Ok(Box::new(http))
}

fn resolve_for_cli(cli: &Cli, config_text: &str) -> anyhow::Result<clausecheck_settings::ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        clausecheck_settings::ClausecheckConfigV1::default()
    } else {
        clausecheck_settings::parse_config_toml(config_text).context("parse config")?
    };
    clausecheck_settings::resolve_config(cfg, overrides_from(cli)).context("resolve config")
}

fn cmd_scan(
    cli: &Cli,
    input: Utf8PathBuf,
    request: Option<Utf8PathBuf>,
    report_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let config_text = read_config_text(cli);
        let resolved = resolve_for_cli(cli, &config_text)?;
        let judge = build_judge(resolved.judge.as_ref())?;

        // A request file carries both the document and the rules; otherwise
        // the document comes from --input and the rules from config.
        let (document, rules_override) = match request {
            Some(path) => {
                let body = std::fs::read_to_string(&path)
                    .with_context(|| format!("read request: {path}"))?;
                let request = parse_scan_request(&body)?;
                (request.contract_text, Some(request.rules))
            }
            None => (read_document(&input)?, None),
        };

        let output = run_scan(
            ScanInput {
                document: &document,
                config_text: &config_text,
                overrides: overrides_from(cli),
                rules_override,
            },
            judge.as_ref(),
        )?;

        write_report_file(&report_out, &output.report).context("write report json")?;

        if write_markdown {
            let renderable = to_renderable(&output.report);
            let md = render_markdown(&renderable);
            write_text_file(&markdown_out, &md).context("write markdown")?;
        }

        if output.report.data.judge_failures > 0 {
            eprintln!(
                "clausecheck: {} judgment rule(s) degraded to fail (provider unavailable)",
                output.report.data.judge_failures
            );
        }

        Ok(score_exit_code(
            output.report.overall_score,
            output.resolved_config.fail_under,
        ))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("clausecheck error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn read_document(input: &Utf8PathBuf) -> anyhow::Result<String> {
    if input.as_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("read document from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("read document: {input}"))
    }
}

fn write_report_file(path: &camino::Utf8Path, report: &ScanReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let renderable = to_renderable(&report);
    let md = render_markdown(&renderable);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{md}");
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let renderable = to_renderable(&report);
    let annotations = render_annotations(&renderable, max);

    for annotation in annotations {
        println!("{annotation}");
    }

    Ok(())
}

fn cmd_rules(cli: &Cli) -> anyhow::Result<()> {
    let config_text = read_config_text(cli);
    let resolved = resolve_for_cli(cli, &config_text)?;
    let json = serde_json::to_string_pretty(&resolved.rules).context("serialize rules")?;
    println!("{json}");
    Ok(())
}
