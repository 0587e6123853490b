//! CLI entry point for aiact.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `aiact-app` crate.

mod logging;

use aiact_app::{
    EvaluateInput, ExplainOutput, build_answer_set, export_obligations, format_modules, load_config,
    parse_answers_file, render_determination, render_questions, run_evaluate, run_explain,
};
use aiact_settings::Overrides;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "aiact",
    version,
    about = "EU AI Act classification questionnaire and rule evaluator"
)]
struct Cli {
    /// Path to aiact config TOML (missing file means defaults).
    #[arg(long, default_value = "aiact.toml", global = true)]
    config: Utf8PathBuf,

    /// Override catalog version (v1|v2).
    #[arg(long, global = true)]
    catalog_version: Option<String>,

    /// Raise log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the modules of the selected catalog version.
    Modules,

    /// Print the questionnaire of one module.
    Questions {
        /// Module id or alias (prohibited-practices|high-risk|transparency|gpai, art5, art6, ...).
        #[arg(long)]
        module: String,

        /// Output format (markdown|text|json).
        #[arg(long)]
        format: Option<String>,
    },

    /// Evaluate one module against a set of answers.
    Evaluate {
        /// Module id or alias (prohibited-practices|high-risk|transparency|gpai, art5, art6, ...).
        #[arg(long)]
        module: String,

        /// Answers file: a TOML or JSON table of `id = value`.
        ///
        /// TOML integers stop at 64 bits, so write FLOP counts as floats (`compute = 1e25`).
        #[arg(long)]
        answers: Option<Utf8PathBuf>,

        /// Single answer as `id=value`; repeatable, wins over the answers file.
        #[arg(long = "answer", value_name = "ID=VALUE")]
        answer: Vec<String>,

        /// Output format (markdown|text|json).
        #[arg(long)]
        format: Option<String>,

        /// Also write the obligations list, one per line, to this path.
        #[arg(long)]
        export: Option<Utf8PathBuf>,
    },

    /// Explain an outcome label (e.g. HIGH_RISK_6_2) or a module id.
    Explain {
        /// The outcome label or module id to explain.
        identifier: String,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match &cli.cmd {
        Commands::Modules => cmd_modules(&cli),
        Commands::Questions { module, format } => cmd_questions(&cli, module, format.clone()),
        Commands::Evaluate {
            module,
            answers,
            answer,
            format,
            export,
        } => cmd_evaluate(
            &cli,
            module,
            answers.as_deref(),
            answer,
            format.clone(),
            export.as_ref().map(|p| p.to_string()),
        ),
        Commands::Explain { identifier } => cmd_explain(identifier),
    };

    if let Err(err) = result {
        eprintln!("aiact error: {err:#}");
        std::process::exit(1);
    }
}

/// Read the config file; a missing file is allowed (defaults apply).
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = %path, "loaded config");
            Ok(text)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err).with_context(|| format!("read config: {path}")),
    }
}

fn overrides(cli: &Cli, format: Option<String>, export: Option<String>) -> Overrides {
    Overrides {
        catalog_version: cli.catalog_version.clone(),
        format,
        export,
    }
}

fn cmd_modules(cli: &Cli) -> anyhow::Result<()> {
    let config_text = read_config(&cli.config)?;
    let resolved = load_config(&config_text, overrides(cli, None, None))?;
    print!(
        "{}",
        format_modules(aiact_catalog::get_catalog(resolved.catalog_version))
    );
    Ok(())
}

fn cmd_questions(cli: &Cli, module: &str, format: Option<String>) -> anyhow::Result<()> {
    let config_text = read_config(&cli.config)?;
    let resolved = load_config(&config_text, overrides(cli, format, None))?;
    let module = aiact_catalog::get_module(resolved.catalog_version, module)
        .with_context(|| format!("select module '{module}'"))?;
    print!("{}", render_questions(module, resolved.format)?);
    Ok(())
}

fn cmd_evaluate(
    cli: &Cli,
    module: &str,
    answers_path: Option<&Utf8Path>,
    answer_flags: &[String],
    format: Option<String>,
    export: Option<String>,
) -> anyhow::Result<()> {
    let config_text = read_config(&cli.config)?;

    let file_answers = match answers_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read answers: {path}"))?;
            Some(parse_answers_file(path, &text)?)
        }
        None => None,
    };
    let answers = build_answer_set(file_answers, answer_flags)?;

    let output = run_evaluate(EvaluateInput {
        config_text: &config_text,
        overrides: overrides(cli, format, export),
        module,
        answers,
    })?;

    let rendered = render_determination(
        &output.report,
        &output.module.title,
        output.resolved_config.format,
    )?;
    print!("{rendered}");

    if let Some(path) = output.resolved_config.export.as_deref() {
        write_text_file(Utf8Path::new(path), &export_obligations(&output.report))
            .context("write obligations export")?;
    }

    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", aiact_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_outcomes,
            available_modules,
        } => {
            eprint!(
                "{}",
                aiact_app::format_not_found(&identifier, available_outcomes, available_modules)
            );
            std::process::exit(1);
        }
    }
}
