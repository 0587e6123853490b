//! Developer tasks (schema generation, fixture checks, catalog and explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use aiact_app::{EvaluateInput, parse_answers_file, run_evaluate};
use aiact_catalog::{CatalogVersion, get_catalog, validate_catalog};
use aiact_settings::Overrides;
use aiact_test_util::normalize_nondeterministic;
use aiact_types::{ModuleId, Outcome, lookup_explanation};
use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .or_else(|_| std::env::current_dir())
        .unwrap_or_else(|_| PathBuf::from("."));

    match manifest_dir.parent() {
        Some(parent) if manifest_dir.ends_with("xtask") => parent.to_path_buf(),
        _ => manifest_dir,
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(aiact_types::AiactReportV1)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(aiact_settings::AiactConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "aiact.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "aiact.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {name}");
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {name}");
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Run every shipped catalog through its self-check.
fn validate_catalogs() -> anyhow::Result<()> {
    let mut failed = 0;
    for version in CatalogVersion::ALL {
        let catalog = get_catalog(version);
        let errors = validate_catalog(catalog);
        if errors.is_empty() {
            println!(
                "✓ catalog {version}: {} modules, {} criteria",
                catalog.modules().len(),
                catalog
                    .modules()
                    .iter()
                    .map(|m| m.all_criteria().len())
                    .sum::<usize>()
            );
        } else {
            failed += errors.len();
            eprintln!("catalog {version}:");
            for error in &errors {
                eprintln!("  - {error}");
            }
        }
    }

    if failed > 0 {
        bail!("Catalog validation failed with {failed} errors");
    }
    Ok(())
}

/// One golden fixture directory under `tests/fixtures/`.
struct Fixture {
    name: String,
    dir: Utf8PathBuf,
}

fn list_fixtures() -> anyhow::Result<Vec<Fixture>> {
    let root = Utf8PathBuf::from_path_buf(fixtures_dir())
        .map_err(|p| anyhow::anyhow!("fixtures path is not UTF-8: {}", p.display()))?;
    let mut fixtures = Vec::new();
    for entry in root
        .read_dir_utf8()
        .with_context(|| format!("read fixtures directory {root}"))?
    {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            fixtures.push(Fixture {
                name: entry.file_name().to_string(),
                dir: entry.path().to_path_buf(),
            });
        }
    }
    fixtures.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(fixtures)
}

/// Evaluate a fixture in-process.
///
/// Returns the normalized fresh report and the committed one. The module id is read from the
/// committed report.
fn evaluate_fixture(fixture: &Fixture) -> anyhow::Result<(serde_json::Value, serde_json::Value)> {
    let expected_path = fixture.dir.join("expected.report.json");
    let expected_text =
        fs::read_to_string(&expected_path).with_context(|| format!("read {expected_path}"))?;
    let expected: serde_json::Value =
        serde_json::from_str(&expected_text).with_context(|| format!("parse {expected_path}"))?;
    let module = expected["determination"]["module"]
        .as_str()
        .with_context(|| format!("{expected_path}: determination.module missing"))?
        .to_string();

    let answers_path = ["answers.toml", "answers.json"]
        .into_iter()
        .map(|name| fixture.dir.join(name))
        .find(|path| path.exists())
        .with_context(|| format!("{}: no answers file", fixture.name))?;
    let answers_text =
        fs::read_to_string(&answers_path).with_context(|| format!("read {answers_path}"))?;
    let answers = parse_answers_file(&answers_path, &answers_text)?;

    let config_path = fixture.dir.join("aiact.toml");
    let config_text = if config_path.exists() {
        fs::read_to_string(&config_path).with_context(|| format!("read {config_path}"))?
    } else {
        String::new()
    };

    let output = run_evaluate(EvaluateInput {
        config_text: &config_text,
        overrides: Overrides::default(),
        module: &module,
        answers,
    })
    .with_context(|| format!("evaluate fixture {}", fixture.name))?;

    let actual = serde_json::to_value(&output.report).context("serialize report")?;
    Ok((normalize_nondeterministic(actual), expected))
}

/// Compare every fixture's committed report with a fresh evaluation.
fn check_fixtures() -> anyhow::Result<()> {
    let fixtures = list_fixtures()?;
    let mut mismatched = Vec::new();

    for fixture in &fixtures {
        let (actual, expected) = evaluate_fixture(fixture)?;
        if actual == expected {
            println!("✓ {}", fixture.name);
        } else {
            mismatched.push(fixture.name.clone());
        }
    }

    if mismatched.is_empty() {
        println!("\n✓ {} fixtures match", fixtures.len());
        return Ok(());
    }
    eprintln!("Fixtures out of date:");
    for name in &mismatched {
        eprintln!("  - {name}");
    }
    eprintln!("\nRun `cargo xtask update-fixtures` to regenerate.");
    bail!("Fixture check failed")
}

/// Rewrite every `expected.report.json` from a fresh, normalized evaluation.
fn update_fixtures() -> anyhow::Result<()> {
    for fixture in list_fixtures()? {
        let (actual, _) = evaluate_fixture(&fixture)?;
        let mut json = serde_json::to_string_pretty(&actual).context("serialize report")?;
        json.push('\n');
        let path = fixture.dir.join("expected.report.json");
        fs::write(&path, json).with_context(|| format!("write {path}"))?;
        println!("Wrote {path}");
    }
    Ok(())
}

/// Validate that all outcome labels and module ids have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let labels: Vec<&str> = Outcome::ALL.iter().map(|o| o.label()).collect();
    let modules: Vec<&str> = ModuleId::ALL.iter().map(|m| m.as_str()).collect();

    let mut errors = Vec::new();
    for (kind, identifier) in labels
        .iter()
        .map(|l| ("Outcome", *l))
        .chain(modules.iter().map(|m| ("Module", *m)))
    {
        match lookup_explanation(identifier) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("{kind} '{identifier}' has empty title"));
                }
                if exp.description.is_empty() {
                    errors.push(format!("{kind} '{identifier}' has empty description"));
                }
                if exp.next_steps.is_empty() {
                    errors.push(format!("{kind} '{identifier}' has empty next steps"));
                }
            }
            None => errors.push(format!("{kind} '{identifier}' has no explanation")),
        }
    }

    if errors.is_empty() {
        println!("✓ {} outcome labels have explanations", labels.len());
        println!("✓ {} module ids have explanations", modules.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {error}");
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help               Show this message");
    eprintln!("  emit-schemas       Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas   Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids   Print known schema IDs");
    eprintln!("  validate-catalogs  Run the self-check over every shipped catalog version");
    eprintln!("  check-fixtures     Re-evaluate tests/fixtures and compare with expected reports");
    eprintln!("  update-fixtures    Rewrite expected reports under tests/fixtures");
    eprintln!("  explain-coverage   Validate all outcome labels and module ids have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "validate-catalogs" => validate_catalogs(),
        "check-fixtures" => check_fixtures(),
        "update-fixtures" => update_fixtures(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
