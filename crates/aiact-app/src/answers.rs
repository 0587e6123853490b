//! Answer collection: answers files and `--answer id=value` flags.

use aiact_types::{AnswerSet, AnswerValue};
use anyhow::Context;
use camino::Utf8Path;

/// Parse an answers file: a flat table of `id = value` in TOML or JSON.
///
/// The format follows the extension; anything else is tried as JSON, then TOML.
pub fn parse_answers_file(path: &Utf8Path, text: &str) -> anyhow::Result<AnswerSet> {
    match path.extension() {
        Some("toml") => parse_toml(text).with_context(|| format!("parse TOML answers {path}")),
        Some("json") => {
            serde_json::from_str(text).with_context(|| format!("parse JSON answers {path}"))
        }
        _ => serde_json::from_str(text)
            .or_else(|_| parse_toml(text))
            .with_context(|| format!("parse answers {path} (expected a TOML or JSON table)")),
    }
}

const LARGE_INTEGER_HINT: &str =
    "TOML integers stop at 64 bits; write large numbers as floats, e.g. compute = 1e25";

fn parse_toml(text: &str) -> anyhow::Result<AnswerSet> {
    toml::from_str(text).or_else(|err: toml::de::Error| {
        if err.message().contains("integer") {
            Err(err).context(LARGE_INTEGER_HINT)
        } else {
            Err(err.into())
        }
    })
}

/// Split `id=value` into an answer. The value type is inferred (bool, number, text).
pub fn parse_answer_flag(raw: &str) -> anyhow::Result<(String, AnswerValue)> {
    let (id, value) = raw
        .split_once('=')
        .with_context(|| format!("invalid --answer '{raw}' (expected id=value)"))?;
    let id = id.trim();
    if id.is_empty() {
        anyhow::bail!("invalid --answer '{raw}': empty criterion id");
    }
    Ok((id.to_string(), AnswerValue::parse_raw(value)))
}

/// File answers first, flags on top.
pub fn build_answer_set(file: Option<AnswerSet>, flags: &[String]) -> anyhow::Result<AnswerSet> {
    let mut answers = file.unwrap_or_default();
    for raw in flags {
        let (id, value) = parse_answer_flag(raw)?;
        answers.insert(id, value);
    }
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_answers_cover_every_value_kind() {
        let text = r#"
g1 = true
compute = 1e25
steps = 3
domain = "Biometrics"
"#;
        let set = parse_answers_file(Utf8Path::new("answers.toml"), text).unwrap();
        assert_eq!(set.get("g1"), Some(&AnswerValue::Bool(true)));
        assert_eq!(set.get("compute"), Some(&AnswerValue::Number(1e25)));
        assert_eq!(set.get("steps"), Some(&AnswerValue::Number(3.0)));
        assert_eq!(set.get("domain"), Some(&AnswerValue::from("Biometrics")));
    }

    #[test]
    fn unknown_extension_falls_back_across_formats() {
        let json = parse_answers_file(Utf8Path::new("answers"), r#"{"p1": true}"#).unwrap();
        assert_eq!(json.get("p1"), Some(&AnswerValue::Bool(true)));
        let toml = parse_answers_file(Utf8Path::new("answers.txt"), "p1 = false\n").unwrap();
        assert_eq!(toml.get("p1"), Some(&AnswerValue::Bool(false)));
    }

    #[test]
    fn malformed_file_reports_path() {
        let err = parse_answers_file(Utf8Path::new("a.json"), "{").unwrap_err();
        assert!(err.to_string().contains("a.json"));
    }

    #[test]
    fn oversized_toml_integer_suggests_float_notation() {
        let text = "compute = 10000000000000000000000000\n";
        let err = parse_answers_file(Utf8Path::new("answers.toml"), text).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("parse TOML answers answers.toml"));
        assert!(message.contains("compute = 1e25"), "{message}");
    }

    #[test]
    fn flags_override_file_answers() {
        let file = AnswerSet::new().with("t1", true).with("t2", true);
        let flags = vec!["t2=false".to_string(), "domain=None / Other".to_string()];
        let set = build_answer_set(Some(file), &flags).unwrap();
        assert_eq!(set.get("t1"), Some(&AnswerValue::Bool(true)));
        assert_eq!(set.get("t2"), Some(&AnswerValue::Bool(false)));
        assert_eq!(set.get("domain"), Some(&AnswerValue::from("None / Other")));
    }

    #[test]
    fn flag_without_separator_is_rejected() {
        assert!(parse_answer_flag("p1").is_err());
        assert!(parse_answer_flag("=true").is_err());
        let (id, value) = parse_answer_flag(" compute =1e24").unwrap();
        assert_eq!(id, "compute");
        assert_eq!(value, AnswerValue::Number(1e24));
    }
}
