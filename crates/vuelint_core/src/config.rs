//! Lint rule configuration (`tslint.json`).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use vuelint_rules::Severity;

use crate::LintError;

/// Validated settings for a single rule.
///
/// Configuration values are folded into this closed shape at load time, so
/// the rest of the engine never touches the shorthand forms.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSettings {
    /// Configured severity; `off` disables the rule.
    pub severity: Severity,
    /// Rule options, `null` when none were configured.
    pub options: serde_json::Value,
}

impl RuleSettings {
    fn new(severity: Severity, options: serde_json::Value) -> Self {
        Self { severity, options }
    }
}

/// The shorthand forms a rule value may take in `tslint.json`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRuleValue {
    /// `true` enables with error severity, `false` disables.
    Enabled(bool),
    /// Severity string: `"off"`, `"warning"` or `"error"`.
    Severity(String),
    /// `[true, ...options]` array form.
    Array(Vec<serde_json::Value>),
    /// `{ "severity": ..., "options": ... }` object form.
    Detail(RawRuleDetail),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRuleDetail {
    #[serde(default, alias = "ruleSeverity")]
    severity: Option<String>,
    #[serde(default)]
    options: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    rules: BTreeMap<String, RawRuleValue>,
}

/// Lint configuration: the validated rule table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LintConfig {
    /// Per-rule settings, keyed by rule name.
    pub rules: BTreeMap<String, RuleSettings>,
}

impl LintConfig {
    /// Loads configuration from a `tslint.json` file (comments allowed).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LintError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LintError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Parses and validates configuration from a JSONC string.
    pub fn from_json(json: &str) -> Result<Self, LintError> {
        let value = jsonc_parser::parse_to_serde_value(json, &Default::default())
            .map_err(|e| LintError::config(format!("Invalid JSON: {e}")))?
            .unwrap_or(serde_json::Value::Null);

        let raw: RawConfig = serde_json::from_value(value)
            .map_err(|e| LintError::config(format!("Invalid config: {e}")))?;

        let known = vuelint_rules::rule_names();
        let mut rules = BTreeMap::new();
        for (name, value) in raw.rules {
            if !known.contains(&name.as_str()) {
                return Err(LintError::config(format!(
                    "Unknown rule '{}'. Known rules: {}",
                    name,
                    known.join(", ")
                )));
            }
            rules.insert(name.clone(), validate_rule_value(&name, value)?);
        }

        Ok(Self { rules })
    }

    /// Returns the rules that are enabled, with their settings.
    pub fn enabled_rules(&self) -> impl Iterator<Item = (&str, &RuleSettings)> {
        self.rules
            .iter()
            .filter(|(_, settings)| !settings.severity.is_off())
            .map(|(name, settings)| (name.as_str(), settings))
    }

    /// Returns a copy of this configuration with one rule forced off.
    pub fn with_rule_off(&self, rule: &str) -> Self {
        let mut copy = self.clone();
        if let Some(settings) = copy.rules.get_mut(rule) {
            settings.severity = Severity::Off;
        }
        copy
    }
}

fn parse_severity(name: &str, s: &str) -> Result<Severity, LintError> {
    match s {
        "off" | "none" => Ok(Severity::Off),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" | "default" => Ok(Severity::Error),
        other => Err(LintError::config(format!(
            "Invalid severity '{other}' for rule '{name}' (expected off, warning or error)"
        ))),
    }
}

fn validate_rule_value(name: &str, value: RawRuleValue) -> Result<RuleSettings, LintError> {
    match value {
        RawRuleValue::Enabled(true) => Ok(RuleSettings::new(Severity::Error, serde_json::Value::Null)),
        RawRuleValue::Enabled(false) => Ok(RuleSettings::new(Severity::Off, serde_json::Value::Null)),
        RawRuleValue::Severity(s) => {
            Ok(RuleSettings::new(parse_severity(name, &s)?, serde_json::Value::Null))
        }
        RawRuleValue::Array(items) => {
            let (head, rest) = match items.split_first() {
                Some(split) => split,
                None => {
                    return Err(LintError::config(format!(
                        "Empty options array for rule '{name}'"
                    )));
                }
            };
            let severity = match head {
                serde_json::Value::Bool(true) => Severity::Error,
                serde_json::Value::Bool(false) => Severity::Off,
                serde_json::Value::String(s) => parse_severity(name, s)?,
                other => {
                    return Err(LintError::config(format!(
                        "Rule '{name}' options array must start with a boolean or severity, got {other}"
                    )));
                }
            };
            let options = match rest {
                [] => serde_json::Value::Null,
                [single] => single.clone(),
                many => serde_json::Value::Array(many.to_vec()),
            };
            Ok(RuleSettings::new(severity, options))
        }
        RawRuleValue::Detail(detail) => {
            let severity = match detail.severity.as_deref() {
                Some(s) => parse_severity(name, s)?,
                None => Severity::Error,
            };
            Ok(RuleSettings::new(
                severity,
                detail.options.unwrap_or(serde_json::Value::Null),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_boolean_shorthand() {
        let config = LintConfig::from_json(r#"{"rules": {"no-any": true, "no-debugger": false}}"#)
            .unwrap();
        assert_eq!(config.rules["no-any"].severity, Severity::Error);
        assert_eq!(config.rules["no-debugger"].severity, Severity::Off);
    }

    #[test]
    fn test_severity_string() {
        let config = LintConfig::from_json(r#"{"rules": {"no-any": "warning"}}"#).unwrap();
        assert_eq!(config.rules["no-any"].severity, Severity::Warning);
    }

    #[test]
    fn test_detail_object() {
        let config = LintConfig::from_json(
            r#"{"rules": {"no-consecutive-blank-lines": {"severity": "warning", "options": [2]}}}"#,
        )
        .unwrap();
        let settings = &config.rules["no-consecutive-blank-lines"];
        assert_eq!(settings.severity, Severity::Warning);
        assert_eq!(settings.options, serde_json::json!([2]));
    }

    #[test]
    fn test_rule_severity_alias() {
        let config =
            LintConfig::from_json(r#"{"rules": {"no-any": {"ruleSeverity": "off"}}}"#).unwrap();
        assert_eq!(config.rules["no-any"].severity, Severity::Off);
    }

    #[test]
    fn test_array_form() {
        let config = LintConfig::from_json(
            r#"{"rules": {"no-consecutive-blank-lines": [true, 2]}}"#,
        )
        .unwrap();
        let settings = &config.rules["no-consecutive-blank-lines"];
        assert_eq!(settings.severity, Severity::Error);
        assert_eq!(settings.options, serde_json::json!(2));
    }

    #[test]
    fn test_comments_allowed() {
        let config = LintConfig::from_json(
            "{\n  // project rules\n  \"rules\": {\"no-any\": true}\n}",
        )
        .unwrap();
        assert_eq!(config.rules.len(), 1);
    }

    #[test]
    fn test_unknown_rule_rejected() {
        let err = LintConfig::from_json(r#"{"rules": {"no-such-rule": true}}"#).unwrap_err();
        assert!(err.to_string().contains("Unknown rule"));
    }

    #[test]
    fn test_invalid_severity_rejected() {
        let err = LintConfig::from_json(r#"{"rules": {"no-any": "loud"}}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid severity"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(LintConfig::from_json("{rules").is_err());
    }

    #[test]
    fn test_enabled_rules_excludes_off() {
        let config =
            LintConfig::from_json(r#"{"rules": {"no-any": true, "no-debugger": "off"}}"#).unwrap();
        let enabled: Vec<_> = config.enabled_rules().map(|(n, _)| n).collect();
        assert_eq!(enabled, vec!["no-any"]);
    }

    #[test]
    fn test_with_rule_off() {
        let config = LintConfig::from_json(
            r#"{"rules": {"no-any": true, "no-consecutive-blank-lines": true}}"#,
        )
        .unwrap();
        let view = config.with_rule_off("no-consecutive-blank-lines");
        let enabled: Vec<_> = view.enabled_rules().map(|(n, _)| n).collect();
        assert_eq!(enabled, vec!["no-any"]);
        // The original is untouched.
        assert_eq!(config.enabled_rules().count(), 2);
    }

    #[test]
    fn test_empty_config() {
        let config = LintConfig::from_json("{}").unwrap();
        assert!(config.rules.is_empty());
    }
}
