use colored::Colorize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Difference {
    ValueMismatch {
        path: String,
        expected: Value,
        actual: Value,
    },
    MissingField {
        path: String,
    },
    ExtraField {
        path: String,
    },
    ArrayLengthMismatch {
        path: String,
        expected_len: usize,
        actual_len: usize,
    },
}

impl Difference {
    pub fn path(&self) -> &str {
        match self {
            Difference::ValueMismatch { path, .. }
            | Difference::MissingField { path }
            | Difference::ExtraField { path }
            | Difference::ArrayLengthMismatch { path, .. } => path,
        }
    }
}

#[derive(Debug)]
pub enum ComparisonResult {
    Match,
    Mismatch { differences: Vec<Difference> },
}

/// Structural comparison of two JSON documents.
///
/// Object key order is ignored; array order is not. Paths listed in
/// `ignore_fields` (exact, or as a suffix such as `digest`) are skipped on
/// both sides.
pub fn compare_json(actual: &Value, expected: &Value, ignore_fields: &[&str]) -> ComparisonResult {
    let mut differences = Vec::new();
    compare_at(actual, expected, ignore_fields, "", &mut differences);

    if differences.is_empty() {
        ComparisonResult::Match
    } else {
        ComparisonResult::Mismatch { differences }
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn is_ignored(path: &str, ignore_fields: &[&str]) -> bool {
    ignore_fields
        .iter()
        .any(|field| path == *field || path.ends_with(&format!(".{field}")))
}

fn compare_at(
    actual: &Value,
    expected: &Value,
    ignore_fields: &[&str],
    path: &str,
    differences: &mut Vec<Difference>,
) {
    match (actual, expected) {
        (Value::Object(actual_obj), Value::Object(expected_obj)) => {
            for (key, expected_val) in expected_obj {
                let current = join(path, key);
                if is_ignored(&current, ignore_fields) {
                    continue;
                }
                match actual_obj.get(key) {
                    Some(actual_val) => {
                        compare_at(actual_val, expected_val, ignore_fields, &current, differences)
                    }
                    None => differences.push(Difference::MissingField { path: current }),
                }
            }

            for key in actual_obj.keys().filter(|key| !expected_obj.contains_key(*key)) {
                let current = join(path, key);
                if !is_ignored(&current, ignore_fields) {
                    differences.push(Difference::ExtraField { path: current });
                }
            }
        }
        (Value::Array(actual_arr), Value::Array(expected_arr)) => {
            if actual_arr.len() != expected_arr.len() {
                differences.push(Difference::ArrayLengthMismatch {
                    path: path.to_string(),
                    expected_len: expected_arr.len(),
                    actual_len: actual_arr.len(),
                });
            }
            for (i, (actual_val, expected_val)) in actual_arr.iter().zip(expected_arr).enumerate() {
                compare_at(
                    actual_val,
                    expected_val,
                    ignore_fields,
                    &format!("{path}[{i}]"),
                    differences,
                );
            }
        }
        _ if actual != expected => differences.push(Difference::ValueMismatch {
            path: path.to_string(),
            expected: expected.clone(),
            actual: actual.clone(),
        }),
        _ => {}
    }
}

impl ComparisonResult {
    pub fn is_match(&self) -> bool {
        matches!(self, ComparisonResult::Match)
    }

    pub fn differences(&self) -> &[Difference] {
        match self {
            ComparisonResult::Match => &[],
            ComparisonResult::Mismatch { differences } => differences,
        }
    }

    /// One colored line per difference: `-` is what we produced, `+` what
    /// the fixture expects.
    pub fn format_diff(&self) -> String {
        let differences = self.differences();
        if differences.is_empty() {
            return String::new();
        }

        let mut output = vec![
            "=".repeat(80).bright_white().to_string(),
            "RESPONSE MISMATCH".bright_yellow().bold().to_string(),
        ];

        for diff in differences {
            let path = if diff.path().is_empty() { "<root>" } else { diff.path() };
            match diff {
                Difference::ValueMismatch {
                    expected, actual, ..
                } => {
                    output.push(format!("{}:", path.bright_cyan()));
                    output.push(format!("- {actual}").red().to_string());
                    output.push(format!("+ {expected}").green().to_string());
                }
                Difference::MissingField { .. } => {
                    output.push(format!("+ {path} (missing)").green().to_string());
                }
                Difference::ExtraField { .. } => {
                    output.push(format!("- {path} (unexpected)").red().to_string());
                }
                Difference::ArrayLengthMismatch {
                    expected_len,
                    actual_len,
                    ..
                } => {
                    output.push(format!(
                        "{}: expected {} elements, got {}",
                        path.bright_cyan(),
                        expected_len,
                        actual_len
                    ));
                }
            }
        }

        output.push(format!(
            "{} {}",
            "Total differences:".bright_cyan().bold(),
            differences.len().to_string().bright_white()
        ));
        output.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_order_is_ignored() {
        let result = compare_json(&json!({ "a": 1, "b": [1, 2] }), &json!({ "b": [1, 2], "a": 1 }), &[]);
        assert!(result.is_match());
        assert!(result.format_diff().is_empty());
    }

    #[test]
    fn test_reports_each_kind_of_difference() {
        let actual = json!({ "a": 1, "list": [1, 2, 3], "extra": true });
        let expected = json!({ "a": 2, "list": [1, 2], "missing": null });

        let result = compare_json(&actual, &expected, &[]);
        let paths: Vec<&str> = result.differences().iter().map(Difference::path).collect();
        assert_eq!(paths, vec!["a", "list", "missing", "extra"]);
        assert!(result.format_diff().contains("Total differences"));
    }

    #[test]
    fn test_ignored_fields() {
        let actual = json!({ "digest": "x", "inner": { "digest": "y", "v": 1 } });
        let expected = json!({ "digest": "z", "inner": { "v": 1 } });
        assert!(compare_json(&actual, &expected, &["digest"]).is_match());
    }
}
