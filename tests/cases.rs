use std::fs;

use pastel_calc::{error::EvaluationError, evaluate};
use walkdir::WalkDir;

/// Walks `tests/cases` and checks every `expression => expected` line of the
/// `.calc` files found there. `expected` is either a number or `error <kind>`.
#[test]
fn case_files_evaluate_as_expected() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (expression, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            let outcome = match evaluate(expression) {
                Ok(value) => value.to_string(),
                Err(e) => format!("error {}", kind(&e)),
            };
            let matches = match (expected.parse::<f64>(), outcome.parse::<f64>()) {
                (Ok(want), Ok(got)) => want == got,
                _ => expected == outcome,
            };
            assert!(matches,
                    "Case {} in {:?} failed:\n{}\nexpected {}, got {}",
                    i + 1,
                    path,
                    expression,
                    expected,
                    outcome);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(&str, &str)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .filter_map(|line| line.rsplit_once("=>"))
           .map(|(expression, expected)| (expression.trim(), expected.trim()))
           .collect()
}

const fn kind(error: &EvaluationError) -> &'static str {
    match error {
        EvaluationError::NumberFormat { .. } => "number-format",
        EvaluationError::UnexpectedCharacter { .. } => "unexpected-character",
        EvaluationError::DivisionByZero { .. } => "division-by-zero",
        EvaluationError::MalformedExpression { .. } => "malformed",
        EvaluationError::IncompleteExpression { .. } => "incomplete",
        EvaluationError::NotFinite => "not-finite",
    }
}
