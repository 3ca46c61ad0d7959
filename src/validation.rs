//! Form sanitization helpers shared by the form handlers

use serde::Serialize;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Outcome of one form-processing stage
#[derive(Debug)]
pub enum Flow<T, R> {
    /// Hand the (possibly transformed) input to the next stage
    Continue(T),
    /// Stop and answer with this response
    Respond(R),
}

/// Run `stages` in order, stopping at the first one that responds.
pub fn run_stages<T, R>(input: T, stages: &[fn(T) -> Flow<T, R>]) -> Flow<T, R> {
    let mut current = input;
    for stage in stages {
        match stage(current) {
            Flow::Continue(next) => current = next,
            Flow::Respond(response) => return Flow::Respond(response),
        }
    }
    Flow::Continue(current)
}

/// One failed field rule, shown next to the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub value: String,
}

/// Flatten `validator` errors; `value_of` gives the submitted value of a field.
pub fn field_errors(errors: &ValidationErrors, value_of: impl Fn(&str) -> String) -> Vec<FieldError> {
    let mut out = Vec::new();
    for (field, errs) in errors.field_errors() {
        let field = field.to_string();
        for err in errs.iter() {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {}", field));
            out.push(FieldError {
                field: field.clone(),
                message,
                value: value_of(&field),
            });
        }
    }
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

/// Replace markup-significant characters with HTML entities.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name required"))]
        name: String,
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Sci-Fi"), "Sci-Fi");
        assert_eq!(
            escape_html("<b>\"Tom & Jerry's\"</b>"),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#x27;s&quot;&lt;&#x2F;b&gt;"
        );
        assert_eq!(escape_html("a\\b`c"), "a&#x5C;b&#96;c");
    }

    #[test]
    fn test_field_errors() {
        let sample = Sample { name: String::new() };
        let errors = sample.validate().unwrap_err();
        let list = field_errors(&errors, |_| String::new());
        assert_eq!(
            list,
            vec![FieldError {
                field: "name".to_string(),
                message: "Name required".to_string(),
                value: String::new(),
            }]
        );
    }

    #[test]
    fn test_run_stages_stops_at_first_response() {
        fn double(n: i32) -> Flow<i32, &'static str> {
            Flow::Continue(n * 2)
        }
        fn reject_big(n: i32) -> Flow<i32, &'static str> {
            if n > 10 {
                Flow::Respond("too big")
            } else {
                Flow::Continue(n)
            }
        }

        assert!(matches!(run_stages(3, &[double, reject_big]), Flow::Continue(6)));
        assert!(matches!(
            run_stages(6, &[double, reject_big, double]),
            Flow::Respond("too big")
        ));
    }
}
