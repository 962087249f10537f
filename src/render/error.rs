use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Template syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("Template cannot be rendered: {}", join_problems(.problems))]
    Invalid { problems: Vec<TemplateProblem> },
}

/// A single reason a template and a context do not fit together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateProblem {
    #[error("unknown placeholder `{name}` on line {line}")]
    UnknownPlaceholder { name: String, line: usize },

    #[error("placeholder `{name}` on line {line} has no value in this config")]
    MissingValue { name: String, line: usize },

    #[error("required placeholder `{name}` does not appear in the template")]
    MissingPlaceholder { name: &'static str },

    #[error("value for `{name}` is not safe to embed in a directive: {value:?}")]
    UnsafeValue { name: String, value: String },
}

fn join_problems(problems: &[TemplateProblem]) -> String {
    problems.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
