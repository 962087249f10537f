//! Config rendering (nginx, haproxy)
//!
//! A template is parsed once, checked against the placeholder table and the
//! context, and only then filled. Nothing here touches the filesystem.

pub mod context;
pub mod error;
pub mod target;
pub mod template;

pub use context::{is_directive_safe, GatewayEntry, Placeholder, RenderContext};
pub use error::{RenderError, TemplateProblem};
pub use target::RenderTarget;
pub use template::Template;

use std::collections::HashSet;

/// Render `template` for `target`, or report every problem that blocks it.
pub fn render(
    template: &Template,
    context: &RenderContext,
    target: RenderTarget,
) -> Result<String, RenderError> {
    let mut problems = Vec::new();

    for placeholder in Placeholder::ALL.into_iter().filter(|p| p.is_required()) {
        if !template.contains(placeholder.name()) {
            problems.push(TemplateProblem::MissingPlaceholder { name: placeholder.name() });
        }
    }

    let mut used = Vec::new();
    for (name, line) in template.placeholders() {
        match Placeholder::from_name(name) {
            None => {
                problems.push(TemplateProblem::UnknownPlaceholder { name: name.to_string(), line });
            }
            Some(placeholder) if context.value(placeholder, target).is_none() => {
                problems.push(TemplateProblem::MissingValue { name: name.to_string(), line });
            }
            Some(placeholder) => {
                if !used.contains(&placeholder) {
                    used.push(placeholder);
                }
            }
        }
    }

    let mut reported = HashSet::new();
    for placeholder in used {
        for (label, value) in context.inputs(placeholder) {
            if !is_directive_safe(value) && reported.insert(label.clone()) {
                problems.push(TemplateProblem::UnsafeValue {
                    name: label,
                    value: value.to_string(),
                });
            }
        }
    }

    if !problems.is_empty() {
        return Err(RenderError::Invalid { problems });
    }

    let rendered = template.fill(|name| {
        Placeholder::from_name(name).and_then(|placeholder| context.value(placeholder, target))
    });
    tracing::debug!(
        "Rendered {} template with {} gateway line(s)",
        target.name(),
        context.gateways.len()
    );
    Ok(rendered)
}

/// Parse and render in one step.
pub fn render_str(
    template_text: &str,
    context: &RenderContext,
    target: RenderTarget,
) -> Result<String, RenderError> {
    let template = Template::parse(template_text)?;
    render(&template, context, target)
}
