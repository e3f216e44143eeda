//! Recommendation prompt assembly and plan generation.
//!
//! The prompt embeds the problem, the chosen objective, the method list, and
//! a fixed output schema the service must follow. Per-method blocks are
//! expanded to match the method count exactly — a third block appears only
//! when a third method exists, and no placeholder heading is ever emitted.
//! The generated plan is returned unmodified; nothing validates its shape.

use crate::service::TextGenerator;

const RECOMMEND_BASE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/recommend_base.md"
));
const METHOD_BLOCK: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/method_block.md"
));
const PRACTICAL_BLOCK: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/practical_block.md"
));

/// Generate a structured action plan for the classified problem.
///
/// `methods` is the matched taxonomy entry's ordered list (1–3 entries).
/// A service failure is absorbed into replacement error text so the caller
/// always receives something printable — this is a soft-fail boundary,
/// distinct from the classifier's default-objective fallback.
pub fn generate(
    service: &dyn TextGenerator,
    problem_text: &str,
    objective: &str,
    methods: &[&str],
) -> String {
    let prompt = build_recommend_prompt(problem_text, objective, methods);
    match service.generate_content(&prompt) {
        Ok(plan) => plan,
        Err(err) => {
            tracing::warn!(error = %err, "plan generation call failed");
            format!("Erro ao gerar abordagem: {err}")
        }
    }
}

fn build_recommend_prompt(problem_text: &str, objective: &str, methods: &[&str]) -> String {
    RECOMMEND_BASE
        .replace("{method_sections}", &render_blocks(METHOD_BLOCK, methods))
        .replace("{practical_sections}", &render_blocks(PRACTICAL_BLOCK, methods))
        .replace("{problem}", problem_text)
        .replace("{objective}", objective)
        .replace("{methods}", &methods.join(", "))
}

/// Expand one template block per method, preserving method order.
fn render_blocks(template: &str, methods: &[&str]) -> String {
    methods
        .iter()
        .map(|method| template.replace("{method}", method).trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
