//! Problem classification against the taxonomy.
//!
//! One prompt enumerates the objectives in taxonomy order and asks the
//! service for the single best label. The reply is resolved deterministically:
//! exact label match first, then an ordered case-insensitive substring scan,
//! then the default objective. Classification never fails outward — a broken
//! service call degrades to the default so the user always gets some
//! recommendation (fail-open, one shot, no retries).

use crate::service::TextGenerator;
use crate::taxonomy::{self, DEFAULT_OBJECTIVE};
use serde::Serialize;

const CLASSIFY_PROMPT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/classify.md"
));

/// Which path settled the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Fuzzy,
    Default,
}

/// Objective chosen for one problem description, with the path taken.
#[derive(Debug)]
pub struct ClassificationResult {
    pub objective: &'static str,
    pub matched: MatchKind,
}

/// Classify one problem description into exactly one taxonomy objective.
///
/// Empty problem text is passed through unchanged; the service decides.
pub fn classify(service: &dyn TextGenerator, problem_text: &str) -> ClassificationResult {
    let prompt = build_classify_prompt(problem_text);
    match service.generate_content(&prompt) {
        Ok(reply) => resolve_reply(&reply),
        Err(err) => {
            tracing::warn!(error = %err, "classification call failed, using default objective");
            ClassificationResult {
                objective: DEFAULT_OBJECTIVE,
                matched: MatchKind::Default,
            }
        }
    }
}

fn build_classify_prompt(problem_text: &str) -> String {
    let objectives = taxonomy::all()
        .iter()
        .map(|entry| format!("- {}", entry.objective))
        .collect::<Vec<_>>()
        .join("\n");
    CLASSIFY_PROMPT
        .replace("{problem}", problem_text)
        .replace("{objectives}", &objectives)
}

/// Map a raw service reply onto a taxonomy objective.
///
/// The fuzzy step returns the first declared objective related to the reply
/// by containment in either direction. Declared order is the tie-break, not
/// similarity, so overlapping labels can mismatch; that is the contract.
fn resolve_reply(reply: &str) -> ClassificationResult {
    let trimmed = reply.trim();
    if let Ok(entry) = taxonomy::lookup(trimmed) {
        tracing::debug!(objective = entry.objective, "exact classification match");
        return ClassificationResult {
            objective: entry.objective,
            matched: MatchKind::Exact,
        };
    }

    let lowered = trimmed.to_lowercase();
    for entry in taxonomy::all() {
        let label = entry.objective.to_lowercase();
        if lowered.contains(&label) || label.contains(&lowered) {
            tracing::debug!(objective = entry.objective, "fuzzy classification match");
            return ClassificationResult {
                objective: entry.objective,
                matched: MatchKind::Fuzzy,
            };
        }
    }

    tracing::debug!("no classification match, using default objective");
    ClassificationResult {
        objective: DEFAULT_OBJECTIVE,
        matched: MatchKind::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::ScriptedGenerator;

    #[test]
    fn exact_label_match_survives_padding() {
        let service = ScriptedGenerator::reply(" Brainstorm criativo ");
        let result = classify(&service, "Precisamos de ideias novas");
        assert_eq!(result.objective, "Brainstorm criativo");
        assert_eq!(result.matched, MatchKind::Exact);
    }

    #[test]
    fn reply_containing_a_label_matches_fuzzily() {
        let service = ScriptedGenerator::reply("I think Encontrar causas raiz fits");
        let result = classify(&service, "high turnover");
        assert_eq!(result.objective, "Encontrar causas raiz");
        assert_eq!(result.matched, MatchKind::Fuzzy);
    }

    #[test]
    fn reply_contained_in_a_label_matches_fuzzily() {
        let service = ScriptedGenerator::reply("brainstorm");
        let result = classify(&service, "ideias");
        assert_eq!(result.objective, "Brainstorm criativo");
        assert_eq!(result.matched, MatchKind::Fuzzy);
    }

    #[test]
    fn unrelated_reply_falls_back_to_default() {
        let service = ScriptedGenerator::reply("I'm not sure");
        let result = classify(&service, "something vague");
        assert_eq!(result.objective, DEFAULT_OBJECTIVE);
        assert_eq!(result.matched, MatchKind::Default);
    }

    #[test]
    fn service_failure_falls_back_to_default() {
        let service = ScriptedGenerator::failing();
        let result = classify(&service, "anything");
        assert_eq!(result.objective, DEFAULT_OBJECTIVE);
        assert_eq!(result.matched, MatchKind::Default);
    }

    #[test]
    fn fuzzy_scan_prefers_declaration_order() {
        // A reply mentioning two labels resolves to the earlier declared one,
        // regardless of which match is "better".
        let service =
            ScriptedGenerator::reply("Brainstorm criativo ou Encontrar causas raiz, talvez");
        let result = classify(&service, "ambiguous");
        assert_eq!(result.objective, "Encontrar causas raiz");
        assert_eq!(result.matched, MatchKind::Fuzzy);
    }

    #[test]
    fn prompt_lists_objectives_in_taxonomy_order() {
        let prompt = build_classify_prompt("Meu problema");
        assert!(prompt.contains("Meu problema"));
        let causes = prompt.find("- Encontrar causas raiz").unwrap();
        let vague = prompt.find("- Abordar problemas vagos/complexos").unwrap();
        assert!(causes < vague);
        assert!(!prompt.contains("{objectives}"));
    }
}
