//! Orchestration: classify, look up methods, generate a plan.

use crate::classify::{self, MatchKind};
use crate::recommend;
use crate::service::TextGenerator;
use crate::taxonomy;
use anyhow::{Context, Result};
use serde::Serialize;

/// Result bundle handed to the presentation layer, once per request.
#[derive(Debug, Serialize)]
pub struct RecommendationResult {
    pub objective: String,
    pub matched: MatchKind,
    pub methods: Vec<String>,
    pub plan: String,
}

/// Run the full pipeline for one problem description.
///
/// The taxonomy lookup is the only failable step, and the classifier's
/// output domain is closed over the taxonomy, so an error here means the
/// table and the classifier disagree — a bug, not a runtime condition.
pub fn solve(service: &dyn TextGenerator, problem_text: &str) -> Result<RecommendationResult> {
    let classification = classify::classify(service, problem_text);
    let entry = taxonomy::lookup(classification.objective)
        .context("classified objective missing from taxonomy")?;
    tracing::info!(
        objective = entry.objective,
        matched = ?classification.matched,
        "problem classified"
    );

    let plan = recommend::generate(service, problem_text, entry.objective, entry.methods);
    Ok(RecommendationResult {
        objective: entry.objective.to_string(),
        matched: classification.matched,
        methods: entry.methods.iter().map(|m| m.to_string()).collect(),
        plan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::ScriptedGenerator;
    use crate::service::ServiceError;
    use crate::taxonomy::DEFAULT_OBJECTIVE;

    const TURNOVER_PLAN: &str = "## 🎯 Análise do Problema\n\
        alta rotatividade\n\
        ### Issue Tree\n\
        ### Fishbone Diagram\n\
        ### 5 Whys\n";

    #[test]
    fn solve_bundles_objective_methods_and_plan() {
        let service = ScriptedGenerator::new(vec![
            Ok("Encontrar causas raiz".to_string()),
            Ok(TURNOVER_PLAN.to_string()),
        ]);
        let result = service_solve(&service, "Our team has high turnover");
        assert_eq!(result.objective, "Encontrar causas raiz");
        assert_eq!(result.matched, MatchKind::Exact);
        assert_eq!(result.methods, ["Issue Tree", "Fishbone Diagram", "5 Whys"]);
        for method in &result.methods {
            assert!(result.plan.contains(method), "plan missing {method}");
        }
    }

    #[test]
    fn failed_classification_still_produces_a_plan() {
        let service = ScriptedGenerator::new(vec![
            Err(ServiceError::Status(429)),
            Ok("plano de design thinking".to_string()),
        ]);
        let result = service_solve(&service, "algo vago");
        assert_eq!(result.objective, DEFAULT_OBJECTIVE);
        assert_eq!(result.matched, MatchKind::Default);
        assert_eq!(result.methods, ["Design Thinking"]);
        assert_eq!(result.plan, "plano de design thinking");
    }

    #[test]
    fn failed_generation_surfaces_error_text_not_an_error() {
        let service = ScriptedGenerator::new(vec![Ok("Brainstorm criativo".to_string())]);
        let result = service_solve(&service, "ideias");
        assert_eq!(result.objective, "Brainstorm criativo");
        assert!(result.plan.starts_with("Erro ao gerar abordagem:"));
    }

    fn service_solve(service: &ScriptedGenerator, problem: &str) -> RecommendationResult {
        solve(service, problem).expect("solve must not fail for taxonomy objectives")
    }
}
