//! Static taxonomy of problem-solving objectives and their methods.
//!
//! The table is data, not code branches: the classifier and generator only
//! iterate or look up entries, so new objectives can be added here without
//! touching either. Declaration order matters — it is the candidate list
//! shown to the classifying model and the fuzzy-match scan order.

use serde::Serialize;
use thiserror::Error;

/// One objective row. Methods are ordered; the first is primary.
#[derive(Debug, Serialize)]
pub struct TaxonomyEntry {
    pub objective: &'static str,
    pub methods: &'static [&'static str],
    pub description: &'static str,
}

/// Objective used whenever classification cannot settle on a better fit.
pub const DEFAULT_OBJECTIVE: &str = "Abordar problemas vagos/complexos";

/// A classified label that is not in the taxonomy. The classifier's output
/// domain is closed over the table, so reaching this is a programmer error.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown objective: {0}")]
pub struct UnknownObjective(pub String);

static TAXONOMY: &[TaxonomyEntry] = &[
    TaxonomyEntry {
        objective: "Encontrar causas raiz",
        methods: &["Issue Tree", "Fishbone Diagram", "5 Whys"],
        description:
            "Identifica as causas fundamentais de um problema através de análise estruturada",
    },
    TaxonomyEntry {
        objective: "Brainstorm criativo",
        methods: &["Mind Map clássico", "Spider Map", "6-3-5 Brainwriting"],
        description: "Gera ideias criativas e inovadoras através de técnicas de brainstorming",
    },
    TaxonomyEntry {
        objective: "Analisar relações complexas",
        methods: &["Concept Map", "Argument Map"],
        description: "Mapeia e analisa relacionamentos complexos entre conceitos e argumentos",
    },
    TaxonomyEntry {
        objective: "Planejar soluções passo a passo",
        methods: &["Fluxograma", "Mapa de Processo"],
        description: "Estrutura um plano de ação detalhado com etapas sequenciais",
    },
    TaxonomyEntry {
        objective: "Estratégia/Visão geral",
        methods: &["SWOT em Mapa Mental"],
        description: "Desenvolve estratégias através de análise estruturada de forças, fraquezas, oportunidades e ameaças",
    },
    TaxonomyEntry {
        objective: DEFAULT_OBJECTIVE,
        methods: &["Design Thinking"],
        description: "Aborda problemas mal-definidos através de processo centrado no usuário",
    },
];

/// All entries in declaration order.
pub fn all() -> &'static [TaxonomyEntry] {
    TAXONOMY
}

/// Find the entry for an objective label.
pub fn lookup(objective: &str) -> Result<&'static TaxonomyEntry, UnknownObjective> {
    TAXONOMY
        .iter()
        .find(|entry| entry.objective == objective)
        .ok_or_else(|| UnknownObjective(objective.to_string()))
}
