//! CLI argument parsing for the problem-solving workflow.
//!
//! The CLI is intentionally thin: it collects inputs and credentials, then
//! hands off to the engine, so the same core logic can be reused elsewhere.
use clap::{Parser, Subcommand};

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "psolve",
    version,
    about = "Classify a problem and recommend a structured methodology plan",
    after_help = "Commands:\n  solve --problem <TEXT>   Classify the problem and generate a plan\n  methods                  List objectives and their recommended methods\n\nExamples:\n  psolve solve --problem \"Nossa equipe tem alta rotatividade\"\n  psolve solve --problem - --json < problem.txt\n  psolve methods --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Solve(SolveArgs),
    Methods(MethodsArgs),
}

/// Solve command inputs for a single problem description.
#[derive(Parser, Debug)]
#[command(about = "Classify a problem and generate a methodology plan")]
pub struct SolveArgs {
    /// Problem description; pass '-' to read it from stdin
    #[arg(long, value_name = "TEXT")]
    pub problem: String,

    /// Gemini API key (falls back to GEMINI_API_KEY)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

/// Methods command inputs for browsing the taxonomy.
#[derive(Parser, Debug)]
#[command(about = "List objectives and their recommended methods")]
pub struct MethodsArgs {
    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}
