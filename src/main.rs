use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::io::Read;

mod classify;
mod cli;
mod gemini;
mod recommend;
mod service;
mod taxonomy;
mod workflow;

use cli::{Command, MethodsArgs, RootArgs, SolveArgs};
use gemini::GeminiClient;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = RootArgs::parse();
    match args.command {
        Command::Solve(args) => cmd_solve(args),
        Command::Methods(args) => cmd_methods(args),
    }
}

fn cmd_solve(args: SolveArgs) -> Result<()> {
    let problem = read_problem(&args.problem)?;
    if problem.trim().is_empty() {
        return Err(anyhow!("problem description is empty"));
    }

    let api_key = resolve_api_key(args.api_key)?;
    let client = GeminiClient::new(api_key);
    let result = workflow::solve(&client, &problem)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Objetivo identificado: {}", result.objective);
    println!("Métodos recomendados: {}", result.methods.join(", "));
    println!();
    println!("{}", result.plan);
    Ok(())
}

fn cmd_methods(args: MethodsArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(taxonomy::all())?);
        return Ok(());
    }

    for entry in taxonomy::all() {
        println!("{}", entry.objective);
        println!("  Métodos: {}", entry.methods.join(", "));
        println!("  Descrição: {}", entry.description);
        println!();
    }
    Ok(())
}

/// Resolve the problem text, reading stdin when the argument is `-`.
fn read_problem(arg: &str) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("read problem description from stdin")?;
    Ok(text)
}

fn resolve_api_key(flag: Option<String>) -> Result<String> {
    if let Some(key) = flag {
        return Ok(key);
    }
    std::env::var("GEMINI_API_KEY")
        .map_err(|_| anyhow!("no API key: pass --api-key or set GEMINI_API_KEY"))
}
