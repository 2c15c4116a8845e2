//! One-shot resolution of a single query.

use anyhow::Result;
use clap::Args;
use waypost_gplaces::{ResolveOutcome, Resolver};

use crate::table::{review_cell, score_cell};

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Free-text place or address query
    pub query: String,

    /// Print the outcome as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub async fn run(resolver: &Resolver, args: &LookupArgs) -> Result<()> {
    let outcome = resolver.resolve(&args.query).await?;

    if args.json {
        let value = match &outcome {
            ResolveOutcome::Confirmed {
                details,
                candidates,
            } => serde_json::json!({
                "outcome": "confirmed",
                "details": details,
                "candidates": candidates,
            }),
            ResolveOutcome::Ambiguous { candidates } => serde_json::json!({
                "outcome": "ambiguous",
                "candidates": candidates,
            }),
            ResolveOutcome::NotFound => serde_json::json!({ "outcome": "not_found" }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match outcome {
        ResolveOutcome::Confirmed { details, .. } => {
            println!("Confirmed: {}", details.name);
            println!("  {}", details.address);
            println!(
                "  score {} ({} reviews)",
                score_cell(details.rating),
                review_cell(details.review_count)
            );
        }
        ResolveOutcome::Ambiguous { candidates } => {
            println!("Several matches for '{}':", args.query);
            for candidate in candidates {
                println!("  {}. {}", candidate.rank + 1, candidate.label);
            }
        }
        ResolveOutcome::NotFound => {
            println!("No matches found for '{}'.", args.query);
        }
    }
    Ok(())
}
