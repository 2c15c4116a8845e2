//! Drive-time calculator between validated points.

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use dialoguer::Select;
use waypost_gplaces::{ResolveOutcome, Resolver};

#[derive(Debug, Args)]
pub struct DriveArgs {
    /// Start point (repeatable)
    #[arg(long = "from", required = true)]
    pub from: Vec<String>,

    /// Destination (repeatable)
    #[arg(long = "to", required = true)]
    pub to: Vec<String>,

    /// Also compute the trip back and report round-trip totals
    #[arg(long)]
    pub return_trip: bool,
}

/// A point that survived validation: the name the user typed plus the
/// provider's formatted address.
struct Point {
    name: String,
    address: String,
}

pub async fn run(resolver: &Resolver, args: &DriveArgs) -> Result<()> {
    let starts = resolve_points(resolver, &args.from).await?;
    let dests = resolve_points(resolver, &args.to).await?;
    if starts.is_empty() || dests.is_empty() {
        println!("Nothing to compute: need at least one validated start and destination.");
        return Ok(());
    }

    let departure = Utc::now();
    for start in &starts {
        for dest in &dests {
            if start.address == dest.address {
                continue;
            }
            let outbound = resolver
                .client()
                .driving_minutes(&start.address, &dest.address, departure)
                .await;
            match outbound {
                Ok(Some(out)) if args.return_trip => {
                    let inbound = resolver
                        .client()
                        .driving_minutes(&dest.address, &start.address, departure)
                        .await;
                    match inbound {
                        Ok(Some(back)) => println!(
                            "{} -> {} -> {}: {} mins [{out} mins out, {back} mins back]",
                            start.name,
                            dest.name,
                            start.name,
                            out + back
                        ),
                        Ok(None) => println!(
                            "Could not calculate return time for {} -> {} -> {}",
                            start.name, dest.name, start.name
                        ),
                        Err(e) => println!("Error getting driving time: {e}"),
                    }
                }
                Ok(Some(out)) => {
                    println!("{} -> {}: {out} minutes", start.name, dest.name);
                }
                Ok(None) => {
                    println!("Could not calculate time for {} -> {}", start.name, dest.name);
                }
                Err(e) => println!("Error getting driving time: {e}"),
            }
        }
    }
    Ok(())
}

/// Validates each query, asking the user to pick when a query is ambiguous.
/// Queries that fail to validate are reported and skipped.
async fn resolve_points(resolver: &Resolver, queries: &[String]) -> Result<Vec<Point>> {
    let mut points = Vec::with_capacity(queries.len());
    for query in queries {
        match resolver.resolve(query).await {
            Ok(ResolveOutcome::Confirmed { details, .. }) => {
                println!("Validated address: {}", details.address);
                points.push(Point {
                    name: query.clone(),
                    address: details.address,
                });
            }
            Ok(ResolveOutcome::Ambiguous { candidates }) => {
                let labels: Vec<&str> = candidates.iter().map(|c| c.label.as_str()).collect();
                let pick = Select::new()
                    .with_prompt("Address not found. Did you mean one of these?")
                    .items(&labels)
                    .default(0)
                    .interact_opt()?;
                let Some(chosen) = pick.and_then(|i| candidates.get(i)) else {
                    println!("Skipping '{query}'.");
                    continue;
                };
                match resolver.fetch_details(&chosen.place_id).await {
                    Ok(details) => {
                        println!("Validated address: {}", details.address);
                        points.push(Point {
                            name: query.clone(),
                            address: details.address,
                        });
                    }
                    Err(e) => println!("Error validating '{query}': {e}"),
                }
            }
            Ok(ResolveOutcome::NotFound) => {
                println!("Invalid address: {query}. Please try again.");
            }
            Err(e) => println!("Error validating '{query}': {e}"),
        }
    }
    Ok(points)
}
