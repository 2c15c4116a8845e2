//! Interactive catalog builder: enter queries, disambiguate, review, print.

use anyhow::Result;
use dialoguer::{Input, Select};
use waypost_core::models::{PlaceCandidate, PlaceDetails};
use waypost_core::{CatalogEntry, SessionContext};
use waypost_gplaces::{ResolveOutcome, Resolver};

use crate::table::render_table;

pub async fn run(resolver: &Resolver) -> Result<()> {
    let mut session = SessionContext::new();
    println!("Enter place names one at a time; leave blank to move on to review.");

    loop {
        let input: String = Input::new()
            .with_prompt("Place name")
            .allow_empty(true)
            .interact_text()?;
        let query = input.trim().to_string();
        if query.is_empty() {
            break;
        }
        add_place(resolver, &mut session, &query).await?;
    }

    review(resolver, &mut session).await?;

    let undecided: Vec<String> = session
        .pending_queries()
        .into_iter()
        .map(str::to_string)
        .collect();
    if !undecided.is_empty() {
        println!("Left undecided: {}", undecided.join(", "));
    }

    if session.catalog.is_empty() {
        println!("No places added.");
    } else {
        print!("{}", render_table(session.catalog.entries()));
    }
    Ok(())
}

async fn add_place(resolver: &Resolver, session: &mut SessionContext, query: &str) -> Result<()> {
    match resolver.resolve(query).await {
        Ok(ResolveOutcome::Confirmed {
            details,
            candidates,
        }) => {
            let Some(first) = candidates.first() else {
                return Ok(());
            };
            let selected = first.place_id.clone();
            append_confirmed(session, query, candidates, selected, details);
        }
        Ok(ResolveOutcome::Ambiguous { candidates }) => {
            session.remember_pending(query, candidates);
            pick_pending(resolver, session, query).await?;
        }
        Ok(ResolveOutcome::NotFound) => {
            println!("No matches found for '{query}'. Try a different name.");
        }
        Err(e) => {
            println!("Error resolving '{query}': {e}");
        }
    }
    Ok(())
}

/// Prompts the user to pick among the pending candidates for `query`.
/// Escaping the prompt leaves the disambiguation pending for later.
async fn pick_pending(resolver: &Resolver, session: &mut SessionContext, query: &str) -> Result<()> {
    let Some(pending) = session.take_pending(query) else {
        return Ok(());
    };
    let labels: Vec<&str> = pending.candidates.iter().map(|c| c.label.as_str()).collect();
    let pick = Select::new()
        .with_prompt(format!(
            "Several matches for '{query}' — pick one (Esc to decide later)"
        ))
        .items(&labels)
        .default(0)
        .interact_opt()?;

    match pick.and_then(|i| pending.candidates.get(i).cloned()) {
        Some(chosen) => match resolver.fetch_details(&chosen.place_id).await {
            Ok(details) => {
                append_confirmed(session, query, pending.candidates, chosen.place_id, details);
            }
            Err(e) => {
                println!("Could not fetch details: {e}");
                session.remember_pending(query, pending.candidates);
            }
        },
        None => {
            println!("Leaving '{query}' undecided.");
            session.remember_pending(query, pending.candidates);
        }
    }
    Ok(())
}

fn append_confirmed(
    session: &mut SessionContext,
    query: &str,
    candidates: Vec<PlaceCandidate>,
    selected: String,
    details: PlaceDetails,
) {
    let name = details.name.clone();
    let address = details.address.clone();
    let added = session.catalog.append(CatalogEntry {
        query: query.to_string(),
        candidates,
        selected,
        details,
    });
    if added {
        println!("Added: {name} - {address}");
    } else {
        println!("Already in the catalog: {name} - {address}");
    }
}

async fn review(resolver: &Resolver, session: &mut SessionContext) -> Result<()> {
    loop {
        if session.catalog.is_empty() && session.pending_queries().is_empty() {
            return Ok(());
        }
        let actions = [
            "Done",
            "Show table",
            "Swap an entry",
            "Remove an entry",
            "Resolve an undecided query",
            "Clear all",
        ];
        let pick = Select::new()
            .with_prompt("Review")
            .items(&actions)
            .default(0)
            .interact_opt()?;
        match pick {
            None | Some(0) => return Ok(()),
            Some(1) => print!("{}", render_table(session.catalog.entries())),
            Some(2) => swap_entry(resolver, session).await?,
            Some(3) => remove_entry(session)?,
            Some(4) => resolve_undecided(resolver, session).await?,
            Some(5) => {
                session.catalog.clear();
                println!("Cleared all places.");
            }
            Some(_) => {}
        }
    }
}

/// Lets the user pick a catalog entry for an operation; `None` when the
/// catalog is empty or the prompt was escaped.
fn pick_entry(session: &SessionContext, prompt: &str) -> Result<Option<usize>> {
    if session.catalog.is_empty() {
        println!("The catalog is empty.");
        return Ok(None);
    }
    let labels: Vec<String> = session
        .catalog
        .entries()
        .iter()
        .map(|e| format!("{} :: {}", e.details.name, e.details.address))
        .collect();
    Ok(Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()?)
}

/// Reopens the kept candidate list of one entry and swaps in the pick,
/// keeping the entry's position in the table.
async fn swap_entry(resolver: &Resolver, session: &mut SessionContext) -> Result<()> {
    let Some(index) = pick_entry(session, "Which entry?")? else {
        return Ok(());
    };
    let Some(entry) = session.catalog.get(index) else {
        return Ok(());
    };
    if entry.candidates.len() < 2 {
        println!("No alternatives were offered for '{}'.", entry.query);
        return Ok(());
    }

    let options: Vec<&str> = entry.candidates.iter().map(|c| c.label.as_str()).collect();
    let current = entry.selected_rank().unwrap_or(0);
    let pick = Select::new()
        .with_prompt(format!("Alternatives for '{}'", entry.query))
        .items(&options)
        .default(current)
        .interact_opt()?;
    let Some(pick) = pick else { return Ok(()) };
    if pick == current {
        return Ok(());
    }
    let Some(chosen) = entry.candidates.get(pick).cloned() else {
        return Ok(());
    };
    let query = entry.query.clone();
    let candidates = entry.candidates.clone();

    match resolver.fetch_details(&chosen.place_id).await {
        Ok(details) => {
            let name = details.name.clone();
            let address = details.address.clone();
            session.catalog.replace_at(
                index,
                CatalogEntry {
                    query,
                    candidates,
                    selected: chosen.place_id,
                    details,
                },
            )?;
            println!("Updated to: {name} - {address}");
        }
        Err(e) => println!("Could not fetch details: {e}"),
    }
    Ok(())
}

fn remove_entry(session: &mut SessionContext) -> Result<()> {
    let Some(index) = pick_entry(session, "Remove which entry?")? else {
        return Ok(());
    };
    let removed = session.catalog.remove_at(index)?;
    println!(
        "Removed: {} - {}",
        removed.details.name, removed.details.address
    );
    Ok(())
}

async fn resolve_undecided(resolver: &Resolver, session: &mut SessionContext) -> Result<()> {
    let queries: Vec<String> = session
        .pending_queries()
        .into_iter()
        .map(str::to_string)
        .collect();
    if queries.is_empty() {
        println!("Nothing is undecided.");
        return Ok(());
    }
    let pick = Select::new()
        .with_prompt("Which query?")
        .items(&queries)
        .default(0)
        .interact_opt()?;
    if let Some(query) = pick.and_then(|i| queries.get(i)) {
        pick_pending(resolver, session, query).await?;
    }
    Ok(())
}
