//! Example demonstrating recent repository tracking and issue fan-out.
//!
//! This example shows how to:
//! - Configure the tracker capacity
//! - Track repositories as they are used
//! - Register notification targets and dispatch an issue to all of them
//! - Handle a dispatch for a repository that fell out of the list
//!
//! Run with: cargo run --example issue_fanout

use recent_repos::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn main() -> Result<()> {
    println!("=== Recent Repositories Example ===\n");

    let mut repos: RecentRepos<String> = RecentRepos::builder()
        .with_env_overrides("RECENT", "__")
        .with_capacity(3)
        .build()?;

    for (name, description) in [
        ("xeno", "modal editor"),
        ("codegraph", "code graph indexer"),
        ("recent-repos", "recency tracker"),
        ("ccos", "cognitive OS"),
    ] {
        repos.add_with_description(name, format!("https://github.com/user/{name}"), description);
    }

    println!("Recent repositories (capacity {}):", repos.recent().capacity());
    for record in repos.list(None) {
        println!("  {} - {} ({})", record.name, record.url, record.description);
    }

    let issue_ids = Arc::new(AtomicUsize::new(100));

    let issue_ids_clone = Arc::clone(&issue_ids);
    repos.register_fn(move |event| {
        let id = issue_ids_clone.fetch_add(1, Ordering::SeqCst);
        Ok(format!("tracker: opened #{} '{}' on {}", id, event.title, event.record.name))
    });

    let chat = repos.register_fn(|event| {
        Ok(format!("chat: new issue on {}: {}", event.record.url, event.title))
    });

    // Registering the same handle again is a no-op
    repos.register(chat);
    println!("\nRegistered targets: {}", repos.target_count());

    println!("\nDispatching issue to 'codegraph'...");
    for result in repos.dispatch("codegraph", "Index is stale", "Reindex after rename")? {
        println!("  {}", result);
    }

    println!("\nDispatching issue to 'xeno' (evicted)...");
    match repos.dispatch("xeno", "Crash on startup", "") {
        Ok(_) => println!("  unexpected success"),
        Err(err) => println!("  {}", err),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
