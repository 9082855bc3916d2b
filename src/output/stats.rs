//! Statistics and search result reporting.

use console::style;

use crate::experiments::Experiment;
use crate::sync::SyncState;

/// Print the end-of-pass summary.
pub fn print_sync_stats(state: &SyncState) {
    println!();
    println!("{}", style("Sync summary:").bold());
    println!("  Metadata: {}", synced_label(state.metadata_synced));
    println!("  Images:   {}", state.image_count);
    println!("  Audio:    {}", state.audio_count);
    println!("  Imprint:  {}", synced_label(state.imprint_synced));
    println!("  Skipped:  {} (non-file entries)", state.skipped_entries);
    println!("  Total:    {} downloaded", state.total_downloaded());
}

fn synced_label(synced: bool) -> &'static str {
    if synced {
        "synced"
    } else {
        "not synced"
    }
}

/// Print experiments matching a search query.
pub fn print_experiment_matches(query: &str, matches: &[&Experiment]) {
    println!();
    if query.trim().is_empty() {
        println!("{}", style(format!("{} experiment(s):", matches.len())).bold());
    } else {
        println!(
            "{}",
            style(format!(
                "{} experiment(s) matching \"{}\":",
                matches.len(),
                query
            ))
            .bold()
        );
    }

    for experiment in matches {
        println!("  {}", style(&experiment.title).green());
        if !experiment.description.is_empty() {
            println!("    {}", experiment.description);
        }
    }
}
