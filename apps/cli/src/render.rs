//! Terminal rendering of an inventory report.
//!
//! One section per client with tree connectors; unrecognized entries are
//! color-flagged so manual installs stand out.

use colored::Colorize;
use mcpscout_core::{ClientListing, InventoryReport};

/// Print the report as per-client sections.
pub fn print_report(report: &InventoryReport) {
    if !report.found_any() {
        println!("No installed MCP servers found.");
        return;
    }

    for listing in &report.listings {
        if listing.is_empty() {
            continue;
        }
        print_listing(listing);
    }
}

fn print_listing(listing: &ClientListing) {
    println!("{}", listing.client.display_name().bold());

    let last = listing.entries.len() - 1;
    for (i, entry) in listing.entries.iter().enumerate() {
        let connector = if i == last { "└──" } else { "├──" };
        if entry.recognized {
            println!("{} {}", connector, entry.server_id.green());
        } else {
            println!(
                "{} {} {}",
                connector,
                entry.server_id.yellow(),
                "(unknown)".dimmed()
            );
        }
    }
}
