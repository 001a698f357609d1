//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use tsf::CatalogStats;

/// Format per-context coverage statistics as an ASCII table.
pub fn format_stats_table(stats: &CatalogStats) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Context", "Finished", "Unfinished", "Historical"]);

    for context in &stats.contexts {
        table.add_row(vec![
            context.name.clone(),
            format!("{}/{}", context.finished, context.active()),
            context.unfinished.to_string(),
            (context.vanished + context.obsolete).to_string(),
        ]);
    }

    table.add_row(vec![
        "TOTAL".to_string(),
        format!("{}/{}", stats.finished, stats.active()),
        stats.unfinished.to_string(),
        (stats.vanished + stats.obsolete).to_string(),
    ]);

    table
}
