use colored::Colorize;

use crate::output::stats::CatalogStats;

/// Formatter for human-readable stats output
pub struct StatsFormatter {
    color: bool,
}

impl StatsFormatter {
    pub fn new() -> Self {
        Self { color: true }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Format a catalog summary, one line per context plus totals.
    pub fn format(&self, stats: &CatalogStats) -> String {
        let mut output = String::new();

        if let Some(language) = &stats.language {
            output.push_str(&format!("Language: {}\n", language));
        }

        for ctx in &stats.contexts {
            output.push_str(&format!(
                "  {}  {} finished, {} unfinished, {} retired\n",
                self.paint_name(&ctx.name),
                self.paint_finished(ctx.finished),
                self.paint_unfinished(ctx.unfinished),
                ctx.retired
            ));
        }

        output.push_str(&format!(
            "{} entries: {} finished, {} unfinished, {} retired ({:.1}% complete)\n",
            stats.total,
            self.paint_finished(stats.finished),
            self.paint_unfinished(stats.unfinished),
            stats.retired,
            stats.completion_percent()
        ));
        output
    }

    fn paint_name(&self, name: &str) -> String {
        if self.color {
            name.bold().to_string()
        } else {
            name.to_string()
        }
    }

    fn paint_finished(&self, count: usize) -> String {
        if self.color && count > 0 {
            count.to_string().green().to_string()
        } else {
            count.to_string()
        }
    }

    fn paint_unfinished(&self, count: usize) -> String {
        if self.color && count > 0 {
            count.to_string().yellow().to_string()
        } else {
            count.to_string()
        }
    }
}

impl Default for StatsFormatter {
    fn default() -> Self {
        Self::new()
    }
}
