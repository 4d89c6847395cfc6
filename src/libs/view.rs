use super::formatter::format_duration;
use super::interval::Interval;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Builds the status table for one interval.
    pub fn interval_table(interval: &Interval) -> Table {
        let started = interval
            .start_time
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());

        let mut table = Table::new();
        table.add_row(row!["ID", "CATEGORY", "STATE", "STARTED", "ELAPSED", "PLANNED", "REMAINING"]);
        table.add_row(row![
            interval.id,
            interval.category,
            interval.state,
            started,
            format_duration(&interval.actual_duration),
            format_duration(&interval.planned_duration),
            format_duration(&interval.remaining()),
        ]);

        table
    }

    pub fn interval(interval: &Interval) -> anyhow::Result<()> {
        Self::interval_table(interval).printstd();

        Ok(())
    }
}
