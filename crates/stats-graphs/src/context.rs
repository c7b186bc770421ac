//! Per-render aggregation of fetched graph data.

use crate::{
    cutoff::millisecond_cutoff_for_range,
    proto::{Card, GraphsOut, RevlogEntry},
};
use stats_common::{format_timestamp, timestamp_from_millis, GraphRange, RevlogRange, TableDatum};

/// Data handed to graph renderers for one fetch/render cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphsContext {
    /// Cards matched by the search.
    pub cards: Vec<Card>,
    /// Review history for those cards.
    pub revlog: Vec<RevlogEntry>,
    /// Range the history was fetched with.
    pub revlog_range: RevlogRange,
    /// Render with the dark palette.
    pub night_mode: bool,
}

impl GraphsContext {
    /// Takes the cards and review history out of a decoded reply.
    pub fn new(data: GraphsOut, revlog_range: RevlogRange, night_mode: bool) -> Self {
        Self {
            cards: data.cards,
            revlog: data.revlog,
            revlog_range,
            night_mode,
        }
    }

    /// Entries not before `cutoff_ms`. A cutoff of 0 keeps every entry.
    pub fn revlog_since(&self, cutoff_ms: i64) -> impl Iterator<Item = &RevlogEntry> {
        self.revlog
            .iter()
            .filter(move |entry| cutoff_ms == 0 || entry.id >= cutoff_ms)
    }

    /// Entries inside the display window `range`.
    pub fn revlog_in_range(&self, range: GraphRange, next_day_at_secs: i64) -> Vec<&RevlogEntry> {
        self.revlog_since(millisecond_cutoff_for_range(range, next_day_at_secs))
            .collect()
    }

    /// Headline figures for tabular display.
    pub fn summary(&self, range: GraphRange, next_day_at_secs: i64) -> Vec<TableDatum> {
        let cutoff = millisecond_cutoff_for_range(range, next_day_at_secs);
        let in_range = self.revlog_since(cutoff).count();
        let cutoff_label = match timestamp_from_millis(cutoff) {
            _ if cutoff == 0 => "none".to_string(),
            Some(time) => format_timestamp(time),
            None => cutoff.to_string(),
        };

        vec![
            TableDatum::new("Cards", self.cards.len()),
            TableDatum::new("Reviews fetched", self.revlog.len()),
            TableDatum::new(format!("Reviews ({range})"), in_range),
            TableDatum::new("Cutoff", cutoff_label),
            TableDatum::new("History", self.revlog_range),
        ]
    }
}
