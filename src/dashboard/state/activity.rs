//! Bounded feed of recent launch and probe events.

use time::OffsetDateTime;

/// Upper bound on retained feed entries.
const MAX_ENTRIES: usize = 64;

/// Severity of one feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Info,
    Warning,
}

/// One timestamped feed entry.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub text: String,
    pub at: OffsetDateTime,
}

/// Rolling list of recent events, newest first.
#[derive(Debug, Default)]
pub struct ActivityFeed {
    entries: Vec<ActivityEntry>,
}

impl ActivityFeed {
    /// Record one event, evicting the oldest entries beyond the cap.
    pub fn record(&mut self, kind: ActivityKind, text: impl Into<String>) {
        self.entries.insert(
            0,
            ActivityEntry {
                kind,
                text: text.into(),
                at: now_local_or_utc(),
            },
        );
        self.entries.truncate(MAX_ENTRIES);
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    /// Number of retained entries with the given severity.
    pub fn count_of(&self, kind: ActivityKind) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .count()
    }
}

fn now_local_or_utc() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_newest_first() {
        let mut feed = ActivityFeed::default();
        feed.record(ActivityKind::Info, "first");
        feed.record(ActivityKind::Warning, "second");
        let texts: Vec<&str> = feed.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);
    }

    #[test]
    fn caps_retained_entries() {
        let mut feed = ActivityFeed::default();
        for idx in 0..(MAX_ENTRIES + 5) {
            feed.record(ActivityKind::Info, format!("event {idx}"));
        }
        assert_eq!(feed.entries().len(), MAX_ENTRIES);
        assert_eq!(feed.entries()[0].text, format!("event {}", MAX_ENTRIES + 4));
    }

    #[test]
    fn counts_by_kind() {
        let mut feed = ActivityFeed::default();
        feed.record(ActivityKind::Info, "a");
        feed.record(ActivityKind::Warning, "b");
        feed.record(ActivityKind::Info, "c");
        assert_eq!(feed.count_of(ActivityKind::Info), 2);
        assert_eq!(feed.count_of(ActivityKind::Warning), 1);
    }
}
