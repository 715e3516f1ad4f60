//! Activity timeline
//!
//! Reads the append-only audit log and renders diff summaries, newest
//! first, in pages. Pagination is presentation state owned by the page, not
//! by the log.

use okr_model::{ActivityAction, ActivityEntry};
use serde::{Deserialize, Serialize};

/// One rendered timeline row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    /// The underlying audit entry
    pub entry: ActivityEntry,
    /// One-line human-readable summary
    pub summary: String,
}

/// One page of the timeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePage {
    /// Rows on this page, newest first
    pub entries: Vec<TimelineItem>,
    /// Zero-based page index
    pub page: usize,
    /// Total entries across all pages
    pub total: usize,
    /// Whether a later page exists
    pub has_more: bool,
}

/// Slice one page out of the log, newest first
///
/// Entries with equal timestamps keep their input (write) order relative to
/// each other. A page index past the end yields an empty page, not an
/// error. A zero page size yields empty pages.
#[must_use]
pub fn paginate(entries: &[ActivityEntry], page: usize, page_size: usize) -> TimelinePage {
    let mut ordered: Vec<&ActivityEntry> = entries.iter().collect();
    // Stable sort: ties stay in write order
    ordered.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

    let total = ordered.len();
    let start = page.saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    TimelinePage {
        entries: ordered[start..end]
            .iter()
            .map(|entry| TimelineItem {
                entry: (*entry).clone(),
                summary: summarize(entry),
            })
            .collect(),
        page,
        total,
        // A zero page size can never make progress, so it never has more
        has_more: end < total && page_size > 0,
    }
}

/// Render a one-line summary of an audit entry
#[must_use]
pub fn summarize(entry: &ActivityEntry) -> String {
    let subject = format!("{} {}", entry.subject.kind_label(), entry.subject.id_str());
    match entry.action {
        ActivityAction::Created => format!("{} created {subject}", entry.actor),
        ActivityAction::Deleted => format!("{} deleted {subject}", entry.actor),
        ActivityAction::Updated => {
            if entry.changes.is_empty() {
                return format!("{} updated {subject}", entry.actor);
            }
            let diffs: Vec<String> = entry
                .changes
                .iter()
                .map(|change| {
                    format!(
                        "{}: {} -> {}",
                        change.field,
                        change.previous.as_deref().unwrap_or("(none)"),
                        change.current.as_deref().unwrap_or("(none)")
                    )
                })
                .collect();
            format!("{} updated {subject} ({})", entry.actor, diffs.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use okr_test_utils::activity_log;
    use pretty_assertions::assert_eq;

    #[test]
    fn newest_entries_come_first() {
        let page = paginate(&activity_log(), 0, 10);
        assert_eq!(page.total, 4);
        assert!(!page.has_more);

        // Day two entries precede day one entries
        assert_eq!(page.entries[0].entry.id.as_str(), "act-3");
        assert_eq!(page.entries[1].entry.id.as_str(), "act-4");
        assert_eq!(page.entries[2].entry.id.as_str(), "act-1");
        assert_eq!(page.entries[3].entry.id.as_str(), "act-2");
    }

    #[test]
    fn equal_timestamps_keep_write_order() {
        let page = paginate(&activity_log(), 0, 10);
        // act-3 and act-4 share a timestamp; act-1 and act-2 share another
        assert_eq!(page.entries[0].entry.id.as_str(), "act-3");
        assert_eq!(page.entries[1].entry.id.as_str(), "act-4");
    }

    #[test]
    fn pagination_slices_and_flags_more() {
        let log = activity_log();

        let first = paginate(&log, 0, 3);
        assert_eq!(first.entries.len(), 3);
        assert!(first.has_more);

        let second = paginate(&log, 1, 3);
        assert_eq!(second.entries.len(), 1);
        assert!(!second.has_more);
        assert_eq!(second.page, 1);

        let past_end = paginate(&log, 5, 3);
        assert!(past_end.entries.is_empty());
        assert!(!past_end.has_more);
        assert_eq!(past_end.total, 4);
    }

    #[test]
    fn zero_page_size_never_reports_more() {
        let log = activity_log();
        let page = paginate(&log, 0, 0);
        assert!(page.entries.is_empty());
        assert_eq!(page.total, 4);
        assert!(!page.has_more);
    }

    #[test]
    fn empty_log_pages_cleanly() {
        let page = paginate(&[], 0, 10);
        assert!(page.entries.is_empty());
        assert_eq!(page.total, 0);
        assert!(!page.has_more);
    }

    #[test]
    fn update_summary_lists_field_diffs() {
        let log = activity_log();
        let summary = summarize(&log[2]);
        assert_eq!(
            summary,
            "raj updated key result kr-1 (status: green -> amber, \
             name: Churn below 3% -> Churn below 2%)"
        );
    }

    #[test]
    fn created_and_deleted_summaries() {
        let log = activity_log();
        assert_eq!(summarize(&log[0]), "ana created key result kr-1");
        assert_eq!(summarize(&log[3]), "raj deleted key result kr-2");
    }
}
