//! Dataset shaping for the repost-statistics dashboard pages.
//!
//! Statistics arrive as per-media-kind totals (message counts plus media
//! sizes in megabytes), either as running totals or keyed by day. This module
//! turns them into the tables the pie and column renderers consume; reading
//! and recording the underlying counters stays with the host.

use chrono::{Days, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::table::{Cell, TabularDataset};

/// Media kinds tracked by the reposter, in chart column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Animation,
    Document,
    Audio,
}

impl MediaKind {
    pub const ALL: [MediaKind; 5] = [
        MediaKind::Image,
        MediaKind::Video,
        MediaKind::Animation,
        MediaKind::Document,
        MediaKind::Audio,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Image => "Image",
            MediaKind::Video => "Video",
            MediaKind::Animation => "Animation",
            MediaKind::Document => "Document",
            MediaKind::Audio => "Audio",
        }
    }
}

/// Count and size accumulated for one media kind.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KindTotals {
    pub count: f64,
    pub size_mb: f64,
}

/// Per-kind totals for one period, a single day or all time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepostTotals {
    per_kind: IndexMap<MediaKind, KindTotals>,
}

impl RepostTotals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` posts and `size_mb` megabytes to one kind's totals.
    pub fn record(&mut self, kind: MediaKind, count: f64, size_mb: f64) {
        let totals = self.per_kind.entry(kind).or_default();
        totals.count += count;
        totals.size_mb += size_mb;
    }

    #[must_use]
    pub fn with_kind(mut self, kind: MediaKind, count: f64, size_mb: f64) -> Self {
        self.record(kind, count, size_mb);
        self
    }

    /// Totals for one kind; kinds that never appeared report zero.
    #[must_use]
    pub fn kind(&self, kind: MediaKind) -> KindTotals {
        self.per_kind.get(&kind).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn total_count(&self) -> f64 {
        self.per_kind.values().map(|t| t.count).sum()
    }

    #[must_use]
    pub fn total_size_mb(&self) -> f64 {
        self.per_kind.values().map(|t| t.size_mb).sum()
    }
}

/// Totals for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub totals: RepostTotals,
}

impl DailyTotals {
    #[must_use]
    pub fn new(date: NaiveDate, totals: RepostTotals) -> Self {
        Self { date, totals }
    }
}

/// The seven calendar days ending at `today`, oldest first.
#[must_use]
pub fn last_week(today: NaiveDate) -> Vec<NaiveDate> {
    (0..7u64)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .collect()
}

/// Pie table of post counts per media kind.
///
/// Kinds that never appeared are omitted so the pie has no zero-sized slices.
#[must_use]
pub fn count_share_dataset(totals: &RepostTotals) -> TabularDataset {
    let mut dataset = TabularDataset::new(["Media type", "Posts"]);
    for kind in MediaKind::ALL {
        let t = totals.kind(kind);
        if t.count > 0.0 {
            dataset.push_row([Cell::from(kind.label()), Cell::from(t.count)]);
        }
    }
    dataset
}

/// Pie table of media sizes per kind, in megabytes.
#[must_use]
pub fn size_share_dataset(totals: &RepostTotals) -> TabularDataset {
    let mut dataset = TabularDataset::new(["Media type", "Size (MB)"]);
    for kind in MediaKind::ALL {
        let t = totals.kind(kind);
        if t.size_mb > 0.0 {
            dataset.push_row([Cell::from(kind.label()), Cell::from(t.size_mb)]);
        }
    }
    dataset
}

/// Column table of daily post counts, one row per day and one series per
/// media kind. Drawn stacked with a legend on the dashboard's weekly page.
#[must_use]
pub fn weekly_counts_dataset(days: &[DailyTotals]) -> TabularDataset {
    weekly_dataset(days, |t| t.count)
}

/// Column table of daily media sizes in megabytes, same layout as
/// [`weekly_counts_dataset`].
#[must_use]
pub fn weekly_sizes_dataset(days: &[DailyTotals]) -> TabularDataset {
    weekly_dataset(days, |t| t.size_mb)
}

fn weekly_dataset(days: &[DailyTotals], value: impl Fn(KindTotals) -> f64) -> TabularDataset {
    let mut header = vec!["Day".to_owned()];
    header.extend(MediaKind::ALL.iter().map(|kind| kind.label().to_owned()));

    let mut dataset = TabularDataset::new(header);
    for day in days {
        let mut row = vec![Cell::from(day.date.to_string())];
        row.extend(
            MediaKind::ALL
                .iter()
                .map(|&kind| Cell::from(value(day.totals.kind(kind)))),
        );
        dataset.push_row(row);
    }
    dataset
}
