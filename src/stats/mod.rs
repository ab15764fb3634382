//! Statistics aggregation over the journal log.
//!
//! Everything in this module is a pure function over a slice of entries,
//! recomputed on demand — no incremental state, nothing persisted. The
//! outputs drive the `stats` view: emotion frequency, top emotions,
//! time-bucketed trend series, and a positive/negative mood balance.
//!
//! Week numbers use the approximate formula
//! `ceil((day_of_month + weekday_from_sunday) / 7)`, which is month-local
//! and not ISO-8601. That arithmetic is a compatibility contract; do not
//! replace it with a calendar-correct week algorithm.

use crate::store::JournalEntry;
use chrono::{DateTime, Datelike, Utc};
use std::collections::{BTreeSet, HashMap};

/// Emotion labels counted as positive in the mood balance.
pub const POSITIVE_EMOTIONS: [&str; 4] = ["Happy", "Calm", "Love", "Grateful"];

/// Emotion labels counted as negative in the mood balance.
pub const NEGATIVE_EMOTIONS: [&str; 6] =
    ["Sad", "Angry", "Anxious", "Lonely", "Frustrated", "Tired"];

/// How many emotions the top-emotions view shows.
pub const TOP_EMOTIONS_LIMIT: usize = 3;

/// One emotion with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionCount {
    /// Emotion label exactly as stored.
    pub emotion: String,
    /// Number of entries carrying that label.
    pub count: u32,
}

/// Trend bucket granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// One bucket per calendar day.
    Day,
    /// One bucket per approximate week (see module docs).
    Week,
    /// One bucket per calendar month.
    Month,
}

/// One emotion's counts across all trend buckets, zero-filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendSeries {
    /// Emotion label.
    pub emotion: String,
    /// One count per bucket, aligned with [`TrendReport::buckets`].
    pub counts: Vec<u32>,
}

/// Bucketed trend data for one granularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendReport {
    /// Sorted distinct bucket keys encountered in the log.
    pub buckets: Vec<String>,
    /// One series per distinct emotion, in first-encounter order.
    pub series: Vec<TrendSeries>,
}

/// Summed counts over the fixed positive/negative vocabularies.
///
/// Labels outside both vocabularies contribute to neither total; the match
/// is exact, including capitalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoodBalance {
    /// Entries labeled Happy, Calm, Love, or Grateful.
    pub positive: u32,
    /// Entries labeled Sad, Angry, Anxious, Lonely, Frustrated, or Tired.
    pub negative: u32,
}

/// Everything the statistics view needs, derived in one pass.
///
/// Constructed fresh per render; holds no references back into the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedStats {
    /// Per-emotion counts in first-encounter order.
    pub frequency: Vec<EmotionCount>,
    /// The most frequent emotions, at most [`TOP_EMOTIONS_LIMIT`].
    pub top_emotions: Vec<EmotionCount>,
    /// Trend series at the requested granularity.
    pub trend: TrendReport,
    /// Positive/negative totals.
    pub balance: MoodBalance,
}

/// Counts entries per emotion label, in first-encounter order.
pub fn frequency(entries: &[JournalEntry]) -> Vec<EmotionCount> {
    let mut counts: Vec<EmotionCount> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|c| c.emotion == entry.emotion) {
            Some(existing) => existing.count += 1,
            None => counts.push(EmotionCount {
                emotion: entry.emotion.clone(),
                count: 1,
            }),
        }
    }
    counts
}

/// The `limit` most frequent emotions, descending by count.
///
/// The sort is stable, so ties keep their first-encounter order.
pub fn top_emotions(counts: &[EmotionCount], limit: usize) -> Vec<EmotionCount> {
    let mut sorted = counts.to_vec();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));
    sorted.truncate(limit);
    sorted
}

/// Derives the bucket key for a timestamp at the given granularity.
///
/// Keys use 1-based month and day numbers with no zero-padding, computed on
/// the UTC calendar date:
///
/// - day: `{year}-{month}-{day}`
/// - week: `{year}-W{ceil((day + weekday_from_sunday) / 7)}`
/// - month: `{year}-{month}`
pub fn bucket_key(date: &DateTime<Utc>, granularity: Granularity) -> String {
    let date = date.date_naive();
    match granularity {
        Granularity::Day => format!("{}-{}-{}", date.year(), date.month(), date.day()),
        Granularity::Week => {
            let weekday = date.weekday().num_days_from_sunday();
            let week = (date.day() + weekday).div_ceil(7);
            format!("{}-W{}", date.year(), week)
        }
        Granularity::Month => format!("{}-{}", date.year(), date.month()),
    }
}

/// Buckets the log at the given granularity.
///
/// Every distinct emotion seen anywhere in the log gets a series covering
/// every bucket, zero-filled where that emotion has no entries — no sparse
/// gaps. Bucket keys are sorted lexicographically; series follow the
/// emotions' first-encounter order.
pub fn trend(entries: &[JournalEntry], granularity: Granularity) -> TrendReport {
    let buckets: Vec<String> = entries
        .iter()
        .map(|entry| bucket_key(&entry.date, granularity))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut cell_counts: HashMap<(String, &str), u32> = HashMap::new();
    for entry in entries {
        let key = bucket_key(&entry.date, granularity);
        *cell_counts.entry((key, entry.emotion.as_str())).or_insert(0) += 1;
    }

    let series = frequency(entries)
        .into_iter()
        .map(|c| {
            let counts = buckets
                .iter()
                .map(|bucket| {
                    cell_counts
                        .get(&(bucket.clone(), c.emotion.as_str()))
                        .copied()
                        .unwrap_or(0)
                })
                .collect();
            TrendSeries {
                emotion: c.emotion,
                counts,
            }
        })
        .collect();

    TrendReport { buckets, series }
}

/// Sums frequency counts over the fixed positive and negative vocabularies.
pub fn mood_balance(counts: &[EmotionCount]) -> MoodBalance {
    let mut balance = MoodBalance::default();
    for c in counts {
        if POSITIVE_EMOTIONS.contains(&c.emotion.as_str()) {
            balance.positive += c.count;
        } else if NEGATIVE_EMOTIONS.contains(&c.emotion.as_str()) {
            balance.negative += c.count;
        }
    }
    balance
}

/// Derives the full statistics view for one granularity.
pub fn aggregate(entries: &[JournalEntry], granularity: Granularity) -> AggregatedStats {
    let frequency = frequency(entries);
    let top_emotions = top_emotions(&frequency, TOP_EMOTIONS_LIMIT);
    let trend = trend(entries, granularity);
    let balance = mood_balance(&frequency);
    AggregatedStats {
        frequency,
        top_emotions,
        trend,
        balance,
    }
}
