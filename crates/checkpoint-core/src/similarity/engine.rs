//! Record scanning: best match, ranked matches, filtering

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use serde::Serialize;
use tracing::{debug, trace};

use super::config::{SimilarityConfig, SimilarityOverrides};
use super::field::TextField;
use super::normalization::normalize_text;
use super::scoring::{calculate_detailed_similarity, DetailedSimilarity, ScoreDetails};

/// Default `min_percent` for [`find_all_matches`]
pub const DEFAULT_MIN_PERCENT: f64 = 65.0;
/// Default `limit` for [`find_all_matches`]
pub const DEFAULT_LIMIT: usize = 10;
/// Default `min_percent` for [`filter_by_similarity`]
pub const DEFAULT_FILTER_PERCENT: f64 = 60.0;

/// The best-scoring record for a query
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityResult<'a, T> {
    pub item: &'a T,
    /// Score in `0.0..=100.0`
    pub similarity: f64,
    pub matched_words: Vec<String>,
    pub details: ScoreDetails,
}

/// One entry of a ranked match list
#[derive(Debug, Clone, Serialize)]
pub struct MatchEntry<'a, T> {
    pub item: &'a T,
    pub percent: f64,
    pub matched_words: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BestMatch<'a, T> {
    pub item: &'a T,
    pub percent: f64,
}

/// Fuzzy matcher over caller records.
///
/// Holds an immutable [`SimilarityConfig`]; each call derives its own
/// query-adapted copy, so one engine can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct SimilarityEngine {
    config: SimilarityConfig,
}

impl SimilarityEngine {
    /// Create an engine with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimilarityConfig) -> Self {
        Self { config }
    }

    /// Create an engine with `overrides` merged onto the defaults
    pub fn with_overrides(overrides: &SimilarityOverrides) -> Self {
        Self::with_config(SimilarityConfig::default().merged(overrides))
    }

    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Find the single record whose field best matches `query`.
    ///
    /// Returns `None` for an empty slice, a blank query, or when no record
    /// reaches the query-adapted `min_similarity`. On equal scores the
    /// earlier record wins.
    pub fn find_most_similar<'a, T, F>(
        &self,
        records: &'a [T],
        field: &F,
        query: &str,
    ) -> Option<SimilarityResult<'a, T>>
    where
        F: TextField<T> + ?Sized,
    {
        if records.is_empty() {
            return None;
        }

        let query = normalize_text(query, &self.config);
        if query.is_empty() {
            return None;
        }

        let config = self.config.adapted_to(&query);
        let mut best: Option<SimilarityResult<'a, T>> = None;

        for (item, scored) in ScoredRecords::new(records, field, &query, &config) {
            if !qualifies(scored.similarity, config.min_similarity) {
                continue;
            }
            if best
                .as_ref()
                .map_or(true, |b| scored.similarity > b.similarity)
            {
                best = Some(SimilarityResult {
                    item,
                    similarity: scored.similarity,
                    matched_words: scored.matched_words,
                    details: scored.details,
                });
            }
        }

        debug!(
            query = %query,
            records = records.len(),
            best = best.as_ref().map(|b| b.similarity),
            "most similar scan finished"
        );

        best
    }

    /// All records scoring at least `min_percent`, best first, at most `limit`.
    ///
    /// `min_percent` is the base threshold before query adaptation, so short
    /// queries may raise it and queries of more than four words lower it by 5
    /// (not below 50).
    ///
    /// The scan stops as soon as `2 * limit` qualifying records have been
    /// collected. The result is the sorted top of that set, which is not
    /// guaranteed to be the global top `limit` when many records qualify.
    /// Use [`SimilarityEngine::find_top_matches`] when that matters.
    pub fn find_all_matches<'a, T, F>(
        &self,
        records: &'a [T],
        field: &F,
        query: &str,
        min_percent: f64,
        limit: usize,
    ) -> Vec<MatchEntry<'a, T>>
    where
        F: TextField<T> + ?Sized,
    {
        let Some((query, config)) = self.prepare(records, query, min_percent, limit) else {
            return Vec::new();
        };

        let cap = limit.saturating_mul(2);
        let mut matches: Vec<MatchEntry<'a, T>> = Vec::new();

        for (item, scored) in ScoredRecords::new(records, field, &query, &config) {
            if !qualifies(scored.similarity, config.min_similarity) {
                continue;
            }
            matches.push(MatchEntry {
                item,
                percent: scored.similarity,
                matched_words: scored.matched_words,
            });
            if matches.len() >= cap {
                debug!(cap, "match collection cap reached, stopping scan");
                break;
            }
        }

        // Stable: equal scores keep record order
        matches.sort_by(|a, b| b.percent.total_cmp(&a.percent));
        matches.truncate(limit);
        matches
    }

    /// Exact top `limit` records scoring at least `min_percent`, best first.
    ///
    /// Scans every record and keeps a bounded min-heap. Equal scores keep
    /// record order. `min_percent` is adapted to the query as in
    /// [`SimilarityEngine::find_all_matches`].
    pub fn find_top_matches<'a, T, F>(
        &self,
        records: &'a [T],
        field: &F,
        query: &str,
        min_percent: f64,
        limit: usize,
    ) -> Vec<MatchEntry<'a, T>>
    where
        F: TextField<T> + ?Sized,
    {
        let Some((query, config)) = self.prepare(records, query, min_percent, limit) else {
            return Vec::new();
        };

        let mut heap: BinaryHeap<Reverse<Ranked<'a, T>>> =
            BinaryHeap::with_capacity(limit.min(records.len()).saturating_add(1));

        for (index, (item, scored)) in
            ScoredRecords::new(records, field, &query, &config).enumerate()
        {
            if !qualifies(scored.similarity, config.min_similarity) {
                continue;
            }
            heap.push(Reverse(Ranked {
                index,
                entry: MatchEntry {
                    item,
                    percent: scored.similarity,
                    matched_words: scored.matched_words,
                },
            }));
            if heap.len() > limit {
                heap.pop();
            }
        }

        // Ascending order of Reverse is descending rank
        heap.into_sorted_vec()
            .into_iter()
            .map(|Reverse(ranked)| ranked.entry)
            .collect()
    }

    /// Items scoring at least `min_percent`, best first
    pub fn filter_by_similarity<'a, T, F>(
        &self,
        records: &'a [T],
        field: &F,
        query: &str,
        min_percent: f64,
    ) -> Vec<&'a T>
    where
        F: TextField<T> + ?Sized,
    {
        self.find_all_matches(records, field, query, min_percent, records.len())
            .into_iter()
            .map(|m| m.item)
            .collect()
    }

    /// Score `text` against `query` directly, without length adaptation.
    ///
    /// `query` takes the query role, so the length weight follows its length.
    pub fn compare(&self, text: &str, query: &str) -> DetailedSimilarity {
        let text = normalize_text(text, &self.config);
        let query = normalize_text(query, &self.config);
        calculate_detailed_similarity(&text, &query, &self.config)
    }

    /// Normalized query and adapted config, or `None` when nothing can match
    fn prepare<T>(
        &self,
        records: &[T],
        query: &str,
        min_percent: f64,
        limit: usize,
    ) -> Option<(String, SimilarityConfig)> {
        if records.is_empty() || limit == 0 {
            return None;
        }
        let query = normalize_text(query, &self.config);
        if query.is_empty() {
            return None;
        }
        let config = self
            .config
            .clone()
            .with_min_similarity(min_percent)
            .adapted_to(&query);
        Some((query, config))
    }
}

/// Scores every record whose field yields non-blank text.
///
/// Records without text, or whose text normalizes to nothing, are skipped.
struct ScoredRecords<'a, 'q, T, F: ?Sized> {
    records: std::slice::Iter<'a, T>,
    field: &'q F,
    query: &'q str,
    config: &'q SimilarityConfig,
}

impl<'a, 'q, T, F: TextField<T> + ?Sized> ScoredRecords<'a, 'q, T, F> {
    fn new(
        records: &'a [T],
        field: &'q F,
        query: &'q str,
        config: &'q SimilarityConfig,
    ) -> Self {
        Self {
            records: records.iter(),
            field,
            query,
            config,
        }
    }
}

impl<'a, 'q, T, F: TextField<T> + ?Sized> Iterator for ScoredRecords<'a, 'q, T, F> {
    type Item = (&'a T, DetailedSimilarity);

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.records.by_ref() {
            let Some(text) = self.field.text(item) else {
                trace!("skipping record without text");
                continue;
            };
            let candidate = normalize_text(&text, self.config);
            if candidate.is_empty() {
                trace!("skipping record with blank text");
                continue;
            }
            let scored = calculate_detailed_similarity(&candidate, self.query, self.config);
            return Some((item, scored));
        }
        None
    }
}

/// NaN scores or thresholds never qualify
fn qualifies(score: f64, min_similarity: f64) -> bool {
    score >= min_similarity
}

/// Heap entry: higher score ranks first, then the earlier record
struct Ranked<'a, T> {
    index: usize,
    entry: MatchEntry<'a, T>,
}

impl<T> Ord for Ranked<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.entry
            .percent
            .total_cmp(&other.entry.percent)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl<T> PartialOrd for Ranked<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Ranked<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Ranked<'_, T> {}

// ===== Default-config entry points =====

/// [`SimilarityEngine::find_most_similar`] with the default configuration
pub fn find_most_similar<'a, T, F>(
    records: &'a [T],
    field: &F,
    query: &str,
) -> Option<SimilarityResult<'a, T>>
where
    F: TextField<T> + ?Sized,
{
    SimilarityEngine::new().find_most_similar(records, field, query)
}

/// [`find_most_similar`] with `overrides` merged onto the defaults
pub fn find_most_similar_with<'a, T, F>(
    records: &'a [T],
    field: &F,
    query: &str,
    overrides: &SimilarityOverrides,
) -> Option<SimilarityResult<'a, T>>
where
    F: TextField<T> + ?Sized,
{
    SimilarityEngine::with_overrides(overrides).find_most_similar(records, field, query)
}

/// [`SimilarityEngine::find_all_matches`] with the default configuration
pub fn find_all_matches<'a, T, F>(
    records: &'a [T],
    field: &F,
    query: &str,
    min_percent: f64,
    limit: usize,
) -> Vec<MatchEntry<'a, T>>
where
    F: TextField<T> + ?Sized,
{
    SimilarityEngine::new().find_all_matches(records, field, query, min_percent, limit)
}

/// [`SimilarityEngine::find_top_matches`] with the default configuration
pub fn find_top_matches<'a, T, F>(
    records: &'a [T],
    field: &F,
    query: &str,
    min_percent: f64,
    limit: usize,
) -> Vec<MatchEntry<'a, T>>
where
    F: TextField<T> + ?Sized,
{
    SimilarityEngine::new().find_top_matches(records, field, query, min_percent, limit)
}

/// Best record and its score
pub fn find_best_match<'a, T, F>(records: &'a [T], field: &F, query: &str) -> Option<BestMatch<'a, T>>
where
    F: TextField<T> + ?Sized,
{
    find_most_similar(records, field, query).map(|r| BestMatch {
        item: r.item,
        percent: r.similarity,
    })
}

/// Best record only
pub fn find_match<'a, T, F>(records: &'a [T], field: &F, query: &str) -> Option<&'a T>
where
    F: TextField<T> + ?Sized,
{
    find_most_similar(records, field, query).map(|r| r.item)
}

/// Score of the best record, or 0 when nothing qualifies
pub fn get_match_percent<T, F>(records: &[T], field: &F, query: &str) -> f64
where
    F: TextField<T> + ?Sized,
{
    find_most_similar(records, field, query).map_or(0.0, |r| r.similarity)
}

/// Direct score of `text` against `query` with the default configuration.
///
/// Identical non-blank inputs score 100. The length weight follows `query`.
pub fn compare_similarity(text: &str, query: &str) -> f64 {
    SimilarityEngine::new().compare(text, query).similarity
}

/// [`SimilarityEngine::filter_by_similarity`] with the default configuration
pub fn filter_by_similarity<'a, T, F>(
    records: &'a [T],
    field: &F,
    query: &str,
    min_percent: f64,
) -> Vec<&'a T>
where
    F: TextField<T> + ?Sized,
{
    SimilarityEngine::new().filter_by_similarity(records, field, query, min_percent)
}
