//! The filter and sort vocabulary accepted by the listing query engine.

use crate::AppStatus;
use chrono::{DateTime, Duration, Utc};
use derive_builder::Builder;
use derive_getters::Getters;
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

/// Sort strategy for a listing query. Exactly one is active per call.
///
/// `most_launched` and `highest_rated` are accepted as aliases for
/// [`SortKey::Popular`] and [`SortKey::Rating`] at the parse boundary; the
/// engine itself only knows the five canonical strategies.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum SortKey {
    /// Creation timestamp descending (the default).
    #[default]
    Newest,
    /// Creation timestamp ascending.
    Oldest,
    /// Launch/open count descending.
    #[strum(to_string = "popular", serialize = "most_launched")]
    Popular,
    /// Average rating descending, rating count descending as tie-break.
    #[strum(to_string = "rating", serialize = "highest_rated")]
    Rating,
    /// `view_count + average_rating * rating_count` descending.
    Trending,
}

impl SortKey {
    /// Parse a sort key, falling back to [`SortKey::Newest`] on unknown
    /// input instead of failing the whole request.
    pub fn parse_lenient(value: &str) -> Self {
        Self::from_str(value).unwrap_or_else(|_| {
            debug!(value, "Unrecognized sort key, defaulting to newest");
            Self::Newest
        })
    }
}

/// Lower bound on listing age.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum DateRange {
    /// Created within the last 7 days.
    Week,
    /// Created within the last 30 days.
    Month,
    /// Created within the last 90 days.
    #[strum(serialize = "3months")]
    ThreeMonths,
    /// Created within the last 180 days.
    #[strum(serialize = "6months")]
    SixMonths,
    /// No age constraint (the default).
    #[default]
    All,
}

impl DateRange {
    /// The inclusive creation-time lower bound this range imposes, or None
    /// for [`DateRange::All`].
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let days = match self {
            DateRange::Week => 7,
            DateRange::Month => 30,
            DateRange::ThreeMonths => 90,
            DateRange::SixMonths => 180,
            DateRange::All => return None,
        };
        Some(now - Duration::days(days))
    }

    /// Parse a date range, falling back to [`DateRange::All`] on unknown
    /// input instead of failing the whole request.
    pub fn parse_lenient(value: &str) -> Self {
        Self::from_str(value).unwrap_or_else(|_| {
            debug!(value, "Unrecognized date range, defaulting to all");
            Self::All
        })
    }
}

/// The set of optional constraints a listing query may apply.
///
/// Absent fields impose no constraint. All supplied filters compose with
/// logical AND; within `tool_ids`, membership in any one tool suffices.
///
/// # Examples
///
/// ```
/// use vitrine_core::{FilterSpecBuilder, SortKey};
///
/// let spec = FilterSpecBuilder::default()
///     .search("chess")
///     .sort_by(SortKey::Trending)
///     .build()
///     .unwrap();
/// assert_eq!(*spec.sort_by(), SortKey::Trending);
/// assert!(spec.tool_ids().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder, Getters)]
#[builder(setter(into, strip_option), default)]
pub struct FilterSpec {
    /// Case-insensitive substring match over name, short description, and
    /// full description.
    search: Option<String>,

    /// Listing must be associated with at least one of these tools.
    tool_ids: Vec<Uuid>,

    /// Listing's category must equal this id exactly.
    category_id: Option<Uuid>,

    /// Explicit status override. When supplied it replaces the default
    /// visibility computation entirely (moderation callers only).
    status: Option<AppStatus>,

    /// Lower bound on creation time.
    date_range: DateRange,

    /// Active sort strategy.
    sort_by: SortKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_accepts_aliases() {
        assert_eq!(SortKey::from_str("most_launched"), Ok(SortKey::Popular));
        assert_eq!(SortKey::from_str("highest_rated"), Ok(SortKey::Rating));
        assert_eq!(SortKey::from_str("trending"), Ok(SortKey::Trending));
    }

    #[test]
    fn lenient_parse_falls_back_to_defaults() {
        assert_eq!(SortKey::parse_lenient("by_fiat"), SortKey::Newest);
        assert_eq!(DateRange::parse_lenient("fortnight"), DateRange::All);
    }

    #[test]
    fn date_range_cutoffs() {
        let now = Utc::now();
        assert_eq!(DateRange::Week.cutoff(now), Some(now - Duration::days(7)));
        assert_eq!(
            DateRange::SixMonths.cutoff(now),
            Some(now - Duration::days(180))
        );
        assert_eq!(DateRange::All.cutoff(now), None);
    }

    #[test]
    fn date_range_round_trips_spelling() {
        assert_eq!(DateRange::from_str("3months"), Ok(DateRange::ThreeMonths));
        assert_eq!(format!("{}", DateRange::ThreeMonths), "3months");
    }
}
