//! Lifecycle status for marketplace listings.

use serde::{Deserialize, Serialize};

/// Moderation lifecycle of a listing.
///
/// A listing is created as [`AppStatus::Draft`] by its owner and moves
/// through the remaining states via the moderation workflow. Only
/// `Published` listings are visible to the general public; visibility of
/// the other states is governed by [`crate::VisibilityScope`].
///
/// # Examples
///
/// ```
/// use vitrine_core::AppStatus;
/// use std::str::FromStr;
///
/// assert_eq!(format!("{}", AppStatus::PendingApproval), "pending_approval");
/// assert_eq!(AppStatus::from_str("published"), Ok(AppStatus::Published));
/// assert!(AppStatus::from_str("archived").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AppStatus {
    /// Visible only to the creator
    Draft,
    /// Submitted, awaiting a moderation decision
    PendingApproval,
    /// Publicly visible in the marketplace
    Published,
    /// Declined by moderation; the record carries a rejection reason
    Rejected,
}
