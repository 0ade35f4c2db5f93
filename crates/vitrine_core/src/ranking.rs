//! The trending score heuristic.

/// Heuristic popularity score: raw traffic plus rating mass.
///
/// `view_count + average_rating * rating_count`. The rating term is
/// weighted by how many ratings back it, so a listing with one five-star
/// review cannot dominate one with dozens. Known approximation: there is no
/// time decay, so old launches weigh the same as recent ones. Recomputed at
/// query time from the denormalized fields; no score is stored.
pub fn trending_score(view_count: i32, average_rating: f64, rating_count: i32) -> f64 {
    f64::from(view_count) + average_rating * f64::from(rating_count)
}
