//! Domain records parsed from the rating and title files.
//!
//! Ratings are stored in half-star units (`1..=10` for 0.5 to 5.0 stars) so
//! that "two reviewers gave the same score" is an exact integer comparison,
//! never a float equality.

use std::collections::BTreeMap;
use std::fmt;

/// A movie and the ratings it has received, keyed by reviewer id.
#[derive(Debug, Clone)]
pub struct Movie {
    id: u32,
    title: String,
    ratings: BTreeMap<u32, u8>,
}

impl Movie {
    /// Creates a movie with no ratings yet.
    #[must_use]
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ratings: BTreeMap::new(),
        }
    }

    /// The movie's id as it appears in the dataset.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The movie's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Records a rating in half-star units from one reviewer.
    ///
    /// A reviewer rating the same movie twice keeps the latest score.
    pub fn rate(&mut self, reviewer_id: u32, half_stars: u8) {
        self.ratings.insert(reviewer_id, half_stars);
    }

    /// Returns `true` if the reviewer rated this movie.
    #[must_use]
    pub fn rated_by(&self, reviewer_id: u32) -> bool {
        self.ratings.contains_key(&reviewer_id)
    }

    /// The rating a reviewer gave this movie, in half-star units.
    #[must_use]
    pub fn rating_from(&self, reviewer_id: u32) -> Option<u8> {
        self.ratings.get(&reviewer_id).copied()
    }

    /// Iterates over (reviewer id, half-star rating) pairs in reviewer-id
    /// order.
    pub fn ratings(&self) -> impl Iterator<Item = (u32, u8)> {
        self.ratings.iter().map(|(&reviewer, &rating)| (reviewer, rating))
    }

    /// The number of reviewers who rated this movie.
    #[must_use]
    pub fn num_ratings(&self) -> usize {
        self.ratings.len()
    }

    /// The mean rating in stars, or `None` if the movie has no ratings.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let total: u32 = self.ratings.values().map(|&r| u32::from(r)).sum();
        Some(f64::from(total) / 2.0 / self.ratings.len() as f64)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [id {}, {} ratings]",
            self.title,
            self.id,
            self.ratings.len()
        )
    }
}

/// A reviewer and the ratings they have given, keyed by movie id.
#[derive(Debug, Clone)]
pub struct Reviewer {
    id: u32,
    ratings: BTreeMap<u32, u8>,
}

impl Reviewer {
    /// Creates a reviewer with no ratings yet.
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ratings: BTreeMap::new(),
        }
    }

    /// The reviewer's id as it appears in the dataset.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Records a rating in half-star units for one movie.
    pub fn rate(&mut self, movie_id: u32, half_stars: u8) {
        self.ratings.insert(movie_id, half_stars);
    }

    /// The rating this reviewer gave a movie, in half-star units.
    #[must_use]
    pub fn rating_for(&self, movie_id: u32) -> Option<u8> {
        self.ratings.get(&movie_id).copied()
    }

    /// The number of movies this reviewer rated.
    #[must_use]
    pub fn num_ratings(&self) -> usize {
        self.ratings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_tracks_ratings_per_reviewer() {
        let mut movie = Movie::new(1, "Heat (1995)");
        movie.rate(10, 8);
        movie.rate(11, 6);

        assert!(movie.rated_by(10));
        assert!(!movie.rated_by(12));
        assert_eq!(movie.rating_from(11), Some(6));
        assert_eq!(movie.num_ratings(), 2);
    }

    #[test]
    fn re_rating_keeps_latest_score() {
        let mut movie = Movie::new(1, "Heat (1995)");
        movie.rate(10, 8);
        movie.rate(10, 2);
        assert_eq!(movie.rating_from(10), Some(2));
        assert_eq!(movie.num_ratings(), 1);
    }

    #[test]
    fn mean_rating_is_in_stars() {
        let mut movie = Movie::new(1, "Heat (1995)");
        assert_eq!(movie.mean_rating(), None);
        movie.rate(10, 8); // 4.0 stars
        movie.rate(11, 6); // 3.0 stars
        assert_eq!(movie.mean_rating(), Some(3.5));
    }

    #[test]
    fn display_includes_title_and_id() {
        let movie = Movie::new(7, "Toy Story (1995)");
        let text = movie.to_string();
        assert!(text.contains("Toy Story (1995)"));
        assert!(text.contains("id 7"));
    }

    #[test]
    fn reviewer_tracks_ratings_per_movie() {
        let mut reviewer = Reviewer::new(42);
        reviewer.rate(1, 9);
        reviewer.rate(2, 9);
        assert_eq!(reviewer.id(), 42);
        assert_eq!(reviewer.rating_for(1), Some(9));
        assert_eq!(reviewer.rating_for(3), None);
        assert_eq!(reviewer.num_ratings(), 2);
    }
}
