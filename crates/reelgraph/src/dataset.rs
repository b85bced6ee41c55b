//! Loading MovieLens-style rating and title files into memory.
//!
//! Two CSV files make up a dataset:
//!
//! - titles: `movieId,title[,genres]` — titles may be quoted and contain
//!   commas;
//! - ratings: `userId,movieId,rating[,timestamp]` — scores like `3.5` are
//!   stored in half-star units.
//!
//! Loading is best effort: a malformed line or a rating for a movie the
//! titles file never mentioned is skipped and counted, not fatal. Only an
//! input that yields no movies at all is an error. An optional header line
//! is recognized and ignored in both files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{Movie, Reviewer};
use crate::error::{Error, Result};

/// The in-memory form of one ratings/titles file pair.
///
/// Movies and reviewers are kept in ordered maps so that every downstream
/// traversal — graph construction included — is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    movies: BTreeMap<u32, Movie>,
    reviewers: BTreeMap<u32, Reviewer>,
}

impl Dataset {
    /// Loads a dataset from a ratings file and a movie titles file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if either file cannot be read, or
    /// [`Error::InvalidFormat`] if the titles file yields no movies.
    pub fn load(ratings_path: &Path, movies_path: &Path) -> Result<Self> {
        let mut dataset = Self::default();
        dataset.load_movies(movies_path)?;
        dataset.load_ratings(ratings_path)?;
        debug!(
            movies = dataset.movies.len(),
            reviewers = dataset.reviewers.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Looks up a movie by id.
    #[must_use]
    pub fn movie(&self, id: u32) -> Option<&Movie> {
        self.movies.get(&id)
    }

    /// Iterates over all movies in ascending id order.
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    /// Looks up a reviewer by id.
    #[must_use]
    pub fn reviewer(&self, id: u32) -> Option<&Reviewer> {
        self.reviewers.get(&id)
    }

    /// Iterates over all reviewers in ascending id order.
    pub fn reviewers(&self) -> impl Iterator<Item = &Reviewer> {
        self.reviewers.values()
    }

    /// The number of distinct movies.
    #[must_use]
    pub fn num_movies(&self) -> usize {
        self.movies.len()
    }

    /// The number of distinct reviewers.
    #[must_use]
    pub fn num_reviewers(&self) -> usize {
        self.reviewers.len()
    }

    /// Builds a dataset directly from records. Used by in-crate tests.
    #[cfg(test)]
    pub(crate) fn from_parts(movies: Vec<Movie>, reviewers: Vec<Reviewer>) -> Self {
        Self {
            movies: movies.into_iter().map(|m| (m.id(), m)).collect(),
            reviewers: reviewers.into_iter().map(|r| (r.id(), r)).collect(),
        }
    }

    fn load_movies(&mut self, path: &Path) -> Result<()> {
        let contents = fs::read_to_string(path)?;
        let mut skipped = 0usize;
        for (line_no, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields = split_csv_line(line);
            let id = fields.first().and_then(|f| f.parse::<u32>().ok());
            match (id, fields.get(1)) {
                (Some(id), Some(title)) if !title.is_empty() => {
                    self.movies.insert(id, Movie::new(id, title.clone()));
                }
                _ if line_no == 0 => {
                    // Header line ("movieId,title,genres").
                }
                _ => {
                    debug!(line = line_no + 1, "skipping malformed title line");
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            warn!(
                skipped,
                path = %path.display(),
                "some title lines could not be parsed"
            );
        }
        if self.movies.is_empty() {
            return Err(Error::InvalidFormat(format!(
                "no movies found in {}",
                path.display()
            )));
        }
        Ok(())
    }

    fn load_ratings(&mut self, path: &Path) -> Result<()> {
        let contents = fs::read_to_string(path)?;
        let mut skipped = 0usize;
        for (line_no, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields = split_csv_line(line);
            let parsed = match (fields.first(), fields.get(1), fields.get(2)) {
                (Some(user), Some(movie), Some(rating)) => {
                    match (
                        user.parse::<u32>().ok(),
                        movie.parse::<u32>().ok(),
                        parse_half_stars(rating),
                    ) {
                        (Some(user), Some(movie), Some(rating)) => Some((user, movie, rating)),
                        _ => None,
                    }
                }
                _ => None,
            };
            let Some((reviewer_id, movie_id, half_stars)) = parsed else {
                if line_no > 0 {
                    debug!(line = line_no + 1, "skipping malformed rating line");
                    skipped += 1;
                }
                continue;
            };
            let Some(movie) = self.movies.get_mut(&movie_id) else {
                debug!(movie_id, "rating references a movie with no title entry");
                skipped += 1;
                continue;
            };
            movie.rate(reviewer_id, half_stars);
            self.reviewers
                .entry(reviewer_id)
                .or_insert_with(|| Reviewer::new(reviewer_id))
                .rate(movie_id, half_stars);
        }
        if skipped > 0 {
            warn!(
                skipped,
                path = %path.display(),
                "some rating lines were ignored"
            );
        }
        Ok(())
    }
}

/// Splits one CSV line into fields, honoring double-quoted fields that may
/// contain commas. A doubled quote inside a quoted field is an escaped
/// quote.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Parses a star score like `3.5` into half-star units (`1..=10`).
///
/// Anything outside the half-star grid or the 0.5–5.0 range is rejected.
fn parse_half_stars(field: &str) -> Option<u8> {
    let stars: f64 = field.trim().parse().ok()?;
    let doubled = stars * 2.0;
    let rounded = doubled.round();
    if (doubled - rounded).abs() > f64::EPSILON {
        return None;
    }
    if (1.0..=10.0).contains(&rounded) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(rounded as u8)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_plain_fields() {
        assert_eq!(split_csv_line("1,Heat (1995),Action"), vec![
            "1".to_string(),
            "Heat (1995)".to_string(),
            "Action".to_string(),
        ]);
    }

    #[test]
    fn split_quoted_field_with_comma() {
        assert_eq!(
            split_csv_line("11,\"American President, The (1995)\",Comedy"),
            vec![
                "11".to_string(),
                "American President, The (1995)".to_string(),
                "Comedy".to_string(),
            ]
        );
    }

    #[test]
    fn split_escaped_quote() {
        assert_eq!(
            split_csv_line("5,\"Say \"\"hi\"\" (2001)\""),
            vec!["5".to_string(), "Say \"hi\" (2001)".to_string()]
        );
    }

    #[test]
    fn split_preserves_empty_fields() {
        assert_eq!(split_csv_line("1,,x"), vec![
            "1".to_string(),
            String::new(),
            "x".to_string(),
        ]);
    }

    #[test]
    fn half_star_parsing_accepts_the_grid() {
        assert_eq!(parse_half_stars("0.5"), Some(1));
        assert_eq!(parse_half_stars("3"), Some(6));
        assert_eq!(parse_half_stars("3.5"), Some(7));
        assert_eq!(parse_half_stars("5.0"), Some(10));
    }

    #[test]
    fn half_star_parsing_rejects_out_of_range_scores() {
        assert_eq!(parse_half_stars("0"), None);
        assert_eq!(parse_half_stars("5.5"), None);
        assert_eq!(parse_half_stars("-1"), None);
        assert_eq!(parse_half_stars("3.7"), None);
        assert_eq!(parse_half_stars("abc"), None);
    }
}
