//! `reelgraph search` command implementation.

use std::path::Path;

use colored::Colorize;
use reelgraph::analyzer;
use reelgraph::dataset::Dataset;

/// Run the search command.
pub fn run(ratings: &Path, movies: &Path, keyword: &str) -> Result<(), reelgraph::Error> {
    let dataset = Dataset::load(ratings, movies)?;
    let found = analyzer::search_titles(&dataset, keyword);

    if found.is_empty() {
        println!("No movies were found with the keyword [{}]", keyword.cyan());
        return Ok(());
    }

    println!(
        "Movies found with the keyword [{}] ({}):",
        keyword.cyan(),
        found.len()
    );
    for movie in found {
        println!(
            "  {} {} {}",
            "•".dimmed(),
            movie.title(),
            format!("({})", movie.id()).dimmed()
        );
    }

    Ok(())
}
