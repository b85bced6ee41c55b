//! `reelgraph node` command implementation.

use std::path::Path;

use colored::Colorize;
use reelgraph::Error;
use reelgraph::analyzer;

/// Run the node command.
pub fn run(
    ratings: &Path,
    movies: &Path,
    policy: &str,
    threshold: usize,
    movie_id: u32,
) -> Result<(), Error> {
    let (dataset, graph) = super::load_graph(ratings, movies, policy, threshold)?;
    let report = analyzer::node_report(&dataset, &graph, movie_id)?;

    let heading = format!(
        "{} [id {}, {} ratings]",
        report.title, report.id, report.num_ratings
    );
    println!("{}", heading.cyan().bold());
    if let Some(mean) = report.mean_rating {
        println!("  {}: {mean:.2} stars", "Mean rating".white().bold());
    }

    if report.neighbors.is_empty() {
        println!("  {}: none", "Neighbors".white().bold());
        return Ok(());
    }
    println!(
        "  {} ({}):",
        "Neighbors".white().bold(),
        report.neighbors.len()
    );
    for (id, title) in report.neighbors {
        println!("    {} {} {}", "•".dimmed(), title, format!("({id})").dimmed());
    }

    Ok(())
}
