//! `reelgraph stats` command implementation.

use std::path::Path;

use colored::Colorize;
use reelgraph::analyzer;

/// Run the stats command.
pub fn run(
    ratings: &Path,
    movies: &Path,
    policy: &str,
    threshold: usize,
    json: bool,
) -> Result<(), reelgraph::Error> {
    let (dataset, graph) = super::load_graph(ratings, movies, policy, threshold)?;
    let summary = analyzer::summarize(&graph)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", "Movie Graph Statistics".cyan().bold());
    println!();
    println!(
        "  {}: {}",
        "|V|".white().bold(),
        summary.num_vertices.to_string().green()
    );
    println!(
        "  {}: {}",
        "|E|".white().bold(),
        summary.num_edges.to_string().green()
    );
    println!("  {}: {:.6}", "Density".white().bold(), summary.density);

    match summary.max_degree_movie {
        Some(id) => {
            let title = dataset
                .movie(id)
                .map_or("<unknown title>", |movie| movie.title());
            println!(
                "  {}: {} ({})",
                "Max degree".white().bold(),
                summary.max_degree,
                title.dimmed()
            );
        }
        None => println!("  {}: n/a", "Max degree".white().bold()),
    }

    match summary.diameter_endpoints {
        Some((from, to)) => println!(
            "  {}: {} (from movie {from} to {to})",
            "Diameter".white().bold(),
            summary.diameter
        ),
        None => println!(
            "  {}: n/a (no two movies are connected)",
            "Diameter".white().bold()
        ),
    }
    println!(
        "  {}: {:.4}",
        "Avg. path length".white().bold(),
        summary.avg_path_length
    );

    Ok(())
}
