//! `reelgraph path` command implementation.

use std::path::Path;

use colored::Colorize;
use reelgraph::analyzer;

/// Run the path command.
pub fn run(
    ratings: &Path,
    movies: &Path,
    policy: &str,
    threshold: usize,
    from: u32,
    to: u32,
) -> Result<(), reelgraph::Error> {
    let (dataset, graph) = super::load_graph(ratings, movies, policy, threshold)?;

    let Some(path) = analyzer::shortest_path(&graph, from, to)? else {
        println!(
            "No path from movie {} to movie {}",
            from.to_string().cyan(),
            to.to_string().cyan()
        );
        return Ok(());
    };

    let hops = path.len() - 1;
    println!(
        "{} ({} {}):",
        "Shortest path".white().bold(),
        hops,
        if hops == 1 { "hop" } else { "hops" }
    );
    for (position, movie_id) in path.iter().enumerate() {
        let title = dataset
            .movie(*movie_id)
            .map_or("<unknown title>", |m| m.title());
        if position == 0 {
            println!("  {} {}", title.cyan(), format!("({movie_id})").dimmed());
        } else {
            println!(
                "  {} {} {}",
                "->".dimmed(),
                title,
                format!("({movie_id})").dimmed()
            );
        }
    }

    Ok(())
}
