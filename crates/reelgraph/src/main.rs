//! Reelgraph CLI - movie graph analysis from the command line.
//!
//! Reelgraph loads MovieLens-style rating and title files, builds a
//! movie-affinity graph, and answers statistics, neighborhood, shortest-path,
//! and title-search queries over it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use reelgraph::analyzer::DEFAULT_THRESHOLD;
use tracing_subscriber::EnvFilter;

mod cli;

/// Reelgraph: movie-affinity graph analyzer.
#[derive(Parser)]
#[command(name = "reelgraph")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Ratings file (`userId,movieId,rating[,timestamp]` per line)
    #[arg(short, long, global = true)]
    ratings: Option<PathBuf>,

    /// Movie titles file (`movieId,title[,genres]` per line)
    #[arg(short, long, global = true)]
    movies: Option<PathBuf>,

    /// Adjacency policy: 'shared-rating' (same score from the same
    /// reviewers) or 'shared-viewing' (rated by the same reviewers)
    #[arg(short, long, global = true, default_value = "shared-rating")]
    policy: String,

    /// Reviewers that must agree before two movies become adjacent
    #[arg(short, long, global = true, default_value_t = DEFAULT_THRESHOLD)]
    threshold: usize,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print statistics about the movie graph
    Stats {
        /// Emit the statistics as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Print a movie's information and its graph neighbors
    Node {
        /// Movie id as it appears in the titles file
        movie_id: u32,
    },

    /// Display the shortest path between two movies
    Path {
        /// Starting movie id
        from: u32,

        /// Destination movie id
        to: u32,
    },

    /// Search for movies by title keyword
    Search {
        /// Keyword to look for (case-insensitive)
        keyword: String,
    },
}

fn main() -> ExitCode {
    let args = Cli::parse();

    // Set up logging based on verbosity
    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    // Both dataset files are needed by every command.
    let (ratings, movies) = match (args.ratings, args.movies) {
        (Some(ratings), Some(movies)) => (ratings, movies),
        _ => {
            eprintln!(
                "{}: --ratings and --movies are required",
                "error".red().bold()
            );
            return ExitCode::FAILURE;
        }
    };

    let result = match args.command {
        Commands::Stats { json } => {
            cli::stats::run(&ratings, &movies, &args.policy, args.threshold, json)
        }
        Commands::Node { movie_id } => {
            cli::node::run(&ratings, &movies, &args.policy, args.threshold, movie_id)
        }
        Commands::Path { from, to } => {
            cli::path::run(&ratings, &movies, &args.policy, args.threshold, from, to)
        }
        Commands::Search { keyword } => cli::search::run(&ratings, &movies, &keyword),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
