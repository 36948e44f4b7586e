use anyhow::Result;
use clap::Args;
use lotr_api::{Client, Filter, FilterComparison, MovieField, MovieQuery};

use crate::output::print_json;

#[derive(Args)]
pub struct MoviesArgs {
    /// Get a single movie by ID
    #[arg(long)]
    pub id: Option<String>,

    /// Also list the movie's quotes (requires --id)
    #[arg(long, requires = "id")]
    pub quotes: bool,

    /// Filter by exact name
    #[arg(long)]
    pub name: Option<String>,

    /// Minimum academy award wins
    #[arg(long)]
    pub min_wins: Option<i64>,

    /// Maximum academy award nominations
    #[arg(long)]
    pub max_nominations: Option<i64>,

    /// Minimum Rotten Tomatoes score
    #[arg(long)]
    pub min_score: Option<f64>,
}

pub async fn run(args: &MoviesArgs, client: &Client) -> Result<()> {
    if let Some(id) = &args.id {
        let resp = client.get_movie(id).await?;
        print_json(&resp)?;
        if args.quotes {
            let quotes = client.get_movie_quotes(id).await?;
            print_json(&quotes)?;
        }
        return Ok(());
    }

    let query = build_query(args);
    let resp = client.get_movies(query.as_ref()).await?;
    print_json(&resp)?;
    Ok(())
}

fn build_query(args: &MoviesArgs) -> Option<MovieQuery> {
    let mut query = MovieQuery::default();
    let mut filtered = false;

    if let Some(name) = &args.name {
        query = query.with_filter(
            MovieField::Name,
            Filter::new(FilterComparison::Equal, name.as_str()),
        );
        filtered = true;
    }
    if let Some(min_wins) = args.min_wins {
        query = query.with_filter(
            MovieField::AcademyAwardWins,
            Filter::new(FilterComparison::GreaterThanOrEqual, min_wins),
        );
        filtered = true;
    }
    if let Some(max_nominations) = args.max_nominations {
        query = query.with_filter(
            MovieField::AcademyAwardNominations,
            Filter::new(FilterComparison::LessThanOrEqual, max_nominations),
        );
        filtered = true;
    }
    if let Some(min_score) = args.min_score {
        query = query.with_filter(
            MovieField::RottenTomatoesScore,
            Filter::new(FilterComparison::GreaterThanOrEqual, min_score),
        );
        filtered = true;
    }

    filtered.then_some(query)
}
