use anyhow::Result;
use clap::Args;
use lotr_api::{Client, Filter, FilterComparison, QuoteField, QuoteQuery};

use crate::output::print_json;

#[derive(Args)]
pub struct QuotesArgs {
    /// Get a single quote by ID
    #[arg(long)]
    pub id: Option<String>,

    /// Filter by movie ID
    #[arg(long)]
    pub movie: Option<String>,

    /// Filter by exact dialog; repeat to match any of several lines
    #[arg(long)]
    pub dialog: Vec<String>,

    /// Only quotes with no dialog recorded
    #[arg(long, conflicts_with = "dialog")]
    pub no_dialog: bool,
}

pub async fn run(args: &QuotesArgs, client: &Client) -> Result<()> {
    if let Some(id) = &args.id {
        let resp = client.get_quote(id).await?;
        print_json(&resp)?;
        return Ok(());
    }

    let query = build_query(args);
    let resp = client.get_quotes(query.as_ref()).await?;
    print_json(&resp)?;
    Ok(())
}

fn build_query(args: &QuotesArgs) -> Option<QuoteQuery> {
    let mut query = QuoteQuery::default();
    let mut filtered = false;

    if let Some(movie) = &args.movie {
        query = query.with_filter(
            QuoteField::Movie,
            Filter::new(FilterComparison::Equal, movie.as_str()),
        );
        filtered = true;
    }
    if !args.dialog.is_empty() {
        query = query.with_filter(
            QuoteField::Dialog,
            Filter::new(FilterComparison::Equal, args.dialog.clone()),
        );
        filtered = true;
    }
    if args.no_dialog {
        query = query.with_filter(QuoteField::Dialog, Filter::does_not_exist());
        filtered = true;
    }

    filtered.then_some(query)
}
