//! The `search` and `url` subcommands.

use anyhow::{Context, Result};
use clap::Args;
use gbsearch_api::{Client, SearchOptions, SearchQuery};

use crate::config::Settings;
use crate::output::{
    print_json, print_volumes_csv, print_volumes_markdown, print_volumes_table, OutputFormat,
};
use crate::validation;

#[derive(Args)]
pub struct SearchArgs {
    /// Search term (an ISBN, a title, a name, ...)
    pub term: String,

    /// Field to match: title, author, publisher, subject, isbn, lccn, oclc, any
    #[arg(long, default_value = "any")]
    pub by: String,

    /// Only return volumes with a downloadable EPub
    #[arg(long)]
    pub epub: bool,

    /// Filter: partial, full, free-ebooks, paid-ebooks, ebooks
    #[arg(long)]
    pub filter: Option<String>,

    /// Print type: all, books, magazines
    #[arg(long)]
    pub print_type: Option<String>,

    /// Projection: full, lite
    #[arg(long)]
    pub projection: Option<String>,

    /// Sort order: relevance, newest
    #[arg(long)]
    pub order_by: Option<String>,

    /// Restrict to a two-letter language code (e.g. en, fr)
    #[arg(long)]
    pub lang: Option<String>,

    /// Restrict to what is available in a two-letter country code (e.g. us, gb)
    #[arg(long)]
    pub country: Option<String>,

    /// Offset of the first result, for paging
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    pub start_index: Option<i64>,

    /// Results per page (1-40)
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=40))]
    pub max_results: Option<i64>,

    /// API key (overrides GBSEARCH_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// API base URL (overrides GBSEARCH_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides GBSEARCH_TIMEOUT_SECS)
    #[arg(long)]
    pub timeout: Option<u64>,
}

pub fn run(args: &SearchArgs, format: &OutputFormat) -> Result<()> {
    let query = build_search_query(args)?;
    let client = build_client(args)?;

    let resp = client
        .execute(&query)
        .with_context(|| format!("search for '{}' failed", query.q()))?;

    eprintln!(
        "Showing {} of {} results",
        resp.items.len(),
        resp.total_items
    );

    match format {
        OutputFormat::Table => print_volumes_table(&resp.items),
        OutputFormat::Json => print_json(&resp),
        OutputFormat::Csv => print_volumes_csv(&resp.items)?,
        OutputFormat::Markdown => print_volumes_markdown(&resp.items),
    }

    Ok(())
}

pub fn print_url(args: &SearchArgs) -> Result<()> {
    println!("{}", request_url(args)?);
    Ok(())
}

fn request_url(args: &SearchArgs) -> Result<String> {
    let query = build_search_query(args)?;
    let client = build_client(args)?;
    Ok(client.request_url(&query)?.to_string())
}

fn build_client(args: &SearchArgs) -> Result<Client> {
    let settings = Settings::resolve(
        args.api_key.as_deref(),
        args.base_url.as_deref(),
        args.timeout,
        |name| std::env::var(name).ok(),
    )?;
    Ok(settings.client())
}

pub(crate) fn build_search_query(args: &SearchArgs) -> Result<SearchQuery> {
    let category = validation::validate_category(&args.by)?;
    let term = validation::validate_term(&args.term)?;

    let mut options = SearchOptions::new().with_epub_only(args.epub);

    if let Some(ref filter) = args.filter {
        options = options.with_filter(validation::validate_filter(filter)?);
    }
    if let Some(ref print_type) = args.print_type {
        options = options.with_print_type(validation::validate_print_type(print_type)?);
    }
    if let Some(ref projection) = args.projection {
        options = options.with_projection(validation::validate_projection(projection)?);
    }
    if let Some(ref order_by) = args.order_by {
        options = options.with_order_by(validation::validate_order_by(order_by)?);
    }
    if let Some(ref lang) = args.lang {
        options = options.with_language_code(&validation::validate_code(lang, "language")?);
    }
    if let Some(ref country) = args.country {
        options = options.with_country_code(&validation::validate_code(country, "country")?);
    }
    if let Some(start_index) = args.start_index {
        options = options.with_start_index(start_index);
    }
    if let Some(max_results) = args.max_results {
        options = options.with_max_results(max_results);
    }

    Ok(SearchQuery::new(category, &term).with_options(options))
}
