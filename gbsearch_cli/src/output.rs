use anyhow::Result;
use clap::ValueEnum;
use gbsearch_api::types::Item;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    #[value(alias = "md")]
    Markdown,
}

#[derive(Tabled, Serialize)]
struct VolumeRow {
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Authors")]
    #[serde(rename = "Authors")]
    authors: String,
    #[tabled(rename = "Published")]
    #[serde(rename = "Published")]
    published: String,
    #[tabled(rename = "Publisher")]
    #[serde(rename = "Publisher")]
    publisher: String,
    #[tabled(rename = "ISBN")]
    #[serde(rename = "ISBN")]
    isbn: String,
    #[tabled(rename = "Pages")]
    #[serde(rename = "Pages")]
    pages: String,
}

// -- Row builders --

fn build_volume_rows(items: &[Item]) -> Vec<VolumeRow> {
    items
        .iter()
        .map(|item| {
            let v = &item.volume_info;
            VolumeRow {
                title: format_title(&v.title, &v.subtitle),
                authors: v.authors.join(", "),
                published: v.published_date.clone(),
                publisher: v.publisher.clone(),
                isbn: v
                    .isbn_13()
                    .or_else(|| v.isbn_10())
                    .unwrap_or_default()
                    .to_string(),
                pages: format_pages(v.page_count),
            }
        })
        .collect()
}

// -- Table output --

pub fn print_volumes_table(items: &[Item]) {
    println!("{}", Table::new(build_volume_rows(items)));
}

// -- Markdown output --

pub fn print_volumes_markdown(items: &[Item]) {
    let mut table = Table::new(build_volume_rows(items));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_volumes_csv(items: &[Item]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_volume_rows(items) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_title(title: &str, subtitle: &str) -> String {
    if subtitle.is_empty() {
        title.to_string()
    } else {
        format!("{}: {}", title, subtitle)
    }
}

fn format_pages(page_count: i64) -> String {
    if page_count > 0 {
        page_count.to_string()
    } else {
        String::new()
    }
}
