use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use log::info;
use serde::Serialize;

use sevenseas_scraper::date::normalize_date;
use sevenseas_scraper::fetch::{fetch_document, BASE_URL};
use sevenseas_scraper::parser::{
    parse_author_index, parse_series_listing, BookPage, Parser, SeriesApi, SeriesPage,
};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_default();

    match command.as_str() {
        "series" => {
            let slug = args.next().ok_or_else(|| anyhow!("Missing slug"))?;
            let page = SeriesPage::new(slug.clone()).request()?;
            let series = page.parse()?;

            save_json(&series, &format!("./data/series_full_{}.json", slug))?;
        }
        "book" => {
            let slug = args.next().ok_or_else(|| anyhow!("Missing slug"))?;
            let page = BookPage::new(slug.clone()).request()?;
            let book = page.parse()?;

            save_json(&book, &format!("./data/book_{}.json", slug))?;
        }
        "all-series" => {
            let document = fetch_document(&format!("{}/series-list/", BASE_URL))?;
            let all_series = parse_series_listing(&document);

            save_json(
                &all_series,
                &format!("./data/all_series_{}.json", Utc::now().timestamp_millis()),
            )?;
        }
        "authors" => {
            let document = fetch_document(&format!("{}/creator/", BASE_URL))?;
            let authors = parse_author_index(&document);

            save_json(&authors, "./data/authors.json")?;
        }
        "all-series-api" => {
            let after = match args.next() {
                Some(raw) => Some(parse_after_date(&raw)?),
                None => None,
            };
            let all_series = SeriesApi::new(after).fetch()?;

            save_json(
                &all_series,
                &format!(
                    "./data/all_series_api_{}.json",
                    Utc::now().timestamp_millis()
                ),
            )?;
        }
        other => {
            return Err(anyhow!(
                "Unknown command `{}`; expected one of: series <slug>, book <slug>, all-series, authors, all-series-api [after-date]",
                other
            ));
        }
    }

    Ok(())
}

fn parse_after_date(raw: &str) -> Result<NaiveDateTime> {
    normalize_date(raw)
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| anyhow!("Invalid date: {}", raw))
}

fn save_json<T: Serialize>(data: &T, path: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, serde_json::to_string_pretty(data)?)?;
    info!("saved {}", path);

    Ok(())
}
