//! Client for the daily statistics page
//!
//! Fetches the configured page and extracts the history table as raw text
//! cells. Extraction itself is a pure function of the HTML string so it
//! can be tested offline.


use crate::config::SourceConfig;
use crate::error::{BotError, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::debug;

/// HTTP client for the statistics page
#[derive(Clone)]
pub struct PageClient {
    http: Client,
    url: String,
    table_selector: String,
}

impl PageClient {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url.trim_end_matches('/').to_string(),
            table_selector: config.table_selector.clone(),
        })
    }

    /// Fetch the page and return the history table's rows as trimmed cell
    /// text, in page order (newest day first).
    pub async fn fetch_history(&self) -> Result<Vec<Vec<String>>> {
        debug!("Fetching statistics page: {}", self.url);
        let html = self.http.get(&self.url).send().await?.text().await?;

        let rows = extract_rows(&html, &self.table_selector)?;
        if rows.is_empty() {
            return Err(BotError::TableNotFound(self.url.clone()));
        }

        debug!("Extracted {} table rows", rows.len());
        Ok(rows)
    }
}

/// Extract `<td>` cell text per `<tr>` from the first table matching
/// `table_selector`. Header rows come out empty (no `<td>` cells) and are
/// dropped here; content filtering belongs to the row parser.
pub fn extract_rows(html: &str, table_selector: &str) -> Result<Vec<Vec<String>>> {
    let document = Html::parse_document(html);
    let table_sel = Selector::parse(table_selector)
        .map_err(|e| BotError::Scrape(format!("bad table selector: {e}")))?;
    let tr_sel = Selector::parse("tr").map_err(|e| BotError::Scrape(e.to_string()))?;
    let td_sel = Selector::parse("td").map_err(|e| BotError::Scrape(e.to_string()))?;

    let Some(table) = document.select(&table_sel).next() else {
        return Ok(Vec::new());
    };

    let rows = table
        .select(&tr_sel)
        .map(|tr| {
            tr.select(&td_sel)
                .map(|td| td.text().collect::<String>().trim().to_string())
                .collect::<Vec<String>>()
        })
        .filter(|cells| !cells.is_empty())
        .collect();

    Ok(rows)
}
