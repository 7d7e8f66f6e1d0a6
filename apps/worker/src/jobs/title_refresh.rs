//! Title cache refresh
//!
//! Once per tick, fetches the ranked movie and show lists from the external
//! title API, resolves per-title detail and official websites, and replaces
//! the whole `title_info` table with the fresh batch. A filter that fails is
//! logged and skipped; if no filter yields rows the previous cache is kept.

use sqlx::PgPool;
use watchdue_imdb_client::{TitleClient, TitleItem, FILTER_EXTERNAL_SITES, FILTER_TITLE};

use crate::error::WorkerResult;
use crate::state::AppState;

/// A row destined for the `title_info` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRecord {
    /// External identifier (table primary key)
    pub id: String,
    /// Display title
    pub title: String,
    /// Rank within the fetched list
    pub rank: Option<i32>,
    /// Release year
    pub year: Option<i32>,
    /// Title kind (`Movie` / `TVSeries`)
    pub kind: Option<String>,
    /// Comma-joined genre names
    pub genres: Option<String>,
    /// Official website URL
    pub website: Option<String>,
}

/// Merge a ranked-list stub with its two detail payloads
///
/// The stub contributes the rank, the `Title` detail everything else, and the
/// `ExternalSites` detail the website. A detail without a title falls back to
/// the stub's title; an item with no title at all is unusable.
pub fn merge_title(
    stub: &TitleItem,
    detail: &TitleItem,
    external_sites: &TitleItem,
) -> Option<TitleRecord> {
    let title = detail
        .title
        .clone()
        .or_else(|| stub.title.clone())
        .filter(|t| !t.is_empty())?;

    Some(TitleRecord {
        id: stub.id.clone(),
        title,
        rank: stub.rank_value(),
        year: detail.year_value(),
        kind: detail.kind.clone(),
        genres: detail.genres.clone(),
        website: external_sites.official_website.clone(),
    })
}

/// Fetch and merge the top titles for one category filter
///
/// Truncates the ranked list to `size_limit` before resolving detail, so an
/// API that returns more stubs than configured costs exactly `size_limit`
/// detail round-trips.
pub async fn fetch_filter(
    client: &TitleClient,
    filter: &str,
    size_limit: usize,
) -> WorkerResult<Vec<TitleRecord>> {
    let list = client.get_items(filter).await?;

    let mut records = Vec::new();
    for stub in list.items.iter().take(size_limit) {
        let detail = client.get_item_info(FILTER_TITLE, &stub.id).await?;
        let external_sites = client.get_item_info(FILTER_EXTERNAL_SITES, &stub.id).await?;

        match merge_title(stub, &detail, &external_sites) {
            Some(record) => records.push(record),
            None => {
                tracing::warn!(title_id = %stub.id, filter, "Skipping title without a usable name");
            }
        }
    }

    Ok(records)
}

/// Replace the whole title cache with a fresh batch, atomically
///
/// The upstream lists can repeat an id (a title ranked in more than one
/// filter); such duplicates collapse to one row, last occurrence wins.
pub async fn replace_titles(db: &PgPool, records: &[TitleRecord]) -> WorkerResult<()> {
    let mut tx = db.begin().await?;

    sqlx::query("DELETE FROM title_info").execute(&mut *tx).await?;

    for record in records {
        sqlx::query(
            r#"
            INSERT INTO title_info (id, title, rank, year, kind, genres, website)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                rank = EXCLUDED.rank,
                year = EXCLUDED.year,
                kind = EXCLUDED.kind,
                genres = EXCLUDED.genres,
                website = EXCLUDED.website
            "#,
        )
        .bind(&record.id)
        .bind(&record.title)
        .bind(record.rank)
        .bind(record.year)
        .bind(&record.kind)
        .bind(&record.genres)
        .bind(&record.website)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Execute one title refresh tick
pub async fn execute(state: &AppState) -> WorkerResult<()> {
    let client = match &state.titles {
        Some(client) => client,
        None => {
            tracing::debug!("Title API not configured, skipping refresh");
            return Ok(());
        }
    };

    let api_config = match state.config.title_api() {
        Some(config) => config,
        None => return Ok(()),
    };

    tracing::info!("Starting title cache refresh");

    let filters = [
        api_config.filter_movies.clone(),
        api_config.filter_shows.clone(),
    ];

    let mut batch = Vec::new();
    let mut fetched_any = false;

    for filter in &filters {
        match fetch_filter(client, filter, api_config.size_limit).await {
            Ok(records) => {
                tracing::info!(filter, count = records.len(), "Fetched titles for filter");
                batch.extend(records);
                fetched_any = true;
            }
            Err(e) => {
                tracing::error!(error = %e, filter, "Error retrieving title info, skipping filter");
            }
        }
    }

    if !fetched_any {
        tracing::warn!("All title filters failed, keeping previous cache");
        return Ok(());
    }

    replace_titles(&state.db, &batch).await?;

    tracing::info!(count = batch.len(), "Title cache refresh completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub(id: &str, rank: &str) -> TitleItem {
        serde_json::from_str(&format!(r#"{{"id": "{}", "rank": "{}"}}"#, id, rank)).unwrap()
    }

    fn detail(id: &str, title: &str) -> TitleItem {
        serde_json::from_str(&format!(
            r#"{{"id": "{}", "title": "{}", "year": "2008", "type": "TVSeries", "genres": "Crime, Drama"}}"#,
            id, title
        ))
        .unwrap()
    }

    fn sites(id: &str, website: &str) -> TitleItem {
        serde_json::from_str(&format!(
            r#"{{"id": "{}", "officialWebsite": "{}"}}"#,
            id, website
        ))
        .unwrap()
    }

    #[test]
    fn test_merge_combines_all_three_payloads() {
        let record = merge_title(
            &stub("tt0903747", "3"),
            &detail("tt0903747", "Breaking Bad"),
            &sites("tt0903747", "https://www.netflix.com/title/70143836"),
        )
        .unwrap();

        assert_eq!(record.id, "tt0903747");
        assert_eq!(record.title, "Breaking Bad");
        assert_eq!(record.rank, Some(3));
        assert_eq!(record.year, Some(2008));
        assert_eq!(record.kind.as_deref(), Some("TVSeries"));
        assert_eq!(record.genres.as_deref(), Some("Crime, Drama"));
        assert_eq!(
            record.website.as_deref(),
            Some("https://www.netflix.com/title/70143836")
        );
    }

    #[test]
    fn test_merge_falls_back_to_stub_title() {
        let mut bare_detail = detail("tt1", "ignored");
        bare_detail.title = None;

        let mut named_stub = stub("tt1", "1");
        named_stub.title = Some("Stub Name".to_string());

        let record = merge_title(&named_stub, &bare_detail, &sites("tt1", "https://x.example")).unwrap();
        assert_eq!(record.title, "Stub Name");
    }

    #[test]
    fn test_merge_rejects_nameless_title() {
        let mut bare_detail = detail("tt1", "ignored");
        bare_detail.title = None;

        assert!(merge_title(&stub("tt1", "1"), &bare_detail, &sites("tt1", "https://x.example")).is_none());
    }
}
