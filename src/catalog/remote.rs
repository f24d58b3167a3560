use reqwest::StatusCode;
use serde::Deserialize;

use super::Catalog;
use crate::logger;
use crate::models::card::Card;
use crate::models::settings::Settings;
use crate::utils::errors::CatalogError;
use crate::utils::logger::Logger;

/// Batch response from the card server. Identifiers the server had no
/// record for are reported back instead of failing the whole request.
#[derive(Debug, Deserialize)]
pub struct SelectedCardsResponse {
    pub cards: Vec<Card>,
    #[serde(rename = "notFound", default)]
    pub not_found: Vec<String>,
}

/// Card catalog backed by the remote card server.
pub struct RemoteCatalog {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteCatalog {
    pub fn new(settings: &Settings) -> Self {
        RemoteCatalog::from_url(settings.card_server.clone())
    }

    pub fn from_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Requests the card server for one card.
    /// The endpoints do not require authentication, so the only responses
    /// possible are errors, OK and NOT FOUND.
    ///
    /// # Arguments
    /// * `path` - Single-card endpoint path, relative to the base URL.
    ///
    /// # Returns
    /// * `Ok(Some(Card))` - The server answered with a card record.
    /// * `Ok(None)` - The server has no record for the identifier.
    /// * `Err(CatalogError)` - The request itself failed.
    async fn request_card(&self, path: &str) -> Result<Option<Card>, CatalogError> {
        let api_url = format!("{}{}", self.base_url, path);
        match self.client.get(&api_url).send().await {
            Err(error) => Err(CatalogError::StoreUnavailable(error.to_string())),
            Ok(response) => match response.status() {
                StatusCode::NOT_FOUND => Ok(None),
                StatusCode::OK => Ok(Some(response.json::<Card>().await.map_err(|e| {
                    return CatalogError::InvalidCardData(e.to_string());
                })?)),
                _ => {
                    let response_body = response.text().await.unwrap_or("NO MESSAGE".to_string());
                    Err(CatalogError::StoreUnavailable(response_body))
                }
            },
        }
    }

    /// Requests the card server for a selection of cards in one call.
    ///
    /// # Arguments
    /// * `path` - Batch endpoint path, relative to the base URL.
    /// * `body` - JSON body listing the requested identifiers.
    ///
    /// # Returns
    /// * `Ok(Vec<Card>)` - The matched records; unmatched identifiers are
    ///   logged and dropped.
    /// * `Err(CatalogError)` - The request itself failed.
    async fn request_selected(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<Vec<Card>, CatalogError> {
        let api_url = format!("{}{}", self.base_url, path);
        match self.client.post(&api_url).json(&body).send().await {
            Err(error) => Err(CatalogError::StoreUnavailable(error.to_string())),
            Ok(response) => match response.status() {
                StatusCode::OK => {
                    let selected =
                        response
                            .json::<SelectedCardsResponse>()
                            .await
                            .map_err(|e| {
                                return CatalogError::InvalidCardData(e.to_string());
                            })?;

                    if !selected.not_found.is_empty() {
                        logger!(
                            WARN,
                            "[CATALOG] Card server had no match for {} identifiers",
                            selected.not_found.len()
                        );
                    }

                    Ok(selected.cards)
                }
                _ => {
                    let response_body = response.text().await.unwrap_or("NO MESSAGE".to_string());
                    Err(CatalogError::StoreUnavailable(response_body))
                }
            },
        }
    }
}

impl Catalog for RemoteCatalog {
    async fn by_identifier(&self, card_def_id: &str) -> Result<Option<Card>, CatalogError> {
        self.request_card(&format!("/api/card/{}", card_def_id)).await
    }

    async fn by_short_name(&self, short_name: &str) -> Result<Option<Card>, CatalogError> {
        self.request_card(&format!("/api/card/short-name/{}", short_name))
            .await
    }

    async fn by_identifiers(&self, card_def_ids: &[String]) -> Result<Vec<Card>, CatalogError> {
        let body = serde_json::json!({ "cardDefIds": card_def_ids });
        self.request_selected("/api/cards/selected", body).await
    }

    async fn by_short_names(&self, short_names: &[String]) -> Result<Vec<Card>, CatalogError> {
        let body = serde_json::json!({ "shortNames": short_names });
        self.request_selected("/api/cards/short-names", body).await
    }
}
