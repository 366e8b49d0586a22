//! Photo lookups against the Google Places Text Search API.
//!
//! Enabled only when `GOOGLE_MAPS_API_KEY` is set. The returned photo URL
//! embeds the key, so the browser can load it directly.

use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use url::Url;

const PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

pub const DESTINATION_PHOTO_WIDTH: u32 = 800;
pub const ACCOMMODATION_PHOTO_WIDTH: u32 = 600;

#[derive(Debug)]
pub enum PlacesError {
    HttpError(reqwest::Error),
    ResponseError(String),
    UrlError(url::ParseError),
}

impl fmt::Display for PlacesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacesError::HttpError(err) => write!(f, "HTTP error: {}", err),
            PlacesError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            PlacesError::UrlError(err) => write!(f, "URL error: {}", err),
        }
    }
}

impl std::error::Error for PlacesError {}

impl From<reqwest::Error> for PlacesError {
    fn from(err: reqwest::Error) -> Self {
        PlacesError::HttpError(err)
    }
}

impl From<url::ParseError> for PlacesError {
    fn from(err: url::ParseError) -> Self {
        PlacesError::UrlError(err)
    }
}

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    results: Vec<PlaceResult>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    #[serde(default)]
    photos: Vec<PlacePhoto>,
}

#[derive(Debug, Deserialize)]
struct PlacePhoto {
    photo_reference: String,
}

impl TextSearchResponse {
    fn first_photo_reference(&self) -> Option<&str> {
        self.results
            .first()?
            .photos
            .first()
            .map(|photo| photo.photo_reference.as_str())
            .filter(|reference| !reference.is_empty())
    }
}

#[derive(Clone)]
pub struct PlacesService {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl PlacesService {
    pub fn new(api_key: String) -> Result<Self, PlacesError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http_client,
            api_key,
            base_url: PLACES_BASE_URL.to_string(),
        })
    }

    /// Points the service at another Places-compatible host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// URL of the first photo of the best text-search match, if any.
    pub async fn find_photo_url(
        &self,
        query: &str,
        max_width: u32,
    ) -> Result<Option<String>, PlacesError> {
        let search_url = Url::parse_with_params(
            &format!("{}/textsearch/json", self.base_url),
            &[("query", query), ("key", self.api_key.as_str())],
        )?;

        let response = self.http_client.get(search_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::ResponseError(format!(
                "Text search failed with status {}",
                status
            )));
        }

        let search: TextSearchResponse = response.json().await?;
        if search.status != "OK" && search.status != "ZERO_RESULTS" {
            return Err(PlacesError::ResponseError(format!(
                "Text search returned status {}",
                search.status
            )));
        }

        match search.first_photo_reference() {
            Some(reference) => Ok(Some(self.photo_url(reference, max_width)?)),
            None => Ok(None),
        }
    }

    fn photo_url(&self, photo_reference: &str, max_width: u32) -> Result<String, PlacesError> {
        let url = Url::parse_with_params(
            &format!("{}/photo", self.base_url),
            &[
                ("maxwidth", max_width.to_string().as_str()),
                ("photo_reference", photo_reference),
                ("key", self.api_key.as_str()),
            ],
        )?;
        Ok(url.to_string())
    }
}
