//! HTTP client for the pokedex backend.
//!
//! # Design
//! `PokedexClient` holds a `reqwest::Client` and a base URL and nothing
//! else. Each operation is one independent round trip: build the URL, send,
//! check the status, deserialize. There is no retry, no caching, and no
//! client-side validation of ids or response shapes. Orchestration and
//! bounds checking live in the loader layer, which keeps every operation
//! here a pure request/response mapping that any caller can retry itself.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::types::{
    CompareRequest, CompareResponse, EvolutionChain, PokemonDetail, PokemonListResponse,
};

/// Base URL used when `POKEDEX_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

const BASE_URL_ENV: &str = "POKEDEX_API_URL";

/// Stateless client for the pokedex API.
#[derive(Debug, Clone)]
pub struct PokedexClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokedexClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from the `POKEDEX_API_URL` environment variable,
    /// falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    /// `GET {base}/pokemon`, the full catalog for the grid view.
    pub async fn fetch_pokemon_list(&self) -> Result<PokemonListResponse, ApiError> {
        self.get_json("/pokemon").await
    }

    /// `GET {base}/pokemon/{id}`, full details for one pokemon.
    ///
    /// The id is forwarded as given; range checking is the loader's job.
    pub async fn fetch_pokemon_detail(&self, id: u32) -> Result<PokemonDetail, ApiError> {
        self.get_json(&format!("/pokemon/{id}")).await
    }

    /// `GET {base}/pokemon/{id}/evolution`, the evolution chain containing
    /// the given pokemon, root form first.
    pub async fn fetch_evolution_chain(&self, id: u32) -> Result<EvolutionChain, ApiError> {
        self.get_json(&format!("/pokemon/{id}/evolution")).await
    }

    /// `POST {base}/pokemon/compare` with body `{"ids":[...]}`.
    ///
    /// Ids are sent exactly as supplied and the response is returned
    /// exactly as parsed — no dedup, filtering, or reordering here.
    pub async fn compare_pokemon(&self, ids: &[u32]) -> Result<CompareResponse, ApiError> {
        let request = CompareRequest { ids: ids.to_vec() };
        let response = self
            .http
            .post(self.url("/pokemon/compare"))
            .json(&request)
            .send()
            .await
            .map_err(transport)?;
        parse_json(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(transport)?;
        parse_json(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Map a non-2xx status to `ApiError::Http`, otherwise deserialize the body.
async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Http {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
        });
    }
    let body = response.text().await.map_err(transport)?;
    serde_json::from_str(&body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}
