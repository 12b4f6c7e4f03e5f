//! Mock pokedex backend implementing the HTTP contract the core client
//! consumes: list, detail, evolution chain, and compare under `/api/v1`,
//! plus a health probe.
//!
//! # Design
//! The DTOs here are defined independently from the core crate on purpose;
//! the core's integration tests catch schema drift between the two. State
//! is an immutable fixture [`Catalog`] shared behind an `Arc` — handlers
//! only ever read it.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub mod catalog;

pub use catalog::Catalog;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

/// Full detail record, also the shape returned by compare.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub types: Vec<String>,
    pub stats: Stats,
    pub height: u32,
    pub weight: u32,
    pub description: String,
}

impl Pokemon {
    pub fn to_list_item(&self) -> ListItem {
        ListItem {
            id: self.id,
            name: self.name.clone(),
            image: self.image.clone(),
            types: self.types.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListItem {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub types: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse {
    pub count: u32,
    pub pokemon: Vec<ListItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvolutionStage {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub trigger: String,
    pub min_level: Option<u32>,
    pub trigger_item: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub chain: Vec<EvolutionStage>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub ids: Vec<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompareResponse {
    pub pokemon: Vec<Pokemon>,
}

pub type SharedCatalog = Arc<Catalog>;

pub fn app() -> Router {
    let catalog: SharedCatalog = Arc::new(Catalog::kanto());
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/pokemon", get(list_pokemon))
        .route("/api/v1/pokemon/compare", post(compare_pokemon))
        .route("/api/v1/pokemon/{id}", get(get_pokemon))
        .route("/api/v1/pokemon/{id}/evolution", get(get_evolution))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "kanto-pokedex-api",
    }))
}

async fn list_pokemon(State(catalog): State<SharedCatalog>) -> Json<ListResponse> {
    let pokemon = catalog.list();
    Json(ListResponse {
        count: pokemon.len() as u32,
        pokemon,
    })
}

async fn get_pokemon(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<u32>,
) -> Result<Json<Pokemon>, StatusCode> {
    catalog.get(id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn get_evolution(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<u32>,
) -> Result<Json<EvolutionChain>, StatusCode> {
    catalog.evolution(id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Details in request order; ids with no catalog entry are skipped.
async fn compare_pokemon(
    State(catalog): State<SharedCatalog>,
    Json(input): Json<CompareRequest>,
) -> Json<CompareResponse> {
    let pokemon = input
        .ids
        .iter()
        .filter_map(|id| catalog.get(*id).cloned())
        .collect();
    Json(CompareResponse { pokemon })
}
