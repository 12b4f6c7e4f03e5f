//! Data-loading core for the Kanto pokedex.
//!
//! # Overview
//! Two layers, composed linearly. [`client::PokedexClient`] maps typed
//! operation calls onto HTTP round trips against a configurable base URL
//! (list, detail, evolution chain, compare) and parses the JSON bodies into
//! the DTOs in [`types`]. The loaders in [`loader`] orchestrate one view
//! each: they validate route parameters, run the needed fetches (the detail
//! view's pair runs concurrently), and fold everything into `{data, error}`
//! envelopes so the rendering layer never sees a raw error.
//!
//! # Design
//! - Every fetch is an independent, idempotent round trip; the crate holds
//!   no cache and no mutable state between calls.
//! - A required-fetch failure is logged and surfaced as a generic message;
//!   a best-effort-fetch failure is absorbed into `None`.
//! - Bad route parameters short-circuit to a [`error::NotFound`] outcome
//!   before any request is made.

pub mod client;
pub mod colors;
pub mod error;
pub mod loader;
pub mod types;

pub use client::{PokedexClient, DEFAULT_BASE_URL};
pub use error::{ApiError, NotFound};
pub use loader::{
    load_compare_view, load_detail_view, load_list_view, CompareView, DetailView, ListView,
    GENERIC_LOAD_ERROR,
};
pub use types::{
    CompareRequest, CompareResponse, EvolutionChain, EvolutionStage, PokemonDetail,
    PokemonListItem, PokemonListResponse, PokemonStats,
};
