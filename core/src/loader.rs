//! Per-view data loaders.
//!
//! # Design
//! Each loader validates its route parameters, runs the fetches the view
//! needs, and folds the outcome into an envelope the rendering layer can
//! branch on without ever seeing a raw [`ApiError`]: the concrete failure
//! is logged here and the envelope carries only a generic user-facing
//! message. Bad route parameters are a separate, harder boundary — they
//! return [`NotFound`] before any network call so the caller can answer
//! with a 404 instead of a failure screen.
//!
//! A load is terminal in one request cycle: no retries, and result shaping
//! happens only after every constituent fetch has settled.

use crate::client::PokedexClient;
use crate::error::NotFound;
use crate::types::{EvolutionChain, PokemonDetail, PokemonListItem};

/// Message shown for any fetch failure. The concrete error goes to the log.
pub const GENERIC_LOAD_ERROR: &str =
    "Failed to load Pokemon data. Please make sure the backend server is running.";

const NOT_FOUND_MESSAGE: &str = "Pokemon not found. ID must be between 1 and 151.";

/// The fixed Kanto catalog bounds. Route ids outside this range are
/// rejected locally, before the backend is ever asked.
const MIN_POKEMON_ID: u32 = 1;
const MAX_POKEMON_ID: u32 = 151;

/// Envelope for the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub pokemon: Vec<PokemonListItem>,
    pub error: Option<String>,
}

/// Envelope for the detail view. `evolution` is best-effort: it is `None`
/// both when the pokemon has no chain loaded and when the chain fetch
/// failed, and its failure never fails the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub pokemon: Option<PokemonDetail>,
    pub evolution: Option<EvolutionChain>,
    pub error: Option<String>,
}

/// Envelope for the compare view, in server-returned order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareView {
    pub pokemon: Vec<PokemonDetail>,
    pub error: Option<String>,
}

/// Load the grid view: the whole catalog or a generic error.
pub async fn load_list_view(client: &PokedexClient) -> ListView {
    match client.fetch_pokemon_list().await {
        Ok(response) => ListView {
            pokemon: response.pokemon,
            error: None,
        },
        Err(err) => {
            tracing::error!(error = %err, "failed to load the pokemon list");
            ListView {
                pokemon: Vec::new(),
                error: Some(GENERIC_LOAD_ERROR.to_string()),
            }
        }
    }
}

/// Load the detail view for a raw route id.
///
/// The detail fetch is required; the evolution fetch is best-effort. Both
/// run concurrently and both are awaited to settlement — a failed detail
/// fetch does not cancel the evolution fetch, it only decides the outcome.
pub async fn load_detail_view(
    client: &PokedexClient,
    raw_id: &str,
) -> Result<DetailView, NotFound> {
    let id = parse_route_id(raw_id)?;

    let (detail, evolution) = tokio::join!(
        client.fetch_pokemon_detail(id),
        client.fetch_evolution_chain(id),
    );

    match detail {
        Ok(pokemon) => Ok(DetailView {
            pokemon: Some(pokemon),
            evolution: evolution.ok(),
            error: None,
        }),
        Err(err) => {
            tracing::error!(error = %err, id, "failed to load pokemon details");
            Ok(DetailView {
                pokemon: None,
                evolution: None,
                error: Some(GENERIC_LOAD_ERROR.to_string()),
            })
        }
    }
}

/// Load the compare view for a raw comma-separated id list.
///
/// Every id is held to the same route boundary as the detail view. The
/// fetched response is passed through without reordering.
pub async fn load_compare_view(
    client: &PokedexClient,
    raw_ids: &str,
) -> Result<CompareView, NotFound> {
    let ids = parse_route_ids(raw_ids)?;

    match client.compare_pokemon(&ids).await {
        Ok(response) => Ok(CompareView {
            pokemon: response.pokemon,
            error: None,
        }),
        Err(err) => {
            tracing::error!(error = %err, "failed to load pokemon comparison");
            Ok(CompareView {
                pokemon: Vec::new(),
                error: Some(GENERIC_LOAD_ERROR.to_string()),
            })
        }
    }
}

/// Parse a route id segment, accepting only integers in the catalog range.
fn parse_route_id(raw: &str) -> Result<u32, NotFound> {
    match raw.parse::<u32>() {
        Ok(id) if (MIN_POKEMON_ID..=MAX_POKEMON_ID).contains(&id) => Ok(id),
        _ => Err(NotFound::new(NOT_FOUND_MESSAGE)),
    }
}

fn parse_route_ids(raw: &str) -> Result<Vec<u32>, NotFound> {
    raw.split(',')
        .map(|part| parse_route_id(part.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_id_accepts_catalog_bounds() {
        assert_eq!(parse_route_id("1"), Ok(1));
        assert_eq!(parse_route_id("25"), Ok(25));
        assert_eq!(parse_route_id("151"), Ok(151));
    }

    #[test]
    fn route_id_rejects_out_of_range() {
        assert!(parse_route_id("0").is_err());
        assert!(parse_route_id("152").is_err());
        assert!(parse_route_id("-3").is_err());
    }

    #[test]
    fn route_id_rejects_non_integers() {
        assert!(parse_route_id("2.5").is_err());
        assert!(parse_route_id("abc").is_err());
        assert!(parse_route_id("").is_err());
        assert!(parse_route_id("25 mice").is_err());
    }

    #[test]
    fn route_id_rejection_names_the_valid_range() {
        let err = parse_route_id("900").unwrap_err();
        assert_eq!(err.message, "Pokemon not found. ID must be between 1 and 151.");
    }

    #[test]
    fn route_ids_parse_a_comma_list() {
        assert_eq!(parse_route_ids("1,4,7"), Ok(vec![1, 4, 7]));
        assert_eq!(parse_route_ids(" 1 , 4 "), Ok(vec![1, 4]));
    }

    #[test]
    fn route_ids_reject_any_bad_element() {
        assert!(parse_route_ids("1,999").is_err());
        assert!(parse_route_ids("1,,4").is_err());
        assert!(parse_route_ids("").is_err());
    }
}
