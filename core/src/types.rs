//! Domain DTOs for the pokedex API.
//!
//! # Design
//! These types mirror the backend's response schema but are defined
//! independently from the mock-server crate. Integration tests catch any
//! schema drift between the two. Every entity is an immutable snapshot
//! constructed solely by deserializing a response body; nothing is ever
//! written back to the server.

use serde::{Deserialize, Serialize};

/// Simplified pokemon data for the grid/list view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonListItem {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub types: Vec<String>,
}

/// Base stats. Always fully populated — the backend never returns a
/// partial stat block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

/// Full pokemon details for the detail view. `height` is in decimeters,
/// `weight` in hectograms, matching the upstream PokeAPI units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub types: Vec<String>,
    pub stats: PokemonStats,
    pub height: u32,
    pub weight: u32,
    pub description: String,
}

/// Response envelope for the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonListResponse {
    pub count: u32,
    pub pokemon: Vec<PokemonListItem>,
}

/// One stage of an evolution chain. `min_level` and `trigger_item` are
/// `None` when they do not apply to this stage's trigger; the root form
/// has an empty trigger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvolutionStage {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub trigger: String,
    pub min_level: Option<u32>,
    pub trigger_item: Option<String>,
}

/// Evolution chain in root-to-final-form order. A pokemon that does not
/// evolve still has a chain of length one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvolutionChain {
    pub chain: Vec<EvolutionStage>,
}

/// Request payload for the compare endpoint. Ids are sent exactly as
/// supplied — no dedup or reordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompareRequest {
    pub ids: Vec<u32>,
}

/// Response envelope for the compare endpoint, in request-id order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompareResponse {
    pub pokemon: Vec<PokemonDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_response_deserializes() {
        let body = r#"{
            "count": 1,
            "pokemon": [
                {"id": 1, "name": "Bulbasaur", "image": "http://img/1.png", "types": ["grass", "poison"]}
            ]
        }"#;
        let response: PokemonListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.count, 1);
        assert_eq!(response.pokemon[0].id, 1);
        assert_eq!(response.pokemon[0].types, vec!["grass", "poison"]);
    }

    #[test]
    fn detail_deserializes_with_snake_case_stats() {
        let body = r#"{
            "id": 25, "name": "Pikachu", "image": "http://img/25.png",
            "types": ["electric"],
            "stats": {"hp": 35, "attack": 55, "defense": 40,
                      "special_attack": 50, "special_defense": 50, "speed": 90},
            "height": 4, "weight": 60, "description": "Mouse pokemon."
        }"#;
        let detail: PokemonDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.stats.special_attack, 50);
        assert_eq!(detail.stats.speed, 90);
        assert_eq!(detail.height, 4);
    }

    #[test]
    fn evolution_stage_tolerates_null_and_missing_optionals() {
        let with_null: EvolutionStage = serde_json::from_str(
            r#"{"id": 1, "name": "Bulbasaur", "image": "i", "trigger": "",
                "min_level": null, "trigger_item": null}"#,
        )
        .unwrap();
        assert!(with_null.min_level.is_none());
        assert!(with_null.trigger_item.is_none());

        let with_missing: EvolutionStage = serde_json::from_str(
            r#"{"id": 26, "name": "Raichu", "image": "i", "trigger": "use-item"}"#,
        )
        .unwrap();
        assert!(with_missing.min_level.is_none());
        assert!(with_missing.trigger_item.is_none());
    }

    #[test]
    fn evolution_stage_carries_level_or_item() {
        let leveled: EvolutionStage = serde_json::from_str(
            r#"{"id": 2, "name": "Ivysaur", "image": "i", "trigger": "level-up",
                "min_level": 16, "trigger_item": null}"#,
        )
        .unwrap();
        assert_eq!(leveled.min_level, Some(16));

        let item: EvolutionStage = serde_json::from_str(
            r#"{"id": 26, "name": "Raichu", "image": "i", "trigger": "use-item",
                "min_level": null, "trigger_item": "Thunder Stone"}"#,
        )
        .unwrap();
        assert_eq!(item.trigger_item.as_deref(), Some("Thunder Stone"));
    }

    #[test]
    fn compare_request_serializes_ids_verbatim() {
        let request = CompareRequest { ids: vec![1, 4, 7] };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"ids":[1,4,7]}"#);
    }

    #[test]
    fn compare_request_keeps_duplicates_and_order() {
        let request = CompareRequest { ids: vec![7, 7, 1] };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"ids":[7,7,1]}"#);
    }
}
