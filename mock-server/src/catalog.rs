//! Fixture catalog served by the mock backend.
//!
//! A curated slice of the Gen-1 dex with real stats, covering every
//! evolution shape the contract exposes: level-up triggers with a minimum
//! level, use-item triggers with a named stone, and a single-stage chain.

use crate::{EvolutionChain, EvolutionStage, ListItem, Pokemon, Stats};

const ARTWORK_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

pub fn artwork_url(id: u32) -> String {
    format!("{ARTWORK_URL}/{id}.png")
}

/// Immutable in-memory catalog: detail entries sorted by id plus the
/// evolution families they belong to.
pub struct Catalog {
    entries: Vec<Pokemon>,
    chains: Vec<Vec<EvolutionStage>>,
}

impl Catalog {
    pub fn kanto() -> Self {
        let entries = vec![
            entry(1, "Bulbasaur", &["grass", "poison"], [45, 49, 49, 65, 65, 45], 7, 69,
                "A strange seed was planted on its back at birth. The plant sprouts and grows with this Pokemon."),
            entry(2, "Ivysaur", &["grass", "poison"], [60, 62, 63, 80, 80, 60], 10, 130,
                "When the bulb on its back grows large, it appears to lose the ability to stand on its hind legs."),
            entry(3, "Venusaur", &["grass", "poison"], [80, 82, 83, 100, 100, 80], 20, 1000,
                "The plant blooms when it is absorbing solar energy. It stays on the move to seek sunlight."),
            entry(4, "Charmander", &["fire"], [39, 52, 43, 60, 50, 65], 6, 85,
                "Obviously prefers hot places. When it rains, steam is said to spout from the tip of its tail."),
            entry(5, "Charmeleon", &["fire"], [58, 64, 58, 80, 65, 80], 11, 190,
                "When it swings its burning tail, it elevates the temperature to unbearably high levels."),
            entry(6, "Charizard", &["fire", "flying"], [78, 84, 78, 109, 85, 100], 17, 905,
                "Spits fire that is hot enough to melt boulders. Known to cause forest fires unintentionally."),
            entry(25, "Pikachu", &["electric"], [35, 55, 40, 50, 50, 90], 4, 60,
                "When several of these Pokemon gather, their electricity could build and cause lightning storms."),
            entry(26, "Raichu", &["electric"], [60, 90, 55, 90, 80, 110], 8, 300,
                "Its long tail serves as a ground to protect itself from its own high-voltage power."),
            entry(132, "Ditto", &["normal"], [48, 48, 48, 48, 48, 48], 3, 40,
                "Capable of copying an enemy's genetic code to instantly transform itself into a duplicate of the enemy."),
            entry(133, "Eevee", &["normal"], [55, 55, 50, 45, 65, 55], 3, 65,
                "Its genetic code is irregular. It may mutate if it is exposed to radiation from element stones."),
            entry(134, "Vaporeon", &["water"], [130, 65, 60, 110, 95, 65], 10, 290,
                "Lives close to water. Its long tail is ridged with a fin which is often mistaken for a mermaid's."),
        ];

        let chains = vec![
            vec![
                base_stage(1, "Bulbasaur"),
                level_stage(2, "Ivysaur", 16),
                level_stage(3, "Venusaur", 32),
            ],
            vec![
                base_stage(4, "Charmander"),
                level_stage(5, "Charmeleon", 16),
                level_stage(6, "Charizard", 36),
            ],
            vec![
                base_stage(25, "Pikachu"),
                item_stage(26, "Raichu", "Thunder Stone"),
            ],
            vec![base_stage(132, "Ditto")],
            vec![
                base_stage(133, "Eevee"),
                item_stage(134, "Vaporeon", "Water Stone"),
            ],
        ];

        Self { entries, chains }
    }

    /// List items in ascending id order.
    pub fn list(&self) -> Vec<ListItem> {
        self.entries.iter().map(Pokemon::to_list_item).collect()
    }

    pub fn get(&self, id: u32) -> Option<&Pokemon> {
        self.entries.iter().find(|p| p.id == id)
    }

    /// The full family chain containing `id`, root form first.
    pub fn evolution(&self, id: u32) -> Option<EvolutionChain> {
        self.chains
            .iter()
            .find(|chain| chain.iter().any(|stage| stage.id == id))
            .map(|chain| EvolutionChain {
                chain: chain.clone(),
            })
    }
}

fn entry(
    id: u32,
    name: &str,
    types: &[&str],
    stats: [u32; 6],
    height: u32,
    weight: u32,
    description: &str,
) -> Pokemon {
    let [hp, attack, defense, special_attack, special_defense, speed] = stats;
    Pokemon {
        id,
        name: name.to_string(),
        image: artwork_url(id),
        types: types.iter().map(|t| t.to_string()).collect(),
        stats: Stats {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        },
        height,
        weight,
        description: description.to_string(),
    }
}

fn base_stage(id: u32, name: &str) -> EvolutionStage {
    EvolutionStage {
        id,
        name: name.to_string(),
        image: artwork_url(id),
        trigger: String::new(),
        min_level: None,
        trigger_item: None,
    }
}

fn level_stage(id: u32, name: &str, min_level: u32) -> EvolutionStage {
    EvolutionStage {
        min_level: Some(min_level),
        trigger: "level-up".to_string(),
        ..base_stage(id, name)
    }
}

fn item_stage(id: u32, name: &str, item: &str) -> EvolutionStage {
    EvolutionStage {
        trigger_item: Some(item.to_string()),
        trigger: "use-item".to_string(),
        ..base_stage(id, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_is_sorted_ascending_by_id() {
        let catalog = Catalog::kanto();
        let ids: Vec<u32> = catalog.list().iter().map(|item| item.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn every_entry_is_resolvable_by_id() {
        let catalog = Catalog::kanto();
        for item in catalog.list() {
            assert!(catalog.get(item.id).is_some(), "missing entry {}", item.id);
        }
    }

    #[test]
    fn chain_is_found_from_any_family_member() {
        let catalog = Catalog::kanto();
        for id in [1, 2, 3] {
            let chain = catalog.evolution(id).unwrap().chain;
            let ids: Vec<u32> = chain.iter().map(|stage| stage.id).collect();
            assert_eq!(ids, vec![1, 2, 3]);
        }
    }

    #[test]
    fn single_stage_pokemon_has_a_chain_of_one() {
        let catalog = Catalog::kanto();
        let chain = catalog.evolution(132).unwrap().chain;
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].name, "Ditto");
        assert!(chain[0].trigger.is_empty());
    }

    #[test]
    fn stage_triggers_carry_level_or_item() {
        let catalog = Catalog::kanto();

        let bulbasaur_line = catalog.evolution(1).unwrap().chain;
        assert_eq!(bulbasaur_line[1].trigger, "level-up");
        assert_eq!(bulbasaur_line[1].min_level, Some(16));
        assert!(bulbasaur_line[1].trigger_item.is_none());

        let pikachu_line = catalog.evolution(25).unwrap().chain;
        assert_eq!(pikachu_line[1].trigger, "use-item");
        assert!(pikachu_line[1].min_level.is_none());
        assert_eq!(pikachu_line[1].trigger_item.as_deref(), Some("Thunder Stone"));
    }

    #[test]
    fn unknown_id_has_no_entry_or_chain() {
        let catalog = Catalog::kanto();
        assert!(catalog.get(150).is_none());
        assert!(catalog.evolution(150).is_none());
    }

    #[test]
    fn artwork_url_points_at_official_artwork() {
        assert_eq!(
            artwork_url(25),
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/25.png"
        );
    }
}
