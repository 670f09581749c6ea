use pokecard_core::models::*;
use pokecard_core::errors::ResolutionError;
use proptest::prelude::*;

fn stats(values: &[(&str, u32)]) -> PokemonStats {
    PokemonStats {
        id: 30,
        name: "nidorina".to_string(),
        stats: values.iter().map(|(n, v)| Stat::new(*n, *v)).collect(),
    }
}

fn profile(rarity: Rarity) -> SpeciesProfile {
    SpeciesProfile {
        generation: "generation-i".to_string(),
        rarity,
    }
}

#[test]
fn rarity_mythical_wins_over_legendary() {
    assert_eq!(Rarity::from_flags(true, true), Rarity::Mythical);
    assert_eq!(Rarity::from_flags(true, false), Rarity::Mythical);
    assert_eq!(Rarity::from_flags(false, true), Rarity::Legendary);
    assert_eq!(Rarity::from_flags(false, false), Rarity::Normal);
}

#[test]
fn rarity_multipliers() {
    assert_eq!(Rarity::None.multiplier(), 1);
    assert_eq!(Rarity::Normal.multiplier(), 1);
    assert_eq!(Rarity::Legendary.multiplier(), 2);
    assert_eq!(Rarity::Mythical.multiplier(), 5);
}

#[test]
fn score_is_first_stat_times_multiplier() {
    let id = PokemonId::new(30).unwrap();
    let entity = PokemonEntity::assemble(
        id,
        stats(&[("hp", 70), ("attack", 62)]),
        profile(Rarity::Legendary),
        String::new(),
    );
    assert_eq!(entity.score(), 140);
    assert_eq!(entity.name(), "nidorina");
    assert_eq!(entity.generation(), "generation-i");
    assert_eq!(entity.stats()[1], Stat::new("attack", 62));
}

#[test]
fn score_is_zero_without_stats() {
    let id = PokemonId::new(30).unwrap();
    let entity = PokemonEntity::assemble(
        id,
        PokemonStats::default(),
        profile(Rarity::Mythical),
        String::new(),
    );
    assert_eq!(entity.score(), 0);
    assert_eq!(entity.id(), 30);
    assert_eq!(entity.name(), "");
}

#[test]
fn zero_hp_scores_zero_but_keeps_stats() {
    let id = PokemonId::new(30).unwrap();
    let entity = PokemonEntity::assemble(
        id,
        stats(&[("hp", 0), ("attack", 62)]),
        profile(Rarity::Legendary),
        String::new(),
    );
    assert_eq!(entity.score(), 0);
    assert_eq!(entity.stats().len(), 2);
}

#[test]
fn pokemon_entity_serializes_to_wire_shape() {
    let id = PokemonId::new(30).unwrap();
    let entity = PokemonEntity::assemble(
        id,
        stats(&[("hp", 70)]),
        profile(Rarity::Normal),
        "/.cache/sprite/pokemon/30.png".to_string(),
    );
    let json = serde_json::to_value(&entity).unwrap();
    assert_eq!(json["pokemon_id"], 30);
    assert_eq!(json["pokemon_name"], "nidorina");
    assert_eq!(json["pokemon_generation"], "generation-i");
    assert_eq!(json["pokemon_rarity"], "normal");
    assert_eq!(json["pokemon_points"], 70);
    assert_eq!(json["pokemon_stats"][0]["stat_name"], "hp");
    assert_eq!(json["pokemon_stats"][0]["stat_value"], 70);
    assert_eq!(json["pokemon_sprite_path"], "/.cache/sprite/pokemon/30.png");
}

#[test]
fn generation_entity_serializes_to_wire_shape() {
    let gen = GenerationEntity::new(
        GenerationId::new(2).unwrap(),
        vec![RosterEntry::new(152, "chikorita")],
    );
    let json = serde_json::to_value(&gen).unwrap();
    assert_eq!(json["generation_id"], 2);
    assert_eq!(json["pokemon_list"][0]["pokemon_id"], 152);
    assert_eq!(json["pokemon_list"][0]["pokemon_name"], "chikorita");
}

#[test]
fn entry_at_distinguishes_empty_from_out_of_range() {
    let gen_id = GenerationId::new(1).unwrap();
    let empty = GenerationEntity::new(gen_id, Vec::new());
    assert_eq!(
        empty.entry_at(0),
        Err(ResolutionError::EmptyRoster { generation: 1 })
    );

    let gen = GenerationEntity::new(
        gen_id,
        vec![RosterEntry::new(1, "bulbasaur"), RosterEntry::new(2, "ivysaur")],
    );
    assert_eq!(gen.entry_at(1).unwrap().name, "ivysaur");
    assert_eq!(
        gen.entry_at(2),
        Err(ResolutionError::OutOfRange { index: 2, len: 2 })
    );
}

#[test]
fn id_newtypes_reject_out_of_domain_values() {
    assert!(PokemonId::new(0).is_err());
    assert!(PokemonId::new(u64::from(u32::MAX) + 1).is_err());
    assert_eq!(PokemonId::new(132).unwrap().cache_key(), "132");

    assert!(GenerationId::new(0).is_err());
    assert!(GenerationId::new(4).is_err());
    assert_eq!(GenerationId::new(3).unwrap().get(), 3);

    assert!(serde_json::from_str::<GenerationId>("7").is_err());
}

#[test]
fn id_from_url_reads_trailing_segment() {
    assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon-species/132/"), Some(132));
    assert_eq!(id_from_url("https://pokeapi.co/api/v2/generation/1"), Some(1));
    assert_eq!(id_from_url("https://pokeapi.co/api/v2/generation/"), None);
    assert_eq!(id_from_url(""), None);
}

#[test]
fn category_names_match_catalog_resources() {
    assert_eq!(Category::Pokemon.as_str(), "pokemon");
    assert_eq!(Category::PokemonSpecies.to_string(), "pokemon-species");
    assert_eq!(Category::Generation.as_str(), "generation");
}

#[test]
fn facet_indices_follow_all_order() {
    for (i, facet) in Facet::ALL.iter().enumerate() {
        assert_eq!(facet.index(), i);
    }
}

#[test]
fn raw_id_accepts_ints_and_strings() {
    assert_eq!(RawId::from(5i64), RawId::Int(5));
    assert_eq!(RawId::from("12"), RawId::Text("12".to_string()));
    assert_eq!(RawId::from(-3i32).to_string(), "-3");
}

proptest! {
    #[test]
    fn score_zero_iff_no_stats(hp in 0u32..1000, has_stats: bool, mythical: bool, legendary: bool) {
        let id = PokemonId::new(1).unwrap();
        let s = if has_stats { stats(&[("hp", hp.max(1))]) } else { PokemonStats::default() };
        let entity = PokemonEntity::assemble(
            id,
            s,
            profile(Rarity::from_flags(mythical, legendary)),
            String::new(),
        );
        prop_assert_eq!(entity.score() == 0, !has_stats);
    }
}
