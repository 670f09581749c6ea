mod common;

use rand::rngs::StdRng;
use rand::SeedableRng;

use common::Harness;
use pokecard_core::errors::ResolutionError;
use pokecard_core::models::{
    ApiPokemon, Category, GenerationEntity, GenerationId, PokemonId, Rarity, RosterEntry,
};
use pokecard_core::traits::ICacheStore;
use pokecard_resolution::EntityFactory;
use test_fixtures::FakeCatalog;

fn factory(h: &Harness) -> EntityFactory {
    EntityFactory::new(h.engine())
}

fn pid(id: u64) -> PokemonId {
    PokemonId::new(id).unwrap()
}

#[test]
fn pokemon_score_uses_rarity_multiplier() {
    let h = Harness::new();
    let f = factory(&h);

    let bulbasaur = f.build_pokemon(pid(1), false);
    assert_eq!(bulbasaur.rarity(), Rarity::Normal);
    assert_eq!(bulbasaur.score(), 45);

    let articuno = f.build_pokemon(pid(144), false);
    assert_eq!(articuno.score(), 180);

    let mew = f.build_pokemon(pid(151), true);
    assert_eq!(mew.score(), 500);
    assert_eq!(mew.sprite_path(), "/.cache/sprite/pokemon/151.png");
}

#[test]
fn sprite_facet_is_optional() {
    let h = Harness::new();
    let ditto = factory(&h).build_pokemon(pid(132), false);
    assert_eq!(ditto.sprite_path(), "");
    assert_eq!(h.catalog.sprite_calls(), 0);
}

#[test]
fn facets_fail_independently() {
    let mut catalog = FakeCatalog::empty();
    let fixture: ApiPokemon = test_fixtures::load_fixture("pokemon/1.json");
    catalog.insert_pokemon(fixture);
    let h = Harness::with_catalog(catalog);

    let bulbasaur = factory(&h).build_pokemon(pid(1), true);
    assert_eq!(bulbasaur.name(), "bulbasaur");
    assert_eq!(bulbasaur.id(), 1);
    assert_eq!(bulbasaur.generation(), "");
    assert_eq!(bulbasaur.rarity(), Rarity::None);
    assert_eq!(bulbasaur.score(), 45);
    assert!(!bulbasaur.sprite_path().is_empty());
}

#[test]
fn entity_keeps_requested_id_when_stats_are_empty() {
    let h = Harness::with_catalog(FakeCatalog::empty());
    let nothing = factory(&h).build_pokemon(pid(42), true);

    assert_eq!(nothing.id(), 42);
    assert!(nothing.stats().is_empty());
    assert_eq!(nothing.score(), 0);
}

#[test]
fn corrupt_stats_record_gives_zero_score() {
    let h = Harness::new();
    h.cache
        .store(Category::Pokemon, "144", r#"{"id":144,"name":7,"stats":[]}"#)
        .unwrap();

    let articuno = factory(&h).build_pokemon(pid(144), false);
    assert_eq!(articuno.score(), 0);
    assert_eq!(articuno.rarity(), Rarity::Legendary);
}

#[test]
fn by_name_distinguishes_unknown_and_invalid() {
    let h = Harness::new();
    let f = factory(&h);

    let ditto = f.build_pokemon_by_name("ditto", false).unwrap();
    assert_eq!(ditto.id(), 132);

    assert_eq!(
        f.build_pokemon_by_name("missingno", false).unwrap_err(),
        ResolutionError::EntityNotFound {
            name: "missingno".to_string()
        }
    );
    assert!(matches!(
        f.build_pokemon_by_name("ditto2", false),
        Err(ResolutionError::InvalidInput { .. })
    ));
}

#[test]
fn generation_member_by_index() {
    let h = Harness::new();
    let f = factory(&h);
    let generation = f.build_generation(GenerationId::new(2).unwrap());

    assert_eq!(generation.len(), 100);
    let first = f.member_at(&generation, 0, false).unwrap();
    assert_eq!(first.id(), 152);
    assert_eq!(first.generation(), "generation-ii");

    assert_eq!(
        f.member_at(&generation, 100, false).unwrap_err(),
        ResolutionError::OutOfRange { index: 100, len: 100 }
    );
}

#[test]
fn empty_roster_reports_empty_before_range() {
    let h = Harness::new();
    let f = factory(&h);
    let generation = f.build_generation(GenerationId::new(3).unwrap());
    assert!(generation.is_empty());

    let expected = ResolutionError::EmptyRoster { generation: 3 };
    assert_eq!(f.member_at(&generation, 0, false).unwrap_err(), expected);
    assert_eq!(f.random_member(&generation, false).unwrap_err(), expected);
}

#[test]
fn seeded_random_member_is_in_roster() {
    let h = Harness::new();
    let f = factory(&h);
    let generation = f.build_generation(GenerationId::new(1).unwrap());
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let member = f.random_member_with(&generation, false, &mut rng).unwrap();
        assert!(generation.roster().iter().any(|e| e.id == member.id()));
    }
}

#[test]
fn hand_built_generation_is_accepted() {
    let h = Harness::new();
    let generation = GenerationEntity::new(
        GenerationId::new(1).unwrap(),
        vec![RosterEntry::new(132, "ditto")],
    );
    let member = factory(&h).member_at(&generation, 0, false).unwrap();
    assert_eq!(member.name(), "ditto");
}
