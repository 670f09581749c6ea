mod common;

use proptest::prelude::*;

use common::Harness;
use pokecard_core::models::Facet;
use test_fixtures::FakeCatalog;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn negative_ids_are_rejected_without_io(id in i64::MIN..0) {
        let h = Harness::with_catalog(FakeCatalog::empty());
        let engine = h.engine();
        prop_assert!(engine.pokemon_stats(id, 0i64).is_empty());
        prop_assert_eq!(engine.sprite_path(id, 0i64), "");
        prop_assert_eq!(h.catalog.total_calls(), 0);
        prop_assert_eq!(h.metrics.facet(Facet::Stats).rejected, 1);
    }

    #[test]
    fn non_digit_text_is_rejected(text in "[0-9]{0,3}[^0-9][ -~]{0,4}") {
        let h = Harness::with_catalog(FakeCatalog::empty());
        prop_assert!(h.engine().pokemon_stats(text.as_str(), 0i64).is_empty());
        prop_assert!(h.resolver().resolve_pokemon_by_id(text.as_str()).is_err());
        prop_assert_eq!(h.catalog.total_calls(), 0);
    }

    #[test]
    fn score_is_zero_exactly_without_stats(id in 1u32..=151) {
        let h = Harness::new();
        let pokemon = h.resolver().load_sprites(false).resolve_pokemon_by_id(i64::from(id)).unwrap();
        prop_assert_eq!(pokemon.score() == 0, pokemon.stats().is_empty());
        prop_assert_eq!(pokemon.id(), id);
    }

    #[test]
    fn depth_beyond_remote_is_rejected(depth in 2i64..1000) {
        let h = Harness::new();
        prop_assert!(h.engine().generation_roster(1i64, depth).is_empty());
        prop_assert_eq!(h.catalog.total_calls(), 0);
    }
}
