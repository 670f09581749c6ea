mod common;

use common::Harness;
use pokecard_core::errors::{PokecardError, ResolutionError};
use pokecard_resolution::AsyncResolver;

#[tokio::test]
async fn resolves_on_the_blocking_pool() {
    let h = Harness::new();
    let resolver = AsyncResolver::new(h.resolver());

    let mew = resolver.resolve_pokemon_by_id(151i64).await.unwrap();
    assert_eq!(mew.name(), "mew");

    let ditto = resolver.resolve_pokemon_by_name("ditto").await.unwrap();
    assert_eq!(ditto.id(), 132);

    let generation = resolver.resolve_generation_roster(2i64).await.unwrap();
    assert_eq!(generation.len(), 100);

    let member = resolver.resolve_generation_member(2i64, 99).await.unwrap();
    assert_eq!(member.name(), "mantine");
}

#[tokio::test]
async fn errors_pass_through() {
    let h = Harness::new();
    let resolver = AsyncResolver::new(h.resolver());

    let err = resolver.resolve_random_from_generation(3i64).await.unwrap_err();
    assert!(matches!(
        err,
        PokecardError::ResolutionError(ResolutionError::EmptyRoster { generation: 3 })
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_resolutions_agree() {
    let h = Harness::new();
    let resolver = AsyncResolver::new(h.resolver());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let resolver = resolver.clone();
            tokio::spawn(async move { resolver.resolve_pokemon_by_id(30i64).await })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap().unwrap());
    }
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(results[0].name(), "nidorina");
}
