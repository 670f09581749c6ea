use std::sync::Arc;
use std::thread;

use pokecard_core::config::ObservabilityConfig;
use pokecard_core::models::Facet;
use pokecard_observability::tracing_setup;
use pokecard_observability::ResolutionMetrics;

#[test]
fn snapshot_lists_every_facet() {
    let metrics = ResolutionMetrics::new();
    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.facets.len(), Facet::ALL.len());
    for facet in Facet::ALL {
        assert!(snapshot.facets.contains_key(facet.as_str()));
    }
}

#[test]
fn snapshot_serializes_as_json() {
    let metrics = ResolutionMetrics::new();
    metrics.record_rejected(Facet::NameIndex);
    metrics.record_empty(Facet::Sprite);

    let json = serde_json::to_value(metrics.snapshot()).unwrap();
    assert_eq!(json["facets"]["name_index"]["rejected"], 1);
    assert_eq!(json["facets"]["sprite"]["empty"], 1);
    assert_eq!(json["facets"]["stats"]["cache_hits"], 0);
}

#[test]
fn concurrent_recording_loses_no_updates() {
    let metrics = Arc::new(ResolutionMetrics::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let metrics = Arc::clone(&metrics);
            thread::spawn(move || {
                for _ in 0..1000 {
                    metrics.record_cache_hit(Facet::Stats);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(metrics.facet(Facet::Stats).cache_hits, 8000);
}

#[test]
fn init_tracing_is_idempotent() {
    tracing_setup::init_tracing();
    tracing_setup::init_tracing();
    tracing_setup::init_tracing_json();
    tracing_setup::init_from_config(&ObservabilityConfig {
        json_logs: true,
        ..ObservabilityConfig::default()
    });

    let span = pokecard_observability::resolution_span!(Facet::Stats, "25");
    let _guard = span.enter();
    tracing_setup::events::resolved(Facet::Stats, "25", 0);
}
