use std::sync::Arc;
use std::thread;

use pokecard_core::traits::INameIndex;
use pokecard_storage::NameIndexCache;
use proptest::prelude::*;

#[test]
fn record_persists_whole_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".cache").join("name_id_cache.json");
    let index = NameIndexCache::new(&path);

    index.record("ditto", 132).unwrap();
    index.record("mew", 151).unwrap();

    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk["ditto"], 132);
    assert_eq!(on_disk["mew"], 151);

    // A fresh handle on the same file sees the entries.
    let reopened = NameIndexCache::new(&path);
    assert_eq!(reopened.lookup("mew"), Some(151));
}

#[test]
fn record_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let index = NameIndexCache::new(dir.path().join("names.json"));
    index.record("pikachu", 25).unwrap();
    index.record("pikachu", 25).unwrap();
    assert_eq!(index.load_all().len(), 1);
}

#[test]
fn no_temp_file_left_behind() {
    let dir = tempfile::tempdir().unwrap();
    let index = NameIndexCache::new(dir.path().join("names.json"));
    index.record("eevee", 133).unwrap();
    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["names.json".to_string()]);
}

#[test]
fn concurrent_records_in_one_process_are_all_kept() {
    let dir = tempfile::tempdir().unwrap();
    let index = Arc::new(NameIndexCache::new(dir.path().join("names.json")));

    let handles: Vec<_> = (1..=16u32)
        .map(|id| {
            let index = Arc::clone(&index);
            thread::spawn(move || index.record(&format!("pokemon{id}"), id).unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mapping = index.load_all();
    assert_eq!(mapping.len(), 16);
    assert_eq!(mapping.get("pokemon7"), Some(&7));
}

#[test]
fn separate_handles_on_one_file_never_fail_or_corrupt_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.json");

    let handles: Vec<_> = (0..4u32)
        .map(|worker| {
            let path = path.clone();
            thread::spawn(move || {
                let index = NameIndexCache::new(path);
                (0..300u32)
                    .filter_map(|i| {
                        let id = worker * 1000 + i + 1;
                        index.record(&format!("pokemon{id}"), id).err()
                    })
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let errors: Vec<String> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    assert!(errors.is_empty(), "record failed: {:?}", errors.first());

    // Cross-handle races may drop an update, but the file stays a valid mapping.
    let content = std::fs::read_to_string(&path).unwrap();
    let mapping: std::collections::BTreeMap<String, u32> =
        serde_json::from_str(&content).unwrap();
    assert!(!mapping.is_empty());
    assert!(mapping.iter().all(|(name, id)| *name == format!("pokemon{id}")));

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left: {leftovers:?}");
}

proptest! {
    #[test]
    fn recorded_names_round_trip(entries in proptest::collection::btree_map("[a-z]{1,12}", 1u32..1000, 0..20)) {
        let dir = tempfile::tempdir().unwrap();
        let index = NameIndexCache::new(dir.path().join("names.json"));
        for (name, id) in &entries {
            index.record(name, *id).unwrap();
        }
        prop_assert_eq!(index.load_all(), entries);
    }
}
