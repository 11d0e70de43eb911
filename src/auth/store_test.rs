use super::*;

#[test]
fn write_then_read_returns_the_pair() {
    let store = MemorySessionStore::new();
    store.write("tok", "{\"id\":\"1\"}");
    assert_eq!(
        store.read(),
        (Some("tok".to_owned()), Some("{\"id\":\"1\"}".to_owned()))
    );
    assert!(!store.is_empty());
}

#[test]
fn clear_removes_both_entries() {
    let store = MemorySessionStore::new();
    store.write("tok", "{}");
    store.clear();
    assert_eq!(store.read(), (None, None));
    assert!(store.is_empty());
}

#[test]
fn seed_can_stage_partial_state() {
    let store = MemorySessionStore::new();
    store.seed(Some("tok"), None);
    assert_eq!(store.read(), (Some("tok".to_owned()), None));
    assert!(!store.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_store_reads_empty_outside_a_browser() {
    // Without the hydrate feature (native tests) the browser store is inert.
    let store = LocalSessionStore;
    store.write("tok", "{}");
    assert_eq!(store.read(), (None, None));
}
