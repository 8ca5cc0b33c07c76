use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert_eq!(store.get_item("k"), None);
    store.set_item("k", "v");
    assert_eq!(store.get_item("k").as_deref(), Some("v"));
    store.set_item("k", "v2");
    assert_eq!(store.get_item("k").as_deref(), Some("v2"));
    store.remove_item("k");
    assert_eq!(store.get_item("k"), None);
}

#[test]
fn memory_storage_clones_share_contents() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set_item(TOKEN_KEY, "T1");
    assert_eq!(b.get_item(TOKEN_KEY).as_deref(), Some("T1"));
}

#[test]
fn removing_missing_key_is_noop() {
    let store = MemoryStorage::new();
    store.set_item("k", "v");
    store.remove_item("absent");
    assert_eq!(store.get_item("k").as_deref(), Some("v"));
    assert_eq!(store.get_item("absent"), None);
}

#[test]
fn json_helpers_round_trip_and_ignore_garbage() {
    let store = MemoryStorage::new();
    save_json(&store, "nums", &vec![1, 2, 3]);
    assert_eq!(load_json::<Vec<i32>>(&store, "nums"), Some(vec![1, 2, 3]));

    store.set_item("broken", "{not json");
    assert_eq!(load_json::<Vec<i32>>(&store, "broken"), None);
    assert_eq!(load_json::<Vec<i32>>(&store, "missing"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_the_browser() {
    let store = BrowserStorage;
    store.set_item(TOKEN_KEY, "T1");
    assert_eq!(store.get_item(TOKEN_KEY), None);
    store.remove_item(TOKEN_KEY);
}
