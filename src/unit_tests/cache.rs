use super::*;

#[test]
fn lru_returns_inserted_value() {
    let cache = LruCache::new(2);
    cache.insert("a", 1);
    assert_eq!(cache.get(&"a"), Some(1));
}

#[test]
fn lru_miss_returns_none() {
    let cache: LruCache<&str, i32> = LruCache::new(2);
    assert_eq!(cache.get(&"missing"), None);
}

#[test]
fn lru_evicts_least_recently_used() {
    let cache = LruCache::new(2);
    cache.insert("a", 1);
    cache.insert("b", 2);
    cache.insert("c", 3);
    assert_eq!(cache.get(&"a"), None);
    assert_eq!(cache.get(&"b"), Some(2));
    assert_eq!(cache.get(&"c"), Some(3));
    assert_eq!(cache.len(), 2);
}

#[test]
fn lru_get_refreshes_recency() {
    let cache = LruCache::new(2);
    cache.insert("a", 1);
    cache.insert("b", 2);
    cache.get(&"a");
    cache.insert("c", 3);
    assert_eq!(cache.get(&"b"), None);
    assert_eq!(cache.get(&"a"), Some(1));
    assert_eq!(cache.get(&"c"), Some(3));
}

#[test]
fn lru_overwrite_does_not_grow_len() {
    let cache = LruCache::new(2);
    cache.insert("a", 1);
    cache.insert("a", 2);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&"a"), Some(2));
}

#[test]
fn lru_capacity_is_at_least_one() {
    let cache = LruCache::new(0);
    cache.insert("a", 1);
    cache.insert("b", 2);
    assert_eq!(cache.len(), 1);
}

#[test]
fn memo_map_roundtrip() {
    let memo = MemoMap::new();
    assert_eq!(memo.get(&"key"), None);
    memo.insert("key", vec![1, 2, 3]);
    assert_eq!(memo.get(&"key"), Some(vec![1, 2, 3]));
}

#[test]
fn memo_map_default_is_empty() {
    let memo: MemoMap<&str, i32> = MemoMap::default();
    assert_eq!(memo.get(&"anything"), None);
}
