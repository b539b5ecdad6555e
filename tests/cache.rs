use std::thread::sleep;
use std::time::Duration;

use tldr_gateway::cache::TtlCache;

const TTL: Duration = Duration::from_secs(600);

#[test]
fn get_miss_on_unknown_key() {
    let cache = TtlCache::new(10);
    assert_eq!(cache.get("pep-0008"), None);
}

#[test]
fn expired_entry_is_absent() {
    let cache = TtlCache::new(10);
    cache.put("pep-0008", "short-lived".to_string(), Duration::from_millis(50));
    assert_eq!(cache.get("pep-0008").as_deref(), Some("short-lived"));

    sleep(Duration::from_millis(80));
    assert_eq!(cache.get("pep-0008"), None);
    // the expired entry was purged on read
    assert_eq!(cache.len(), 0);
}

#[test]
fn a_hit_does_not_extend_the_ttl() {
    let cache = TtlCache::new(10);
    cache.put("gh-0001", "v".to_string(), Duration::from_millis(200));

    sleep(Duration::from_millis(120));
    assert!(cache.get("gh-0001").is_some());

    sleep(Duration::from_millis(120));
    assert_eq!(cache.get("gh-0001"), None);
}

#[test]
fn capacity_eviction_is_oldest_first() {
    let cache = TtlCache::new(2);
    cache.put("a", "1".to_string(), TTL);
    cache.put("b", "2".to_string(), TTL);
    cache.put("c", "3".to_string(), TTL);

    assert_eq!(cache.get("a"), None);
    assert_eq!(cache.get("b").as_deref(), Some("2"));
    assert_eq!(cache.get("c").as_deref(), Some("3"));
    assert_eq!(cache.len(), 2);
}

#[test]
fn overwrite_replaces_without_evicting() {
    let cache = TtlCache::new(2);
    cache.put("a", "1".to_string(), TTL);
    cache.put("b", "2".to_string(), TTL);
    cache.put("a", "1b".to_string(), TTL);

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get("a").as_deref(), Some("1b"));
    assert_eq!(cache.get("b").as_deref(), Some("2"));
}

#[test]
fn overwrite_replaces_the_expiry_too() {
    let cache = TtlCache::new(2);
    cache.put("a", "1".to_string(), Duration::from_millis(50));
    cache.put("a", "2".to_string(), TTL);

    sleep(Duration::from_millis(80));
    assert_eq!(cache.get("a").as_deref(), Some("2"));
}

#[test]
fn delete_reports_whether_an_entry_existed() {
    let cache = TtlCache::new(10);
    assert!(!cache.delete("a"));

    cache.put("a", "1".to_string(), TTL);
    assert!(cache.delete("a"));
    assert_eq!(cache.get("a"), None);
    assert!(!cache.delete("a"));
}

#[test]
fn eviction_order_survives_deletes() {
    let cache = TtlCache::new(2);
    cache.put("a", "1".to_string(), TTL);
    cache.put("b", "2".to_string(), TTL);
    cache.delete("a");
    cache.put("c", "3".to_string(), TTL);
    // full again; the oldest surviving entry is b
    cache.put("d", "4".to_string(), TTL);

    assert_eq!(cache.get("b"), None);
    assert_eq!(cache.get("c").as_deref(), Some("3"));
    assert_eq!(cache.get("d").as_deref(), Some("4"));
}

#[test]
fn size_never_exceeds_capacity() {
    let cache = TtlCache::new(3);
    for i in 0..20 {
        cache.put(&format!("k{i}"), i.to_string(), TTL);
        assert!(cache.len() <= 3);
    }
    // the three most recent inserts survive
    assert_eq!(cache.get("k19").as_deref(), Some("19"));
    assert_eq!(cache.get("k18").as_deref(), Some("18"));
    assert_eq!(cache.get("k17").as_deref(), Some("17"));
    assert_eq!(cache.get("k16"), None);
}
