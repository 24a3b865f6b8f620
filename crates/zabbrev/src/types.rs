//! # Common Types

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type ZHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type ZHashSet<V> = ahash::AHashSet<V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type ZHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type ZHashSet<V> = std::collections::HashSet<V>;
    }
}

/// Compile-time check that a value is `Send`.
pub fn check_is_send<S: Send>(_: &S) {}

/// Compile-time check that a value is `Sync`.
pub fn check_is_sync<S: Sync>(_: &S) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_aliases() {
        let mut map: ZHashMap<&str, usize> = ZHashMap::new();
        map.insert("a", 1);
        *map.entry("a").or_default() += 1;
        assert_eq!(map.get("a"), Some(&2));

        let mut set: ZHashSet<&str> = ZHashSet::new();
        assert!(set.insert("a"));
        assert!(!set.insert("a"));

        check_is_send(&map);
        check_is_sync(&set);
    }
}
