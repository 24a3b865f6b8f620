//! # Thread Utilities

use std::{num::NonZeroUsize, thread};

/// Environment variables rayon reads to size its global pool, in priority order.
#[cfg(feature = "rayon")]
const RAYON_VARS: &[&str] = &["RAYON_NUM_THREADS", "RAYON_RS_NUM_CPUS"];

#[cfg(feature = "rayon")]
fn env_thread_count(name: &str) -> Option<usize> {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
}

/// Estimate how many scoring threads the machine supports.
///
/// With `rayon` enabled this agrees with rayon's global pool:
/// `RAYON_NUM_THREADS` wins when set, and `0` means the hardware default;
/// the deprecated `RAYON_RS_NUM_CPUS` is only read when it is unset or junk.
pub fn est_max_parallelism() -> usize {
    let default = || {
        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    };

    #[cfg(feature = "rayon")]
    {
        match env_thread_count(RAYON_VARS[0]) {
            Some(0) => return default(),
            Some(n) => return n,
            None => {}
        }

        match env_thread_count(RAYON_VARS[1]) {
            Some(n @ 1..) => n,
            _ => default(),
        }
    }

    #[cfg(not(feature = "rayon"))]
    default()
}

/// Size of the scoring pool for a requested bound.
///
/// A request is capped at [`est_max_parallelism`]; `None` takes that estimate.
pub fn resolve_max_pool(max_pool: Option<NonZeroUsize>) -> usize {
    let sys_max = est_max_parallelism();
    max_pool.map_or(sys_max, |n| n.get().min(sys_max))
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_resolve_max_pool() {
        let sys_max = est_max_parallelism();

        assert_eq!(resolve_max_pool(None), sys_max);
        assert_eq!(resolve_max_pool(NonZeroUsize::new(1)), 1);
        assert_eq!(
            resolve_max_pool(NonZeroUsize::new(sys_max + 10)),
            sys_max
        );
    }

    #[cfg(feature = "rayon")]
    #[test]
    #[serial]
    fn test_est_max_parallelism_env() {
        use std::env;

        use crate::types::ZHashMap;

        let saved: ZHashMap<&str, Option<String>> = RAYON_VARS
            .iter()
            .map(|&name| (name, env::var(name).ok()))
            .collect();

        let set = |name: &str, val: Option<&str>| match val {
            Some(v) => unsafe { env::set_var(name, v) },
            None => unsafe { env::remove_var(name) },
        };

        set("RAYON_NUM_THREADS", None);
        set("RAYON_RS_NUM_CPUS", None);
        let base = est_max_parallelism();
        assert!(base >= 1);

        let more = (base + 12).to_string();
        set("RAYON_NUM_THREADS", Some(more.as_str()));
        assert_eq!(est_max_parallelism(), base + 12);

        // The deprecated name only applies when the current one is absent.
        set("RAYON_RS_NUM_CPUS", Some("3"));
        assert_eq!(est_max_parallelism(), base + 12);

        set("RAYON_NUM_THREADS", Some("0"));
        assert_eq!(est_max_parallelism(), base);
        assert_eq!(resolve_max_pool(NonZeroUsize::new(base + 5)), base);

        set("RAYON_NUM_THREADS", Some("junk"));
        assert_eq!(est_max_parallelism(), 3);

        set("RAYON_NUM_THREADS", None);
        assert_eq!(est_max_parallelism(), 3);

        set("RAYON_RS_NUM_CPUS", Some("0"));
        assert_eq!(est_max_parallelism(), base);

        set("RAYON_RS_NUM_CPUS", None);
        assert_eq!(est_max_parallelism(), base);

        for (name, val) in saved {
            set(name, val.as_deref());
        }
    }
}
