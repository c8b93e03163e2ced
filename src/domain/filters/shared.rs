//! Reloadable filter chain handle.

use std::sync::{Arc, PoisonError, RwLock};

use super::FilterChain;

/// Holds the active [`FilterChain`] and lets a reload swap it atomically.
///
/// Readers take a snapshot and evaluate on it without holding the lock, so a
/// reload never blocks on (or tears) an evaluation in flight.
#[derive(Clone)]
pub struct SharedFilterChain {
    current: Arc<RwLock<Arc<FilterChain>>>,
}

impl SharedFilterChain {
    pub fn new(chain: FilterChain) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(chain))),
        }
    }

    /// The chain as of now.
    pub fn snapshot(&self) -> Arc<FilterChain> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Install a new chain and return the previous one.
    pub fn replace(&self, chain: FilterChain) -> Arc<FilterChain> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(chain))
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::config::{Config, CriterionSpec, FilterSpec};
    use crate::domain::testing::RecordingSender;
    use crate::domain::{CommandLine, Opinion};

    fn chain_denying(name: &str) -> FilterChain {
        let config = Config {
            filters: vec![FilterSpec {
                name: "test".to_string(),
                criteria: vec![CriterionSpec::Command {
                    names: vec![name.to_string()],
                    opinion: Opinion::Deny,
                }],
                ..FilterSpec::default()
            }],
            ..Config::default()
        };
        FilterChain::new(&config).unwrap()
    }

    #[test]
    fn test_replace_keeps_old_snapshot_valid() {
        let shared = SharedFilterChain::new(chain_denying("fly"));
        let sender = RecordingSender::new("Steve", &[]);
        let fly = CommandLine::parse("/fly").unwrap();

        let before = shared.snapshot();
        let previous = shared.replace(chain_denying("home"));

        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(before.process_execution(&fly, &sender), Opinion::Deny);
        assert_eq!(shared.snapshot().process_execution(&fly, &sender), Opinion::None);
    }

    #[test]
    fn test_concurrent_readers_during_reload() {
        let shared = SharedFilterChain::new(chain_denying("fly"));
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let sender = RecordingSender::new("Steve", &[]);
                    let line = CommandLine::parse("/fly").unwrap();
                    for _ in 0..200 {
                        let opinion = shared.snapshot().process_execution(&line, &sender);
                        assert!(matches!(opinion, Opinion::Deny | Opinion::None));
                    }
                })
            })
            .collect();

        for _ in 0..50 {
            shared.replace(chain_denying("home"));
            shared.replace(chain_denying("fly"));
        }
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
