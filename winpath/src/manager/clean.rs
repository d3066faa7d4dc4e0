//! Removal of missing and duplicate directories.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::path::PathList;
use crate::probe::{DirectoryProbe, FsProbe};
use crate::store::EnvironmentStore;

use super::PathManager;

/// Why an entry was removed by a clean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovalReason {
    /// An earlier entry names the same directory.
    Dup,
    /// The directory does not exist.
    NotFound,
}

impl fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dup => write!(f, "dup"),
            Self::NotFound => write!(f, "notfound"),
        }
    }
}

/// One entry removed by a clean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Removal {
    /// Expanded path of the removed entry.
    pub path: String,
    /// Why it was removed.
    pub reason: RemovalReason,
}

impl<S: EnvironmentStore> PathManager<S> {
    /// Remove entries that are not existing directories or that repeat an
    /// earlier entry, using the real filesystem.
    ///
    /// Returns the removals in the order they were made.
    ///
    /// # Errors
    ///
    /// Fails if an entry fails to expand. Nothing is removed in that case.
    pub fn clean(&mut self) -> Result<Vec<Removal>> {
        let mut removals = Vec::new();
        self.clean_with(&FsProbe, |removal| removals.push(removal.clone()))?;
        Ok(removals)
    }

    /// What [`clean`](Self::clean) would remove with `probe`, without
    /// removing anything.
    ///
    /// # Errors
    ///
    /// Fails if an entry fails to expand.
    pub fn plan_clean<P>(&self, probe: &P) -> Result<Vec<Removal>>
    where
        P: DirectoryProbe + ?Sized,
    {
        let plan = self.classify(probe)?;
        removal_order(&plan)
            .into_iter()
            .map(|(index, reason)| {
                Ok(Removal {
                    path: self.paths.get(index)?,
                    reason,
                })
            })
            .collect()
    }

    /// Clean with `probe`, calling `on_removal` once per removed entry.
    ///
    /// Every entry is classified first, in list order: an entry whose
    /// expanded path is not a directory is `notfound`; an existing entry
    /// canonically equal to an earlier existing one is `dup`. Duplicates
    /// are then removed in ascending order, followed by missing entries in
    /// ascending order. Each callback fires before its entry is dropped.
    ///
    /// Returns the number of entries removed.
    ///
    /// # Errors
    ///
    /// Fails if an entry fails to expand. Classification happens before
    /// any removal, so nothing is removed in that case.
    pub fn clean_with<P, F>(&mut self, probe: &P, mut on_removal: F) -> Result<usize>
    where
        P: DirectoryProbe + ?Sized,
        F: FnMut(&Removal),
    {
        let plan = self.classify(probe)?;
        let mut removed: Vec<usize> = Vec::with_capacity(plan.len());

        for (index, reason) in removal_order(&plan) {
            // Positions shift left by one for every earlier entry already gone.
            let shift = removed.iter().filter(|&&gone| gone < index).count();
            let position = index - shift;

            let removal = Removal {
                path: self.paths.get(position)?,
                reason,
            };
            log::debug!("Removing {} ({})", removal.path, removal.reason);
            on_removal(&removal);

            self.remove_entry_at(position)?;
            removed.push(index);
        }

        Ok(removed.len())
    }

    /// Classify every entry; returns `(original index, reason)` pairs in
    /// list order.
    fn classify<P>(&self, probe: &P) -> Result<Vec<(usize, RemovalReason)>>
    where
        P: DirectoryProbe + ?Sized,
    {
        let mut found = PathList::new(self.paths.comparator().clone());
        let mut plan = Vec::new();

        for (index, raw) in self.paths.raw_entries().iter().enumerate() {
            let expanded = self.paths.comparator().expand(raw)?;
            if !probe.is_dir(&expanded) {
                plan.push((index, RemovalReason::NotFound));
            } else if found.contains(raw)? {
                plan.push((index, RemovalReason::Dup));
            } else {
                found.append(raw.as_str());
            }
        }

        log::debug!(
            "Classified {} entries: {} to remove",
            self.paths.len(),
            plan.len()
        );
        Ok(plan)
    }
}

/// Duplicates first, then missing entries, each in ascending index order.
fn removal_order(plan: &[(usize, RemovalReason)]) -> Vec<(usize, RemovalReason)> {
    let mut order: Vec<_> = plan
        .iter()
        .copied()
        .filter(|(_, reason)| *reason == RemovalReason::Dup)
        .collect();
    order.extend(
        plan.iter()
            .copied()
            .filter(|(_, reason)| *reason == RemovalReason::NotFound),
    );
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::expand::MemoryExpander;
    use crate::store::{MemoryStore, Scope};
    use std::collections::HashSet;
    use std::rc::Rc;

    /// Probe answering from a fixed set of existing directories.
    fn existing(dirs: &[&str]) -> impl Fn(&str) -> bool {
        let dirs: HashSet<String> = dirs.iter().map(|d| d.to_string()).collect();
        move |path: &str| dirs.contains(path)
    }

    fn load(store: &MemoryStore) -> PathManager<&MemoryStore> {
        PathManager::load(store, Rc::new(MemoryExpander::new()), &Config::default()).unwrap()
    }

    fn collect<P: Fn(&str) -> bool>(
        manager: &mut PathManager<&MemoryStore>,
        probe: &P,
    ) -> Vec<(String, RemovalReason)> {
        let mut seen = Vec::new();
        manager
            .clean_with(probe, |r| seen.push((r.path.clone(), r.reason)))
            .unwrap();
        seen
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(RemovalReason::Dup.to_string(), "dup");
        assert_eq!(RemovalReason::NotFound.to_string(), "notfound");
    }

    #[test]
    fn test_removal_serializes_lowercase_reason() {
        let removal = Removal {
            path: r"C:\gone".to_string(),
            reason: RemovalReason::NotFound,
        };
        assert_eq!(
            serde_json::to_value(&removal).unwrap(),
            serde_json::json!({ "path": r"C:\gone", "reason": "notfound" })
        );
    }

    #[test]
    fn test_clean_removes_missing_directory() {
        let store = MemoryStore::new(r"C:\Windows;C:\gone", "");
        let mut manager = load(&store);

        let seen = collect(&mut manager, &existing(&[r"C:\Windows"]));
        assert_eq!(seen, vec![(r"C:\gone".to_string(), RemovalReason::NotFound)]);
        assert_eq!(manager.paths().raw_entries(), &[r"C:\Windows"]);
    }

    #[test]
    fn test_clean_keeps_first_of_duplicates() {
        let store = MemoryStore::new(r"C:\Tools", r"c:\tools\");
        let mut manager = load(&store);

        let seen = collect(&mut manager, &existing(&[r"C:\Tools", r"c:\tools\"]));
        assert_eq!(seen, vec![(r"c:\tools\".to_string(), RemovalReason::Dup)]);
        assert_eq!(manager.paths().raw_entries(), &[r"C:\Tools"]);
    }

    #[test]
    fn test_clean_removes_dups_before_missing_with_correct_positions() {
        // 0 a, 1 gone1, 2 A (dup of 0), 3 b, 4 gone2, 5 b (dup of 3)
        let store = MemoryStore::new(r"C:\a;C:\gone1;C:\A", r"C:\b;C:\gone2;C:\b");
        let mut manager = load(&store);

        let seen = collect(&mut manager, &existing(&[r"C:\a", r"C:\A", r"C:\b"]));
        assert_eq!(
            seen,
            vec![
                (r"C:\A".to_string(), RemovalReason::Dup),
                (r"C:\b".to_string(), RemovalReason::Dup),
                (r"C:\gone1".to_string(), RemovalReason::NotFound),
                (r"C:\gone2".to_string(), RemovalReason::NotFound),
            ]
        );
        assert_eq!(manager.paths().raw_entries(), &[r"C:\a", r"C:\b"]);
    }

    #[test]
    fn test_missing_entries_are_not_counted_as_found() {
        let store = MemoryStore::new(r"C:\gone;C:\gone", "");
        let mut manager = load(&store);

        let seen = collect(&mut manager, &existing(&[]));
        assert_eq!(seen.len(), 2);
        assert!(seen.iter().all(|(_, r)| *r == RemovalReason::NotFound));
        assert!(manager.paths().is_empty());
    }

    #[test]
    fn test_probe_sees_expanded_path() {
        let store = MemoryStore::new(r"%ROOT%\bin", "");
        let vars = Rc::new(MemoryExpander::new());
        vars.set("ROOT", r"C:\Root");
        let mut manager = PathManager::load(&store, vars, &Config::default()).unwrap();

        let seen = collect(&mut manager, &existing(&[r"C:\Root\bin"]));
        assert!(seen.is_empty());
        assert_eq!(manager.paths().len(), 1);
    }

    #[test]
    fn test_clean_is_idempotent() {
        let store = MemoryStore::new(r"C:\a;C:\x;C:\a", r"C:\b");
        let mut manager = load(&store);
        let probe = existing(&[r"C:\a", r"C:\b"]);

        assert_eq!(collect(&mut manager, &probe).len(), 2);
        assert!(collect(&mut manager, &probe).is_empty());
    }

    #[test]
    fn test_plan_clean_does_not_mutate() {
        let store = MemoryStore::new(r"C:\a;C:\x;C:\a", "");
        let manager = load(&store);

        let plan = manager.plan_clean(&existing(&[r"C:\a"])).unwrap();
        assert_eq!(
            plan,
            vec![
                Removal {
                    path: r"C:\a".to_string(),
                    reason: RemovalReason::Dup
                },
                Removal {
                    path: r"C:\x".to_string(),
                    reason: RemovalReason::NotFound
                },
            ]
        );
        assert_eq!(manager.paths().len(), 3);
    }

    #[test]
    fn test_clean_then_update_keeps_scopes() {
        let store = MemoryStore::new(r"C:\shared;C:\sys", r"C:\shared;C:\usr");
        let mut manager = load(&store);

        collect(
            &mut manager,
            &existing(&[r"C:\shared", r"C:\sys", r"C:\usr"]),
        );
        manager.update().unwrap();

        assert_eq!(store.value(Scope::System), r"C:\shared;C:\sys");
        assert_eq!(store.value(Scope::User), r"C:\usr");
    }

    #[test]
    fn test_expansion_failure_removes_nothing() {
        let store = MemoryStore::new(r"C:\gone;%LOOP%", "");
        let vars = Rc::new(MemoryExpander::new());
        vars.set("LOOP", r"%LOOP%\x");
        let mut manager = PathManager::load(&store, vars, &Config::default()).unwrap();

        assert!(manager.clean_with(&existing(&[]), |_| {}).is_err());
        assert_eq!(manager.paths().len(), 2);
    }
}
