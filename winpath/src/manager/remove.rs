//! Pattern-driven removal.

use crate::error::Result;
use crate::pattern::PathPattern;
use crate::store::EnvironmentStore;

use super::PathManager;

impl<S: EnvironmentStore> PathManager<S> {
    /// Expanded entries matching `pattern`, in list order.
    ///
    /// # Errors
    ///
    /// Fails if an entry fails to expand.
    pub fn matching(&self, pattern: &PathPattern) -> Result<Vec<String>> {
        let mut matches = Vec::new();
        for path in &self.paths {
            let path = path?;
            if pattern.matches(&path) {
                matches.push(path);
            }
        }
        Ok(matches)
    }

    /// Remove every entry matching `pattern`, returning the matched paths.
    ///
    /// # Errors
    ///
    /// Fails if an entry fails to expand.
    pub fn remove_matching(&mut self, pattern: &PathPattern) -> Result<Vec<String>> {
        let mut removed = Vec::new();
        self.remove_matching_with(pattern, |path| removed.push(path.to_string()))?;
        Ok(removed)
    }

    /// Remove every entry matching `pattern`, calling `on_removal` with each
    /// matched path before it is removed.
    ///
    /// Matches are collected over the whole list first. Each match then
    /// removes every entry canonically equal to it, so an entry that did
    /// not match itself can still go when it names the same directory as
    /// one that did.
    ///
    /// Returns the number of entries removed.
    ///
    /// # Errors
    ///
    /// Fails if an entry fails to expand. Nothing is removed when matching
    /// fails.
    pub fn remove_matching_with<F>(
        &mut self,
        pattern: &PathPattern,
        mut on_removal: F,
    ) -> Result<usize>
    where
        F: FnMut(&str),
    {
        let matches = self.matching(pattern)?;
        log::debug!("{} entries match {pattern}", matches.len());

        let mut removed = 0;
        for path in &matches {
            on_removal(path);
            removed += self.remove_entries_equal_to(path)?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::expand::MemoryExpander;
    use crate::store::{MemoryStore, Scope};
    use std::rc::Rc;

    fn load(store: &MemoryStore) -> PathManager<&MemoryStore> {
        PathManager::load(store, Rc::new(MemoryExpander::new()), &Config::default()).unwrap()
    }

    fn glob(text: &str) -> PathPattern {
        PathPattern::glob(text).unwrap()
    }

    #[test]
    fn test_remove_exact_path_all_scopes() {
        let store = MemoryStore::new(r"C:\Windows;C:\Tools", r"c:\tools\;D:\bin");
        let mut manager = load(&store);

        let removed = manager.remove_matching(&glob(r"C:\Tools")).unwrap();
        assert_eq!(removed, vec![r"C:\Tools"]);
        assert_eq!(manager.paths().raw_entries(), &[r"C:\Windows", r"D:\bin"]);
    }

    #[test]
    fn test_remove_prefix_glob() {
        let store = MemoryStore::new(r"C:\Program Files;C:\Program Files (x86);C:\Windows", "");
        let mut manager = load(&store);

        let count = manager
            .remove_matching_with(&glob(r"C:\PROGRAM*"), |_| {})
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(manager.paths().raw_entries(), &[r"C:\Windows"]);
    }

    #[test]
    fn test_remove_infix_glob() {
        let store = MemoryStore::new(r"C:\Program Files\Git;D:\program\x;C:\Windows", "");
        let mut manager = load(&store);

        manager.remove_matching(&glob("*PROGRAM*")).unwrap();
        assert_eq!(manager.paths().raw_entries(), &[r"C:\Windows"]);
    }

    #[test]
    fn test_question_mark_matches_one_character() {
        let store = MemoryStore::new(r"C:\a1;C:\a22", "");
        let mut manager = load(&store);

        manager.remove_matching(&glob(r"C:\a?")).unwrap();
        assert_eq!(manager.paths().raw_entries(), &[r"C:\a22"]);
    }

    #[test]
    fn test_regex_removal() {
        let store = MemoryStore::new(r"C:\Python311;C:\Python311\Scripts;C:\Windows", "");
        let mut manager = load(&store);

        let pattern = PathPattern::regex(r"(?i)\\python\d+").unwrap();
        let removed = manager.remove_matching(&pattern).unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(manager.paths().raw_entries(), &[r"C:\Windows"]);
    }

    #[test]
    fn test_match_is_on_expanded_form() {
        let store = MemoryStore::new(r"%TOOLS%\bin;C:\Windows", "");
        let vars = Rc::new(MemoryExpander::new());
        vars.set("TOOLS", r"C:\Tools");
        let mut manager = PathManager::load(&store, vars, &Config::default()).unwrap();

        let removed = manager.remove_matching(&glob(r"C:\Tools\*")).unwrap();
        assert_eq!(removed, vec![r"C:\Tools\bin"]);
        assert_eq!(manager.paths().raw_entries(), &[r"C:\Windows"]);
    }

    #[test]
    fn test_no_match_changes_nothing() {
        let store = MemoryStore::new(r"C:\Windows", r"D:\bin");
        let mut manager = load(&store);

        assert!(manager.remove_matching(&glob(r"E:\*")).unwrap().is_empty());
        assert!(manager.update().unwrap().is_noop());
    }

    #[test]
    fn test_removal_persists_per_scope() {
        let store = MemoryStore::new(r"C:\Windows;C:\Tools", r"C:\Tools;D:\bin");
        let mut manager = load(&store);

        manager.remove_matching(&glob(r"c:\tools")).unwrap();
        let result = manager.update().unwrap();

        assert_eq!(result.written, vec![Scope::System, Scope::User]);
        assert_eq!(store.value(Scope::System), r"C:\Windows");
        assert_eq!(store.value(Scope::User), r"D:\bin");
    }

    #[test]
    fn test_removing_whole_scope_writes_empty_value() {
        let store = MemoryStore::new(r"C:\Windows", r"D:\bin");
        let mut manager = load(&store);

        manager.remove_matching(&glob(r"D:\*")).unwrap();
        manager.update().unwrap();
        assert_eq!(store.value(Scope::User), "");
    }
}
