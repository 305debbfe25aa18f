//! Name ↔ coordinate tracking table.
//!
//! A [`Tracker`] keeps two tables in lockstep: `names` (coordinate →
//! name) and `properties` (name → coordinate-or-absent). For every live
//! entry `properties[name] == Some(c)` iff `names[c] == name`. A name
//! whose content was overwritten or displaced stays in `properties` with
//! an absent value until it is tracked again.
//!
//! All mutation goes through the methods here so that the two tables can
//! never drift apart.

use indexmap::IndexMap;
use std::fmt;
use std::hash::Hash;

/// Bidirectional tracking table owned by one map.
#[derive(Debug, Clone)]
pub struct Tracker<C> {
    names: IndexMap<C, String>,
    properties: IndexMap<String, Option<C>>,
}

impl<C> Default for Tracker<C> {
    fn default() -> Self {
        Self {
            names: IndexMap::new(),
            properties: IndexMap::new(),
        }
    }
}

impl<C: Copy + Eq + Hash + fmt::Debug> Tracker<C> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `coord` under `name`. Last write wins:
    ///
    /// - if `name` was live at another coordinate, that coordinate stops
    ///   being tracked;
    /// - if `coord` was tracked under another name, that name is
    ///   invalidated.
    pub fn track(&mut self, coord: C, name: impl Into<String>) {
        let name = name.into();
        if let Some(&Some(old)) = self.properties.get(&name) {
            if old != coord {
                self.names.swap_remove(&old);
                tracing::trace!(name = %name, from = ?old, to = ?coord, "tracking name rebound");
            }
        }
        if let Some(previous) = self.names.swap_remove(&coord) {
            if previous != name {
                tracing::trace!(name = %previous, coord = ?coord, "tracking replaced by new name");
                self.properties.insert(previous, None);
            }
        }
        tracing::trace!(name = %name, coord = ?coord, "tracking registered");
        self.attach(coord, name);
    }

    /// Invalidate the entry at `coord`, if any: its content has been
    /// overwritten or displaced. Returns the invalidated name.
    pub fn invalidate(&mut self, coord: C) -> Option<&str> {
        let name = self.names.swap_remove(&coord)?;
        tracing::trace!(name = %name, coord = ?coord, "tracking invalidated");
        let (index, _) = self.properties.insert_full(name, None);
        self.properties.get_index(index).map(|(name, _)| name.as_str())
    }

    /// Move the entry at `from` to `to`, keeping its name. The caller
    /// must have invalidated any entry at `to` first.
    pub fn relocate(&mut self, from: C, to: C) {
        if let Some(name) = self.names.swap_remove(&from) {
            tracing::trace!(name = %name, from = ?from, to = ?to, "tracking relocated");
            self.attach(to, name);
        }
    }

    /// Exchange the entries at `a` and `b`; either or both may be absent.
    pub fn exchange(&mut self, a: C, b: C) {
        let at_a = self.names.swap_remove(&a);
        let at_b = self.names.swap_remove(&b);
        if let Some(name) = at_a {
            tracing::trace!(name = %name, from = ?a, to = ?b, "tracking relocated");
            self.attach(b, name);
        }
        if let Some(name) = at_b {
            tracing::trace!(name = %name, from = ?b, to = ?a, "tracking relocated");
            self.attach(a, name);
        }
    }

    /// Current coordinate of `name`; `None` if it was never tracked or
    /// has been invalidated.
    pub fn property(&self, name: &str) -> Option<C> {
        self.properties.get(name).copied().flatten()
    }

    /// Whether `name` has ever been tracked, live or invalidated.
    pub fn contains_name(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Name tracking `coord`, if any.
    pub fn name_at(&self, coord: C) -> Option<&str> {
        self.names.get(&coord).map(String::as_str)
    }

    /// Every registered name with its coordinate, in first-registration
    /// order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, Option<C>)> + '_ {
        self.properties.iter().map(|(name, c)| (name.as_str(), *c))
    }

    /// Number of live entries.
    pub fn live_count(&self) -> usize {
        self.names.len()
    }

    fn attach(&mut self, coord: C, name: String) {
        self.names.insert(coord, name.clone());
        self.properties.insert(name, Some(coord));
    }

    /// Panics unless the two tables are exact inverses on live entries.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        for (coord, name) in &self.names {
            assert_eq!(self.properties.get(name), Some(&Some(*coord)), "{name} not at {coord:?}");
        }
        let live = self.properties.values().filter(|c| c.is_some()).count();
        assert_eq!(live, self.names.len(), "properties and names disagree on live count");
    }
}
