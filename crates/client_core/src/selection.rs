//! Row selection bookkeeping that survives page navigation.
//!
//! The store only knows artwork ids. Operations that depend on "the current
//! page" take the rows of that page as an argument, so the caller decides
//! what is displayed and the store never holds a stale copy of it.

use std::collections::BTreeSet;

use shared::domain::{Artwork, ArtworkId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    ids: BTreeSet<ArtworkId>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`. Returns whether the id is selected afterwards.
    pub fn toggle_row(&mut self, id: ArtworkId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Header checkbox: deselects every row of `rows` when all of them are
    /// already selected, otherwise selects every row of `rows`. Ids from
    /// other pages are left alone either way.
    pub fn toggle_select_all_on_page(&mut self, rows: &[Artwork]) {
        if self.all_selected(rows) {
            for row in rows {
                self.ids.remove(&row.id);
            }
        } else {
            self.ids.extend(rows.iter().map(|row| row.id));
        }
    }

    /// Adds the first `n` rows of `rows`; `n` past the end selects the whole
    /// page. Never removes anything. Returns how many ids were newly added.
    pub fn select_first_n(&mut self, rows: &[Artwork], n: usize) -> usize {
        let before = self.ids.len();
        self.ids
            .extend(rows.iter().take(n.min(rows.len())).map(|row| row.id));
        self.ids.len() - before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Derived "select all" state for `rows`. An empty page is never
    /// considered fully selected.
    pub fn all_selected(&self, rows: &[Artwork]) -> bool {
        !rows.is_empty() && rows.iter().all(|row| self.ids.contains(&row.id))
    }

    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn selected_ids(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.ids.iter().copied()
    }

    pub fn label(&self) -> String {
        format!("{} row(s) selected", self.ids.len())
    }
}

/// Parses the "number of rows" input. Blank, non-numeric, zero and negative
/// values yield `None`, which callers treat as "select nothing".
pub fn parse_row_count(input: &str) -> Option<usize> {
    match input.trim().parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).ok(),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
