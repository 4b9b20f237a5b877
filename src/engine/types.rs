// src/engine/types.rs

/* Generic table spec */

/// Where a table lives on the page and what each column position means.
/// `C` is the column kind of one table shape (downstream, upstream, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableSpec<C: 'static> {
    pub selector: &'static str, // CSS selector of the table body, e.g. "#dsTable tbody"
    pub columns: &'static [C],  // index = cell position in the row
}

impl<C> TableSpec<C> {
    pub fn column_at(&self, pos: usize) -> Option<&'static C> {
        self.columns.get(pos)
    }
}
