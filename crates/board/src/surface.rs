//! Hover paths and the marker tree walk.
//!
//! While a card is dragged, the UI reports the stack of surfaces under the
//! pointer, innermost first. The drag handler walks that path looking for a
//! surface tagged with a column marker.

use shared::domain::{Column, OrderId};

/// One element of a pointer hover path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// A rendered order card.
    Card(OrderId),
    /// The droppable body of a column.
    ColumnBody(Column),
    /// A column's header strip.
    ColumnHeader(Column),
    /// The board background outside any column.
    Grid,
}

impl Surface {
    /// The column marker this surface carries, if any.
    pub fn column_marker(self) -> Option<Column> {
        match self {
            Surface::ColumnBody(column) | Surface::ColumnHeader(column) => Some(column),
            Surface::Card(_) | Surface::Grid => None,
        }
    }
}

/// Walks `path` from the innermost surface outward and returns the first
/// value `probe` produces, or `None` when no surface matches.
pub fn walk<T>(path: &[Surface], probe: impl Fn(&Surface) -> Option<T>) -> Option<T> {
    path.iter().find_map(probe)
}

/// First column marker on the path, innermost wins.
pub fn column_marker(path: &[Surface]) -> Option<Column> {
    walk(path, |surface| surface.column_marker())
}
