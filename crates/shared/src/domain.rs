use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub i64);
    };
}

id_newtype!(OrderId);

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Status bucket an order occupies. The set is closed: a card is always in
/// exactly one of these columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Column {
    #[default]
    Ordered,
    InProgress,
    Ready,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Ordered, Column::InProgress, Column::Ready];

    /// Marker string used to tag view surfaces with their owning column.
    pub fn marker(self) -> &'static str {
        match self {
            Column::Ordered => "ordered",
            Column::InProgress => "in-progress",
            Column::Ready => "ready",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Ordered => "Ordered",
            Column::InProgress => "In Progress",
            Column::Ready => "Ready",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.marker())
    }
}

impl std::str::FromStr for Column {
    type Err = BoardError;

    fn from_str(marker: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|column| column.marker() == marker)
            .ok_or_else(|| BoardError::UnknownColumn {
                marker: marker.to_string(),
            })
    }
}

/// A single customer order, rendered as one card on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub title: String,
    pub table: String,
    pub column: Column,
    pub created: DateTime<Local>,
}

#[cfg(test)]
mod tests {
    use super::Column;

    #[test]
    fn column_round_trips_through_its_marker() {
        for column in Column::ALL {
            assert_eq!(column.marker().parse::<Column>().expect("marker"), column);
        }
    }

    #[test]
    fn rejects_unknown_column_marker() {
        assert!("served".parse::<Column>().is_err());
        assert!("".parse::<Column>().is_err());
    }

    #[test]
    fn serializes_column_as_its_marker() {
        let json = serde_json::to_string(&Column::InProgress).expect("serialize");
        assert_eq!(json, "\"in-progress\"");
    }
}
