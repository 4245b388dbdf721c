use thiserror::Error;

use crate::domain::OrderId;

/// Failures a board handler can report. Each one aborts only the handler
/// invocation that raised it; the UI loop keeps running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no rendered card carries order id {id}")]
    UnknownOrder { id: OrderId },
    #[error("unrecognized column marker: {marker:?}")]
    UnknownColumn { marker: String },
    #[error("required form field is empty: {name}")]
    MissingField { name: &'static str },
    #[error("no order is targeted for editing")]
    NoTargetOrder,
}

impl BoardError {
    pub fn unknown_order(id: OrderId) -> Self {
        Self::UnknownOrder { id }
    }

    pub fn missing_field(name: &'static str) -> Self {
        Self::MissingField { name }
    }
}
