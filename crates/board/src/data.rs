//! Shaping of raw form input into order records.

use chrono::Local;
use shared::{
    domain::{Column, Order, OrderId},
    error::BoardError,
};

/// Add-form fields as entered, before any shaping.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    pub title: String,
    pub table: String,
}

impl OrderForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Hands out card identifiers unique for the lifetime of a session.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: i64,
}

impl IdAllocator {
    pub fn allocate(&mut self) -> OrderId {
        self.next += 1;
        OrderId(self.next)
    }
}

/// Normalizes a submitted add form into a fresh order record. New orders
/// always start in the `ordered` column; the creation time is stamped here.
pub fn draft(form: &OrderForm, ids: &mut IdAllocator) -> Result<Order, BoardError> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err(BoardError::missing_field("title"));
    }
    let table = form.table.trim();
    if table.is_empty() {
        return Err(BoardError::missing_field("table"));
    }

    Ok(Order {
        id: ids.allocate(),
        title: title.to_string(),
        table: table.to_string(),
        column: Column::Ordered,
        created: Local::now(),
    })
}
