//! Retained card store the board is painted from each frame.

use board::BoardView;
use shared::{
    domain::{Column, Order, OrderId},
    error::BoardError,
};

/// Cards currently on the board, in paint order. A card's column field is
/// its bucket; painting filters by column, so position within the vec is
/// position within the bucket.
#[derive(Debug, Default)]
pub struct CardStore {
    cards: Vec<Order>,
    drag_over: Option<Column>,
}

impl CardStore {
    pub fn in_column(&self, column: Column) -> impl Iterator<Item = &Order> {
        self.cards.iter().filter(move |card| card.column == column)
    }

    pub fn count_in(&self, column: Column) -> usize {
        self.in_column(column).count()
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Column currently highlighted as the drag target.
    pub fn drag_over(&self) -> Option<Column> {
        self.drag_over
    }

    fn index_of(&self, id: OrderId) -> Result<usize, BoardError> {
        self.cards
            .iter()
            .position(|card| card.id == id)
            .ok_or(BoardError::unknown_order(id))
    }
}

impl BoardView for CardStore {
    fn render(&mut self, order: &Order) {
        self.cards.push(order.clone());
    }

    fn update_text(&mut self, id: OrderId, title: &str, table: &str) -> Result<(), BoardError> {
        let index = self.index_of(id)?;
        self.cards[index].title = title.to_string();
        self.cards[index].table = table.to_string();
        Ok(())
    }

    fn remove(&mut self, id: OrderId) -> Result<(), BoardError> {
        let index = self.index_of(id)?;
        self.cards.remove(index);
        Ok(())
    }

    fn move_to(&mut self, id: OrderId, column: Column) -> Result<(), BoardError> {
        let index = self.index_of(id)?;
        let mut card = self.cards.remove(index);
        card.column = column;
        self.cards.push(card);
        Ok(())
    }

    fn set_drag_over(&mut self, column: Option<Column>) {
        self.drag_over = column;
    }
}
