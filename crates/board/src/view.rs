use shared::{
    domain::{Column, Order, OrderId},
    error::BoardError,
};

/// Seam between the event handlers and the concrete UI toolkit.
///
/// The desktop app backs this with a retained card store it paints every
/// frame; tests back it with a recording fake. Implementations must keep a
/// card's stored column in step with the bucket it sits in.
pub trait BoardView {
    /// Creates a card for `order` at the end of its column bucket.
    fn render(&mut self, order: &Order);

    /// Rewrites a card's visible title and table text in place.
    fn update_text(&mut self, id: OrderId, title: &str, table: &str) -> Result<(), BoardError>;

    /// Removes a card from the board.
    fn remove(&mut self, id: OrderId) -> Result<(), BoardError>;

    /// Relocates a card to the end of `column` and persists the column on
    /// the card itself.
    fn move_to(&mut self, id: OrderId, column: Column) -> Result<(), BoardError>;

    /// Updates which column is highlighted as the active drag target.
    fn set_drag_over(&mut self, column: Option<Column>);
}
