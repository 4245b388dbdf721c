use super::*;
use shared::{
    domain::{Column, Order, OrderId},
    error::BoardError,
};

/// Recording stand-in for the GUI card store. A single vec models both the
/// card list and the bucket assignment, so the "stored column matches the
/// bucket" invariant holds by construction.
#[derive(Default)]
struct FakeView {
    cards: Vec<Order>,
    drag_over: Option<Column>,
}

impl FakeView {
    fn card(&self, id: OrderId) -> Option<&Order> {
        self.cards.iter().find(|card| card.id == id)
    }

    fn column_of(&self, id: OrderId) -> Option<Column> {
        self.card(id).map(|card| card.column)
    }

    fn ids_in(&self, column: Column) -> Vec<OrderId> {
        self.cards
            .iter()
            .filter(|card| card.column == column)
            .map(|card| card.id)
            .collect()
    }
}

impl BoardView for FakeView {
    fn render(&mut self, order: &Order) {
        self.cards.push(order.clone());
    }

    fn update_text(&mut self, id: OrderId, title: &str, table: &str) -> Result<(), BoardError> {
        let card = self
            .cards
            .iter_mut()
            .find(|card| card.id == id)
            .ok_or(BoardError::unknown_order(id))?;
        card.title = title.to_string();
        card.table = table.to_string();
        Ok(())
    }

    fn remove(&mut self, id: OrderId) -> Result<(), BoardError> {
        let position = self
            .cards
            .iter()
            .position(|card| card.id == id)
            .ok_or(BoardError::unknown_order(id))?;
        self.cards.remove(position);
        Ok(())
    }

    fn move_to(&mut self, id: OrderId, column: Column) -> Result<(), BoardError> {
        let position = self
            .cards
            .iter()
            .position(|card| card.id == id)
            .ok_or(BoardError::unknown_order(id))?;
        let mut card = self.cards.remove(position);
        card.column = column;
        self.cards.push(card);
        Ok(())
    }

    fn set_drag_over(&mut self, column: Option<Column>) {
        self.drag_over = column;
    }
}

fn add_order(session: &mut BoardSession, view: &mut FakeView, title: &str, table: &str) -> OrderId {
    session.add_form.title = title.to_string();
    session.add_form.table = table.to_string();
    session.handle_add_submit(view).expect("add order")
}

fn click_card(session: &mut BoardSession, view: &FakeView, id: OrderId) {
    let card = view.card(id).expect("clicked card");
    session.handle_card_click(EditTarget {
        id,
        title: card.title.clone(),
        table: card.table.clone(),
        column: card.column,
    });
}

#[test]
fn add_submit_renders_card_under_ordered() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();

    let id = add_order(&mut session, &mut view, "Burger", "4");

    let card = view.card(id).expect("rendered card");
    assert_eq!(card.title, "Burger");
    assert_eq!(card.table, "4");
    assert_eq!(card.column, Column::Ordered);
}

#[test]
fn add_submit_assigns_unique_ids() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();

    let first = add_order(&mut session, &mut view, "Burger", "4");
    let second = add_order(&mut session, &mut view, "Pasta", "7");

    assert_ne!(first, second);
    assert_eq!(view.cards.len(), 2);
}

#[test]
fn add_submit_trims_whitespace_from_fields() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();

    let id = add_order(&mut session, &mut view, "  Burger ", " 4 ");

    let card = view.card(id).expect("rendered card");
    assert_eq!(card.title, "Burger");
    assert_eq!(card.table, "4");
}

#[test]
fn add_submit_rejects_blank_fields_and_keeps_form() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();
    session.handle_add_toggle();

    session.add_form.title = "   ".to_string();
    session.add_form.table = "4".to_string();
    let err = session.handle_add_submit(&mut view).expect_err("blank title");
    assert_eq!(err, BoardError::missing_field("title"));

    session.add_form.title = "Burger".to_string();
    session.add_form.table = String::new();
    let err = session.handle_add_submit(&mut view).expect_err("blank table");
    assert_eq!(err, BoardError::missing_field("table"));

    assert!(view.cards.is_empty());
    assert!(session.add_open, "rejected submit leaves the dialog open");
    assert_eq!(session.add_form.title, "Burger");
}

#[test]
fn add_toggle_resets_form_when_closing() {
    let mut session = BoardSession::new();
    session.handle_add_toggle();
    session.add_form.title = "Burger".to_string();
    session.add_form.table = "4".to_string();

    session.handle_add_toggle();

    assert!(!session.add_open);
    assert!(session.add_form.title.is_empty());
    assert!(session.add_form.table.is_empty());
}

#[test]
fn card_click_targets_order_and_prefills_edit_form() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();
    let id = add_order(&mut session, &mut view, "Burger", "4");

    click_card(&mut session, &view, id);

    assert!(session.edit_open);
    assert_eq!(session.target().expect("target").id, id);
    assert_eq!(session.edit_form.title, "Burger");
    assert_eq!(session.edit_form.table, "4");
    assert_eq!(session.edit_form.column, Column::Ordered);
}

#[test]
fn edit_cancel_clears_target_and_form() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();
    let id = add_order(&mut session, &mut view, "Burger", "4");
    click_card(&mut session, &view, id);

    session.handle_edit_cancel();

    assert!(!session.edit_open);
    assert!(session.target().is_none());
    assert!(session.edit_form.title.is_empty());
}

#[test]
fn edit_submit_changing_only_column_relocates_card() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();
    add_order(&mut session, &mut view, "Burger", "4");
    add_order(&mut session, &mut view, "Pasta", "7");
    let id = add_order(&mut session, &mut view, "Soup", "2");

    click_card(&mut session, &view, id);
    session.edit_form.column = Column::Ready;
    session.handle_edit_submit(&mut view).expect("edit");

    let card = view.card(id).expect("card survives the move");
    assert_eq!(card.title, "Soup");
    assert_eq!(card.table, "2");
    assert_eq!(card.column, Column::Ready);
    assert_eq!(view.ids_in(Column::Ready), vec![id]);
    assert!(!session.edit_open);
    assert!(session.target().is_none());
}

#[test]
fn edit_submit_updates_text_in_place_without_moving() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();
    let id = add_order(&mut session, &mut view, "Burger", "4");

    click_card(&mut session, &view, id);
    session.edit_form.title = "Double Burger".to_string();
    session.edit_form.table = "12".to_string();
    session.handle_edit_submit(&mut view).expect("edit");

    let card = view.card(id).expect("card");
    assert_eq!(card.title, "Double Burger");
    assert_eq!(card.table, "12");
    assert_eq!(card.column, Column::Ordered);
}

#[test]
fn edit_submit_without_target_is_rejected() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();

    let err = session.handle_edit_submit(&mut view).expect_err("no target");
    assert_eq!(err, BoardError::NoTargetOrder);
}

#[test]
fn edit_submit_reports_vanished_card() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();
    let id = add_order(&mut session, &mut view, "Burger", "4");
    click_card(&mut session, &view, id);
    view.remove(id).expect("remove behind the dialog's back");

    let err = session.handle_edit_submit(&mut view).expect_err("gone");
    assert_eq!(err, BoardError::unknown_order(id));
}

#[test]
fn delete_removes_only_the_targeted_card() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();
    let keep = add_order(&mut session, &mut view, "Burger", "4");
    let doomed = add_order(&mut session, &mut view, "Pasta", "7");

    click_card(&mut session, &view, doomed);
    let removed = session.handle_delete(&mut view).expect("delete");

    assert_eq!(removed, doomed);
    assert!(view.card(doomed).is_none());
    assert!(view.card(keep).is_some());
    assert!(!session.edit_open);
    assert!(session.target().is_none());
}

#[test]
fn delete_without_target_is_rejected() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();

    let err = session.handle_delete(&mut view).expect_err("no target");
    assert_eq!(err, BoardError::NoTargetOrder);
}

#[test]
fn drag_over_marked_path_tracks_and_highlights_column() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();
    let id = add_order(&mut session, &mut view, "Burger", "4");

    let path = [
        Surface::Card(id),
        Surface::ColumnBody(Column::InProgress),
        Surface::Grid,
    ];
    session.handle_drag_over(&mut view, &path);

    assert_eq!(session.drag_over(), Some(Column::InProgress));
    assert_eq!(view.drag_over, Some(Column::InProgress));
}

#[test]
fn drag_over_unmarked_path_keeps_previous_column() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();
    let id = add_order(&mut session, &mut view, "Burger", "4");

    session.handle_drag_over(
        &mut view,
        &[Surface::Card(id), Surface::ColumnBody(Column::Ready)],
    );
    session.handle_drag_over(&mut view, &[Surface::Card(id), Surface::Grid]);

    assert_eq!(session.drag_over(), Some(Column::Ready));
    assert_eq!(view.drag_over, Some(Column::Ready));
}

#[test]
fn drag_over_without_any_marker_does_nothing() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();
    let id = add_order(&mut session, &mut view, "Burger", "4");

    session.handle_drag_over(&mut view, &[Surface::Card(id), Surface::Grid]);

    assert_eq!(session.drag_over(), None);
    assert_eq!(view.drag_over, None);
}

#[test]
fn drag_end_moves_card_to_tracked_column() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();
    let id = add_order(&mut session, &mut view, "Burger", "4");

    session.handle_drag_over(
        &mut view,
        &[Surface::Card(id), Surface::ColumnBody(Column::Ready)],
    );
    session.handle_drag_end(&mut view, id).expect("drop");

    assert_eq!(view.column_of(id), Some(Column::Ready));
    assert_eq!(session.drag_over(), None, "tracker is cleared after a drop");
    assert_eq!(view.drag_over, None, "highlight is cleared after a drop");
}

#[test]
fn drag_end_without_tracked_column_leaves_card_in_place() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();
    let id = add_order(&mut session, &mut view, "Burger", "4");

    session.handle_drag_over(&mut view, &[Surface::Card(id), Surface::Grid]);
    session.handle_drag_end(&mut view, id).expect("no-op drop");

    assert_eq!(view.column_of(id), Some(Column::Ordered));
}

#[test]
fn later_drag_does_not_reuse_a_previous_gestures_target() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();
    let id = add_order(&mut session, &mut view, "Burger", "4");

    session.handle_drag_over(
        &mut view,
        &[Surface::Card(id), Surface::ColumnBody(Column::Ready)],
    );
    session.handle_drag_end(&mut view, id).expect("first drop");

    session.handle_drag_over(&mut view, &[Surface::Card(id), Surface::Grid]);
    session.handle_drag_end(&mut view, id).expect("second drop");

    assert_eq!(view.column_of(id), Some(Column::Ready));
}

#[test]
fn moved_card_lands_at_the_end_of_its_new_bucket() {
    let mut session = BoardSession::new();
    let mut view = FakeView::default();
    let first = add_order(&mut session, &mut view, "Burger", "4");
    let second = add_order(&mut session, &mut view, "Pasta", "7");

    session.handle_drag_over(
        &mut view,
        &[Surface::Card(first), Surface::ColumnBody(Column::Ready)],
    );
    session.handle_drag_end(&mut view, first).expect("drop");
    session.handle_drag_over(
        &mut view,
        &[Surface::Card(second), Surface::ColumnBody(Column::Ready)],
    );
    session.handle_drag_end(&mut view, second).expect("drop");

    assert_eq!(view.ids_in(Column::Ready), vec![first, second]);
}

#[test]
fn innermost_marker_wins_on_the_hover_path() {
    let path = [
        Surface::Card(OrderId(1)),
        Surface::ColumnHeader(Column::InProgress),
        Surface::ColumnBody(Column::Ordered),
        Surface::Grid,
    ];
    assert_eq!(column_marker(&path), Some(Column::InProgress));
}

#[test]
fn walk_returns_none_when_no_surface_matches() {
    let path = [Surface::Card(OrderId(1)), Surface::Grid];
    let hit = walk(&path, |surface| match surface {
        Surface::ColumnBody(column) => Some(*column),
        _ => None,
    });
    assert_eq!(hit, None);
}

#[test]
fn help_toggle_flips_visibility() {
    let mut session = BoardSession::new();
    assert!(!session.help_open);
    session.handle_help_toggle();
    assert!(session.help_open);
    session.handle_help_toggle();
    assert!(!session.help_open);
}
