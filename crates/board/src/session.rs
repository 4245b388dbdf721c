//! The board session: one controller object owning every piece of
//! interaction state, with one handler per UI event.

use shared::{
    domain::{Column, OrderId},
    error::BoardError,
};
use tracing::debug;

use crate::{
    data::{self, IdAllocator, OrderForm},
    surface::{self, Surface},
    view::BoardView,
};

/// Snapshot of the card the edit dialog is working on, captured from the
/// card's attributes when it was clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    pub id: OrderId,
    pub title: String,
    pub table: String,
    pub column: Column,
}

/// Edit-form fields, pre-filled from the targeted card.
#[derive(Debug, Clone, Default)]
pub struct EditForm {
    pub title: String,
    pub table: String,
    pub column: Column,
}

impl EditForm {
    fn from_target(target: &EditTarget) -> Self {
        Self {
            title: target.title.clone(),
            table: target.table.clone(),
            column: target.column,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Controller state for one run of the board. The drag tracker and the edit
/// target live here as explicit fields, never as hidden module state, so
/// every handler's inputs are visible at the call site.
#[derive(Debug, Default)]
pub struct BoardSession {
    drag_over: Option<Column>,
    target: Option<EditTarget>,
    ids: IdAllocator,
    pub add_form: OrderForm,
    pub edit_form: EditForm,
    pub add_open: bool,
    pub edit_open: bool,
    pub help_open: bool,
}

impl BoardSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column currently tracked as the drag target, if any.
    pub fn drag_over(&self) -> Option<Column> {
        self.drag_over
    }

    /// Card the edit dialog is currently working on, if any.
    pub fn target(&self) -> Option<&EditTarget> {
        self.target.as_ref()
    }

    /// A card is being dragged and the pointer moved. Walks the hover path
    /// for a surface carrying a column marker; an unmarked path leaves the
    /// previously tracked column in place.
    pub fn handle_drag_over(&mut self, view: &mut dyn BoardView, path: &[Surface]) {
        if let Some(column) = surface::column_marker(path) {
            self.drag_over = Some(column);
        }
        let Some(column) = self.drag_over else {
            return;
        };
        view.set_drag_over(Some(column));
    }

    /// The drag gesture ended. Moves the card to the tracked column and
    /// clears the tracker; a drag that never crossed a marked surface
    /// completes as a no-op.
    pub fn handle_drag_end(
        &mut self,
        view: &mut dyn BoardView,
        id: OrderId,
    ) -> Result<(), BoardError> {
        let column = self.drag_over.take();
        view.set_drag_over(None);

        match column {
            Some(column) => {
                view.move_to(id, column)?;
                debug!(order = id.0, column = %column, "moved order by drag");
            }
            None => {
                debug!(order = id.0, "drag ended outside any column; order left in place");
            }
        }
        Ok(())
    }

    pub fn handle_add_toggle(&mut self) {
        if self.add_open {
            self.add_open = false;
            self.add_form.reset();
        } else {
            self.add_open = true;
        }
    }

    /// Add form was submitted. Shapes the fields into an order record,
    /// renders its card under `ordered`, then resets and closes the form.
    /// On a rejected form the dialog stays open with its contents intact.
    pub fn handle_add_submit(&mut self, view: &mut dyn BoardView) -> Result<OrderId, BoardError> {
        let order = data::draft(&self.add_form, &mut self.ids)?;
        view.render(&order);
        debug!(order = order.id.0, title = %order.title, "added order");

        self.add_form.reset();
        self.add_open = false;
        Ok(order.id)
    }

    /// An order card was clicked: target it and open the edit dialog with
    /// the form pre-filled from the card's attributes.
    pub fn handle_card_click(&mut self, target: EditTarget) {
        self.edit_form = EditForm::from_target(&target);
        self.target = Some(target);
        self.edit_open = true;
    }

    pub fn handle_edit_cancel(&mut self) {
        self.edit_open = false;
        self.edit_form.reset();
        self.target = None;
    }

    /// Edit form was submitted. Updates the card text in place and moves the
    /// card only when the selected column differs from where it sits.
    pub fn handle_edit_submit(&mut self, view: &mut dyn BoardView) -> Result<(), BoardError> {
        let Some(target) = self.target.clone() else {
            return Err(BoardError::NoTargetOrder);
        };

        let title = self.edit_form.title.trim();
        if title.is_empty() {
            return Err(BoardError::missing_field("title"));
        }
        let table = self.edit_form.table.trim();
        if table.is_empty() {
            return Err(BoardError::missing_field("table"));
        }

        view.update_text(target.id, title, table)?;
        if self.edit_form.column != target.column {
            view.move_to(target.id, self.edit_form.column)?;
            debug!(order = target.id.0, column = %self.edit_form.column, "moved order by edit");
        }

        self.target = None;
        self.edit_open = false;
        self.edit_form.reset();
        Ok(())
    }

    /// Delete button in the edit dialog. Removes the targeted card and
    /// closes the dialog.
    pub fn handle_delete(&mut self, view: &mut dyn BoardView) -> Result<OrderId, BoardError> {
        let Some(target) = self.target.clone() else {
            return Err(BoardError::NoTargetOrder);
        };
        view.remove(target.id)?;
        debug!(order = target.id.0, "deleted order");

        self.target = None;
        self.edit_open = false;
        self.edit_form.reset();
        Ok(target.id)
    }

    pub fn handle_help_toggle(&mut self) {
        self.help_open = !self.help_open;
    }
}
