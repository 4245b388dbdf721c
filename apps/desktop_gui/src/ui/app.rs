use board::{BoardSession, EditTarget, Surface};
use eframe::egui;
use serde::{Deserialize, Serialize};
use shared::{
    domain::{Column, Order, OrderId},
    error::BoardError,
};

use crate::ui::cards::CardStore;

const SETTINGS_STORAGE_KEY: &str = "order_board_ui_settings";

const HELP_TEXT: &str = "New orders are placed in the Ordered column. Click \
Add order, fill in the order text and the table number, and submit.\n\n\
To change an order's status, drag its card and release it over another \
column; the column under the pointer is highlighted while you drag. \
Releasing outside any column leaves the card where it was.\n\n\
Click a card to edit its text, pick a different status, or delete it.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Error,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedUiSettings {
    dark_mode: bool,
}

impl Default for PersistedUiSettings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

/// Card interactions observed while painting one frame of the board.
/// Columns are painted before the drag handlers run, so body rects are
/// collected here and hit-tested afterwards.
#[derive(Default)]
struct BoardFrameInput {
    clicked: Option<EditTarget>,
    drag_started: Option<OrderId>,
    drag_released: bool,
    column_headers: Vec<(Column, egui::Rect)>,
    column_bodies: Vec<(Column, egui::Rect)>,
}

pub struct BoardGuiApp {
    session: BoardSession,
    cards: CardStore,
    dragging: Option<OrderId>,
    status: Option<StatusBanner>,
    dark_mode: bool,
}

impl BoardGuiApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let persisted = cc
            .storage
            .and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedUiSettings>(&text).ok())
            })
            .unwrap_or_default();

        let app = Self {
            session: BoardSession::new(),
            cards: CardStore::default(),
            dragging: None,
            status: None,
            dark_mode: persisted.dark_mode,
        };
        app.apply_theme(&cc.egui_ctx);
        app
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        ctx.set_visuals(if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
    }

    fn report(&mut self, err: BoardError) {
        tracing::warn!(error = %err, "handler rejected interaction");
        self.status = Some(StatusBanner {
            severity: StatusBannerSeverity::Error,
            message: err.to_string(),
        });
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar")
            .exact_height(36.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(egui::RichText::new("Order Board").strong().size(16.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Add order").clicked() {
                            self.session.handle_add_toggle();
                        }
                        if ui.button("Help").clicked() {
                            self.session.handle_help_toggle();
                        }
                        let theme_label = if self.dark_mode { "Light mode" } else { "Dark mode" };
                        if ui.button(theme_label).clicked() {
                            self.dark_mode = !self.dark_mode;
                            self.apply_theme(ctx);
                        }
                    });
                });
            });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        let Some(banner) = self.status.clone() else {
            return;
        };
        egui::TopBottomPanel::bottom("status_banner").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let color = match banner.severity {
                    StatusBannerSeverity::Error => ui.visuals().error_fg_color,
                };
                ui.colored_label(color, &banner.message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Dismiss").clicked() {
                        self.status = None;
                    }
                });
            });
        });
    }

    fn show_board(&mut self, ctx: &egui::Context) -> BoardFrameInput {
        let mut input = BoardFrameInput::default();
        let dragging = self.dragging;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(Column::ALL.len(), |columns| {
                for (slot, column) in Column::ALL.into_iter().enumerate() {
                    let ui = &mut columns[slot];
                    let highlight = dragging.is_some() && self.cards.drag_over() == Some(column);
                    let orders: Vec<Order> = self.cards.in_column(column).cloned().collect();

                    let mut frame =
                        egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(8));
                    if highlight {
                        frame = frame
                            .fill(ui.visuals().selection.bg_fill.gamma_multiply(0.15))
                            .stroke(egui::Stroke::new(1.5, ui.visuals().selection.stroke.color));
                    }

                    let body = frame.show(ui, |ui| {
                        let header = ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(column.label()).strong());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.weak(orders.len().to_string());
                                },
                            );
                        });
                        input.column_headers.push((column, header.response.rect));
                        ui.separator();
                        egui::ScrollArea::vertical()
                            .id_salt(column.marker())
                            .auto_shrink(false)
                            .show(ui, |ui| {
                                for order in &orders {
                                    card_ui(ui, order, dragging == Some(order.id), &mut input);
                                }
                            });
                    });
                    input.column_bodies.push((column, body.response.rect));
                }
            });
        });

        input
    }

    fn apply_frame_input(&mut self, ctx: &egui::Context, input: BoardFrameInput) {
        if let Some(target) = input.clicked.clone() {
            self.session.handle_card_click(target);
        }
        if let Some(id) = input.drag_started {
            self.dragging = Some(id);
        }

        if let Some(id) = self.dragging {
            if let Some(pointer) = ctx.input(|i| i.pointer.hover_pos()) {
                let path = hover_path(id, pointer, &input);
                self.session.handle_drag_over(&mut self.cards, &path);
                self.paint_drag_ghost(ctx, id, pointer);
            }
            ctx.output_mut(|o| o.cursor_icon = egui::CursorIcon::Grabbing);
        }

        if input.drag_released {
            if let Some(id) = self.dragging.take() {
                if let Err(err) = self.session.handle_drag_end(&mut self.cards, id) {
                    self.report(err);
                }
            }
        }
    }

    fn paint_drag_ghost(&self, ctx: &egui::Context, id: OrderId, pointer: egui::Pos2) {
        let Some(order) = self.cards.get(id) else {
            return;
        };
        egui::Area::new(egui::Id::new("drag_ghost"))
            .fixed_pos(pointer + egui::vec2(12.0, 8.0))
            .order(egui::Order::Tooltip)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(egui::RichText::new(&order.title).strong());
                    ui.small(format!("Table {}", order.table));
                });
            });
    }

    fn show_add_dialog(&mut self, ctx: &egui::Context) {
        if !self.session.add_open {
            return;
        }
        let mut open = true;
        let mut submit = false;
        let mut cancel = false;

        egui::Window::new("Add order")
            .id(egui::Id::new("add_order_dialog"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Order");
                ui.add(
                    egui::TextEdit::singleline(&mut self.session.add_form.title)
                        .hint_text("Double cheese burger"),
                );
                ui.add_space(4.0);
                ui.label("Table");
                ui.add(egui::TextEdit::singleline(&mut self.session.add_form.table).hint_text("4"));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        submit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if submit {
            if let Err(err) = self.session.handle_add_submit(&mut self.cards) {
                self.report(err);
            }
        }
        if cancel || !open {
            self.session.handle_add_toggle();
        }
    }

    fn show_edit_dialog(&mut self, ctx: &egui::Context) {
        if !self.session.edit_open {
            return;
        }
        let mut open = true;
        let mut save = false;
        let mut cancel = false;
        let mut delete = false;

        egui::Window::new("Edit order")
            .id(egui::Id::new("edit_order_dialog"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Order");
                ui.add(egui::TextEdit::singleline(&mut self.session.edit_form.title));
                ui.add_space(4.0);
                ui.label("Table");
                ui.add(egui::TextEdit::singleline(&mut self.session.edit_form.table));
                ui.add_space(4.0);
                ui.label("Status");
                egui::ComboBox::from_id_salt("edit_order_column")
                    .selected_text(self.session.edit_form.column.label())
                    .show_ui(ui, |ui| {
                        for column in Column::ALL {
                            ui.selectable_value(
                                &mut self.session.edit_form.column,
                                column,
                                column.label(),
                            );
                        }
                    });
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        save = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label =
                            egui::RichText::new("Delete").color(ui.visuals().error_fg_color);
                        if ui.button(label).clicked() {
                            delete = true;
                        }
                    });
                });
            });

        if save {
            if let Err(err) = self.session.handle_edit_submit(&mut self.cards) {
                self.report(err);
            }
        }
        if delete {
            if let Err(err) = self.session.handle_delete(&mut self.cards) {
                self.report(err);
            }
        }
        if cancel || !open {
            self.session.handle_edit_cancel();
        }
    }

    fn show_help_dialog(&mut self, ctx: &egui::Context) {
        if !self.session.help_open {
            return;
        }
        let mut open = true;
        let mut close = false;

        egui::Window::new("Help")
            .id(egui::Id::new("help_dialog"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_max_width(360.0);
                ui.label(HELP_TEXT);
                ui.add_space(8.0);
                if ui.button("Close").clicked() {
                    close = true;
                }
            });

        if close || !open {
            self.session.handle_help_toggle();
        }
    }
}

/// Paints one card and records its interactions for the post-paint pass.
fn card_ui(ui: &mut egui::Ui, order: &Order, being_dragged: bool, input: &mut BoardFrameInput) {
    let desired = egui::vec2(ui.available_width(), 56.0);
    let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click_and_drag());

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);
        let fill = if being_dragged {
            visuals.bg_fill.gamma_multiply(0.4)
        } else {
            visuals.bg_fill
        };
        ui.painter()
            .rect_filled(rect, visuals.corner_radius, fill);
        ui.painter().rect_stroke(
            rect,
            visuals.corner_radius,
            visuals.bg_stroke,
            egui::StrokeKind::Inside,
        );
        ui.painter().text(
            rect.left_top() + egui::vec2(8.0, 6.0),
            egui::Align2::LEFT_TOP,
            &order.title,
            egui::TextStyle::Body.resolve(ui.style()),
            visuals.text_color(),
        );
        ui.painter().text(
            rect.left_bottom() + egui::vec2(8.0, -6.0),
            egui::Align2::LEFT_BOTTOM,
            format!("Table {}", order.table),
            egui::TextStyle::Small.resolve(ui.style()),
            ui.visuals().weak_text_color(),
        );
    }

    let response = response.on_hover_text(format!("Placed {}", order.created.format("%H:%M")));
    if response.clicked() {
        input.clicked = Some(EditTarget {
            id: order.id,
            title: order.title.clone(),
            table: order.table.clone(),
            column: order.column,
        });
    }
    if response.drag_started() {
        input.drag_started = Some(order.id);
    }
    if response.drag_stopped() {
        input.drag_released = true;
    }
    ui.add_space(6.0);
}

/// Surfaces under the pointer, innermost first: the dragged card, then the
/// column header and body the pointer is over (headers sit inside their
/// column section), then the board background.
fn hover_path(id: OrderId, pointer: egui::Pos2, input: &BoardFrameInput) -> Vec<Surface> {
    let mut path = vec![Surface::Card(id)];
    if let Some((column, _)) = input
        .column_headers
        .iter()
        .find(|(_, rect)| rect.contains(pointer))
    {
        path.push(Surface::ColumnHeader(*column));
    }
    if let Some((column, _)) = input
        .column_bodies
        .iter()
        .find(|(_, rect)| rect.contains(pointer))
    {
        path.push(Surface::ColumnBody(*column));
    }
    path.push(Surface::Grid);
    path
}

impl eframe::App for BoardGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_top_bar(ctx);
        self.show_status_bar(ctx);
        let input = self.show_board(ctx);
        self.apply_frame_input(ctx, input);
        self.show_add_dialog(ctx);
        self.show_edit_dialog(ctx);
        self.show_help_dialog(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedUiSettings {
            dark_mode: self.dark_mode,
        };
        if let Ok(text) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, text);
        }
    }
}
