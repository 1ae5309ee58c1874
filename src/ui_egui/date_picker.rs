//! egui rendering of the date picker.
//!
//! Draws the input, toggle button and calendar window from
//! [`CalendarView`], translates egui input into [`PickerInput`]s and applies
//! the resulting effects. No date logic lives here.

use crate::models::picker_event::PickerEvent;
use crate::services::dispatcher::{
    DatePicker, ElementId, ElementTree, Key, KeyOrigin, PickerEffect, PickerInput, PickerRegion,
    PointerEvent,
};
use crate::services::scheduler::FocusTarget;
use crate::services::view::{CalendarView, DayCell};
use chrono::Datelike;

const DIALOG_ELEMENT: ElementId = ElementId(1);
const BUTTON_ELEMENT: ElementId = ElementId(2);
const OTHER_ELEMENT: ElementId = ElementId(3);

const KEY_BINDINGS: [(egui::Key, Key); 10] = [
    (egui::Key::Tab, Key::Tab),
    (egui::Key::ArrowLeft, Key::Left),
    (egui::Key::ArrowRight, Key::Right),
    (egui::Key::ArrowUp, Key::Up),
    (egui::Key::ArrowDown, Key::Down),
    (egui::Key::PageUp, Key::PageUp),
    (egui::Key::PageDown, Key::PageDown),
    (egui::Key::Home, Key::Home),
    (egui::Key::End, Key::End),
    (egui::Key::Escape, Key::Escape),
];

/// egui has no element tree; containment is answered from last frame's
/// widget rectangles, hit-tested into one element per region.
struct HitRegions;

impl ElementTree for HitRegions {
    fn contains(&self, region: PickerRegion, element: ElementId) -> bool {
        matches!(
            (region, element),
            (PickerRegion::Dialog, DIALOG_ELEMENT) | (PickerRegion::TriggerButton, BUTTON_ELEMENT)
        )
    }
}

pub struct DatePickerWidget {
    picker: DatePicker,
    input_text: String,
    input_has_focus: bool,
    pending_focus: Option<FocusTarget>,
    dialog_rect: Option<egui::Rect>,
    button_rect: Option<egui::Rect>,
    /// Focusable widgets drawn last frame and where keys pressed on them
    /// originate.
    focus_origins: Vec<(egui::Id, KeyOrigin)>,
    events: Vec<PickerEvent>,
}

impl DatePickerWidget {
    pub fn new(picker: DatePicker) -> Self {
        let input_text = picker.selection().formatted();
        Self {
            picker,
            input_text,
            input_has_focus: false,
            pending_focus: None,
            dialog_rect: None,
            button_rect: None,
            focus_origins: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn picker(&self) -> &DatePicker {
        &self.picker
    }

    /// Notifications raised since the last call.
    pub fn drain_events(&mut self) -> Vec<PickerEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn show(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let due = self.picker.tick();
        self.apply(due);

        let mut inputs = Vec::new();
        self.collect_pointer_input(ctx, &mut inputs);
        self.collect_key_input(ctx, &mut inputs);

        self.focus_origins.clear();
        let view = self.picker.view();
        if !self.input_has_focus {
            self.input_text = view.display_text.clone();
        }

        self.render_input_row(ui, &mut inputs);
        if view.is_open {
            self.render_dialog(ctx, &view, &mut inputs);
        } else {
            self.dialog_rect = None;
        }

        for input in inputs {
            let effects = self.picker.handle(input);
            self.apply(effects);
        }

        if let Some(wait) = self.picker.next_tick_in() {
            ctx.request_repaint_after(wait);
        }
    }

    fn apply(&mut self, effects: Vec<PickerEffect>) {
        for effect in effects {
            match effect {
                PickerEffect::Emit(event) => {
                    log::info!(
                        "Picker event: {}",
                        serde_json::to_string(&event).unwrap_or_default()
                    );
                    self.events.push(event);
                }
                PickerEffect::MoveFocus(target) => self.pending_focus = Some(target),
                PickerEffect::ReplaceInputText(text) => self.input_text = text,
                PickerEffect::PreventDefault => {}
            }
        }
    }

    fn collect_pointer_input(&mut self, ctx: &egui::Context, inputs: &mut Vec<PickerInput>) {
        let (pressed, released, clicked, pos) = ctx.input(|i| {
            (
                i.pointer.any_pressed(),
                i.pointer.any_released(),
                i.pointer.primary_clicked(),
                i.pointer.interact_pos(),
            )
        });
        let Some(pos) = pos else {
            return;
        };

        if pressed {
            inputs.push(PickerInput::TouchStart { x: pos.x, y: pos.y });
        }
        if released {
            inputs.push(PickerInput::TouchEnd { x: pos.x, y: pos.y });
        }
        if clicked {
            let element =
                clicked_element(pos, self.dialog_rect, self.button_rect, on_popup(ctx, pos));
            let effects = self
                .picker
                .handle_document_click(&PointerEvent::new(element), &HitRegions);
            self.apply(effects);
        }
    }

    fn collect_key_input(&self, ctx: &egui::Context, inputs: &mut Vec<PickerInput>) {
        if !self.picker.is_open() {
            return;
        }
        let origin = self.key_origin(ctx);

        ctx.input(|i| {
            for (egui_key, key) in KEY_BINDINGS {
                if i.key_pressed(egui_key) {
                    inputs.push(PickerInput::Key {
                        key,
                        shift: i.modifiers.shift,
                        origin,
                    });
                }
            }
        });
    }

    /// Where keyboard focus was when this frame's keys were pressed. Focus on
    /// nothing we drew (or inside a selector popup) counts as the dialog.
    fn key_origin(&self, ctx: &egui::Context) -> KeyOrigin {
        origin_of(ctx.memory(|m| m.focused()), &self.focus_origins)
    }

    fn render_input_row(&mut self, ui: &mut egui::Ui, inputs: &mut Vec<PickerInput>) {
        let config = self.picker.config();
        let disabled = config.disabled;
        let placeholder = config.localization.placeholder.clone();
        let button_label = config.localization.button_label.clone();

        ui.horizontal(|ui| {
            let input = ui.add_enabled(
                !disabled,
                egui::TextEdit::singleline(&mut self.input_text)
                    .hint_text(placeholder)
                    .desired_width(120.0),
            );
            if input.gained_focus() {
                inputs.push(PickerInput::InputFocused);
            }
            if input.lost_focus() {
                inputs.push(PickerInput::InputBlurred);
            }
            if input.changed() {
                inputs.push(PickerInput::InputChanged(self.input_text.clone()));
            }
            self.input_has_focus = input.has_focus();
            self.focus_origins.push((input.id, KeyOrigin::Input));
            take_focus(&mut self.pending_focus, FocusTarget::Input, &input);

            let button = ui
                .add_enabled(!disabled, egui::Button::new("📅"))
                .on_hover_text(button_label);
            if button.clicked() {
                inputs.push(PickerInput::ToggleActivated);
            }
            self.button_rect = Some(button.rect);
            self.focus_origins.push((button.id, KeyOrigin::TriggerButton));
            take_focus(&mut self.pending_focus, FocusTarget::TriggerButton, &button);
        });
    }

    fn render_dialog(&mut self, ctx: &egui::Context, view: &CalendarView, inputs: &mut Vec<PickerInput>) {
        let localization = self.picker.config().localization.clone();
        let pending_focus = &mut self.pending_focus;
        let focus_origins = &mut self.focus_origins;

        let response = egui::Window::new(localization.calendar_heading.as_str())
            .collapsible(false)
            .resizable(false)
            .auto_sized()
            .show(ctx, |ui| {
                ui.set_max_width(260.0);

                ui.horizontal(|ui| {
                    let close = ui
                        .small_button("✕")
                        .on_hover_text(localization.close_label.as_str());
                    if close.clicked() {
                        inputs.push(PickerInput::CloseClicked);
                    }
                    if close.gained_focus() {
                        inputs.push(PickerInput::HeaderFocused);
                    }
                    focus_origins.push((close.id, KeyOrigin::FirstFocusable));
                    take_focus(pending_focus, FocusTarget::FirstFocusable, &close);
                    ui.label(egui::RichText::new(view.heading.as_str()).strong());
                });

                ui.horizontal(|ui| {
                    let month = egui::ComboBox::from_id_source("picker_month")
                        .selected_text(localization.month_name_short(view.visible_month))
                        .show_ui(ui, |ui| {
                            for month0 in 0..12u32 {
                                let selected = month0 == view.visible_month;
                                if ui
                                    .selectable_label(selected, localization.month_name(month0))
                                    .clicked()
                                {
                                    inputs.push(PickerInput::MonthSelected(month0));
                                }
                            }
                        });
                    if month.response.gained_focus() {
                        inputs.push(PickerInput::HeaderFocused);
                    }
                    focus_origins.push((month.response.id, KeyOrigin::Dialog));
                    take_focus(pending_focus, FocusTarget::MonthSelect, &month.response);

                    let year_select = egui::ComboBox::from_id_source("picker_year")
                        .selected_text(view.visible_year.to_string())
                        .show_ui(ui, |ui| {
                            for year in view.year_range.clone() {
                                let selected = year == view.visible_year;
                                if ui.selectable_label(selected, year.to_string()).clicked() {
                                    inputs.push(PickerInput::YearSelected(year));
                                }
                            }
                        });
                    focus_origins.push((year_select.response.id, KeyOrigin::Dialog));

                    let prev = ui
                        .add_enabled(!view.prev_month_disabled, egui::Button::new("◀"))
                        .on_hover_text(localization.prev_month_label.as_str());
                    if prev.clicked() {
                        inputs.push(PickerInput::PrevMonthClicked);
                    }
                    focus_origins.push((prev.id, KeyOrigin::Dialog));
                    let next = ui
                        .add_enabled(!view.next_month_disabled, egui::Button::new("▶"))
                        .on_hover_text(localization.next_month_label.as_str());
                    if next.clicked() {
                        inputs.push(PickerInput::NextMonthClicked);
                    }
                    focus_origins.push((next.id, KeyOrigin::Dialog));
                });

                ui.separator();
                render_grid(ui, view, pending_focus, focus_origins, inputs);
            });

        self.dialog_rect = response.map(|r| r.response.rect);
    }
}

fn render_grid(
    ui: &mut egui::Ui,
    view: &CalendarView,
    pending_focus: &mut Option<FocusTarget>,
    focus_origins: &mut Vec<(egui::Id, KeyOrigin)>,
    inputs: &mut Vec<PickerInput>,
) {
    egui::Grid::new("picker_grid")
        .num_columns(7)
        .spacing([2.0, 2.0])
        .min_col_width(26.0)
        .show(ui, |ui| {
            for name in &view.weekday_names {
                let short: String = name.chars().take(2).collect();
                ui.label(egui::RichText::new(short).small().strong());
            }
            ui.end_row();

            for week in &view.weeks {
                for cell in week {
                    let response = ui.add_enabled(
                        !cell.is_disabled,
                        egui::SelectableLabel::new(cell.is_selected || cell.is_focused, day_text(cell)),
                    );
                    if response.clicked() {
                        inputs.push(PickerInput::DaySelected(cell.date));
                    }
                    focus_origins.push((response.id, KeyOrigin::Grid));
                    if cell.is_focused {
                        take_focus(pending_focus, FocusTarget::FocusedDay, &response);
                    }
                }
                ui.end_row();
            }
        });
}

fn origin_of(focused: Option<egui::Id>, focus_origins: &[(egui::Id, KeyOrigin)]) -> KeyOrigin {
    focused
        .and_then(|focused| {
            focus_origins
                .iter()
                .find(|(id, _)| *id == focused)
                .map(|(_, origin)| *origin)
        })
        .unwrap_or(KeyOrigin::Dialog)
}

fn clicked_element(
    pos: egui::Pos2,
    dialog_rect: Option<egui::Rect>,
    button_rect: Option<egui::Rect>,
    on_popup: bool,
) -> ElementId {
    if on_popup || dialog_rect.is_some_and(|r| r.contains(pos)) {
        DIALOG_ELEMENT
    } else if button_rect.is_some_and(|r| r.contains(pos)) {
        BUTTON_ELEMENT
    } else {
        OTHER_ELEMENT
    }
}

/// Selector popups float above the window; a click on one belongs to the
/// dialog even where it hangs outside the window rectangle.
fn on_popup(ctx: &egui::Context, pos: egui::Pos2) -> bool {
    ctx.memory(|m| m.any_popup_open())
        && ctx
            .layer_id_at(pos)
            .is_some_and(|layer| layer.order == egui::Order::Foreground)
}

fn day_text(cell: &DayCell) -> egui::RichText {
    let text = egui::RichText::new(cell.date.day().to_string());
    if cell.is_today {
        text.strong().color(egui::Color32::from_rgb(50, 150, 50))
    } else if cell.is_disabled {
        text.weak().strikethrough()
    } else if cell.is_outside_month {
        text.weak()
    } else {
        text
    }
}

fn take_focus(pending: &mut Option<FocusTarget>, target: FocusTarget, response: &egui::Response) {
    if *pending == Some(target) {
        response.request_focus();
        *pending = None;
    }
}
