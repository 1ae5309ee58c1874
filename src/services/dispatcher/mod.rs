//! Interaction dispatcher and dialog state machine.
//!
//! [`DatePicker`] is the widget instance. Hosts normalise raw input into
//! [`PickerInput`] values, feed them through [`DatePicker::handle`], and apply
//! the returned [`PickerEffect`]s (focus moves, default-handling suppression,
//! notifications). Delayed focus hand-offs are collected by polling
//! [`DatePicker::tick`].

mod clock;
mod keyboard;
mod origin;
mod touch;

pub use clock::{Clock, FixedClock, SystemClock};
pub use keyboard::{navigation_for, Key, Navigation};
pub use origin::{
    ComposedPathResolver, ElementId, ElementTree, OriginResolver, PathEntry, PickerRegion,
    PointerEvent, TargetResolver,
};
pub use touch::{classify_swipe, Swipe, TouchTracker, SWIPE_THRESHOLD};

use std::time::Instant;

use chrono::NaiveDate;

use crate::models::picker_event::PickerEvent;
use crate::models::settings::PickerConfig;
use crate::services::adapter::DateAdapter;
use crate::services::focus::FocusEngine;
use crate::services::scheduler::{FocusSchedule, FocusTarget, FOCUS_RETURN_DELAY, TRANSITION};
use crate::services::selection::SelectionController;
use crate::services::view::CalendarView;
use crate::utils::date::is_same_month;

/// Where a key press happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrigin {
    Input,
    TriggerButton,
    /// The dialog's first focusable element (its close button).
    FirstFocusable,
    /// A day cell in the calendar grid.
    Grid,
    /// Anywhere else inside the dialog (selectors, navigation buttons).
    Dialog,
}

impl KeyOrigin {
    fn is_inside_dialog(self) -> bool {
        matches!(self, Self::FirstFocusable | Self::Grid | Self::Dialog)
    }
}

/// Normalised host input.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerInput {
    /// The input area's toggle button was activated.
    ToggleActivated,
    Key {
        key: Key,
        shift: bool,
        origin: KeyOrigin,
    },
    DaySelected(NaiveDate),
    /// Month selector changed (0-based month).
    MonthSelected(u32),
    YearSelected(i32),
    PrevMonthClicked,
    NextMonthClicked,
    CloseClicked,
    TouchStart {
        x: f32,
        y: f32,
    },
    TouchMove,
    TouchEnd {
        x: f32,
        y: f32,
    },
    InputChanged(String),
    InputFocused,
    InputBlurred,
    /// Focus moved into the dialog header or mobile heading.
    HeaderFocused,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEffect {
    Emit(PickerEvent),
    MoveFocus(FocusTarget),
    /// Suppress the host's default handling of the triggering event.
    PreventDefault,
    /// Rewrite the input's text (disallowed characters were stripped).
    ReplaceInputText(String),
}

pub struct DatePicker {
    config: PickerConfig,
    engine: FocusEngine,
    selection: SelectionController,
    open: bool,
    active_focus: bool,
    focus_schedule: FocusSchedule,
    touch: TouchTracker,
    clock: Box<dyn Clock>,
    origin_resolver: Box<dyn OriginResolver>,
}

impl DatePicker {
    pub fn new(config: PickerConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: PickerConfig, clock: Box<dyn Clock>) -> Self {
        let value = config.initial_value();
        let engine = FocusEngine::starting_at(
            value,
            clock.today(),
            config.range(),
            config.first_weekday(),
        );
        let selection = SelectionController::new(config.component_id(), value);

        Self {
            config,
            engine,
            selection,
            open: false,
            active_focus: false,
            focus_schedule: FocusSchedule::new(),
            touch: TouchTracker::default(),
            clock,
            origin_resolver: Box::new(ComposedPathResolver),
        }
    }

    pub fn with_adapter(mut self, adapter: Box<dyn DateAdapter>) -> Self {
        self.selection.set_adapter(adapter);
        self
    }

    pub fn with_origin_resolver(mut self, resolver: Box<dyn OriginResolver>) -> Self {
        self.origin_resolver = resolver;
        self
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn engine(&self) -> &FocusEngine {
        &self.engine
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active_focus(&self) -> bool {
        self.active_focus
    }

    pub fn focused_day(&self) -> NaiveDate {
        self.engine.focused_day()
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.selection.value()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn pending_focus(&self) -> Option<FocusTarget> {
        self.focus_schedule.pending_target()
    }

    /// Derived view state for rendering.
    pub fn view(&self) -> CalendarView {
        CalendarView::build(self)
    }

    /// Host-driven update of the allowed range.
    pub fn set_range(&mut self, min: &str, max: &str) {
        self.config.min = min.to_string();
        self.config.max = max.to_string();
        self.engine.set_range(self.config.range());
    }

    /// Host-driven update of the value; no change notification is raised.
    pub fn set_value(&mut self, value: Option<NaiveDate>) {
        self.selection.set_value_silently(value);
    }

    /// Open the dialog and focus the selected value (or today), handing focus
    /// to the month selector once the open transition has finished.
    pub fn show(&mut self) {
        self.open = true;
        let start = self
            .selection
            .value()
            .filter(|value| self.engine.range().contains(*value))
            .unwrap_or_else(|| self.clock.today());
        self.engine.set_focused_day(start);
        self.focus_schedule
            .schedule(FocusTarget::MonthSelect, self.clock.now(), TRANSITION);
        log::debug!("Opened picker {} at {}", self.config.component_id(), start);
    }

    /// Close the dialog. Any pending hand-off is cancelled; unless
    /// `move_focus_to_button` is false, focus returns to the trigger after the
    /// exit animation.
    pub fn hide(&mut self, move_focus_to_button: bool) {
        self.open = false;
        self.focus_schedule.cancel();
        if move_focus_to_button {
            self.focus_schedule.schedule(
                FocusTarget::TriggerButton,
                self.clock.now(),
                FOCUS_RETURN_DELAY,
            );
        }
        log::debug!(
            "Closed picker {} (return focus: {})",
            self.config.component_id(),
            move_focus_to_button
        );
    }

    /// Focus the text input.
    pub fn set_focus(&self) -> Vec<PickerEffect> {
        vec![PickerEffect::MoveFocus(FocusTarget::Input)]
    }

    /// Collect a delayed focus move that has come due.
    pub fn tick(&mut self) -> Vec<PickerEffect> {
        let now = self.clock.now();
        self.tick_at(now)
    }

    pub fn tick_at(&mut self, now: Instant) -> Vec<PickerEffect> {
        self.focus_schedule
            .take_due(now)
            .map(PickerEffect::MoveFocus)
            .into_iter()
            .collect()
    }

    pub fn next_tick_in(&self) -> Option<std::time::Duration> {
        self.focus_schedule.next_due_in(self.clock.now())
    }

    pub fn handle(&mut self, input: PickerInput) -> Vec<PickerEffect> {
        match input {
            PickerInput::ToggleActivated => self.handle_toggle(),
            PickerInput::Key { key, shift, origin } => self.handle_key(key, shift, origin),
            PickerInput::DaySelected(day) => self.handle_day_select(day),
            PickerInput::MonthSelected(month0) => {
                self.active_focus = false;
                if month0 > 11 {
                    log::warn!("Ignoring month selector index {}", month0);
                } else {
                    self.engine.jump_to_month(month0 as i32);
                }
                Vec::new()
            }
            PickerInput::YearSelected(year) => {
                self.active_focus = false;
                self.engine.jump_to_year(year);
                Vec::new()
            }
            PickerInput::PrevMonthClicked => self.handle_month_button(-1),
            PickerInput::NextMonthClicked => self.handle_month_button(1),
            PickerInput::CloseClicked => {
                self.active_focus = false;
                self.hide(true);
                Vec::new()
            }
            PickerInput::TouchStart { x, y } => {
                self.touch.begin(x, y);
                Vec::new()
            }
            PickerInput::TouchMove => vec![PickerEffect::PreventDefault],
            PickerInput::TouchEnd { x, y } => self.handle_touch_end(x, y),
            PickerInput::InputChanged(text) => self.handle_input_change(&text),
            PickerInput::InputFocused => vec![PickerEffect::Emit(PickerEvent::Focus {
                component: self.config.component_id(),
            })],
            PickerInput::InputBlurred => vec![PickerEffect::Emit(PickerEvent::Blur {
                component: self.config.component_id(),
            })],
            PickerInput::HeaderFocused => {
                self.active_focus = false;
                Vec::new()
            }
        }
    }

    /// Close when a click lands outside both the dialog and the trigger.
    /// The trigger is excluded so that clicking it while open is a single
    /// toggle, not an outside-click close followed by a reopen.
    pub fn handle_document_click(
        &mut self,
        event: &PointerEvent,
        tree: &dyn ElementTree,
    ) -> Vec<PickerEffect> {
        if !self.open {
            return Vec::new();
        }

        let origin = self.origin_resolver.resolve(event);
        if tree.contains(PickerRegion::Dialog, origin)
            || tree.contains(PickerRegion::TriggerButton, origin)
        {
            return Vec::new();
        }

        self.hide(false);
        Vec::new()
    }

    fn handle_toggle(&mut self) -> Vec<PickerEffect> {
        if self.config.disabled {
            return Vec::new();
        }
        if self.open {
            self.hide(false);
        } else {
            self.show();
        }
        vec![PickerEffect::PreventDefault]
    }

    fn handle_key(&mut self, key: Key, shift: bool, origin: KeyOrigin) -> Vec<PickerEffect> {
        if !self.open {
            return Vec::new();
        }

        if key == Key::Escape && origin.is_inside_dialog() {
            self.hide(true);
            return Vec::new();
        }

        match origin {
            KeyOrigin::FirstFocusable if key == Key::Tab && shift => vec![
                PickerEffect::MoveFocus(FocusTarget::FocusedDay),
                PickerEffect::PreventDefault,
            ],
            KeyOrigin::TriggerButton | KeyOrigin::Grid if key == Key::Tab && !shift => vec![
                PickerEffect::PreventDefault,
                PickerEffect::MoveFocus(FocusTarget::FirstFocusable),
            ],
            KeyOrigin::Grid => self.handle_grid_navigation(key, shift),
            _ => Vec::new(),
        }
    }

    fn handle_grid_navigation(&mut self, key: Key, shift: bool) -> Vec<PickerEffect> {
        let Some(navigation) = navigation_for(key, shift) else {
            return Vec::new();
        };

        match navigation {
            Navigation::Days(days) => self.engine.add_days(days),
            Navigation::Months(months) => self.engine.add_months(months),
            Navigation::Years(years) => self.engine.add_years(years),
            Navigation::StartOfWeek => self.engine.start_of_week(),
            Navigation::EndOfWeek => self.engine.end_of_week(),
        }
        self.active_focus = true;

        vec![
            PickerEffect::PreventDefault,
            PickerEffect::MoveFocus(FocusTarget::FocusedDay),
        ]
    }

    fn handle_day_select(&mut self, day: NaiveDate) -> Vec<PickerEffect> {
        self.active_focus = false;
        if !self.engine.range().contains(day) {
            return Vec::new();
        }

        // A leading/trailing day from a neighbouring month only moves focus.
        if !is_same_month(day, self.engine.focused_day()) {
            self.engine.set_focused_day(day);
            return Vec::new();
        }

        let event = self.selection.commit(Some(day));
        self.hide(true);
        vec![PickerEffect::Emit(event)]
    }

    fn handle_month_button(&mut self, delta: i32) -> Vec<PickerEffect> {
        let disabled = if delta < 0 {
            self.engine.is_prev_month_disabled()
        } else {
            self.engine.is_next_month_disabled()
        };
        if !disabled {
            self.engine.add_months(delta);
        }
        self.active_focus = false;
        vec![PickerEffect::PreventDefault]
    }

    fn handle_touch_end(&mut self, x: f32, y: f32) -> Vec<PickerEffect> {
        match self.touch.finish(x, y) {
            Some(Swipe::NextMonth) => {
                self.active_focus = false;
                self.engine.add_months(1);
                Vec::new()
            }
            Some(Swipe::PreviousMonth) => {
                self.active_focus = false;
                self.engine.add_months(-1);
                Vec::new()
            }
            Some(Swipe::Dismiss) => {
                self.hide(false);
                vec![PickerEffect::PreventDefault]
            }
            None => Vec::new(),
        }
    }

    fn handle_input_change(&mut self, text: &str) -> Vec<PickerEffect> {
        if self.config.disabled {
            return Vec::new();
        }

        let outcome = self.selection.parse_external_input(text);
        let mut effects = Vec::new();
        if outcome.cleaned != text {
            effects.push(PickerEffect::ReplaceInputText(outcome.cleaned));
        }
        if let Some(event) = outcome.event {
            effects.push(PickerEffect::Emit(event));
        }
        effects
    }
}

impl std::fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatePicker")
            .field("component", &self.config.component_id())
            .field("open", &self.open)
            .field("active_focus", &self.active_focus)
            .field("focused_day", &self.engine.focused_day())
            .field("value", &self.selection.value())
            .finish_non_exhaustive()
    }
}
