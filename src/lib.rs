// Date Picker Library
// Exports all modules for testing and reuse

pub mod models;
pub mod services;
pub mod ui_egui; // egui demo host
pub mod utils;

pub use models::date_range::DateRange;
pub use models::picker_event::PickerEvent;
pub use models::settings::PickerConfig;
pub use services::dispatcher::{DatePicker, KeyOrigin, PickerEffect, PickerInput};
pub use services::scheduler::FocusTarget;
pub use services::view::CalendarView;
