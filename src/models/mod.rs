// Module exports for models

pub mod date_range;
pub mod localization;
pub mod picker_event;
pub mod settings;
