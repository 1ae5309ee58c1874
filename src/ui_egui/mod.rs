mod app;
pub mod date_picker;

pub use app::PickerDemoApp;
