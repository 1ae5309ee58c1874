use crate::models::picker_event::PickerEvent;
use crate::services::dispatcher::DatePicker;
use crate::ui_egui::date_picker::DatePickerWidget;

/// Demo window hosting a single picker and a log of its notifications.
pub struct PickerDemoApp {
    widget: DatePickerWidget,
    history: Vec<PickerEvent>,
}

impl PickerDemoApp {
    pub fn new(picker: DatePicker) -> Self {
        Self {
            widget: DatePickerWidget::new(picker),
            history: Vec::new(),
        }
    }
}

impl eframe::App for PickerDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.widget.picker().config().name.as_str());
            self.widget.show(ctx, ui);
            self.history.extend(self.widget.drain_events());

            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                for event in self.history.iter().rev() {
                    let line = match event {
                        PickerEvent::Change { value, .. } if value.is_empty() => "cleared".to_string(),
                        PickerEvent::Change { value, .. } => format!("changed to {}", value),
                        PickerEvent::Focus { .. } => "focus".to_string(),
                        PickerEvent::Blur { .. } => "blur".to_string(),
                    };
                    ui.label(egui::RichText::new(line).small());
                }
            });
        });
    }
}
