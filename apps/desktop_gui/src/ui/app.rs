use std::time::{Duration, Instant};

use client_core::{
    AppController, BackendCommand, DisplayState, FieldView, ResultsView, StrategyView, UiEvent,
    NO_DATA,
};
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use eframe::egui;

use crate::controller::orchestration::dispatch_backend_command;

const IDLE_REPAINT: Duration = Duration::from_millis(250);
const BUSY_REPAINT: Duration = Duration::from_millis(50);

pub struct AbstractViewerApp {
    controller: AppController,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
}

impl AbstractViewerApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        initial_url: Option<String>,
    ) -> Self {
        let controller = match initial_url {
            Some(url) => AppController::new(url),
            None => AppController::default(),
        };
        Self {
            controller,
            cmd_tx,
            ui_rx,
        }
    }

    fn process_ui_events(&mut self, now: Instant) {
        loop {
            match self.ui_rx.try_recv() {
                Ok(event) => self.controller.apply_event(event, now),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.controller.display_state() != DisplayState::ErrorShown {
                        self.controller
                            .report_error("Backend worker stopped; restart the application");
                    }
                    break;
                }
            }
        }
        self.controller.expire_notice(now);
    }

    fn dispatch(&mut self, cmd: Option<BackendCommand>) {
        let Some(cmd) = cmd else {
            return;
        };
        if let Some(failure) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.controller.apply_event(failure, Instant::now());
        }
    }

    fn try_analyze(&mut self) {
        let cmd = self.controller.submit_analysis();
        self.dispatch(cmd);
    }

    fn try_save(&mut self) {
        let cmd = self.controller.submit_save();
        self.dispatch(cmd);
    }

    fn show_url_form(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Article URL").strong());
        ui.horizontal(|ui| {
            let button_width = 120.0;
            let field_width = (ui.available_width() - button_width).max(120.0);
            let edit = egui::TextEdit::singleline(&mut self.controller.url_input)
                .hint_text("https://example.com/article");
            let response = ui.add_sized([field_width, 28.0], edit);
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.try_analyze();
            }

            let button = egui::Button::new(self.controller.analyze_button_label());
            if ui
                .add_enabled(!self.controller.is_analyzing(), button)
                .clicked()
            {
                self.try_analyze();
            }
        });
    }

    fn show_status(&mut self, ui: &mut egui::Ui) {
        match self.controller.display_state() {
            DisplayState::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Analyzing the article...");
                });
            }
            DisplayState::ErrorShown => {
                let message = self.controller.error_message().unwrap_or_default().to_string();
                egui::Frame::group(ui.style())
                    .fill(egui::Color32::from_rgb(111, 53, 53))
                    .show(ui, |ui| {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(egui::RichText::new(message).color(egui::Color32::WHITE));
                            if ui.button("Dismiss").clicked() {
                                self.controller.dismiss_error();
                            }
                        });
                    });
            }
            DisplayState::Idle | DisplayState::ResultsShown => {}
        }
    }

    fn show_save_form(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.label(egui::RichText::new("Save results").strong());
        ui.horizontal(|ui| {
            let edit = egui::TextEdit::singleline(&mut self.controller.filename_input)
                .hint_text("file name (saved as .json)");
            let response = ui.add_sized([240.0, 28.0], edit);
            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Save").clicked() || enter {
                self.try_save();
            }
        });
        if let Some(notice) = self.controller.success_notice(now) {
            ui.colored_label(egui::Color32::from_rgb(67, 160, 71), notice);
        }
    }
}

fn show_field(ui: &mut egui::Ui, field: &FieldView) {
    match field {
        FieldView::Text(text) => {
            ui.label(text);
        }
        FieldView::Bullets(items) | FieldView::Lines(items) => {
            for line in items {
                ui.label(line);
            }
        }
        FieldView::NoData => {
            ui.weak(NO_DATA);
        }
    }
}

fn show_strategy(ui: &mut egui::Ui, section: &StrategyView) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.heading(section.strategy.label());
        ui.add_space(4.0);
        ui.label(egui::RichText::new("Classic abstract").strong());
        show_field(ui, &section.classic);
        ui.add_space(6.0);
        ui.label(egui::RichText::new("Keyword abstract").strong());
        show_field(ui, &section.keywords);
    });
}

fn show_results(ui: &mut egui::Ui, view: &ResultsView) {
    ui.horizontal_wrapped(|ui| {
        ui.label("Analyzed URL:");
        match &view.source {
            Some(link) => {
                ui.hyperlink_to(&link.text, &link.href);
            }
            None => {
                ui.weak(NO_DATA);
            }
        }
    });
    ui.add_space(6.0);
    for section in view.sections() {
        show_strategy(ui, section);
        ui.add_space(6.0);
    }
}

impl eframe::App for AbstractViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.process_ui_events(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading("Abstract Viewer");
                    ui.weak("Summarize an article with two strategies and save the result.");
                    ui.add_space(10.0);

                    self.show_url_form(ui);
                    ui.add_space(8.0);
                    self.show_status(ui);

                    let view = self
                        .controller
                        .results()
                        .or_else(|| self.controller.results_behind_error())
                        .cloned();
                    if let Some(view) = view {
                        ui.separator();
                        show_results(ui, &view);
                        ui.separator();
                        self.show_save_form(ui, now);
                    }
                });
        });

        let busy = self.controller.is_analyzing() || self.controller.success_notice(now).is_some();
        ctx.request_repaint_after(if busy { BUSY_REPAINT } else { IDLE_REPAINT });
    }
}
