use crate::application::RefreshScheduler;
use crate::domain::market::{MarketSnapshot, RefreshState};
use crate::interfaces::components::quote_card::quote_card;
use crate::interfaces::design_system::DesignSystem;
use crossbeam_channel::Receiver;
use eframe::egui;
use std::time::Duration;

const GRID_BREAKPOINT_MEDIUM: f32 = 768.0;
const GRID_BREAKPOINT_LARGE: f32 = 1024.0;

/// Column count for the card grid: one on narrow windows, up to three on
/// wide ones.
fn grid_columns(width: f32) -> usize {
    if width >= GRID_BREAKPOINT_LARGE {
        3
    } else if width >= GRID_BREAKPOINT_MEDIUM {
        2
    } else {
        1
    }
}

pub struct CriptoFlashApp {
    state: RefreshState,
    search_query: String,
    updates_rx: Receiver<RefreshState>,
    // Held so polling stops when the window closes
    _scheduler: RefreshScheduler,
}

impl CriptoFlashApp {
    pub fn new(updates_rx: Receiver<RefreshState>, scheduler: RefreshScheduler) -> Self {
        Self {
            state: RefreshState::default(),
            search_query: String::new(),
            updates_rx,
            _scheduler: scheduler,
        }
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("CriptoFlash ⚡")
                    .size(26.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new("(Precios en euros · fuente: CoinGecko · refresco 15s)")
                    .size(12.0)
                    .color(DesignSystem::TEXT_SECONDARY),
            );

            if let RefreshState::Ready(snapshot) = &self.state {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let clock = snapshot
                        .fetched_at
                        .with_timezone(&chrono::Local)
                        .format("%H:%M:%S");
                    ui.label(
                        egui::RichText::new(format!("Actualizado: {}", clock))
                            .size(11.0)
                            .color(DesignSystem::TEXT_MUTED),
                    );
                });
            }
        });
    }

    fn render_search(&mut self, ui: &mut egui::Ui) {
        ui.add(
            egui::TextEdit::singleline(&mut self.search_query)
                .desired_width(f32::INFINITY)
                .hint_text("Buscar por nombre o símbolo (ej: btc, eth, sol...)"),
        );
    }

    fn render_loading(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                egui::RichText::new("Cargando precios...").color(DesignSystem::TEXT_SECONDARY),
            );
            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.add(egui::Spinner::new().color(DesignSystem::ACCENT));
        });
    }

    fn render_error(&self, ui: &mut egui::Ui, message: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                egui::RichText::new(message)
                    .color(DesignSystem::NEGATIVE)
                    .strong(),
            );
        });
    }

    /// Cards flow left to right, then wrap, preserving snapshot order.
    fn render_grid(&self, ui: &mut egui::Ui, snapshot: &MarketSnapshot) {
        let visible = snapshot.filter(&self.search_query);
        let column_count = grid_columns(ui.available_width());

        ui.columns(column_count, |columns| {
            for (i, quote) in visible.iter().enumerate() {
                let column = &mut columns[i % column_count];
                quote_card(column, quote);
                column.add_space(DesignSystem::SPACING_MEDIUM);
            }
        });
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.add_space(DesignSystem::SPACING_LARGE);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(
                    "Datos de mercado proporcionados por CoinGecko. Proyecto de demostración.",
                )
                .size(10.0)
                .color(DesignSystem::TEXT_MUTED),
            );
        });
    }
}

impl eframe::App for CriptoFlashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain every completed poll; the last one to arrive is what gets shown
        while let Ok(update) = self.updates_rx.try_recv() {
            self.state = update;
        }

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(DesignSystem::CONTENT_MAX_WIDTH);

                            self.render_header(ui);
                            ui.add_space(DesignSystem::SPACING_MEDIUM);
                            self.render_search(ui);
                            ui.add_space(DesignSystem::SPACING_MEDIUM);

                            match &self.state {
                                RefreshState::Loading => self.render_loading(ui),
                                RefreshState::Failed(message) => self.render_error(ui, message),
                                RefreshState::Ready(snapshot) => self.render_grid(ui, snapshot),
                            }

                            self.render_footer(ui);
                        });
                    });
            });

        // Poll results arrive between frames; repaint on a short cadence
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_reflows_with_width() {
        assert_eq!(grid_columns(360.0), 1);
        assert_eq!(grid_columns(767.0), 1);
        assert_eq!(grid_columns(768.0), 2);
        assert_eq!(grid_columns(1000.0), 2);
        assert_eq!(grid_columns(1024.0), 3);
        assert_eq!(grid_columns(1280.0), 3);
    }
}
