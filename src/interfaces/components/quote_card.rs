use crate::domain::market::AssetQuote;
use crate::interfaces::components::sparkline::sparkline;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::format::numero_bonito;
use eframe::egui;

/// One asset card: icon disc, name and rank on the left, price and 24h
/// change on the right, trend strip underneath.
pub fn quote_card(ui: &mut egui::Ui, quote: &AssetQuote) {
    DesignSystem::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            icon_disc(ui, &quote.symbol);
            ui.add_space(4.0);

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&quote.name)
                            .size(14.0)
                            .strong()
                            .color(DesignSystem::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(quote.symbol.to_uppercase())
                            .size(10.0)
                            .color(DesignSystem::TEXT_MUTED),
                    );
                });
                ui.label(
                    egui::RichText::new(format!(
                        "#{} · Vol 24h: {}",
                        quote.market_cap_rank.unwrap_or(0),
                        numero_bonito(quote.total_volume.unwrap_or(0.0))
                    ))
                    .size(11.0)
                    .color(DesignSystem::TEXT_SECONDARY),
                );
            });

            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                let change = quote.change_24h();
                ui.label(
                    egui::RichText::new(numero_bonito(quote.current_price.unwrap_or(0.0)))
                        .size(16.0)
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                );
                ui.label(
                    egui::RichText::new(format!("{:.2}% 24h", change))
                        .size(12.0)
                        .color(DesignSystem::change_color(change)),
                );
            });
        });

        ui.add_space(DesignSystem::SPACING_SMALL);
        sparkline(ui, quote.sparkline_prices());
    });
}

/// Round monogram disc standing in for the remote asset icon.
fn icon_disc(ui: &mut egui::Ui, symbol: &str) {
    let (response, painter) = ui.allocate_painter(egui::vec2(32.0, 32.0), egui::Sense::hover());
    let center = response.rect.center();

    painter.circle_filled(center, 16.0, DesignSystem::ACCENT.linear_multiply(0.35));

    let initials: String = symbol.chars().take(3).collect::<String>().to_uppercase();
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(10.0),
        DesignSystem::TEXT_PRIMARY,
    );
}
