//! Number formatting for the es-ES locale.

/// Formats a price as Spanish-style euros: thousands separated with `.`,
/// decimals with `,`, trailing euro sign ("1.234,50 €").
pub fn numero_bonito(n: f64) -> String {
    if !n.is_finite() {
        return formato_basico(n);
    }

    let sign = if n < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", n.abs());
    let (whole, decimals) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i).is_multiple_of(3) {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{}{},{} €", sign, grouped, decimals)
}

/// Plain two-decimal rendering, used when a value cannot be formatted
/// properly (NaN, infinities).
fn formato_basico(n: f64) -> String {
    format!("{:.2} €", (n * 100.0).round() / 100.0)
}
