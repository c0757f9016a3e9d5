//! Output Rendering
//!
//! Renders editor results as text tables or JSON documents. Renderers return
//! strings; the caller decides where they are written.

use rust_decimal::Decimal;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::domain::entities::{GiftItem, Sweet};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Aggregates shown by `stats`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GiftStats {
    /// Number of gift items (lines)
    pub items: usize,
    /// Number of sweets (sum of counts)
    pub sweets: u64,
    /// Total weight in grams
    pub weight: f64,
    pub price: Decimal,
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
        }
    }
}

/// Trait for rendering editor results
pub trait GiftRenderer {
    /// Render gift items under a title
    fn items(&self, title: &str, items: &[&GiftItem]) -> String;

    /// Render sweets under a title
    fn sweets(&self, title: &str, sweets: &[&Sweet]) -> String;

    fn stats(&self, stats: &GiftStats) -> String;

    /// Render a failure response message
    fn failure(&self, message: &str) -> String;
}

/// Text renderer
pub struct TextRenderer {
    /// Whether to use unicode icons
    pub unicode: bool,
    /// Currency code appended to prices
    pub currency: String,
    /// Decimal places shown for prices
    pub price_precision: u32,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(&DisplayConfig::default(), true)
    }
}

impl TextRenderer {
    pub fn new(display: &DisplayConfig, unicode: bool) -> Self {
        Self {
            unicode,
            currency: display.currency.clone(),
            price_precision: display.price_precision,
        }
    }

    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    /// Price rounded to the configured precision, with the currency code
    pub fn format_price(&self, price: Decimal) -> String {
        format!(
            "{:.*} {}",
            self.price_precision as usize,
            price.round_dp(self.price_precision),
            self.currency
        )
    }

    fn heading(&self, title: &str) -> String {
        format!("{} {}\n", self.icons().check, title)
    }
}

impl GiftRenderer for TextRenderer {
    fn items(&self, title: &str, items: &[&GiftItem]) -> String {
        let mut out = self.heading(title);
        if items.is_empty() {
            out.push_str("  (no items)\n");
            return out;
        }

        let rows = items
            .iter()
            .map(|item| {
                let sweet = item.sweet();
                vec![
                    item.id().map_or_else(|| "-".to_string(), |id| id.to_string()),
                    sweet.name().to_string(),
                    sweet.kind().label().to_string(),
                    item.count().to_string(),
                    format!("{} g", sweet.weight()),
                    format!("{} g", sweet.sugar_weight()),
                    self.format_price(sweet.price()),
                ]
            })
            .collect();

        out.push_str(&table(
            &["ID", "SWEET", "KIND", "COUNT", "WEIGHT", "SUGAR", "PRICE"],
            rows,
        ));
        out
    }

    fn sweets(&self, title: &str, sweets: &[&Sweet]) -> String {
        let mut out = self.heading(title);
        if sweets.is_empty() {
            out.push_str("  (no sweets)\n");
            return out;
        }

        let rows = sweets
            .iter()
            .map(|sweet| {
                vec![
                    sweet.id().to_string(),
                    sweet.name().to_string(),
                    sweet.manufacturer().to_string(),
                    format!("{} g", sweet.sugar_weight()),
                    self.format_price(sweet.price()),
                ]
            })
            .collect();

        out.push_str(&table(
            &["ID", "SWEET", "MANUFACTURER", "SUGAR", "PRICE"],
            rows,
        ));
        out
    }

    fn stats(&self, stats: &GiftStats) -> String {
        let mut out = self.heading("Gift summary");
        out.push_str(&format!("  Items:   {}\n", stats.items));
        out.push_str(&format!("  Sweets:  {}\n", stats.sweets));
        out.push_str(&format!("  Weight:  {} g\n", stats.weight));
        out.push_str(&format!("  Price:   {}\n", self.format_price(stats.price)));
        out
    }

    fn failure(&self, message: &str) -> String {
        format!("{} {}\n", self.icons().cross, message)
    }
}

/// Left-aligned columns separated by two spaces, sized by display width
fn table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let header_row = headers.iter().map(|h| h.to_string()).collect();
    let mut out = String::new();
    for row in std::iter::once(header_row).chain(rows) {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(fill))
}

/// JSON renderer
pub struct JsonRenderer;

impl JsonRenderer {
    fn emit(value: serde_json::Value) -> String {
        let mut out = serde_json::to_string_pretty(&value).unwrap_or_default();
        out.push('\n');
        out
    }
}

impl GiftRenderer for JsonRenderer {
    fn items(&self, title: &str, items: &[&GiftItem]) -> String {
        Self::emit(serde_json::json!({
            "success": true,
            "message": title,
            "items": items,
        }))
    }

    fn sweets(&self, title: &str, sweets: &[&Sweet]) -> String {
        Self::emit(serde_json::json!({
            "success": true,
            "message": title,
            "sweets": sweets,
        }))
    }

    fn stats(&self, stats: &GiftStats) -> String {
        Self::emit(serde_json::json!({
            "success": true,
            "stats": stats,
        }))
    }

    fn failure(&self, message: &str) -> String {
        Self::emit(serde_json::json!({
            "success": false,
            "message": message,
        }))
    }
}

/// Create a renderer based on format
pub fn create_renderer(
    format: OutputFormat,
    display: &DisplayConfig,
    unicode: bool,
) -> Box<dyn GiftRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer::new(display, unicode)),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
