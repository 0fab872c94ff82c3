//! Output formatting for the CLI.

use console::style;
use sale_cart::notice::{Notice, NoticeKind};
use sale_cart::storefront::CartView;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print a notice the way the page would flash it.
    pub fn notice(&self, notice: &Notice) {
        if self.json {
            return;
        }
        let badge = match notice.kind {
            NoticeKind::Success => style("✓").green(),
            NoticeKind::Failure => style("✗").red(),
            NoticeKind::Info => style("ℹ").blue(),
        };
        println!(
            "{} {} {}",
            badge,
            notice.text,
            style(format!("(#{}, {}ms)", notice.id, notice.ttl_ms)).dim()
        );
    }

    /// Print the cart panel.
    pub fn cart(&self, view: &CartView) {
        if self.json {
            return;
        }
        match &view.placeholder {
            Some(placeholder) => println!("  {}", style(placeholder).dim()),
            None => {
                let widths = [24, 10, 5, 10];
                self.table_row(&["Product", "Price", "Qty", "Total"], &widths);
                for row in &view.rows {
                    let quantity = row.quantity.to_string();
                    self.table_row(
                        &[
                            row.name.as_str(),
                            row.unit_price.as_str(),
                            quantity.as_str(),
                            row.line_total.as_str(),
                        ],
                        &widths,
                    );
                }
            }
        }
        println!();
        self.kv("Subtotal", &view.subtotal);
        self.kv(&format!("Shipping ({})", view.shipping_name), &view.shipping);
        self.kv("Discount", &view.discount);
        println!("  {}: {}", style("Total").bold(), style(&view.total).bold());
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}
