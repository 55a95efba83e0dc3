//! Output formatting for the CLI.

use console::style;
use masseria_cart::cart::CartView;
use masseria_cart::PageEffect;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
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

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
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

    /// Print the cart panel.
    pub fn cart(&self, view: &CartView) {
        if self.json {
            self.json(view);
            return;
        }

        self.header(&format!("Carrito ({})", view.counter));
        if !view.visible {
            self.debug("panel hidden");
        }
        if view.rows.is_empty() {
            self.info("El carrito está vacío.");
        } else {
            let widths = [3, 24, 12, 4, 12];
            self.table_row(&["#", "Producto", "Precio", "Cant", "Subtotal"], &widths);
            for row in &view.rows {
                let index = row.index.to_string();
                let quantity = row.quantity.to_string();
                self.table_row(
                    &[&index, &row.name, &row.unit_price, &quantity, &row.subtotal],
                    &widths,
                );
            }
        }
        println!("\n  {} {}", style("Total:").bold(), style(&view.total).bold());
    }

    /// Perform a page effect on the terminal. Navigation is only reported;
    /// the caller owns the wait.
    pub fn effect(&self, effect: &PageEffect) {
        if self.json {
            self.json(&effect_json(effect));
            return;
        }
        match effect {
            PageEffect::Alert(msg) => self.warn(msg),
            PageEffect::ShowPaymentForm => self.info("Completa el formulario de pago."),
            PageEffect::ReplaceBody(msg) => self.success(msg),
            PageEffect::Navigate { url, after } => {
                self.info(&format!("→ {} ({} ms)", url, after.as_millis()))
            }
            PageEffect::SetValue { id, value } => self.kv(id, value),
            PageEffect::MarkTable(table) => self.info(&format!("Mesa {} seleccionada", table)),
            PageEffect::ScrollToForm => self.info("Completa el formulario de reserva."),
        }
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

fn effect_json(effect: &PageEffect) -> serde_json::Value {
    match effect {
        PageEffect::Alert(msg) => serde_json::json!({ "effect": "alert", "message": msg }),
        PageEffect::ShowPaymentForm => serde_json::json!({ "effect": "show_payment_form" }),
        PageEffect::ReplaceBody(msg) => {
            serde_json::json!({ "effect": "replace_body", "message": msg })
        }
        PageEffect::Navigate { url, after } => serde_json::json!({
            "effect": "navigate",
            "url": url,
            "after_ms": after.as_millis() as u64,
        }),
        PageEffect::SetValue { id, value } => {
            serde_json::json!({ "effect": "set_value", "id": id, "value": value })
        }
        PageEffect::MarkTable(table) => serde_json::json!({ "effect": "mark_table", "table": table }),
        PageEffect::ScrollToForm => serde_json::json!({ "effect": "scroll_to_form" }),
    }
}
