//! Table selection on the reservation page.

use tracing::debug;

use crate::dom;
use crate::manager::PageEffect;

/// Remembers the last table button clicked and guards the continue button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePicker {
    selected: Option<String>,
    no_table_message: String,
}

impl TablePicker {
    pub fn new(no_table_message: impl Into<String>) -> Self {
        Self {
            selected: None,
            no_table_message: no_table_message.into(),
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// A table button was clicked with this `data-id`.
    ///
    /// Both table inputs take the id right away. A blank id clears the
    /// selection.
    pub fn select(&mut self, table_id: &str) -> Vec<PageEffect> {
        let table_id = table_id.trim();
        self.selected = (!table_id.is_empty()).then(|| table_id.to_string());
        debug!(table = table_id, "table selected");

        let mut effects = Vec::with_capacity(3);
        if let Some(ref table) = self.selected {
            effects.push(PageEffect::MarkTable(table.clone()));
        }
        effects.push(PageEffect::SetValue {
            id: dom::SELECTED_TABLE,
            value: table_id.to_string(),
        });
        effects.push(PageEffect::SetValue {
            id: dom::TABLE_NUMBER,
            value: table_id.to_string(),
        });
        effects
    }

    /// The continue button: alert without a table, otherwise fill the
    /// visible table field and scroll to the form.
    pub fn proceed(&self) -> Vec<PageEffect> {
        match self.selected {
            None => vec![PageEffect::Alert(self.no_table_message.clone())],
            Some(ref table) => vec![
                PageEffect::SetValue {
                    id: dom::TABLE_NUMBER,
                    value: table.clone(),
                },
                PageEffect::ScrollToForm,
            ],
        }
    }
}
