//! Inventory table rendering.
//!
//! The table body is a disposable projection of the last `GET /items`
//! response: every load replaces all rows, in response order.

use stockscan_inventory::InventoryItem;

/// One rendered inventory row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub rfid_tag: String,
    pub quantity: String,
    /// CSS class of the quantity cell (`low-stock` when low).
    pub quantity_class: Option<&'static str>,
    pub status: &'static str,
}

impl From<&InventoryItem> for TableRow {
    fn from(item: &InventoryItem) -> Self {
        let status = item.status();
        Self {
            name: item.name.clone(),
            rfid_tag: item.rfid_tag.to_string(),
            quantity: item.quantity.to_string(),
            quantity_class: status.css_class(),
            status: status.label(),
        }
    }
}

impl TableRow {
    /// `<tr>` markup for this row. Cell text is HTML-escaped.
    pub fn to_html(&self) -> String {
        format!(
            "<tr><td>{}</td><td>{}</td><td class=\"{}\">{}</td><td>{}</td></tr>",
            escape_html(&self.name),
            escape_html(&self.rfid_tag),
            self.quantity_class.unwrap_or(""),
            escape_html(&self.quantity),
            self.status,
        )
    }
}

/// Render items in order.
pub fn render_rows(items: &[InventoryItem]) -> Vec<TableRow> {
    items.iter().map(TableRow::from).collect()
}

/// Destination of the loader's output (the `<tbody>` of the inventory table).
pub trait TableBody: Send {
    /// Drop all existing rows and show `rows` instead.
    fn replace_rows(&mut self, rows: Vec<TableRow>);

    fn rows(&self) -> &[TableRow];

    /// Current contents in this table's output format.
    fn render(&self) -> String;
}

/// Table body rendered as HTML markup.
#[derive(Debug, Clone, Default)]
pub struct HtmlTable {
    rows: Vec<TableRow>,
}

impl HtmlTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenated `<tr>` elements, i.e. the body's inner HTML.
    pub fn inner_html(&self) -> String {
        self.rows.iter().map(TableRow::to_html).collect()
    }
}

impl TableBody for HtmlTable {
    fn replace_rows(&mut self, rows: Vec<TableRow>) {
        self.rows = rows;
    }

    fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    fn render(&self) -> String {
        format!("<tbody>{}</tbody>", self.inner_html())
    }
}

/// Table body rendered as aligned plain text for terminals.
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    rows: Vec<TableRow>,
}

impl TextTable {
    pub fn new() -> Self {
        Self::default()
    }
}

const HEADERS: [&str; 4] = ["Name", "RFID Tag", "Quantity", "Status"];

impl TableBody for TextTable {
    fn replace_rows(&mut self, rows: Vec<TableRow>) {
        self.rows = rows;
    }

    fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    fn render(&self) -> String {
        let cells: Vec<[&str; 4]> = self
            .rows
            .iter()
            .map(|r| [r.name.as_str(), r.rfid_tag.as_str(), r.quantity.as_str(), r.status])
            .collect();

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_line(&mut out, &HEADERS, &widths);
        for row in &cells {
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[&str; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
