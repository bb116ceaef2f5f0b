/// A simple text table for terminal output
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths = headers.iter().map(|h| h.chars().count()).collect();
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Add a row; cells beyond the header count are ignored
    pub fn add_row(&mut self, row: Vec<String>) {
        for (width, col) in self.col_widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(col.chars().count());
        }

        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render header, separator and rows
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');
        output.push_str(&self.render_separator());

        for row in &self.rows {
            output.push('\n');
            output.push_str(&self.render_row(row));
        }

        output
    }

    // Pads by char count so star signs and arrows line up
    fn render_row(&self, row: &[String]) -> String {
        let cells: Vec<String> = self
            .col_widths
            .iter()
            .zip(row.iter())
            .map(|(&width, col)| {
                let pad = width.saturating_sub(col.chars().count());
                format!("{}{}", col, " ".repeat(pad))
            })
            .collect();
        cells.join(" | ").trim_end().to_string()
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let mut table = Table::new(vec!["Seller", "Amount", "Price"]);
        table.add_row(vec!["CryptoWhale".to_string(), "1,000 ⭐".to_string(), "$99.99".to_string()]);
        table.add_row(vec!["MegaDeals".to_string(), "500 ⭐".to_string(), "$52.50".to_string()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Seller      | Amount"));
        assert!(lines[1].starts_with("------------+-"));
        assert!(lines[2].contains("CryptoWhale | 1,000 ⭐ | $99.99"));
        assert!(lines[3].contains("MegaDeals   | 500 ⭐   | $52.50"));
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let table = Table::new(vec!["A", "B"]);
        assert!(table.is_empty());
        assert_eq!(table.render().lines().count(), 2);
    }
}
