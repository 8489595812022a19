use crate::api::models::UploadedFile;
use crate::utils::data::format_bytes;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};

/// One line of `check` output
#[derive(Debug, Clone, PartialEq)]
pub struct TypeCheckRow {
    pub name: String,
    pub size: Option<u64>,
    pub accepted: bool,
}

pub struct TableDisplay {
    use_colors: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDisplay {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Set color usage
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn bold_header(&self, text: &str) -> Cell {
        if self.use_colors {
            Cell::new(text).add_attribute(Attribute::Bold).fg(Color::Cyan)
        } else {
            Cell::new(text)
        }
    }

    fn new_table(&self, headers: &[&str]) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(
            headers
                .iter()
                .map(|h| self.bold_header(h))
                .collect::<Vec<_>>(),
        );
        table
    }

    /// Render upload results
    pub fn render_uploaded_files(&self, files: &[UploadedFile]) -> String {
        let mut table = self.new_table(&["File Name", "File Path", "Type", "Source"]);

        for file in files {
            table.add_row(vec![
                Cell::new(&file.file_name),
                Cell::new(&file.file_path),
                Cell::new(&file.file_type),
                Cell::new(file.url.as_deref().unwrap_or("-")),
            ]);
        }

        table.to_string()
    }

    /// Render file-type check results
    pub fn render_type_checks(&self, rows: &[TypeCheckRow]) -> String {
        let mut table = self.new_table(&["File", "Size", "Accepted"]);

        for row in rows {
            let verdict = if row.accepted { "yes" } else { "no" };
            let verdict_cell = match (self.use_colors, row.accepted) {
                (false, _) => Cell::new(verdict),
                (true, true) => Cell::new(verdict).fg(Color::Green),
                (true, false) => Cell::new(verdict).fg(Color::Red),
            };
            table.add_row(vec![
                Cell::new(&row.name),
                Cell::new(row.size.map(format_bytes).unwrap_or_else(|| "-".to_string())),
                verdict_cell,
            ]);
        }

        table.to_string()
    }
}
