//! Accept-string and help-text derivation for upload widgets

/// Widget options feeding the accept helpers
#[derive(Debug, Clone, Default)]
pub struct UploadTypeOptions {
    pub accept: Vec<String>,
    pub help_text: Option<String>,
    /// `None` means unbounded
    pub max_number: Option<u32>,
    /// Megabytes
    pub max_size: Option<f64>,
}

impl UploadTypeOptions {
    pub fn get_accept(&self) -> Vec<String> {
        self.accept.clone()
    }

    /// Accept entries formatted for an `accept` attribute: MIME types and
    /// dotted entries pass through, bare extensions get a leading dot.
    pub fn get_string_accept(&self) -> String {
        self.accept
            .iter()
            .map(|item| {
                let is_mime = item.find('/').is_some_and(|idx| idx > 0);
                if is_mime || item.starts_with('.') {
                    item.clone()
                } else {
                    format!(".{}", item)
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn get_help_text(&self) -> String {
        if let Some(help_text) = self.help_text.as_deref().filter(|t| !t.is_empty()) {
            return help_text.to_string();
        }

        let mut help_texts = Vec::new();
        if !self.accept.is_empty() {
            help_texts.push(format!("Supports {} formats", self.accept.join(",")));
        }
        if let Some(max_size) = self.max_size.filter(|s| *s > 0.0) {
            help_texts.push(format!("no larger than {}MB", max_size));
        }
        if let Some(max_number) = self.max_number.filter(|n| *n > 0) {
            help_texts.push(format!("up to {} files", max_number));
        }
        help_texts.join(", ")
    }
}
