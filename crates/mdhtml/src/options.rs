//! Configuration options for inline Markdown conversion

/// Options for the inline tokenizer pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineOptions {
    /// Strong delimiter, split first
    pub bold_delimiter: String,

    /// Emphasis delimiter, split after bold
    pub italic_delimiter: String,

    /// Inline code delimiter, split after italic
    pub code_delimiter: String,

    /// Extract `![alt](url)` images
    pub images: bool,

    /// Extract `[text](url)` links
    pub links: bool,
}

impl Default for InlineOptions {
    fn default() -> Self {
        Self {
            bold_delimiter: "**".to_string(),
            italic_delimiter: "_".to_string(),
            code_delimiter: "`".to_string(),
            images: true,
            links: true,
        }
    }
}
