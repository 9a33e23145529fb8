//! Presentation sink
//!
//! Output is an append-only sequence of [`Block`]s written in call order.
//! Nothing is reordered, buffered for later diffing, or carried over between
//! invocations: every flow run writes into a fresh sink.

use serde::Serialize;

/// Page title shown above every render
pub const PAGE_TITLE: &str = "AI Investment Agent";

/// Caption shown under the title
pub const PAGE_CAPTION: &str =
    "This app allows you to compare the performance of two stocks and generate detailed reports using OpenAI.";

/// Title of the input sidebar
pub const SIDEBAR_TITLE: &str = "Stock Comparison";

/// Kind of a rendered block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Title,
    Caption,
    Info,
    Warning,
    Error,
    Heading,
    Text,
}

impl BlockKind {
    /// Lowercase name, as used in CSS classes and terminal prefixes
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Caption => "caption",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Heading => "heading",
            Self::Text => "text",
        }
    }
}

/// One unit of rendered output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    /// Emphasized prefix, e.g. `AAPL Closing Price:`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub text: String,
}

impl Block {
    /// A block without a label
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            label: None,
            text: text.into(),
        }
    }

    /// A block with an emphasized label in front of its text
    pub fn labelled(kind: BlockKind, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            label: Some(label.into()),
            text: text.into(),
        }
    }

    /// Plain-text form of the block
    pub fn line(&self) -> String {
        match &self.label {
            Some(label) => format!("{label} {}", self.text),
            None => self.text.clone(),
        }
    }
}

/// Destination for everything the flow renders
pub trait PresentationSink: Send {
    /// Append one block
    fn render(&mut self, block: Block);

    /// Append an unlabelled block
    fn render_message(&mut self, kind: BlockKind, text: &str) {
        self.render(Block::new(kind, text));
    }
}

/// Sidebar state: the form the user fills in
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sidebar {
    pub title: String,
    pub stock1: String,
    pub stock2: String,
    /// Show the masked API key field (only when the env var is absent)
    pub show_api_key_field: bool,
}

/// A full page render: sidebar plus the ordered main blocks
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    sidebar: Sidebar,
    blocks: Vec<Block>,
}

impl Page {
    /// Create an empty page
    pub fn new() -> Self {
        Self {
            sidebar: Sidebar {
                title: SIDEBAR_TITLE.to_string(),
                ..Sidebar::default()
            },
            blocks: Vec::new(),
        }
    }

    /// Sidebar state
    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    /// Mutable sidebar state
    pub fn sidebar_mut(&mut self) -> &mut Sidebar {
        &mut self.sidebar
    }

    /// Blocks in render order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Plain-text lines in render order
    pub fn lines(&self) -> Vec<String> {
        self.blocks.iter().map(Block::line).collect()
    }
}

impl PresentationSink for Page {
    fn render(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

/// Write the title and caption
pub fn render_header<S: PresentationSink + ?Sized>(sink: &mut S) {
    sink.render_message(BlockKind::Title, PAGE_TITLE);
    sink.render_message(BlockKind::Caption, PAGE_CAPTION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_keep_call_order() {
        let mut page = Page::new();
        page.render_message(BlockKind::Warning, "first");
        render_header(&mut page);
        page.render(Block::labelled(BlockKind::Text, "AAPL Closing Price:", "150.0"));

        assert_eq!(
            page.lines(),
            vec![
                "first".to_string(),
                PAGE_TITLE.to_string(),
                PAGE_CAPTION.to_string(),
                "AAPL Closing Price: 150.0".to_string(),
            ]
        );
    }

    #[test]
    fn test_new_page_sidebar() {
        let page = Page::new();
        assert_eq!(page.sidebar().title, "Stock Comparison");
        assert!(!page.sidebar().show_api_key_field);
        assert!(page.blocks().is_empty());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(BlockKind::Info.as_str(), "info");
        assert_eq!(BlockKind::Warning.as_str(), "warning");
    }

    #[test]
    fn test_block_serialization() {
        let value = serde_json::to_value(Block::new(BlockKind::Info, "hi")).unwrap();
        assert_eq!(value["kind"], "info");
        assert!(value.get("label").is_none());
    }
}
