//! Document-level types.

use super::{Node, NodeKind};
use serde::{Deserialize, Serialize};

/// A parsed hOCR document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Producer information from the document head
    pub info: OcrInfo,

    /// Pages in the document
    pub pages: Vec<Node>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: usize) -> Option<&Node> {
        if page_num == 0 {
            return None;
        }
        self.pages.get(page_num - 1)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Node) {
        debug_assert_eq!(page.kind, NodeKind::Page);
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All lines, page by page.
    pub fn lines(&self) -> impl Iterator<Item = &Node> {
        self.pages.iter().flat_map(|page| page.lines())
    }

    /// All words, line by line.
    pub fn words(&self) -> impl Iterator<Item = &Node> {
        self.lines().flat_map(|line| line.words())
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// Number of words in the document.
    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    /// Get plain text content of the entire document, one line per line.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for line in self.lines() {
            text.push_str(&line.line_text());
            text.push('\n');
        }
        text
    }
}

/// Producer metadata from the `<meta>` elements of the document head.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrInfo {
    /// `ocr-system`, e.g. "tesseract 5.3.0"
    pub system: Option<String>,

    /// `ocr-capabilities`, split on whitespace
    pub capabilities: Vec<String>,

    /// `ocr-langs`, split on whitespace
    pub langs: Vec<String>,

    /// `ocr-scripts`, split on whitespace
    pub scripts: Vec<String>,

    /// `ocr-number-of-pages`
    pub number_of_pages: Option<u32>,
}

impl OcrInfo {
    /// Record a `<meta name=... content=...>` pair; unknown names are ignored.
    pub fn set(&mut self, name: &str, content: &str) {
        let words = || content.split_whitespace().map(str::to_string).collect();
        match name {
            "ocr-system" => self.system = Some(content.to_string()),
            "ocr-capabilities" => self.capabilities = words(),
            "ocr-langs" => self.langs = words(),
            "ocr-scripts" => self.scripts = words(),
            "ocr-number-of-pages" => {
                self.number_of_pages = content.trim().parse().ok();
                if self.number_of_pages.is_none() {
                    log::warn!("Ignoring ocr-number-of-pages {:?}", content);
                }
            }
            _ => {}
        }
    }

    /// Check if the producer declared a capability such as `ocrx_word`.
    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|c| c == capability)
    }
}
