//! The recursive page/line/word/char node.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::meta::{self, BBox, Properties};

/// The level of a node in the hOCR hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// `ocr_page`
    Page,
    /// `ocr_line` and the other line-level classes
    Line,
    /// `ocrx_word`, `ocr_word`
    Word,
    /// `ocrx_cinfo`, `ocr_cinfo`
    Char,
}

impl NodeKind {
    /// Map a single hOCR class name to a node kind.
    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "ocr_page" => Some(NodeKind::Page),
            "ocr_line" | "ocrx_line" | "ocr_caption" | "ocr_header" | "ocr_footer"
            | "ocr_textfloat" => Some(NodeKind::Line),
            "ocrx_word" | "ocr_word" => Some(NodeKind::Word),
            "ocrx_cinfo" | "ocr_cinfo" => Some(NodeKind::Char),
            _ => None,
        }
    }

    /// Map a whitespace-separated `class` attribute to a node kind.
    ///
    /// The first recognised class name decides.
    pub fn from_class_attr(classes: &str) -> Option<Self> {
        classes.split_whitespace().find_map(Self::from_class)
    }

    /// Check if a node of kind `child` may sit directly under this kind.
    pub fn accepts(&self, child: NodeKind) -> bool {
        matches!(
            (self, child),
            (NodeKind::Page, NodeKind::Line)
                | (NodeKind::Line, NodeKind::Word)
                | (NodeKind::Word, NodeKind::Char)
                | (NodeKind::Char, NodeKind::Char)
        )
    }
}

/// A page, line, word or character of a hOCR document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Level in the hierarchy
    pub kind: NodeKind,

    /// Raw `class` attribute
    pub class: String,

    /// Raw `id` attribute
    pub id: String,

    /// Raw `title` attribute (the property microsyntax)
    pub title: String,

    /// Character data of this node, excluding child nodes, untrimmed
    pub text: String,

    /// Child nodes: lines of a page, words of a line, chars of a word
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            class: String::new(),
            id: String::new(),
            title: String::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Decoded title properties.
    pub fn meta(&self) -> Properties {
        meta::split_meta(&self.title)
    }

    /// Bounding box from the title.
    pub fn bbox(&self) -> Result<BBox> {
        meta::parse_bbox(&self.title)
    }

    /// Word confidence (`x_wconf`) from the title.
    pub fn confidence(&self) -> Result<f64> {
        meta::parse_word_confidence(&self.title)
    }

    /// The last component of a `prefix_page_n` identifier.
    ///
    /// Identifiers with any other number of `_` fields are returned whole.
    pub fn short_id(&self) -> &str {
        let parts: Vec<&str> = self.id.split('_').collect();
        if parts.len() == 3 {
            parts[2]
        } else {
            &self.id
        }
    }

    /// Child nodes of the given kind.
    pub fn children_of(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(move |c| c.kind == kind)
    }

    /// Lines of a page.
    pub fn lines(&self) -> impl Iterator<Item = &Node> {
        self.children_of(NodeKind::Line)
    }

    /// Words of a line.
    pub fn words(&self) -> impl Iterator<Item = &Node> {
        self.children_of(NodeKind::Word)
    }

    /// Characters of a word (or nested characters of a character).
    pub fn chars(&self) -> impl Iterator<Item = &Node> {
        self.children_of(NodeKind::Char)
    }

    /// Check if the character data holds nothing but spaces and newlines.
    pub fn is_blank(&self) -> bool {
        is_blank(&self.text)
    }

    /// Text with surrounding spaces, then newlines, removed.
    pub fn clean_text(&self) -> &str {
        self.text.trim_matches(' ').trim_matches('\n')
    }

    /// Transcription of a line.
    ///
    /// An hOCR line usually holds only the whitespace between its word
    /// elements, so unless the line has text of its own the words are
    /// joined with spaces, falling back to the character text of each word.
    /// Trailing spaces are removed.
    pub fn line_text(&self) -> String {
        let mut text = self.text.clone();

        if is_blank(&text) {
            text.clear();
            for word in self.words() {
                text.push_str(&word.text);
                text.push(' ');
            }
        }

        if is_blank(&text) {
            text.clear();
            for word in self.words() {
                for ch in word.chars() {
                    text.push_str(&ch.text);
                }
                text.push(' ');
            }
        }

        text.truncate(text.trim_end_matches(' ').len());
        text
    }
}

fn is_blank(text: &str) -> bool {
    text.trim_matches(|c| c == ' ' || c == '\n').is_empty()
}
