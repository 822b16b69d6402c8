//! Document model types for hOCR content representation.
//!
//! A parsed hOCR file is a [`Document`] holding pages. Pages, lines, words
//! and characters share one recursive [`Node`] shape, tagged by
//! [`NodeKind`].

mod document;
mod node;

pub use document::{Document, OcrInfo};
pub use node::{Node, NodeKind};
