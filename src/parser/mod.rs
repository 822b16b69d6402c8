//! hOCR parsing module.

mod hocr_parser;

pub use hocr_parser::HocrParser;
