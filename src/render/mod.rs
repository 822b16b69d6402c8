//! Rendering module: plain text and inspection reports.

mod json;
mod options;
mod report;
mod text;
mod yaml;

pub use json::{to_json, JsonFormat};
pub use options::ReportOptions;
pub use report::{LineReport, PageReport, Report, WordReport};
pub use text::to_text;
pub use yaml::to_yaml;
