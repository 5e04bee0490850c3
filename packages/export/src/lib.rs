// ABOUTME: Pulse export library - evaluation report formatting
// ABOUTME: Provides Markdown, JSON envelope, CSV, and PDF-description exporters

pub mod service;

pub use service::{
    CsvIdeaDraft, ExportFormat, ExportOptions, ExportResult, ExportService, PdfDescription,
    PdfSection, ENVELOPE_VERSION,
};
