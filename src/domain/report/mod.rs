pub mod normalizer;
pub mod sections;
pub mod service;

pub use normalizer::normalize_points;
pub use sections::{ReportSection, REPORT_SECTIONS};
pub use service::{Report, ReportService, ReportServiceApi, FALLBACK_SECTION_TEXT};
