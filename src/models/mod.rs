pub mod report;

pub use report::ConversionReport;
