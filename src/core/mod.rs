pub mod aggregate;
pub mod backup;
pub mod dashboard;
pub mod log;
pub mod records;
pub mod report;
pub mod resolve;
pub mod scope;

pub use aggregate::{AggregationEngine, ProjectFigures, profitability, round2};
pub use report::{Report, ReportAssembler, ReportOptions, ReportRow};
pub use scope::{MonthFilter, MonthMatch, ReportScope};
