//! Grading domain: student results, grade banding, and the flat-file
//! processor that turns `id,name,score` lines into a report.

pub mod report;
pub mod student;

pub use report::{read_students, write_report, ReportError};
pub use student::{Grade, Student};
