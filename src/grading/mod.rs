// Grading - student result file -> typed records -> grade report

pub mod student;
pub mod processor;

pub use student::{Grade, Student};
pub use processor::{parse_students, StudentResultProcessor};
