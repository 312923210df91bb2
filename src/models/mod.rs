pub mod coordinate;
pub mod day_report;
pub mod lesson;
pub mod lesson_status;
