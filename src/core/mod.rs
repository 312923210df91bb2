pub mod add;
pub mod calculator;
pub mod check;
pub mod del;
pub mod export;
pub mod log;
pub mod logic;
pub mod scan;
pub mod schedule_file;
