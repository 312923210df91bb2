pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

// Re-export dei formatter usati da core ed export
pub use formatting::{format_distance, format_travel_time};
