pub mod distance;
pub mod gaps;
pub mod neighbors;
pub mod timeline;
pub mod travel;
