pub mod lines;
pub mod unicode;
