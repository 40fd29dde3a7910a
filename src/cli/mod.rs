pub mod mode;
pub mod output;
