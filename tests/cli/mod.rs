pub mod apply;
pub mod error_handling;
pub mod statements;
