pub mod error;
pub mod gen;
pub mod utils;

pub mod args;

pub use error::MovieError;
