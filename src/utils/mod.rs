//! Console helpers shared by the CLI and the interactive session

pub mod display;
pub mod input;

pub use display::{Color, ColorOutput, GridFormatter};
pub use input::is_valid_integer_string;
