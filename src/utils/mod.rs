pub mod colors;
pub mod digits;
pub mod formatting;
pub mod logging;
pub mod path;
pub mod table;

pub use digits::{to_ascii_digits, to_persian_digits};
