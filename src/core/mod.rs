pub mod calculator;
pub mod clock;
pub mod grouping;
pub mod logic;
pub mod source;
