pub mod birthday;
pub mod days;
pub mod grid;
