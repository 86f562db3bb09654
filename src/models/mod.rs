pub mod day_cell;
pub mod event;
pub mod label;
pub(crate) mod lenient;
pub mod reference;
