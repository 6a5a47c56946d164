pub mod grid;
pub mod layout;
