pub mod cards;
pub mod common;
pub mod layout;
pub mod theme;
