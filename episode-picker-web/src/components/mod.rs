pub mod button;
pub mod checkbox;
pub mod filter_panel;
pub mod footer;
pub mod header;
pub mod result_card;
