pub mod line_item;
pub mod order;
pub mod product;
pub mod theme;
