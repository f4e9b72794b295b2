pub mod grouping;
pub mod order_link;

pub use grouping::{group_by_category, CategoryGroup};
