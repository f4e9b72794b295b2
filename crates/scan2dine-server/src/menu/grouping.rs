use serde::Serialize;

use crate::database::models::MenuItem;

/// Bucket label for items without a usable category.
pub const OTHER_CATEGORY: &str = "Other";

#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// Partitions items into category buckets.
///
/// Buckets appear in the order their category is first seen and items keep
/// their relative order inside each bucket. An absent or blank category
/// lands the item in the "Other" bucket. Every input item ends up in
/// exactly one bucket.
pub fn group_by_category(items: Vec<MenuItem>) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for item in items {
        let label = item
            .category
            .as_deref()
            .map(str::trim)
            .filter(|category| !category.is_empty())
            .unwrap_or(OTHER_CATEGORY)
            .to_string();

        match groups.iter_mut().find(|group| group.name == label) {
            Some(group) => group.items.push(item),
            None => groups.push(CategoryGroup {
                name: label,
                items: vec![item],
            }),
        }
    }

    groups
}
