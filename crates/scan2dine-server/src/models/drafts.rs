use serde::Deserialize;
use validator::Validate;

fn normalize(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Payload for creating a menu item. Optional fields normalize blank
/// input to absent before storage.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MenuItemDraft {
    #[validate(length(min = 1, max = 120, message = "Item name must be 1-120 characters"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    #[validate(length(max = 60, message = "Category must be at most 60 characters"))]
    pub category: Option<String>,
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
    #[validate(length(max = 500, message = "Image URL must be at most 500 characters"))]
    pub image_url: Option<String>,
}

impl MenuItemDraft {
    pub fn normalized_category(&self) -> Option<String> {
        normalize(&self.category)
    }

    pub fn normalized_description(&self) -> Option<String> {
        normalize(&self.description)
    }

    pub fn normalized_image_url(&self) -> Option<String> {
        normalize(&self.image_url)
    }
}

/// Partial update for a menu item. Absent fields keep their stored
/// value. `version`, when present, must match the stored row for the
/// update to apply.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MenuItemChanges {
    #[validate(length(min = 1, max = 120, message = "Item name must be 1-120 characters"))]
    pub name: Option<String>,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,
    #[validate(length(max = 60, message = "Category must be at most 60 characters"))]
    pub category: Option<String>,
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
    #[validate(length(max = 500, message = "Image URL must be at most 500 characters"))]
    pub image_url: Option<String>,
    pub version: Option<i64>,
}

/// Partial update for the restaurant profile.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RestaurantChanges {
    #[validate(length(min = 1, max = 120, message = "Restaurant name must be 1-120 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 120, message = "Owner name must be at most 120 characters"))]
    pub owner_name: Option<String>,
    #[validate(length(max = 300, message = "Address must be at most 300 characters"))]
    pub address: Option<String>,
    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
    #[validate(length(max = 500, message = "Logo URL must be at most 500 characters"))]
    pub logo_url: Option<String>,
    pub version: Option<i64>,
}

/// Opaque theme document stored as submitted.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeUpdate {
    pub theme: serde_json::Value,
}

/// One-time setup form. The submitted category list replaces the
/// seeded one.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OnboardingForm {
    #[validate(length(max = 300, message = "Address must be at most 300 characters"))]
    pub address: Option<String>,
    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
    #[validate(length(max = 500, message = "Logo URL must be at most 500 characters"))]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}
