use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::session::AuthSession;
use crate::database::models::{MenuItem, MenuStats, Restaurant};
use crate::database::repository::Repository;
use crate::menu::grouping::{group_by_category, CategoryGroup};
use crate::menu::order_link::order_link;
use crate::models::drafts::{MenuItemChanges, MenuItemDraft, OnboardingForm, RestaurantChanges};
use crate::utils::error::DomainError;

pub const COMING_SOON_TITLE: &str = "Menu Coming Soon";
pub const COMING_SOON_MESSAGE: &str =
    "We're working hard to get our menu ready. Please check back soon!";
pub const NOT_FOUND_TITLE: &str = "Restaurant Not Found";
pub const NOT_FOUND_MESSAGE: &str =
    "The restaurant you're looking for doesn't exist or has been removed.";
pub const UNAVAILABLE_TITLE: &str = "Menu Not Available";
pub const UNAVAILABLE_MESSAGE: &str = "Unable to load menu. Please try again later.";

/// Which of the mutually exclusive public page states applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicMenuState {
    Available,
    ComingSoon,
    NotFound,
    Unavailable,
}

/// Restaurant header fields safe to expose on the public page.
#[derive(Debug, Clone, Serialize)]
pub struct PublicRestaurant {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicMenuItem {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// WhatsApp deep link, absent when the restaurant has no phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicCategory {
    pub name: String,
    pub item_count: usize,
    pub items: Vec<PublicMenuItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// Everything the public menu page needs, in exactly one of four states.
#[derive(Debug, Clone, Serialize)]
pub struct PublicMenuView {
    pub state: PublicMenuState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<PublicRestaurant>,
    pub categories: Vec<PublicCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl PublicMenuView {
    fn unavailable() -> Self {
        Self {
            state: PublicMenuState::Unavailable,
            restaurant: None,
            categories: Vec::new(),
            notice: Some(Notice {
                title: UNAVAILABLE_TITLE.to_string(),
                message: UNAVAILABLE_MESSAGE.to_string(),
            }),
        }
    }

    pub fn not_found() -> Self {
        Self {
            state: PublicMenuState::NotFound,
            restaurant: None,
            categories: Vec::new(),
            notice: Some(Notice {
                title: NOT_FOUND_TITLE.to_string(),
                message: NOT_FOUND_MESSAGE.to_string(),
            }),
        }
    }

    fn coming_soon(restaurant: &Restaurant) -> Self {
        Self {
            state: PublicMenuState::ComingSoon,
            restaurant: Some(public_restaurant(restaurant)),
            categories: Vec::new(),
            notice: Some(Notice {
                title: COMING_SOON_TITLE.to_string(),
                message: COMING_SOON_MESSAGE.to_string(),
            }),
        }
    }

    fn available(restaurant: &Restaurant, items: Vec<MenuItem>) -> Self {
        let categories = group_by_category(items)
            .into_iter()
            .map(|group| {
                let items: Vec<PublicMenuItem> = group
                    .items
                    .into_iter()
                    .map(|item| {
                        let order_url = order_link(restaurant, &item);
                        PublicMenuItem {
                            id: item.id,
                            name: item.name,
                            price: item.price,
                            description: item.description,
                            image_url: item.image_url,
                            order_url,
                        }
                    })
                    .collect();
                PublicCategory {
                    name: group.name,
                    item_count: items.len(),
                    items,
                }
            })
            .collect();

        Self {
            state: PublicMenuState::Available,
            restaurant: Some(public_restaurant(restaurant)),
            categories,
            notice: None,
        }
    }
}

fn public_restaurant(restaurant: &Restaurant) -> PublicRestaurant {
    PublicRestaurant {
        name: restaurant.name.clone(),
        description: restaurant.description.clone(),
        address: restaurant.address.clone(),
        logo_url: restaurant.logo_url.clone(),
        theme: restaurant.theme.clone(),
    }
}

pub struct MenuService {
    repository: Arc<Repository>,
}

impl MenuService {
    pub fn new(repository: Arc<Repository>) -> Self {
        Self { repository }
    }

    // ---- Owner-facing menu editing ----

    pub async fn list_items(&self, session: &AuthSession) -> Result<Vec<MenuItem>, DomainError> {
        self.repository.list_menu_items(&session.account_id).await
    }

    pub async fn grouped_items(&self, session: &AuthSession) -> Result<Vec<CategoryGroup>, DomainError> {
        let items = self.repository.list_menu_items(&session.account_id).await?;
        Ok(group_by_category(items))
    }

    pub async fn create_item(
        &self,
        session: &AuthSession,
        draft: &MenuItemDraft,
    ) -> Result<MenuItem, DomainError> {
        if draft.name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Item name must not be empty".to_string(),
            ));
        }

        let item = self.repository.insert_menu_item(&session.account_id, draft).await?;
        info!("Created menu item {} for restaurant {}", item.id, session.account_id);
        Ok(item)
    }

    pub async fn update_item(
        &self,
        session: &AuthSession,
        item_id: &Uuid,
        changes: &MenuItemChanges,
    ) -> Result<MenuItem, DomainError> {
        self.owned_item(session, item_id).await?;
        let item = self.repository.update_menu_item(item_id, changes).await?;
        info!("Updated menu item {} for restaurant {}", item_id, session.account_id);
        Ok(item)
    }

    pub async fn delete_item(&self, session: &AuthSession, item_id: &Uuid) -> Result<(), DomainError> {
        self.owned_item(session, item_id).await?;
        if !self.repository.delete_menu_item(item_id).await? {
            return Err(DomainError::RecordNotFound);
        }
        info!("Deleted menu item {} for restaurant {}", item_id, session.account_id);
        Ok(())
    }

    /// Loads the item and confirms it belongs to the session's
    /// restaurant. Foreign items read as not found so their existence
    /// does not leak.
    async fn owned_item(&self, session: &AuthSession, item_id: &Uuid) -> Result<MenuItem, DomainError> {
        let item = self
            .repository
            .fetch_menu_item(item_id)
            .await?
            .ok_or(DomainError::RecordNotFound)?;

        if item.restaurant_id != session.account_id {
            warn!(
                "Rejected access to item {} from restaurant {}",
                item_id, session.account_id
            );
            return Err(DomainError::RecordNotFound);
        }
        Ok(item)
    }

    // ---- Owner-facing profile ----

    pub async fn profile(&self, session: &AuthSession) -> Result<Restaurant, DomainError> {
        self.repository
            .get_restaurant(&session.account_id)
            .await?
            .ok_or(DomainError::RecordNotFound)
    }

    pub async fn update_profile(
        &self,
        session: &AuthSession,
        changes: &RestaurantChanges,
    ) -> Result<Restaurant, DomainError> {
        let restaurant = self
            .repository
            .update_restaurant(&session.account_id, changes)
            .await?;
        info!("Updated restaurant profile {}", session.account_id);
        Ok(restaurant)
    }

    pub async fn update_theme(
        &self,
        session: &AuthSession,
        theme: &serde_json::Value,
    ) -> Result<Restaurant, DomainError> {
        self.repository
            .update_restaurant_theme(&session.account_id, theme)
            .await
    }

    pub async fn complete_onboarding(
        &self,
        session: &AuthSession,
        form: &OnboardingForm,
    ) -> Result<Restaurant, DomainError> {
        let restaurant = self
            .repository
            .complete_onboarding(&session.account_id, form)
            .await?;
        info!("Completed onboarding for restaurant {}", session.account_id);
        Ok(restaurant)
    }

    pub async fn stats(&self, session: &AuthSession) -> Result<MenuStats, DomainError> {
        self.repository
            .count_items_and_categories(&session.account_id)
            .await
    }

    // ---- Public menu ----

    /// Assembles the public page payload. Never fails: every outcome maps
    /// to one of the four page states, and a storage failure reads as
    /// unavailable rather than an empty menu.
    pub async fn public_menu(&self, restaurant_id: &Uuid) -> PublicMenuView {
        let (restaurant, items) = tokio::join!(
            self.repository.get_restaurant(restaurant_id),
            self.repository.list_menu_items(restaurant_id),
        );

        let (restaurant, items) = match (restaurant, items) {
            (Ok(restaurant), Ok(items)) => (restaurant, items),
            (Err(err), _) | (_, Err(err)) => {
                error!("Public menu load failed for {}: {}", restaurant_id, err);
                return PublicMenuView::unavailable();
            }
        };

        let Some(restaurant) = restaurant else {
            return PublicMenuView::not_found();
        };

        if items.is_empty() {
            return PublicMenuView::coming_soon(&restaurant);
        }

        PublicMenuView::available(&restaurant, items)
    }
}
