use chrono::{DateTime, Utc};
use sqlx::FromRow;
use tracing::debug;
use uuid::Uuid;

use crate::database::models::{Account, MenuItem, MenuStats, Restaurant};
use crate::database::pool::DbPool;
use crate::models::drafts::{MenuItemChanges, MenuItemDraft, OnboardingForm, RestaurantChanges};
use crate::utils::error::DomainError;

/// Data access layer over the SQLite pool. Ids are stored as TEXT and
/// mapped to Uuid at the boundary.
pub struct Repository {
    pub pool: DbPool,
}

#[derive(FromRow)]
struct AccountRow {
    id: String,
    email: String,
    password_hash: String,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(FromRow)]
struct RestaurantRow {
    id: String,
    name: String,
    owner_name: Option<String>,
    address: Option<String>,
    phone: Option<String>,
    description: Option<String>,
    logo_url: Option<String>,
    theme: Option<String>,
    categories: String,
    is_setup_complete: bool,
    version: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(FromRow)]
struct MenuItemRow {
    id: String,
    restaurant_id: String,
    name: String,
    price: f64,
    category: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
    version: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn parse_row_id(value: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value).map_err(|e| DomainError::DatabaseError(format!("Invalid id in row: {}", e)))
}

fn map_account(row: AccountRow) -> Result<Account, DomainError> {
    Ok(Account {
        id: parse_row_id(&row.id)?,
        email: row.email,
        password_hash: row.password_hash,
        last_login_at: row.last_login_at,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

fn map_restaurant(row: RestaurantRow) -> Result<Restaurant, DomainError> {
    let theme = match row.theme {
        Some(raw) => Some(
            serde_json::from_str(&raw)
                .map_err(|e| DomainError::DatabaseError(format!("Invalid theme in row: {}", e)))?,
        ),
        None => None,
    };
    let categories = serde_json::from_str(&row.categories)
        .map_err(|e| DomainError::DatabaseError(format!("Invalid categories in row: {}", e)))?;

    Ok(Restaurant {
        id: parse_row_id(&row.id)?,
        name: row.name,
        owner_name: row.owner_name,
        address: row.address,
        phone: row.phone,
        description: row.description,
        logo_url: row.logo_url,
        theme,
        categories,
        is_setup_complete: row.is_setup_complete,
        version: row.version,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

fn map_menu_item(row: MenuItemRow) -> Result<MenuItem, DomainError> {
    Ok(MenuItem {
        id: parse_row_id(&row.id)?,
        restaurant_id: parse_row_id(&row.restaurant_id)?,
        name: row.name,
        price: row.price,
        category: row.category,
        description: row.description,
        image_url: row.image_url,
        version: row.version,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

impl Repository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1").execute(self.pool.get_pool()).await?;
        Ok(())
    }

    // ---- Accounts ----

    /// Creates the account and its restaurant profile in one transaction.
    /// The restaurant reuses the account id.
    pub async fn create_owner(
        &self,
        email: &str,
        password_hash: &str,
        restaurant_name: &str,
        owner_name: Option<&str>,
    ) -> Result<(Account, Restaurant), DomainError> {
        let now = Utc::now();
        let account_id = Uuid::new_v4();
        let categories = Restaurant::default_categories();
        let categories_json = serde_json::to_string(&categories)
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let mut transaction = self.pool.get_pool().begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO accounts (id, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(account_id.to_string())
        .bind(email)
        .bind(password_hash)
        .bind(now)
        .bind(now)
        .execute(&mut *transaction)
        .await;

        if let Err(err) = inserted {
            if is_unique_violation(&err) {
                return Err(DomainError::EmailAlreadyExists(email.to_string()));
            }
            return Err(err.into());
        }

        sqlx::query(
            r#"
            INSERT INTO restaurants (id, name, owner_name, categories, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(account_id.to_string())
        .bind(restaurant_name)
        .bind(owner_name)
        .bind(&categories_json)
        .bind(now)
        .bind(now)
        .execute(&mut *transaction)
        .await?;

        transaction.commit().await?;
        debug!("Created owner account {} with restaurant profile", account_id);

        let account = Account {
            id: account_id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            last_login_at: None,
            created_at: now,
            updated_at: now,
        };
        let restaurant = Restaurant {
            id: account_id,
            name: restaurant_name.to_string(),
            owner_name: owner_name.map(|s| s.to_string()),
            address: None,
            phone: None,
            description: None,
            logo_url: None,
            theme: None,
            categories,
            is_setup_complete: false,
            version: 1,
            created_at: now,
            updated_at: now,
        };
        Ok((account, restaurant))
    }

    pub async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, email, password_hash, last_login_at, created_at, updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.get_pool())
        .await?;

        row.map(map_account).transpose()
    }

    pub async fn touch_last_login(&self, account_id: &Uuid) -> Result<(), DomainError> {
        let now = Utc::now();
        sqlx::query("UPDATE accounts SET last_login_at = $2, updated_at = $2 WHERE id = $1")
            .bind(account_id.to_string())
            .bind(now)
            .execute(self.pool.get_pool())
            .await?;
        Ok(())
    }

    // ---- Restaurants ----

    pub async fn get_restaurant(&self, restaurant_id: &Uuid) -> Result<Option<Restaurant>, DomainError> {
        let row = sqlx::query_as::<_, RestaurantRow>(
            r#"
            SELECT id, name, owner_name, address, phone, description, logo_url,
                   theme, categories, is_setup_complete, version, created_at, updated_at
            FROM restaurants
            WHERE id = $1
            "#,
        )
        .bind(restaurant_id.to_string())
        .fetch_optional(self.pool.get_pool())
        .await?;

        row.map(map_restaurant).transpose()
    }

    /// Merge-updates the profile. Absent fields keep their stored value,
    /// an empty string clears the column. A stale expected version leaves
    /// the row untouched and surfaces as VersionConflict.
    pub async fn update_restaurant(
        &self,
        restaurant_id: &Uuid,
        changes: &RestaurantChanges,
    ) -> Result<Restaurant, DomainError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            UPDATE restaurants
            SET name        = COALESCE($2, name),
                owner_name  = COALESCE($3, owner_name),
                address     = COALESCE($4, address),
                phone       = COALESCE($5, phone),
                description = COALESCE($6, description),
                logo_url    = COALESCE($7, logo_url),
                version     = version + 1,
                updated_at  = $8
            WHERE id = $1 AND ($9 IS NULL OR version = $9)
            "#,
        )
        .bind(restaurant_id.to_string())
        .bind(changes.name.as_deref())
        .bind(changes.owner_name.as_deref())
        .bind(changes.address.as_deref())
        .bind(changes.phone.as_deref())
        .bind(changes.description.as_deref())
        .bind(changes.logo_url.as_deref())
        .bind(now)
        .bind(changes.version)
        .execute(self.pool.get_pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(self.stale_restaurant_error(restaurant_id, changes.version).await);
        }

        self.get_restaurant(restaurant_id)
            .await?
            .ok_or(DomainError::RecordNotFound)
    }

    pub async fn update_restaurant_theme(
        &self,
        restaurant_id: &Uuid,
        theme: &serde_json::Value,
    ) -> Result<Restaurant, DomainError> {
        let payload = serde_json::to_string(theme)
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        let now = Utc::now();

        let result = sqlx::query(
            "UPDATE restaurants SET theme = $2, version = version + 1, updated_at = $3 WHERE id = $1",
        )
        .bind(restaurant_id.to_string())
        .bind(payload)
        .bind(now)
        .execute(self.pool.get_pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RecordNotFound);
        }

        self.get_restaurant(restaurant_id)
            .await?
            .ok_or(DomainError::RecordNotFound)
    }

    /// Applies the onboarding form and flips the setup-complete flag.
    /// The category list is replaced wholesale with the submitted one.
    pub async fn complete_onboarding(
        &self,
        restaurant_id: &Uuid,
        form: &OnboardingForm,
    ) -> Result<Restaurant, DomainError> {
        let categories_json = serde_json::to_string(&form.categories)
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE restaurants
            SET address           = COALESCE($2, address),
                phone             = COALESCE($3, phone),
                description       = COALESCE($4, description),
                logo_url          = COALESCE($5, logo_url),
                categories        = $6,
                is_setup_complete = 1,
                version           = version + 1,
                updated_at        = $7
            WHERE id = $1
            "#,
        )
        .bind(restaurant_id.to_string())
        .bind(form.address.as_deref())
        .bind(form.phone.as_deref())
        .bind(form.description.as_deref())
        .bind(form.logo_url.as_deref())
        .bind(categories_json)
        .bind(now)
        .execute(self.pool.get_pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RecordNotFound);
        }

        self.get_restaurant(restaurant_id)
            .await?
            .ok_or(DomainError::RecordNotFound)
    }

    async fn stale_restaurant_error(&self, restaurant_id: &Uuid, expected: Option<i64>) -> DomainError {
        match self.get_restaurant(restaurant_id).await {
            Ok(Some(current)) => DomainError::VersionConflict {
                expected: expected.unwrap_or(current.version),
                found: current.version,
            },
            Ok(None) => DomainError::RecordNotFound,
            Err(err) => err,
        }
    }

    // ---- Menu items ----

    /// All items for one restaurant, ordered by category then name.
    pub async fn list_menu_items(&self, restaurant_id: &Uuid) -> Result<Vec<MenuItem>, DomainError> {
        let rows = sqlx::query_as::<_, MenuItemRow>(
            r#"
            SELECT id, restaurant_id, name, price, category, description, image_url,
                   version, created_at, updated_at
            FROM menu_items
            WHERE restaurant_id = $1
            ORDER BY category, name
            "#,
        )
        .bind(restaurant_id.to_string())
        .fetch_all(self.pool.get_pool())
        .await?;

        rows.into_iter().map(map_menu_item).collect()
    }

    pub async fn fetch_menu_item(&self, item_id: &Uuid) -> Result<Option<MenuItem>, DomainError> {
        let row = sqlx::query_as::<_, MenuItemRow>(
            r#"
            SELECT id, restaurant_id, name, price, category, description, image_url,
                   version, created_at, updated_at
            FROM menu_items
            WHERE id = $1
            "#,
        )
        .bind(item_id.to_string())
        .fetch_optional(self.pool.get_pool())
        .await?;

        row.map(map_menu_item).transpose()
    }

    pub async fn insert_menu_item(
        &self,
        restaurant_id: &Uuid,
        draft: &MenuItemDraft,
    ) -> Result<MenuItem, DomainError> {
        let now = Utc::now();
        let item_id = Uuid::new_v4();
        let name = draft.name.trim().to_string();
        let category = draft.normalized_category();
        let description = draft.normalized_description();
        let image_url = draft.normalized_image_url();

        sqlx::query(
            r#"
            INSERT INTO menu_items
                (id, restaurant_id, name, price, category, description, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(item_id.to_string())
        .bind(restaurant_id.to_string())
        .bind(&name)
        .bind(draft.price)
        .bind(category.as_deref())
        .bind(description.as_deref())
        .bind(image_url.as_deref())
        .bind(now)
        .bind(now)
        .execute(self.pool.get_pool())
        .await?;

        debug!("Inserted menu item {} for restaurant {}", item_id, restaurant_id);

        Ok(MenuItem {
            id: item_id,
            restaurant_id: *restaurant_id,
            name,
            price: draft.price,
            category,
            description,
            image_url,
            version: 1,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merge-updates one item. Fields absent from `changes` keep their
    /// stored value.
    pub async fn update_menu_item(
        &self,
        item_id: &Uuid,
        changes: &MenuItemChanges,
    ) -> Result<MenuItem, DomainError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            UPDATE menu_items
            SET name        = COALESCE($2, name),
                price       = COALESCE($3, price),
                category    = COALESCE($4, category),
                description = COALESCE($5, description),
                image_url   = COALESCE($6, image_url),
                version     = version + 1,
                updated_at  = $7
            WHERE id = $1 AND ($8 IS NULL OR version = $8)
            "#,
        )
        .bind(item_id.to_string())
        .bind(changes.name.as_deref())
        .bind(changes.price)
        .bind(changes.category.as_deref())
        .bind(changes.description.as_deref())
        .bind(changes.image_url.as_deref())
        .bind(now)
        .bind(changes.version)
        .execute(self.pool.get_pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(self.stale_item_error(item_id, changes.version).await);
        }

        self.fetch_menu_item(item_id)
            .await?
            .ok_or(DomainError::RecordNotFound)
    }

    /// Removes the item. Returns false when no row matched.
    pub async fn delete_menu_item(&self, item_id: &Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(item_id.to_string())
            .execute(self.pool.get_pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn stale_item_error(&self, item_id: &Uuid, expected: Option<i64>) -> DomainError {
        match self.fetch_menu_item(item_id).await {
            Ok(Some(current)) => DomainError::VersionConflict {
                expected: expected.unwrap_or(current.version),
                found: current.version,
            },
            Ok(None) => DomainError::RecordNotFound,
            Err(err) => err,
        }
    }

    /// Item and distinct-category counters for the dashboard. Blank
    /// categories do not count as a category.
    pub async fn count_items_and_categories(
        &self,
        restaurant_id: &Uuid,
    ) -> Result<MenuStats, DomainError> {
        #[derive(FromRow)]
        struct StatsRow {
            menu_item_count: i64,
            category_count: i64,
        }

        let row = sqlx::query_as::<_, StatsRow>(
            r#"
            SELECT COUNT(*) AS menu_item_count,
                   COUNT(DISTINCT NULLIF(TRIM(COALESCE(category, '')), '')) AS category_count
            FROM menu_items
            WHERE restaurant_id = $1
            "#,
        )
        .bind(restaurant_id.to_string())
        .fetch_one(self.pool.get_pool())
        .await?;

        Ok(MenuStats {
            menu_item_count: row.menu_item_count,
            category_count: row.category_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::DatabaseConfig;

    async fn memory_pool() -> DbPool {
        // A single connection keeps every query on the same in-memory db.
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_max_size: 1,
            pool_timeout_seconds: 5,
        };
        DbPool::new(&config).await.unwrap()
    }

    fn draft(name: &str, category: Option<&str>, price: f64) -> MenuItemDraft {
        MenuItemDraft {
            name: name.to_string(),
            price,
            category: category.map(|s| s.to_string()),
            description: None,
            image_url: None,
        }
    }

    async fn seed_owner(repository: &Repository) -> (Account, Restaurant) {
        repository
            .create_owner("owner@example.com", "hash", "Test Kitchen", Some("Alex"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_owner_seeds_default_categories() {
        let repository = Repository::new(memory_pool().await);
        let (account, restaurant) = seed_owner(&repository).await;

        assert_eq!(account.id, restaurant.id);
        assert!(!restaurant.is_setup_complete);
        assert_eq!(restaurant.version, 1);
        assert_eq!(
            restaurant.categories,
            vec!["Starters", "Main Course", "Desserts", "Drinks"]
        );

        let reloaded = repository.get_restaurant(&account.id).await.unwrap().unwrap();
        assert_eq!(reloaded.name, "Test Kitchen");
        assert_eq!(reloaded.owner_name.as_deref(), Some("Alex"));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repository = Repository::new(memory_pool().await);
        seed_owner(&repository).await;

        let err = repository
            .create_owner("owner@example.com", "hash2", "Second Kitchen", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::EmailAlreadyExists(_)));
    }

    #[tokio::test]
    async fn find_account_by_email_roundtrip() {
        let repository = Repository::new(memory_pool().await);
        let (account, _) = seed_owner(&repository).await;

        let found = repository
            .find_account_by_email("owner@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, account.id);
        assert_eq!(found.password_hash, "hash");
        assert!(found.last_login_at.is_none());

        repository.touch_last_login(&account.id).await.unwrap();
        let touched = repository
            .find_account_by_email("owner@example.com")
            .await
            .unwrap()
            .unwrap();
        assert!(touched.last_login_at.is_some());

        let missing = repository.find_account_by_email("nobody@example.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn list_orders_by_category_then_name() {
        let repository = Repository::new(memory_pool().await);
        let (account, _) = seed_owner(&repository).await;

        repository.insert_menu_item(&account.id, &draft("Tiramisu", Some("Desserts"), 6.5)).await.unwrap();
        repository.insert_menu_item(&account.id, &draft("Bruschetta", Some("Starters"), 4.0)).await.unwrap();
        repository.insert_menu_item(&account.id, &draft("Cannoli", Some("Desserts"), 5.0)).await.unwrap();

        let items = repository.list_menu_items(&account.id).await.unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Cannoli", "Tiramisu", "Bruschetta"]);
    }

    #[tokio::test]
    async fn delete_then_reload_excludes_item() {
        let repository = Repository::new(memory_pool().await);
        let (account, _) = seed_owner(&repository).await;

        let keep = repository.insert_menu_item(&account.id, &draft("Soup", Some("Starters"), 4.5)).await.unwrap();
        let remove = repository.insert_menu_item(&account.id, &draft("Cake", Some("Desserts"), 6.0)).await.unwrap();

        assert!(repository.delete_menu_item(&remove.id).await.unwrap());
        // Second delete finds nothing.
        assert!(!repository.delete_menu_item(&remove.id).await.unwrap());

        let items = repository.list_menu_items(&account.id).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, keep.id);
    }

    #[tokio::test]
    async fn update_merges_and_bumps_version() {
        let repository = Repository::new(memory_pool().await);
        let (account, _) = seed_owner(&repository).await;

        let item = repository
            .insert_menu_item(&account.id, &draft("Soup", Some("Starters"), 4.5))
            .await
            .unwrap();

        let changes = MenuItemChanges {
            name: Some("Tomato Soup".to_string()),
            ..Default::default()
        };
        let updated = repository.update_menu_item(&item.id, &changes).await.unwrap();

        assert_eq!(updated.name, "Tomato Soup");
        assert_eq!(updated.price, 4.5);
        assert_eq!(updated.category.as_deref(), Some("Starters"));
        assert_eq!(updated.version, 2);
    }

    #[tokio::test]
    async fn stale_version_is_a_conflict() {
        let repository = Repository::new(memory_pool().await);
        let (account, _) = seed_owner(&repository).await;

        let item = repository
            .insert_menu_item(&account.id, &draft("Soup", Some("Starters"), 4.5))
            .await
            .unwrap();

        let first = MenuItemChanges {
            price: Some(5.0),
            version: Some(item.version),
            ..Default::default()
        };
        repository.update_menu_item(&item.id, &first).await.unwrap();

        // Replaying the same expected version must not clobber the first write.
        let second = MenuItemChanges {
            price: Some(9.0),
            version: Some(item.version),
            ..Default::default()
        };
        let err = repository.update_menu_item(&item.id, &second).await.unwrap_err();
        assert!(matches!(err, DomainError::VersionConflict { found: 2, .. }));

        let current = repository.fetch_menu_item(&item.id).await.unwrap().unwrap();
        assert_eq!(current.price, 5.0);
    }

    #[tokio::test]
    async fn update_unknown_item_is_not_found() {
        let repository = Repository::new(memory_pool().await);
        seed_owner(&repository).await;

        let err = repository
            .update_menu_item(&Uuid::new_v4(), &MenuItemChanges::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::RecordNotFound));
    }

    #[tokio::test]
    async fn restaurant_merge_keeps_absent_fields() {
        let repository = Repository::new(memory_pool().await);
        let (account, _) = seed_owner(&repository).await;

        let first = RestaurantChanges {
            phone: Some("+1 555 010 9999".to_string()),
            ..Default::default()
        };
        repository.update_restaurant(&account.id, &first).await.unwrap();

        let second = RestaurantChanges {
            name: Some("Renamed Kitchen".to_string()),
            ..Default::default()
        };
        let updated = repository.update_restaurant(&account.id, &second).await.unwrap();

        assert_eq!(updated.name, "Renamed Kitchen");
        assert_eq!(updated.phone.as_deref(), Some("+1 555 010 9999"));
        assert_eq!(updated.version, 3);
    }

    #[tokio::test]
    async fn unknown_restaurant_reads_as_none() {
        let repository = Repository::new(memory_pool().await);
        let found = repository.get_restaurant(&Uuid::new_v4()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn onboarding_sets_flag_and_replaces_categories() {
        let repository = Repository::new(memory_pool().await);
        let (account, _) = seed_owner(&repository).await;

        let form = OnboardingForm {
            address: Some("12 Harbor St".to_string()),
            phone: Some("+44 20 7946 0000".to_string()),
            description: None,
            logo_url: None,
            categories: vec!["Mains".to_string(), "Sides".to_string()],
        };
        let updated = repository.complete_onboarding(&account.id, &form).await.unwrap();

        assert!(updated.is_setup_complete);
        assert_eq!(updated.address.as_deref(), Some("12 Harbor St"));
        assert_eq!(updated.categories, vec!["Mains", "Sides"]);
    }

    #[tokio::test]
    async fn theme_update_roundtrips_json() {
        let repository = Repository::new(memory_pool().await);
        let (account, _) = seed_owner(&repository).await;

        let theme = serde_json::json!({"primary": "#ff6b35", "font": "serif"});
        let updated = repository.update_restaurant_theme(&account.id, &theme).await.unwrap();
        assert_eq!(updated.theme, Some(theme));
    }

    #[tokio::test]
    async fn stats_ignore_blank_categories() {
        let repository = Repository::new(memory_pool().await);
        let (account, _) = seed_owner(&repository).await;

        repository.insert_menu_item(&account.id, &draft("Soup", Some("Starters"), 4.5)).await.unwrap();
        repository.insert_menu_item(&account.id, &draft("Cake", Some("Desserts"), 6.0)).await.unwrap();
        repository.insert_menu_item(&account.id, &draft("Water", Some(""), 1.0)).await.unwrap();
        repository.insert_menu_item(&account.id, &draft("Bread", None, 2.0)).await.unwrap();

        let stats = repository.count_items_and_categories(&account.id).await.unwrap();
        assert_eq!(stats.menu_item_count, 4);
        assert_eq!(stats.category_count, 2);
    }
}
