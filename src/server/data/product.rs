//! Product data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::product::{CreateProductParams, Product, UpdateProductParams};

use entity::product::Column;

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateProductParams) -> Result<Product, DbErr> {
        let entity = entity::product::ActiveModel {
            name: ActiveValue::Set(params.name),
            color: ActiveValue::Set(params.color),
            price: ActiveValue::Set(params.price),
            image_url: ActiveValue::Set(params.image_url),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(entity))
    }

    /// Gets active products, newest first. Deactivated products stay hidden from the catalogue.
    pub async fn get_active(&self) -> Result<Vec<Product>, DbErr> {
        let entities = entity::prelude::Product::find()
            .filter(Column::IsActive.eq(true))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Product::from_entity).collect())
    }

    /// Finds a product by id regardless of whether it is active.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        Ok(entity::prelude::Product::find_by_id(id)
            .one(self.db)
            .await?
            .map(Product::from_entity))
    }

    /// Applies the provided fields of a partial update.
    ///
    /// # Arguments
    /// - `id` - Product to update
    /// - `params` - Fields to change; `None` fields keep their stored value
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - The updated product
    /// - `Ok(None)` - No product with this id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateProductParams,
    ) -> Result<Option<Product>, DbErr> {
        let Some(existing) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model = existing.into_active_model();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(color) = params.color {
            active_model.color = ActiveValue::Set(color);
        }
        if let Some(price) = params.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(is_active) = params.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }
        if let Some(image_url) = params.image_url {
            active_model.image_url = ActiveValue::Set(Some(image_url));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Product::from_entity(entity)))
    }

    /// Soft-deletes a product by clearing its active flag.
    ///
    /// # Returns
    /// - `Ok(true)` - Product exists and is now inactive
    /// - `Ok(false)` - No product with this id
    pub async fn deactivate(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
