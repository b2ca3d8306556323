//! Merchandise catalogue management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::{
        product::{CreateProductParams, Product, ProductForm, UpdateProductParams},
        upload::UploadedFile,
    },
    provider::asset::{AssetKind, AssetStore},
    util::parse,
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
    assets: &'a dyn AssetStore,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection, assets: &'a dyn AssetStore) -> Self {
        Self { db, assets }
    }

    /// Adds a product to the catalogue, uploading its image when one is provided.
    ///
    /// # Returns
    /// - `Ok(Product)` - The created, active product
    /// - `Err(AppError::BadRequest)` - Name or color missing, or price not a positive amount
    pub async fn create(&self, form: ProductForm) -> Result<Product, AppError> {
        let invalid =
            || AppError::BadRequest("Missing or invalid product information.".to_string());

        let name = parse::non_blank(form.name).ok_or_else(invalid)?;
        let color = parse::non_blank(form.color).ok_or_else(invalid)?;
        let price = form
            .price
            .as_deref()
            .and_then(parse::parse_price)
            .filter(|price| *price > 0)
            .ok_or_else(invalid)?;

        let image_url = self.store_image(form.image).await?;

        let product = ProductRepository::new(self.db)
            .create(CreateProductParams {
                name,
                color,
                price,
                image_url,
            })
            .await?;

        tracing::info!("Added product {} ({})", product.id, product.name);

        Ok(product)
    }

    pub async fn get_active(&self) -> Result<Vec<Product>, AppError> {
        Ok(ProductRepository::new(self.db).get_active().await?)
    }

    /// Gets a product by id, including deactivated products.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        Ok(ProductRepository::new(self.db).find_by_id(id).await?)
    }

    /// Updates the fields present in the form.
    ///
    /// Blank fields keep the stored value. A new image replaces the stored image URL.
    ///
    /// # Returns
    /// - `Ok(Product)` - The updated product
    /// - `Err(AppError::NotFound)` - No product with this id
    /// - `Err(AppError::BadRequest)` - `is_active` is not a boolean or the price is not
    ///   a positive amount
    pub async fn update(&self, id: i32, form: ProductForm) -> Result<Product, AppError> {
        let repo = ProductRepository::new(self.db);
        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Product not found.".to_string()));
        }

        let is_active = match parse::non_blank(form.is_active) {
            Some(value) => Some(parse::parse_bool(&value).ok_or_else(|| {
                AppError::BadRequest(format!("Invalid is_active value '{}'.", value))
            })?),
            None => None,
        };

        let price = match parse::non_blank(form.price) {
            Some(value) => {
                let price = parse::parse_price(&value).filter(|price| *price > 0);
                Some(price.ok_or_else(|| {
                    AppError::BadRequest(format!("Invalid price '{}'.", value))
                })?)
            }
            None => None,
        };

        let params = UpdateProductParams {
            name: parse::non_blank(form.name),
            color: parse::non_blank(form.color),
            price,
            is_active,
            image_url: self.store_image(form.image).await?,
        };

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found.".to_string()))
    }

    /// Removes a product from the catalogue without deleting it, so past orders
    /// keep their reference.
    pub async fn deactivate(&self, id: i32) -> Result<(), AppError> {
        if !ProductRepository::new(self.db).deactivate(id).await? {
            return Err(AppError::NotFound("Product not found.".to_string()));
        }

        tracing::info!("Deactivated product {}", id);

        Ok(())
    }

    async fn store_image(&self, image: Option<UploadedFile>) -> Result<Option<String>, AppError> {
        let Some(file) = image.filter(|file| !file.bytes.is_empty()) else {
            return Ok(None);
        };

        let url = self
            .assets
            .store(
                AssetKind::ProductImage,
                &file.unique_name(),
                file.bytes,
                file.content_type.as_deref(),
            )
            .await?;

        Ok(Some(url))
    }
}
