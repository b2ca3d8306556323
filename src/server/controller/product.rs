use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        product::{ProductDto, ProductForm as ProductFormSchema, ProductResponseDto},
    },
    server::{
        error::AppError,
        model::product::{Product, ProductForm},
        service::product::ProductService,
        state::AppState,
        util::multipart::MultipartFields,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

async fn read_form(multipart: Multipart) -> Result<ProductForm, AppError> {
    let mut fields = MultipartFields::read(multipart).await?;

    Ok(ProductForm {
        name: fields.take_text("name"),
        color: fields.take_text("color"),
        price: fields.take_text("price"),
        is_active: fields.take_text("is_active"),
        image: fields.take_file("image"),
    })
}

/// Add a product to the catalogue.
///
/// # Arguments
/// - `state` - Application state
/// - `multipart` - `name`, `color`, `price` and optional `image` file
///
/// # Returns
/// - `201 Created` - Product added
/// - `400 Bad Request` - Missing or invalid product information
/// - `500 Internal Server Error` - Upload or database error
#[utoipa::path(
    post,
    path = "/api/products/add-product",
    tag = PRODUCT_TAG,
    request_body(content = ProductFormSchema, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Product added", body = ProductResponseDto),
        (status = 400, description = "Invalid product", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_product(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = read_form(multipart).await?;

    let product = ProductService::new(&state.db, state.assets.as_ref())
        .create(form)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductResponseDto {
            message: "Product added successfully.".to_string(),
            product: product.into_dto(),
        }),
    ))
}

/// List active products, newest first.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "Active products", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::new(&state.db, state.assets.as_ref())
        .get_active()
        .await?;

    Ok(Json(
        products
            .into_iter()
            .map(Product::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Get a product by id, including deactivated products.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db, state.assets.as_ref())
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found.".to_string()))?;

    Ok(Json(product.into_dto()))
}

/// Update the fields present in a multipart form.
///
/// # Returns
/// - `200 OK` - Product updated
/// - `400 Bad Request` - Invalid `is_active` value
/// - `404 Not Found` - No product with this id
#[utoipa::path(
    put,
    path = "/api/products/update-product/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    request_body(content = ProductFormSchema, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Product updated", body = ProductResponseDto),
        (status = 400, description = "Invalid product", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = read_form(multipart).await?;

    let product = ProductService::new(&state.db, state.assets.as_ref())
        .update(id, form)
        .await?;

    Ok(Json(ProductResponseDto {
        message: "Product updated successfully.".to_string(),
        product: product.into_dto(),
    }))
}

/// Deactivate a product. The product stays retrievable by id.
///
/// # Returns
/// - `200 OK` - Product deactivated
/// - `404 Not Found` - No product with this id
#[utoipa::path(
    delete,
    path = "/api/products/delete-product/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deactivated", body = MessageDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ProductService::new(&state.db, state.assets.as_ref())
        .deactivate(id)
        .await?;

    Ok(Json(MessageDto {
        message: "Product deleted successfully.".to_string(),
    }))
}
