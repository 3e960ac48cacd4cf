use axum::{
    extract::{
        multipart::{Field, Multipart},
        State,
    },
    Json,
};
use bytes::Bytes;

use crate::{
    error::{AppError, Result},
    models::{NewProduct, Product},
    queries::product_queries,
    services::image_service,
    AppState,
};

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = product_queries::list_all(&state.db).await?;

    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Product>> {
    let form = read_form(multipart).await?;

    let key = image_service::object_key(&form.filename);

    // Upload is best-effort: an unreachable or misconfigured bucket must not
    // fail the request, the record just points at the placeholder image.
    let image_url = match image_service::upload_object(
        &state.s3_client,
        &state.s3_bucket,
        &state.s3_region,
        &key,
        form.data,
    )
    .await
    {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("S3 upload failed, using placeholder image: {}", e);
            image_service::PLACEHOLDER_IMAGE_URL.to_string()
        }
    };

    let product = product_queries::insert(
        &state.db,
        &NewProduct {
            name: form.name,
            price: form.price,
            description: form.description,
            image_url,
        },
    )
    .await?;

    Ok(Json(product))
}

struct CreateProductForm {
    name: String,
    price: f64,
    description: String,
    filename: String,
    data: Bytes,
}

async fn read_form(mut multipart: Multipart) -> Result<CreateProductForm> {
    let mut name = None;
    let mut price = None;
    let mut description = None;
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "name" => name = Some(read_text(field).await?),
            "price" => price = Some(read_text(field).await?),
            "description" => description = Some(read_text(field).await?),
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?;
                file = Some((filename, data));
            }
            _ => {}
        }
    }

    let name = name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::UnprocessableEntity("name is required".to_string()))?;

    let price = price
        .ok_or_else(|| AppError::UnprocessableEntity("price is required".to_string()))?
        .parse::<f64>()
        .map_err(|_| AppError::UnprocessableEntity("price must be a number".to_string()))?;

    let description = description
        .ok_or_else(|| AppError::UnprocessableEntity("description is required".to_string()))?;

    let (filename, data) =
        file.ok_or_else(|| AppError::UnprocessableEntity("file is required".to_string()))?;

    Ok(CreateProductForm {
        name,
        price,
        description,
        filename,
        data,
    })
}

async fn read_text(field: Field<'_>) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))
}
