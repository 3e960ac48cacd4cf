use sqlx::PgPool;

use crate::{
    error::Result,
    models::{NewProduct, Product},
};

pub async fn insert(pool: &PgPool, new_product: &NewProduct) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, price, description, image_url)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(&new_product.name)
    .bind(new_product.price)
    .bind(&new_product.description)
    .bind(&new_product.image_url)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products")
        .fetch_all(pool)
        .await?;

    Ok(products)
}
