use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch all products.");
    sqlx::query_as::<_, models::Product>(
        r#"
        SELECT
            id, name, description, price, image, purchase_date, stock, category_id
        FROM produtos
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch products, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch product by id.", id);
    sqlx::query_as::<_, models::Product>(
        r#"
        SELECT
            id, name, description, price, image, purchase_date, stock, category_id
        FROM produtos
        WHERE id = $1
        LIMIT 1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute fetch query: {:?}", e);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(
    pool: &PgPool,
    product: models::Product,
) -> Result<models::Product, String> {
    let query_span = tracing::info_span!("Saving new product into the database");
    sqlx::query_as::<_, models::Product>(
        r#"
        INSERT INTO produtos (
        name,
        description,
        price,
        image,
        purchase_date,
        stock,
        category_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, description, price, image, purchase_date, stock, category_id
        "#,
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(&product.image)
    .bind(product.purchase_date)
    .bind(product.stock)
    .bind(product.category_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to insert".to_string()
    })
}

pub async fn update(
    pool: &PgPool,
    product: models::Product,
) -> Result<Option<models::Product>, String> {
    let query_span = tracing::info_span!("Updating product");
    sqlx::query_as::<_, models::Product>(
        r#"
        UPDATE produtos
        SET
            name=$2,
            description=$3,
            price=$4,
            image=$5,
            purchase_date=$6,
            stock=$7,
            category_id=$8
        WHERE id = $1
        RETURNING id, name, description, price, image, purchase_date, stock, category_id
        "#,
    )
    .bind(product.id)
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(&product.image)
    .bind(product.purchase_date)
    .bind(product.stock)
    .bind(product.category_id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Could not update".to_string()
    })
}

#[tracing::instrument(name = "Delete product.", skip(pool))]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    sqlx::query::<sqlx::Postgres>("DELETE FROM produtos WHERE id = $1;")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete product: {:?}", err);
            "Failed to delete product".to_string()
        })
}
