use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Category>, String> {
    let query_span = tracing::info_span!("Fetch all categories.");
    sqlx::query_as::<_, models::Category>(
        r#"SELECT id, name, description FROM categorias ORDER BY id"#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch categories, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Category>, String> {
    tracing::info!("Fetch category {}", id);
    sqlx::query_as::<_, models::Category>(
        r#"SELECT id, name, description FROM categorias WHERE id=$1 LIMIT 1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch category, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(
    pool: &PgPool,
    category: models::Category,
) -> Result<models::Category, String> {
    let query_span = tracing::info_span!("Saving new category into the database");
    sqlx::query_as::<_, models::Category>(
        r#"
        INSERT INTO categorias (name, description)
        VALUES ($1, $2)
        RETURNING id, name, description
        "#,
    )
    .bind(&category.name)
    .bind(&category.description)
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
    category: models::Category,
) -> Result<Option<models::Category>, String> {
    let query_span = tracing::info_span!("Updating category");
    sqlx::query_as::<_, models::Category>(
        r#"
        UPDATE categorias
        SET
            name=$2,
            description=$3
        WHERE id = $1
        RETURNING id, name, description
        "#,
    )
    .bind(category.id)
    .bind(&category.name)
    .bind(&category.description)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map(|result| {
        if let Some(ref category) = result {
            tracing::info!("Category {} has been saved", category.id);
        }
        result
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Could not update".to_string()
    })
}

#[tracing::instrument(name = "Delete category.", skip(pool))]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    sqlx::query::<sqlx::Postgres>("DELETE FROM categorias WHERE id = $1;")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete category: {:?}", err);
            "Failed to delete category".to_string()
        })
}
