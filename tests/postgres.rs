mod common;

use catalogo::configuration::{get_configuration, DatabaseSettings};
use catalogo::db::Store;
use serde_json::{json, Value};
use sqlx::{Connection, Executor, PgConnection, PgPool};

async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await?;

    Ok(connection_pool)
}

/// `None` when no PostgreSQL server is reachable with `configuration.yaml`.
async fn spawn_app_with_postgres() -> Option<common::TestApp> {
    let mut database = match get_configuration() {
        Ok(settings) => settings.database,
        Err(err) => {
            eprintln!("Skipping tests: no configuration: {}", err);
            return None;
        }
    };
    database.database_name = uuid::Uuid::new_v4().to_string();

    let pool = match configure_database(&database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let mut settings = common::test_settings();
    settings.database = database;
    Some(common::spawn_app_with(Store::postgres(pool), settings).await)
}

// test me: cargo t --test postgres -- --nocapture
#[tokio::test]
async fn category_lifecycle() {
    let Some(app) = spawn_app_with_postgres().await else {
        return;
    };

    let response = app
        .post(
            "/categorias",
            &json!({"nome": "Bebidas", "descricao": "Refrigerantes"}),
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);
    let created: Value = response.json().await.unwrap();
    let id = created["categoriaId"].as_i64().unwrap();

    let fetched: Value = app
        .get(&format!("/categorias/{}", id), None)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["nome"], "Bebidas");
    assert_eq!(fetched["descricao"], "Refrigerantes");

    let mismatch = app
        .put(
            &format!("/categorias/{}", id),
            &json!({"categoriaId": id + 1, "nome": "x"}),
        )
        .await;
    assert_eq!(mismatch.status().as_u16(), 400);

    let token = app.login().await;
    let list: Vec<Value> = app
        .get("/categorias", Some(&token))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(list.len(), 1);

    assert_eq!(
        app.delete(&format!("/categorias/{}", id)).await.status().as_u16(),
        204
    );
    assert_eq!(
        app.delete(&format!("/categorias/{}", id)).await.status().as_u16(),
        404
    );
}

#[tokio::test]
async fn product_lifecycle() {
    let Some(app) = spawn_app_with_postgres().await else {
        return;
    };

    let body = json!({
        "nome": "Coca-Cola",
        "descricao": "Refrigerante 350ml",
        "preco": 5.45,
        "imagem": "cocacola.jpg",
        "dataCompra": "2025-01-10T12:00:00Z",
        "estoque": 10,
        "categoriaId": 404
    });
    let response = app.post("/produtos", &body).await;
    assert_eq!(response.status().as_u16(), 201);
    let created: Value = response.json().await.unwrap();
    let id = created["produtoId"].as_i64().unwrap();

    let mut replacement = body.clone();
    replacement["produtoId"] = json!(id);
    replacement["preco"] = json!(6.1);
    let updated: Value = app
        .put(&format!("/produtos/{}", id), &replacement)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(updated["preco"], 6.1);
    assert_eq!(updated["categoriaId"], 404);

    assert_eq!(app.delete("/produtos/99999").await.status().as_u16(), 404);
}

#[tokio::test]
async fn created_product_matches_stored_row() {
    let Some(app) = spawn_app_with_postgres().await else {
        return;
    };

    let response = app
        .post(
            "/produtos",
            &json!({
                "nome": "Guaraná",
                "preco": 5.456,
                "dataCompra": "2025-01-10T12:00:00.123456789Z",
                "estoque": 3,
                "categoriaId": 1
            }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["preco"], 5.46);
    assert_eq!(created["dataCompra"], "2025-01-10T12:00:00.123456Z");

    let id = created["produtoId"].as_i64().unwrap();
    let fetched: Value = app
        .get(&format!("/produtos/{}", id), None)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(created, fetched);
}

#[tokio::test]
async fn created_category_matches_stored_row() {
    let Some(app) = spawn_app_with_postgres().await else {
        return;
    };

    let response = app
        .post(
            "/categorias",
            &json!({"categoriaId": 77, "nome": "Lanches"}),
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);
    let created: Value = response.json().await.unwrap();
    assert_ne!(created["categoriaId"], 77);
    assert_eq!(created["descricao"], "");

    let id = created["categoriaId"].as_i64().unwrap();
    let fetched: Value = app
        .get(&format!("/categorias/{}", id), None)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(created, fetched);
}

#[tokio::test]
async fn large_price_is_stored() {
    let Some(app) = spawn_app_with_postgres().await else {
        return;
    };

    let response = app
        .post("/produtos", &json!({"nome": "Lote", "preco": 1e11, "categoriaId": 1}))
        .await;
    assert_eq!(response.status().as_u16(), 201);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["preco"], 1e11);
}
