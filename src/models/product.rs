use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Product {
    #[serde(rename = "produtoId")]
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "preco", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "imagem")]
    pub image: String,
    #[serde(rename = "dataCompra")]
    pub purchase_date: DateTime<Utc>,
    #[serde(rename = "estoque")]
    pub stock: i32,
    // Not checked against existing categories.
    #[serde(rename = "categoriaId")]
    pub category_id: i32,
}

impl super::Record for Product {
    const LABEL: &'static str = "Produto";

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "product #{} {:?} price: {} stock: {} category: {}",
            self.id, self.name, self.price, self.stock, self.category_id
        )
    }
}
