mod category;
mod product;

pub use category::*;
pub use product::*;

/// A stored row with a store-assigned integer key.
pub trait Record: Clone + Send + Sync + 'static {
    /// Name used in user-facing messages, e.g. "Categoria".
    const LABEL: &'static str;

    fn id(&self) -> i32;

    fn set_id(&mut self, id: i32);
}
