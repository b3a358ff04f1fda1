use serde::{Deserialize, Serialize};

use super::Record;

/// Catalog product. Fields missing from a create body take their zero value.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Product {
    fn new(name: &str, description: &str, price: f64) -> Self {
        Self { id: String::new(), name: name.into(), description: description.into(), price }
    }
}

impl Record for Product {
    const RESOURCE: &'static str = "products";
    const ENTITY: &'static str = "Product";

    fn id(&self) -> &str { &self.id }
    fn set_id(&mut self, id: String) { self.id = id; }

    fn seed() -> Vec<Self> {
        vec![
            Product::new("Laptop", "Powerful computing device", 1200.00),
            Product::new("Mouse", "Ergonomic wireless mouse", 25.50),
            Product::new("Keyboard", "Mechanical gaming keyboard", 75.00),
        ]
    }
}
