use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    fn new(name: &str, email: &str) -> Self {
        Self { id: String::new(), name: name.into(), email: email.into() }
    }
}

impl Record for User {
    const RESOURCE: &'static str = "users";
    const ENTITY: &'static str = "User";

    fn id(&self) -> &str { &self.id }
    fn set_id(&mut self, id: String) { self.id = id; }

    fn seed() -> Vec<Self> {
        vec![
            User::new("Alice Smith", "alice@example.com"),
            User::new("Bob Johnson", "bob@example.com"),
            User::new("Charlie Brown", "charlie@example.com"),
        ]
    }
}
