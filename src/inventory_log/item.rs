use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Anything the inventory logger can hold: it only needs a stable id
pub trait InventoryEntity {
    fn id(&self) -> u32;
}

/// Logged inventory entry
///
/// JSON shape: `{"id": 1, "name": "Laptop", "quantity": 10, "dateAdded": "2024-06-05T09:30:00"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedItem {
    pub id: u32,
    pub name: String,
    pub quantity: i32,
    pub date_added: NaiveDateTime,
}

impl LoggedItem {
    pub fn new(id: u32, name: impl Into<String>, quantity: i32, date_added: NaiveDateTime) -> Self {
        LoggedItem {
            id,
            name: name.into(),
            quantity,
            date_added,
        }
    }

    pub fn summary_line(&self) -> String {
        format!(
            "ID: {}, Name: {}, Quantity: {}, Date Added: {}",
            self.id,
            self.name,
            self.quantity,
            self.date_added.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

impl InventoryEntity for LoggedItem {
    fn id(&self) -> u32 {
        self.id
    }
}
