// 📦 Inventory Items
//
// Closed set of item shapes sharing one capability trait.
// Each shape renders itself, so listings never inspect concrete types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// CAPABILITY TRAIT
// ============================================================================

/// InventoryItem - what a repository needs from a stored record
///
/// Quantity is the only mutable field.
pub trait InventoryItem: Clone {
    /// Plural-free label for listings (`ElectronicItem`, `GroceryItem`)
    const KIND: &'static str;

    fn id(&self) -> u32;

    fn name(&self) -> &str;

    fn quantity(&self) -> i32;

    fn set_quantity(&mut self, quantity: i32);

    /// One-line listing for this item
    fn describe(&self) -> String;
}

// ============================================================================
// ELECTRONIC ITEM
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    pub id: u32,
    pub name: String,
    pub quantity: i32,
    pub brand: String,
    pub warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        quantity: i32,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        ElectronicItem {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }
}

impl InventoryItem for ElectronicItem {
    const KIND: &'static str = "ElectronicItem";

    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }

    fn describe(&self) -> String {
        format!(
            "ID: {}, Name: {}, Qty: {}, Brand: {}, Warranty: {} months",
            self.id, self.name, self.quantity, self.brand, self.warranty_months
        )
    }
}

// ============================================================================
// GROCERY ITEM
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: u32,
    pub name: String,
    pub quantity: i32,
    pub expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: u32, name: impl Into<String>, quantity: i32, expiry_date: NaiveDate) -> Self {
        GroceryItem {
            id,
            name: name.into(),
            quantity,
            expiry_date,
        }
    }
}

impl InventoryItem for GroceryItem {
    const KIND: &'static str = "GroceryItem";

    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }

    fn describe(&self) -> String {
        format!(
            "ID: {}, Name: {}, Qty: {}, Expiry: {}",
            self.id,
            self.name,
            self.quantity,
            self.expiry_date.format("%m/%d/%Y")
        )
    }
}
