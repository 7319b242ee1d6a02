// 🏭 Warehouse Manager - owns one repository per item shape
//
// Helpers catch repository errors at the call site and turn them into console diagnostics.

use chrono::{Duration, Local, NaiveDate};

use crate::error::InventoryError;
use crate::warehouse::item::{ElectronicItem, GroceryItem, InventoryItem};
use crate::warehouse::repository::InventoryRepository;

#[derive(Debug, Default)]
pub struct WarehouseManager {
    electronics: InventoryRepository<ElectronicItem>,
    groceries: InventoryRepository<GroceryItem>,
}

impl WarehouseManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn electronics_repo(&mut self) -> &mut InventoryRepository<ElectronicItem> {
        &mut self.electronics
    }

    pub fn groceries_repo(&mut self) -> &mut InventoryRepository<GroceryItem> {
        &mut self.groceries
    }

    /// Seed three electronics and three groceries; expiry dates relative to today
    pub fn seed_data(&mut self) {
        self.seed_data_at(Local::now().date_naive());
    }

    pub fn seed_data_at(&mut self, today: NaiveDate) {
        if let Err(err) = self.try_seed(today) {
            tracing::warn!(error = %err, "seeding failed");
            println!("Error during seeding: {}", err);
        }
    }

    fn try_seed(&mut self, today: NaiveDate) -> Result<(), InventoryError> {
        self.electronics.add_item(ElectronicItem::new(1, "Laptop", 10, "Dell", 24))?;
        self.electronics.add_item(ElectronicItem::new(2, "Smartphone", 20, "Samsung", 12))?;
        self.electronics.add_item(ElectronicItem::new(3, "Tablet", 15, "Apple", 12))?;

        let in_days = |n: i64| today + Duration::days(n);
        self.groceries.add_item(GroceryItem::new(1, "Milk", 50, in_days(7)))?;
        self.groceries.add_item(GroceryItem::new(2, "Bread", 30, in_days(3)))?;
        self.groceries.add_item(GroceryItem::new(3, "Eggs", 100, in_days(10)))?;

        Ok(())
    }

    /// Listing header plus one line per item, rendered by the item itself
    pub fn item_lines<T: InventoryItem>(repo: &InventoryRepository<T>) -> Vec<String> {
        let mut lines = vec![format!("Listing all {}s:", T::KIND)];
        lines.extend(repo.get_all_items().iter().map(T::describe));
        lines
    }

    pub fn print_all_items<T: InventoryItem>(repo: &InventoryRepository<T>) {
        println!();
        for line in Self::item_lines(repo) {
            println!("{}", line);
        }
    }

    /// Add `quantity` to an item's stock and report the stored result
    pub fn increase_stock<T: InventoryItem>(
        repo: &mut InventoryRepository<T>,
        id: u32,
        quantity: i32,
    ) -> Result<String, InventoryError> {
        let current = repo.get_item_by_id(id)?.quantity();
        let new_quantity = current
            .checked_add(quantity)
            .ok_or(InventoryError::InvalidQuantity)?;
        let updated = repo.update_quantity(id, new_quantity)?;
        Ok(format!(
            "Increased stock of {} to {}.",
            updated.name(),
            updated.quantity()
        ))
    }

    /// `increase_stock`, printing either the confirmation or the error
    pub fn report_increase_stock<T: InventoryItem>(
        repo: &mut InventoryRepository<T>,
        id: u32,
        quantity: i32,
    ) {
        match Self::increase_stock(repo, id, quantity) {
            Ok(message) => println!("{}", message),
            Err(err) => println!("Error increasing stock: {}", err),
        }
    }

    /// Remove an item and return the console message for the outcome
    pub fn remove_item_by_id<T: InventoryItem>(repo: &mut InventoryRepository<T>, id: u32) -> String {
        match repo.remove_item(id) {
            Ok(()) => format!("Item with ID {} removed successfully.", id),
            Err(err) => format!("Error removing item: {}", err),
        }
    }

    /// The full warehouse scenario: listings, then one failure of each kind, then a restock
    pub fn run(&mut self) {
        self.seed_data();

        Self::print_all_items(&self.groceries);
        Self::print_all_items(&self.electronics);

        println!("\nAttempting to add duplicate item:");
        if let Err(err) = self
            .electronics
            .add_item(ElectronicItem::new(1, "Laptop", 5, "HP", 12))
        {
            println!("Error: {}", err);
        }

        println!("\nAttempting to remove non-existent item:");
        println!("{}", Self::remove_item_by_id(&mut self.groceries, 999));

        println!("\nAttempting to update invalid quantity:");
        if let Err(err) = self.electronics.update_quantity(2, -10) {
            println!("Error: {}", err);
        }

        println!("\nIncreasing stock of Grocery item (Milk):");
        Self::report_increase_stock(&mut self.groceries, 1, 20);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> WarehouseManager {
        let mut manager = WarehouseManager::new();
        manager.seed_data_at(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        manager
    }

    #[test]
    fn test_seed_data() {
        let mut manager = seeded();

        assert_eq!(manager.electronics_repo().len(), 3);
        assert_eq!(manager.groceries_repo().len(), 3);

        let bread = manager.groceries_repo().get_item_by_id(2).unwrap().clone();
        assert_eq!(bread.expiry_date, NaiveDate::from_ymd_opt(2024, 6, 18).unwrap());
    }

    #[test]
    fn test_increase_stock_reports_stored_quantity() {
        let mut manager = seeded();

        let message = WarehouseManager::increase_stock(manager.groceries_repo(), 1, 20).unwrap();

        assert_eq!(message, "Increased stock of Milk to 70.");
        assert_eq!(manager.groceries_repo().get_item_by_id(1).unwrap().quantity, 70);
    }

    #[test]
    fn test_increase_stock_missing_item() {
        let mut manager = seeded();
        let result = WarehouseManager::increase_stock(manager.electronics_repo(), 9, 1);
        assert_eq!(result, Err(InventoryError::ItemNotFound(9)));
    }

    #[test]
    fn test_increase_stock_below_zero_rejected() {
        let mut manager = seeded();
        let result = WarehouseManager::increase_stock(manager.groceries_repo(), 2, -31);

        assert_eq!(result, Err(InventoryError::InvalidQuantity));
        assert_eq!(manager.groceries_repo().get_item_by_id(2).unwrap().quantity, 30);
    }

    #[test]
    fn test_increase_stock_overflow_rejected() {
        let mut manager = seeded();
        manager.groceries_repo().update_quantity(3, i32::MAX - 5).unwrap();

        let result = WarehouseManager::increase_stock(manager.groceries_repo(), 3, 10);

        assert_eq!(result, Err(InventoryError::InvalidQuantity));
        assert_eq!(
            manager.groceries_repo().get_item_by_id(3).unwrap().quantity,
            i32::MAX - 5
        );
    }

    #[test]
    fn test_remove_item_by_id_messages() {
        let mut manager = seeded();

        assert_eq!(
            WarehouseManager::remove_item_by_id(manager.groceries_repo(), 999),
            "Error removing item: Item with ID 999 not found."
        );
        assert_eq!(
            WarehouseManager::remove_item_by_id(manager.groceries_repo(), 3),
            "Item with ID 3 removed successfully."
        );
    }

    #[test]
    fn test_item_lines() {
        let mut manager = seeded();
        let lines = WarehouseManager::item_lines(manager.electronics_repo());

        assert_eq!(lines[0], "Listing all ElectronicItems:");
        assert_eq!(
            lines[2],
            "ID: 2, Name: Smartphone, Qty: 20, Brand: Samsung, Warranty: 12 months"
        );

        let lines = WarehouseManager::item_lines(manager.groceries_repo());
        assert_eq!(lines[0], "Listing all GroceryItems:");
        assert_eq!(lines[1], "ID: 1, Name: Milk, Qty: 50, Expiry: 06/22/2024");
    }

    #[test]
    fn test_reseeding_reports_duplicates_without_panicking() {
        let mut manager = seeded();
        manager.seed_data_at(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());

        assert_eq!(manager.electronics_repo().len(), 3);
    }
}
