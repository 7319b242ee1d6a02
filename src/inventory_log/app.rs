use chrono::{Duration, Local, NaiveDateTime};
use std::path::PathBuf;

use crate::inventory_log::item::LoggedItem;
use crate::inventory_log::logger::{InventoryLogger, LoadOutcome, SaveOutcome};

/// One session of the inventory logger program
#[derive(Debug)]
pub struct InventoryApp {
    logger: InventoryLogger<LoggedItem>,
}

impl InventoryApp {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        InventoryApp {
            logger: InventoryLogger::new(file_path),
        }
    }

    pub fn seed_sample_data(&mut self) {
        self.seed_sample_data_at(Local::now().naive_local());
    }

    /// Five items added over the last ten days
    pub fn seed_sample_data_at(&mut self, now: NaiveDateTime) {
        let days_ago = |n: i64| now - Duration::days(n);
        self.logger.add(LoggedItem::new(1, "Laptop", 10, days_ago(10)));
        self.logger.add(LoggedItem::new(2, "Mouse", 50, days_ago(5)));
        self.logger.add(LoggedItem::new(3, "Keyboard", 30, days_ago(7)));
        self.logger.add(LoggedItem::new(4, "Monitor", 15, days_ago(3)));
        self.logger.add(LoggedItem::new(5, "USB Drive", 100, now));
    }

    pub fn save_data(&self) -> SaveOutcome {
        self.logger.save_to_file()
    }

    pub fn load_data(&mut self) -> LoadOutcome {
        self.logger.load_from_file()
    }

    pub fn items(&self) -> Vec<LoggedItem> {
        self.logger.get_all()
    }

    pub fn item_lines(&self) -> Vec<String> {
        let mut lines = vec!["Inventory Items:".to_string()];
        lines.extend(self.logger.get_all().iter().map(LoggedItem::summary_line));
        lines
    }

    pub fn print_all_items(&self) {
        println!();
        for line in self.item_lines() {
            println!("{}", line);
        }
    }

    /// Seed and save in one session, then load and print in a fresh one
    pub fn run(file_path: impl Into<PathBuf>) {
        let file_path = file_path.into();

        let mut app = InventoryApp::new(file_path.clone());
        app.seed_sample_data();
        app.save_data();

        let mut new_session = InventoryApp::new(file_path);
        new_session.load_data();
        new_session.print_all_items();
    }
}
