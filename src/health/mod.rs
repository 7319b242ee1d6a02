// Health Registry - patients, prescriptions, and the patient -> prescriptions index

pub mod records;
pub mod repository;
pub mod app;

pub use records::{Patient, Prescription};
pub use repository::Repository;
pub use app::HealthSystemApp;
