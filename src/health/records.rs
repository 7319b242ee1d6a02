use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub gender: String,
}

impl Patient {
    pub fn new(id: u32, name: impl Into<String>, age: u32, gender: impl Into<String>) -> Self {
        Patient {
            id,
            name: name.into(),
            age,
            gender: gender.into(),
        }
    }

    pub fn summary_line(&self) -> String {
        format!(
            "ID: {}, Name: {}, Age: {}, Gender: {}",
            self.id, self.name, self.age, self.gender
        )
    }
}

/// Prescription issued to a patient
///
/// `patient_id` refers to a `Patient::id` but is not checked against the patient collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: u32,
    pub patient_id: u32,
    pub medication_name: String,
    pub date_issued: NaiveDate,
}

impl Prescription {
    pub fn new(
        id: u32,
        patient_id: u32,
        medication_name: impl Into<String>,
        date_issued: NaiveDate,
    ) -> Self {
        Prescription {
            id,
            patient_id,
            medication_name: medication_name.into(),
            date_issued,
        }
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Prescription ID: {}, Medication: {}, Date Issued: {}",
            self.id,
            self.medication_name,
            self.date_issued.format("%m/%d/%Y")
        )
    }
}
