// 🏥 Health System App
//
// Two primary collections (patients, prescriptions) plus a derived index:
//   patient_id -> prescriptions (in prescription insertion order)
// The index is rebuilt on demand, never maintained incrementally.

use chrono::{Duration, Local, NaiveDate};
use std::collections::HashMap;

use crate::health::records::{Patient, Prescription};
use crate::health::repository::Repository;

#[derive(Debug, Default)]
pub struct HealthSystemApp {
    patients: Repository<Patient>,
    prescriptions: Repository<Prescription>,
    prescription_map: HashMap<u32, Vec<Prescription>>,
}

impl HealthSystemApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_patient(&mut self, patient: Patient) {
        self.patients.add(patient);
    }

    pub fn add_prescription(&mut self, prescription: Prescription) {
        self.prescriptions.add(prescription);
    }

    pub fn find_patient(&self, id: u32) -> Option<&Patient> {
        self.patients.get_by(|p| p.id == id)
    }

    /// Seed three patients and five prescriptions dated relative to today
    pub fn seed_data(&mut self) {
        let today = Local::now().date_naive();
        self.seed_data_at(today);
    }

    pub fn seed_data_at(&mut self, today: NaiveDate) {
        self.add_patient(Patient::new(1, "Alice Smith", 30, "Female"));
        self.add_patient(Patient::new(2, "Bob Johnson", 45, "Male"));
        self.add_patient(Patient::new(3, "Carol Davis", 28, "Female"));

        let days_ago = |n: i64| today - Duration::days(n);
        self.add_prescription(Prescription::new(1, 1, "Amoxicillin", days_ago(5)));
        self.add_prescription(Prescription::new(2, 1, "Ibuprofen", days_ago(2)));
        self.add_prescription(Prescription::new(3, 2, "Metformin", days_ago(10)));
        self.add_prescription(Prescription::new(4, 3, "Lisinopril", days_ago(1)));
        self.add_prescription(Prescription::new(5, 2, "Atorvastatin", days_ago(3)));
    }

    /// Discard the index and rebuild it from the prescription collection in one pass
    pub fn build_prescription_map(&mut self) {
        self.prescription_map.clear();
        for prescription in self.prescriptions.iter() {
            self.prescription_map
                .entry(prescription.patient_id)
                .or_default()
                .push(prescription.clone());
        }
        tracing::debug!(
            patients = self.prescription_map.len(),
            prescriptions = self.prescriptions.len(),
            "prescription index rebuilt"
        );
    }

    /// Prescriptions for a patient; `None` when the patient has no index entry
    pub fn get_prescriptions_by_patient_id(&self, patient_id: u32) -> Option<&[Prescription]> {
        self.prescription_map.get(&patient_id).map(Vec::as_slice)
    }

    pub fn patient_lines(&self) -> Vec<String> {
        let mut lines = vec!["Patients:".to_string()];
        lines.extend(self.patients.iter().map(Patient::summary_line));
        lines
    }

    pub fn prescription_lines(&self, patient_id: u32) -> Vec<String> {
        match self.get_prescriptions_by_patient_id(patient_id) {
            Some(prescriptions) => {
                let mut lines = vec![format!("Prescriptions for Patient ID {}:", patient_id)];
                lines.extend(prescriptions.iter().map(Prescription::summary_line));
                lines
            }
            None => vec![format!("No prescriptions found for Patient ID {}", patient_id)],
        }
    }

    pub fn print_all_patients(&self) {
        for line in self.patient_lines() {
            println!("{}", line);
        }
    }

    pub fn print_prescriptions_for_patient(&self, patient_id: u32) {
        println!();
        for line in self.prescription_lines(patient_id) {
            println!("{}", line);
        }
    }

    /// Seed, index, list patients, then show prescriptions for the selected patient
    pub fn run(&mut self, selected_patient_id: u32) {
        self.seed_data();
        self.build_prescription_map();
        self.print_all_patients();
        self.print_prescriptions_for_patient(selected_patient_id);
    }
}
