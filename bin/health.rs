// Health Registry - patients and their prescriptions

use anyhow::Result;
use coursework::{logging, HealthSystemApp};

const SELECTED_PATIENT_ID: u32 = 2;

fn main() -> Result<()> {
    logging::init();

    let mut app = HealthSystemApp::new();
    app.run(SELECTED_PATIENT_ID);

    Ok(())
}
