// Finance Demo - processors and savings account

use anyhow::Result;
use coursework::{logging, FinanceApp};

fn main() -> Result<()> {
    logging::init();

    let mut app = FinanceApp::new();
    for line in app.run() {
        println!("{}", line);
    }

    Ok(())
}
