//! Fetch an invoice from the Basware sandbox API.
//!
//! Run:
//! `BASWARE_USERNAME=<user> BASWARE_PASSWORD=<pass> cargo run --example get_invoice -- <bumId>`

use basware_client::{Client, Configuration, InvoicePathParams};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (username, password) = match (
        std::env::var("BASWARE_USERNAME"),
        std::env::var("BASWARE_PASSWORD"),
    ) {
        (Ok(username), Ok(password)) => (username, password),
        _ => {
            eprintln!("Set BASWARE_USERNAME and BASWARE_PASSWORD before running this demo.");
            std::process::exit(2);
        }
    };

    let bum_id = match std::env::args().nth(1) {
        Some(bum_id) => bum_id,
        None => {
            eprintln!("Usage: get_invoice <bumId>");
            std::process::exit(2);
        }
    };

    let client = Client::new(Configuration::sandbox(username, password).with_debug(true))?;
    let invoice = client.invoices().get(&InvoicePathParams::new(bum_id)).await?;
    println!("{}", serde_json::to_string_pretty(&invoice)?);
    Ok(())
}
