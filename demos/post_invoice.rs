//! Submit a minimal invoice to the Basware sandbox API.
//!
//! Run:
//! `BASWARE_USERNAME=<user> BASWARE_PASSWORD=<pass> cargo run --example post_invoice`
//!
//! The submission carries a fresh idempotency token; a real integration
//! would persist the token and reuse it when retrying the same invoice.

use basware_client::types::{Amount, DocumentData, InvoiceLine, Item, LineExtension};
use basware_client::{Client, Configuration, InvoicePathParams, InvoicePostRequestBody};
use uuid::Uuid;

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

    let client = Client::new(Configuration::sandbox(username, password))?;

    let bum_id = Uuid::new_v4().to_string();
    let body = InvoicePostRequestBody {
        client_token: Uuid::new_v4().to_string(),
        data: DocumentData {
            id: bum_id.clone(),
            issue_date: "2026-08-27".to_owned(),
            document_currency_code: Some("EUR".to_owned()),
            invoice_line: vec![InvoiceLine {
                id: "1".to_owned(),
                line_extension: LineExtension {
                    currency_id: "EUR".to_owned(),
                    amount: 100.0,
                },
                item: Item {
                    name: Some("Demo item".to_owned()),
                    ..Item::default()
                },
                ..InvoiceLine::default()
            }],
            legal_monetary_total: basware_client::types::LegalMonetaryTotal {
                payable_amount: Amount {
                    amount: 100.0,
                    currency_id: "EUR".to_owned(),
                },
                ..Default::default()
            },
            ..DocumentData::default()
        },
        ..InvoicePostRequestBody::default()
    };

    match client
        .invoices()
        .post(&InvoicePathParams::new(&bum_id), &body)
        .await
    {
        Ok(response) => println!("{}", serde_json::to_string_pretty(&response)?),
        Err(error) => eprintln!("submission failed: {error}"),
    }
    Ok(())
}
