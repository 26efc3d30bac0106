//! Business document data model shared by invoices and credit notes.
//!
//! The content is loosely based on the Universal Business Language (UBL)
//! standard version 2.1, extended by Basware, so it is not strictly UBL.
//! These are plain value records mirroring the remote schema: structural
//! equality only, no behavior, no lifecycle outside a request or response
//! envelope. Fields the API treats as optional are `Option`/`Vec` and are
//! omitted from serialized output when empty.

use serde::{Deserialize, Serialize};

/// Business content of an invoice or credit note.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentData {
    /// External system identifier of the business document.
    pub id: String,

    /// External scheme identifier of the `id` element, when the source
    /// business document has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scheme_id: Option<String>,

    /// Date the document was issued, `CCYY-MM-DD`, optionally with a
    /// `+hh:mm`/`-hh:mm`/`Z` zone suffix when the time zone is known.
    pub issue_date: String,

    /// Document currency, ISO 4217 alpha code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_currency_code: Option<String>,

    /// Free-form text conveying information not contained explicitly in
    /// other structures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowance_charge: Option<AllowanceCharge>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_reference: Option<OrderReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_reference: Option<BillingReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_document_reference: Option<ContractDocumentReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_document_reference: Option<AdditionalDocumentReference>,

    /// Party that is the accountable supplier of the goods/services.
    pub accounting_supplier_party: SupplierParty,

    /// Party that is the accountable buyer of the goods/services.
    pub accounting_customer_party: CustomerParty,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_reference: Option<BuyerReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_party: Option<DeliveryParty>,

    /// Document lines.
    pub invoice_line: Vec<InvoiceLine>,

    pub legal_monetary_total: LegalMonetaryTotal,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_means: Option<PaymentMeans>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<PaymentTerms>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_total: Option<TaxTotal>,
}

/// Party that is the accountable supplier of the goods/services in the
/// referred business document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupplierParty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub party_identification: Vec<PartyIdentification>,

    /// Name of the party.
    pub party_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<PostalAddress>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_tax_scheme: Option<PartyTaxScheme>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

/// Party that is the accountable buyer of the goods/services in the
/// referred business document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerParty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub party_identification: Vec<PartyIdentification>,

    /// Name of the party.
    pub party_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<PostalAddress>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_tax_scheme: Option<PartyTaxScheme>,
}

/// Party responsible for the delivery of the goods/services in the
/// referred business document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryParty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub party_identification: Vec<PartyIdentification>,

    pub party_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_tax_scheme: Option<PartyTaxScheme>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<PostalAddress>,
}

/// External system identifier of a party endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Endpoint {
    pub id: String,

    /// External global identifier of the endpoint identifier element, for
    /// example a country specific agency schema such as `DK:CVR`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_id: Option<String>,
}

/// One external system identifier of a party.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartyIdentification {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_id: Option<String>,
}

/// Tax information for a party. Only one tax scheme is used, although
/// there could be multiple.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartyTaxScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<PartyTaxSchemeCompany>,
}

/// Company tax registration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartyTaxSchemeCompany {
    /// Identifier assigned for tax purposes by the taxation authority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_id: Option<String>,
}

/// Company contact data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefax: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub electronic_mail: Option<String>,
}

/// Address information for supplier, customer and delivery parties.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostalAddress {
    /// City, town or village.
    pub city_name: String,

    /// ZIP or post code of the addressable group of properties.
    pub postal_zone: String,

    pub address_line: String,

    pub address_line2: String,

    /// Neighbourhood or district within town or city. Required in the UK
    /// when a similar road name exists within a post town area.
    pub locality: String,

    /// Sub-entity of the area in the postal address.
    pub country_subentity: String,

    /// Country, ISO 3166-1 alpha-2.
    pub country_id: String,
}

/// Reference to a document such as another invoice, addressed by bumId.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalDocumentReference {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_id: Option<String>,

    /// Date the referenced document was issued, `CCYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,

    /// Type of the referenced document as a code, for example `380` for an
    /// invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_code: Option<String>,
}

/// External system identifier of the billing entity referenced by the
/// business document. Credit notes use this to point back at the invoice
/// being credited.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillingReference {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_id: Option<String>,
}

/// Buyer reference identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuyerReference {
    pub id: String,
}

/// Contract referenced by the business document, for example the buyer's
/// contract number in service and maintenance agreements without an
/// explicit order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContractDocumentReference {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_id: Option<String>,
}

/// Order referenced by the business document, assigned by the buyer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderReference {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_id: Option<String>,

    /// Customer Reference Identifier (CRI) when using a purchasing card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_order_id: Option<String>,
}

/// Document-level freight and handling charges.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AllowanceCharge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freight: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handling: Option<f64>,
}

/// Document-level delivery information.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Delivery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_delivery_date: Option<String>,
}

/// One document line.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceLine {
    /// External system identifier for the line.
    pub id: String,

    /// Internal identifier for the line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    /// True when the line represents services, false for goods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_indicator: Option<bool>,

    pub line_extension: LineExtension,

    pub item: Item,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tax_total: Vec<LineTaxTotal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowance_charge: Option<LineAllowanceCharge>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<LineDelivery>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_line_reference: Option<OrderLineReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
}

/// Line-level allowance or charge.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineAllowanceCharge {
    pub amount: f64,

    /// True for a charge, false for an allowance.
    pub charge_indicator: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier_factor_numeric: Option<f64>,
}

/// Line-level delivery information.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineDelivery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_delivery_date: Option<String>,
}

/// Item sold or delivered on a document line.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Descriptions of the line item.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,

    /// Short name of the item, such as a name from a catalogue, as
    /// distinct from a description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Identification of the item as it is in the seller's system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sellers_item: Option<SellersItem>,

    /// Tax rate for the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_percent: Option<f64>,
}

/// Identification of a line item as it is in the seller's system.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SellersItem {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_id: Option<String>,
}

/// Total amount for a line item, including allowance charges but net of
/// taxes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineExtension {
    /// Currency of the amount, ISO 4217.
    pub currency_id: String,

    pub amount: f64,
}

/// Reference from a document line to an order line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderLineReference {
    pub line_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_reference: Option<String>,
}

/// Unit price of a line item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Price {
    pub amount: f64,

    pub currency_id: String,
}

/// Quantity of a document line item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quantity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// Quantity of the line item which has not been invoiced yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_uninvoiced: Option<f64>,

    /// Unit code, UN/ECE CEFACT Recommendation No. 20 common code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_code: Option<String>,
}

/// Document totals.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegalMonetaryTotal {
    /// Total amount of line extensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_extension_amount: Option<Amount>,

    /// Total payable amount.
    pub payable_amount: Amount,
}

/// A monetary amount with its ISO 4217 currency.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Amount {
    pub amount: f64,

    pub currency_id: String,
}

/// Available payment means, UN/ECE 4461 coded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentMeans {
    /// Code identifying how the payment can be done, UN/ECE 4461.
    pub payment_means_code: String,

    /// Due date of the business document for this payment means,
    /// `CCYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_due_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_identifier: Option<PaymentIdentifier>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub financial_account: Vec<FinancialAccount>,
}

/// Identifier for a payment made using a means of payment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentIdentifier {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_id: Option<String>,
}

/// Financial account data for a payment means.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_institution_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_institution_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_institution_id_scheme_id: Option<String>,

    /// Branch identifier, for example `342-085`. Typically used by
    /// institutions in Australia and New Zealand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_institution_branch_id: Option<String>,

    /// Scheme of the branch identifier, for example `BSB` for Australian
    /// institutions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_institution_branch_scheme_id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<Identifier>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting: Option<Accounting>,
}

/// A scheme-qualified identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Identifier {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_id: Option<String>,
}

/// Accounting related content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Accounting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_bank_barcode: Option<VirtualBankBarcode>,
}

/// Virtual bar code added to a business document that should be printed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VirtualBankBarcode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Typically a country code according to ISO 3166-1 alpha-2, for
    /// example `FI`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_id: Option<String>,
}

/// Payment terms of the business document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentTerms {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_surcharge_percent: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_period: Option<SettlementPeriod>,
}

/// Settlement period dates, `CCYY-MM-DD`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettlementPeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Document-level tax total for one tax scheme, for example VAT: the sum
/// of the tax subtotals of each tax category within the scheme.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxTotal {
    pub currency_id: String,

    pub amount: f64,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tax_sub_total: Vec<TaxSubtotal>,
}

/// Line-level tax total.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineTaxTotal {
    pub amount: f64,

    pub currency_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_currency_tax: Option<TransactionCurrencyTax>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tax_sub_total: Vec<TaxSubtotal>,
}

/// Tax subtotal for one tax category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxSubtotal {
    pub currency_id: String,

    pub amount: f64,

    /// Tax rate for the category, as a percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,

    /// Net amount the rate is applied to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable_amount: Option<f64>,
}

/// Tax amount in the transaction currency.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionCurrencyTax {
    pub amount: f64,
}

/// Reference to a previously uploaded file attachment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileRef {
    pub file_type: String,

    pub ref_id: String,
}

/// Hypermedia link related to a business document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{
        Amount, CustomerParty, DocumentData, Endpoint, InvoiceLine, Item, LegalMonetaryTotal,
        LineExtension, PostalAddress, Quantity, SupplierParty, TaxSubtotal, TaxTotal,
    };

    fn sample_document() -> DocumentData {
        DocumentData {
            id: "INV-2026-001".to_owned(),
            issue_date: "2026-08-27".to_owned(),
            document_currency_code: Some("EUR".to_owned()),
            accounting_supplier_party: SupplierParty {
                party_name: "Acme Oy".to_owned(),
                endpoint: Some(Endpoint {
                    id: "003712345678".to_owned(),
                    scheme_id: Some("FI:OVT".to_owned()),
                }),
                postal_address: Some(PostalAddress {
                    city_name: "Helsinki".to_owned(),
                    postal_zone: "00100".to_owned(),
                    address_line: "Mannerheimintie 1".to_owned(),
                    country_id: "FI".to_owned(),
                    ..PostalAddress::default()
                }),
                ..SupplierParty::default()
            },
            accounting_customer_party: CustomerParty {
                party_name: "Globex BV".to_owned(),
                ..CustomerParty::default()
            },
            invoice_line: vec![InvoiceLine {
                id: "1".to_owned(),
                quantity: Some(Quantity {
                    amount: Some(2.0),
                    unit_code: Some("EA".to_owned()),
                    ..Quantity::default()
                }),
                line_extension: LineExtension {
                    currency_id: "EUR".to_owned(),
                    amount: 200.0,
                },
                item: Item {
                    name: Some("Widget".to_owned()),
                    description: vec!["A widget".to_owned()],
                    tax_percent: Some(24.0),
                    ..Item::default()
                },
                ..InvoiceLine::default()
            }],
            legal_monetary_total: LegalMonetaryTotal {
                line_extension_amount: Some(Amount {
                    amount: 200.0,
                    currency_id: "EUR".to_owned(),
                }),
                payable_amount: Amount {
                    amount: 248.0,
                    currency_id: "EUR".to_owned(),
                },
            },
            tax_total: Some(TaxTotal {
                currency_id: "EUR".to_owned(),
                amount: 48.0,
                tax_sub_total: vec![TaxSubtotal {
                    currency_id: "EUR".to_owned(),
                    amount: 48.0,
                    percent: Some(24.0),
                    taxable_amount: Some(200.0),
                }],
            }),
            ..DocumentData::default()
        }
    }

    #[test]
    fn document_round_trips_through_json() {
        let document = sample_document();
        let encoded = serde_json::to_string(&document).expect("serializes");
        let decoded: DocumentData = serde_json::from_str(&encoded).expect("deserializes");
        assert_eq!(document, decoded);
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let encoded = serde_json::to_value(sample_document()).expect("serializes");
        assert_eq!(encoded["issueDate"], "2026-08-27");
        assert_eq!(encoded["documentCurrencyCode"], "EUR");
        assert_eq!(
            encoded["accountingSupplierParty"]["endpoint"]["schemeId"],
            "FI:OVT"
        );
        assert_eq!(encoded["invoiceLine"][0]["lineExtension"]["currencyId"], "EUR");
        assert_eq!(
            encoded["legalMonetaryTotal"]["payableAmount"]["amount"],
            248.0
        );
        assert_eq!(encoded["taxTotal"]["taxSubTotal"][0]["percent"], 24.0);
    }

    #[test]
    fn absent_optional_fields_are_omitted_from_output() {
        let encoded = serde_json::to_value(sample_document()).expect("serializes");
        assert!(encoded.get("note").is_none());
        assert!(encoded.get("paymentMeans").is_none());
        assert!(encoded["invoiceLine"][0].get("allowanceCharge").is_none());
        // Required nested records are always present.
        assert!(encoded.get("legalMonetaryTotal").is_some());
    }

    #[test]
    fn documents_decode_leniently_from_partial_payloads() {
        let decoded: DocumentData =
            serde_json::from_str(r#"{"id":"abc-123","issueDate":"2026-01-01"}"#)
                .expect("partial decode");
        assert_eq!(decoded.id, "abc-123");
        assert!(decoded.invoice_line.is_empty());
        assert_eq!(decoded.legal_monetary_total.payable_amount.amount, 0.0);
    }
}
