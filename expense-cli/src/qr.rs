//! UPI payment QR codes.

use std::path::Path;

use anyhow::Context;
use image::Luma;
use qrcode::QrCode;

pub const DEFAULT_PAYEE_ID: &str = "sarmahrishi05-1@oksbi";
pub const DEFAULT_PAYEE_NAME: &str = "Hrisikesh Sarma";
pub const DEFAULT_AMOUNT: f64 = 25.0;
pub const DEFAULT_OUTPUT: &str = "upi_qr.png";

/// Pixels per QR module.
const MODULE_SIZE: u32 = 10;

/// A single INR payment request.
#[derive(Debug, Clone, PartialEq)]
pub struct UpiPayment {
    pub payee_id: String,
    pub payee_name: String,
    pub amount: f64,
}

impl Default for UpiPayment {
    fn default() -> Self {
        Self {
            payee_id: DEFAULT_PAYEE_ID.to_string(),
            payee_name: DEFAULT_PAYEE_NAME.to_string(),
            amount: DEFAULT_AMOUNT,
        }
    }
}

/// Builds the `upi://pay` deep link. Values are inserted as given, unencoded.
pub fn upi_link(payment: &UpiPayment) -> String {
    format!(
        "upi://pay?pa={}&pn={}&am={}&cu=INR",
        payment.payee_id, payment.payee_name, payment.amount
    )
}

/// Encodes `data` as a QR code and writes it as a PNG, replacing any existing file.
pub fn write_qr_png(data: &str, path: &Path) -> anyhow::Result<()> {
    let code = QrCode::new(data.as_bytes()).context("failed to encode QR code")?;
    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_SIZE, MODULE_SIZE)
        .build();
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
