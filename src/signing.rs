//! Signing and authentication utilities for the CLOB API.
//!
//! The hard cryptography lives in `alloy`; this module only turns the
//! configured private key into a signer, derives the wallet address, and
//! produces the `POLY_*` authentication headers attached to authenticated
//! requests.

use alloy::signers::local::PrivateKeySigner;
use alloy::signers::Signer;
use tracing::debug;

use crate::error::{Error, Result};

/// Create a signer from a hex-encoded private key.
///
/// The private key can be with or without the "0x" prefix.
pub fn create_signer(private_key: &str) -> Result<PrivateKeySigner> {
    let key = private_key.strip_prefix("0x").unwrap_or(private_key);
    let bytes = hex::decode(key)
        .map_err(|e| Error::Signing(format!("invalid private key hex: {}", e)))?;

    if bytes.len() != 32 {
        return Err(Error::Signing(format!(
            "private key must be 32 bytes, got {}",
            bytes.len()
        )));
    }

    let mut key_bytes = [0u8; 32];
    key_bytes.copy_from_slice(&bytes);

    PrivateKeySigner::from_bytes(&key_bytes.into())
        .map_err(|e| Error::Signing(format!("failed to create signer: {}", e)))
}

/// Get the wallet address from a private key.
pub fn address_from_private_key(private_key: &str) -> Result<String> {
    let signer = create_signer(private_key)?;
    // Format address as checksummed hex
    Ok(format!("{:?}", signer.address()))
}

/// Generate CLOB authentication headers.
///
/// The wallet proves ownership by signing a timestamped message.
pub async fn generate_auth_headers(private_key: &str) -> Result<Vec<(String, String)>> {
    let signer = create_signer(private_key)?;
    let address = format!("{:?}", signer.address());

    let timestamp = chrono::Utc::now().timestamp_millis().to_string();
    let message = format!("polymarket:{}", timestamp);

    let signature = signer
        .sign_message(message.as_bytes())
        .await
        .map_err(|e| Error::Signing(format!("failed to sign auth message: {}", e)))?;

    debug!(address = %address, "generated auth headers");

    Ok(vec![
        ("POLY_ADDRESS".to_string(), address),
        (
            "POLY_SIGNATURE".to_string(),
            format!("0x{}", hex::encode(signature.as_bytes())),
        ),
        ("POLY_TIMESTAMP".to_string(), timestamp),
        ("POLY_NONCE".to_string(), "0".to_string()),
    ])
}
