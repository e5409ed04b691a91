//! JSON output of address summaries.

use crate::models::Address;

/// Pretty JSON for one address, including its open ports.
pub fn address_json(address: &Address) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&address.summary())
}
