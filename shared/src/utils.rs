//! # Shared Display Helpers
//!
//! Formatting helpers used by the console views when rendering records.
//!
//! - [`format_address`] - Shorten a chain address with ellipsis
//! - [`format_amount`] - Render an amount with a currency's decimal places
//! - [`format_timestamp`] - Render a backend RFC 3339 timestamp for display

use chrono::{DateTime, Utc};

/// Format a chain address by showing the first `prefix_len` and last
/// `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned
/// as-is. Addresses are ASCII (hex or base58) so byte slicing is safe.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x8ba1f109551bd432803012645ac136ddd64dba72";
/// assert_eq!(format_address(addr, 6, 4), "0x8ba1...ba72");
/// assert_eq!(format_address("short", 6, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an amount with the decimal places configured for its currency,
/// trimming trailing zeros down to at most two places.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_amount;
///
/// assert_eq!(format_amount(1.5, 8), "1.50");
/// assert_eq!(format_amount(0.12345678, 8), "0.12345678");
/// assert_eq!(format_amount(25.0, 6), "25.00");
/// ```
pub fn format_amount(amount: f64, decimals: u32) -> String {
    let rendered = format!("{:.*}", decimals as usize, amount);
    match rendered.find('.') {
        Some(dot) => {
            let trimmed = rendered.trim_end_matches('0');
            // keep at least two fractional digits
            let min_len = dot + 3;
            if trimmed.len() >= min_len {
                trimmed.to_string()
            } else {
                rendered[..min_len.min(rendered.len())].to_string()
            }
        }
        None => rendered,
    }
}

/// Render a backend timestamp (`RFC 3339`) as `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// Timestamps the backend left empty or in an unexpected shape are returned
/// unchanged so records still display.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
