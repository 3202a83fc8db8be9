//! Validation for operator-entered input.
//!
//! Every check here runs before a request is built; a failure means no HTTP
//! traffic at all.

use crate::core::error::{ApiError, Result};

/// Parse a withdrawal amount from form text. Must be numeric and positive.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation("Amount is required".to_string()));
    }

    let amount: f64 = trimmed
        .parse()
        .map_err(|_| ApiError::Validation(format!("Amount is not a number: {}", trimmed)))?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(ApiError::Validation(
            "Amount must be greater than 0".to_string(),
        ));
    }

    Ok(amount)
}

/// Destination addresses must be present; format checks belong to the backend.
pub fn validate_to_address(address: &str) -> Result<()> {
    if address.trim().is_empty() {
        return Err(ApiError::Validation(
            "Destination address is required".to_string(),
        ));
    }
    Ok(())
}

/// Split comma-separated operator text into addresses, dropping blanks.
pub fn parse_address_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|addr| !addr.is_empty())
        .map(str::to_string)
        .collect()
}

/// A scan range must move forward and target at least one address.
pub fn validate_scan_range(start_block: u64, end_block: u64, addresses: &[String]) -> Result<()> {
    if start_block >= end_block {
        return Err(ApiError::Validation(
            "Start block must be less than end block".to_string(),
        ));
    }
    if addresses.is_empty() {
        return Err(ApiError::Validation(
            "At least one address is required".to_string(),
        ));
    }
    Ok(())
}

/// A manual collection needs both a currency symbol and a source address.
pub fn validate_collection(symbol: &str, address: &str) -> Result<()> {
    if symbol.trim().is_empty() {
        return Err(ApiError::Validation(
            "Currency symbol is required".to_string(),
        ));
    }
    if address.trim().is_empty() {
        return Err(ApiError::Validation("Address is required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1.5").unwrap(), 1.5);
        assert_eq!(parse_amount("  25 ").unwrap(), 25.0);
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-3").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn test_validate_to_address() {
        assert!(validate_to_address("0xabc").is_ok());
        assert!(validate_to_address("").is_err());
        assert!(validate_to_address("   ").is_err());
    }

    #[test]
    fn test_parse_address_list() {
        assert_eq!(
            parse_address_list("0xaaa, 0xbbb,,  0xccc "),
            vec!["0xaaa", "0xbbb", "0xccc"]
        );
        assert!(parse_address_list("  ,  ").is_empty());
    }

    #[test]
    fn test_validate_scan_range() {
        let addrs = vec!["0xaaa".to_string()];
        assert!(validate_scan_range(100, 200, &addrs).is_ok());
        assert!(validate_scan_range(200, 100, &addrs).is_err());
        assert!(validate_scan_range(100, 100, &addrs).is_err());
        assert!(validate_scan_range(100, 200, &[]).is_err());
    }

    #[test]
    fn test_validate_collection() {
        assert!(validate_collection("ETH", "0xabc").is_ok());
        assert!(validate_collection("", "0xabc").is_err());
        assert!(validate_collection("ETH", " ").is_err());
    }
}
