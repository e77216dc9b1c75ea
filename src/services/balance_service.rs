use std::{str::FromStr, sync::Arc};

use ethers::types::{Address, U256};

use crate::{errors::ApiError, services::ledger::LedgerReader};

const ETHER_DECIMALS: usize = 18;

pub struct BalanceService {
    ledger: Arc<dyn LedgerReader>,
}

impl BalanceService {
    pub fn new(ledger: Arc<dyn LedgerReader>) -> Self {
        Self { ledger }
    }

    /// Look up the Ether balance for `input`, returned as an exact decimal
    /// string. The address is validated before anything leaves the process.
    pub async fn ether_balance(&self, input: &str) -> Result<String, ApiError> {
        let address = parse_address(input)?;
        let wei = self.ledger.get_balance(address).await?;

        Ok(format_ether(wei))
    }
}

/// Accepts `0x` followed by exactly 40 hex digits, any casing. Checksum
/// casing is not verified and the input is not normalized before use.
pub fn parse_address(input: &str) -> Result<Address, ApiError> {
    let digits = input.strip_prefix("0x").ok_or(ApiError::InvalidAddress)?;
    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ApiError::InvalidAddress);
    }

    Address::from_str(input).map_err(|_| ApiError::InvalidAddress)
}

/// Format a Wei amount as an Ether decimal string without losing precision.
pub fn format_ether(wei: U256) -> String {
    format_units(wei, ETHER_DECIMALS)
}

// Integer string arithmetic; floating point would round 256-bit amounts.
fn format_units(amount: U256, decimals: usize) -> String {
    let mut digits = amount.to_string();
    if digits.len() <= decimals {
        let pad = decimals - digits.len() + 1;
        digits.insert_str(0, &"0".repeat(pad));
    }
    digits.insert(digits.len() - decimals, '.');

    digits
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
