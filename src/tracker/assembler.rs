use tracing::debug;

use crate::error::AssemblyError;
use crate::models::portfolio::{MetadataTable, PriceTable};
use crate::models::token::{Holding, TokenHolding, ValuedHolding, NATIVE_ASSET_ID};

fn price_of(prices: &PriceTable, asset_id: &str) -> f64 {
    prices
        .get(asset_id)
        .copied()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .unwrap_or(0.0)
}

fn check_amount(asset_id: &str, amount: f64) -> Result<(), AssemblyError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(AssemblyError::InvalidAmount {
            asset_id: asset_id.to_string(),
            amount,
        })
    }
}

/// Join balances, prices and metadata into holdings sorted by USD value,
/// highest first. Equal values keep native-then-discovery order.
pub fn assemble(
    native_amount: f64,
    tokens: &[TokenHolding],
    prices: &PriceTable,
    metadata: &MetadataTable,
) -> Result<Vec<ValuedHolding>, AssemblyError> {
    check_amount(NATIVE_ASSET_ID, native_amount)?;

    let mut holdings = Vec::with_capacity(tokens.len() + 1);
    holdings.push(ValuedHolding::new(
        Holding::native(native_amount),
        price_of(prices, NATIVE_ASSET_ID),
    ));

    for token in tokens {
        check_amount(&token.asset_id, token.raw_amount)?;
        if token.raw_amount <= 0.0 {
            continue;
        }

        let holding = Holding::token(token, metadata.get(&token.asset_id));
        holdings.push(ValuedHolding::new(holding, price_of(prices, &token.asset_id)));
    }

    // sort_by is stable
    holdings.sort_by(|a, b| b.usd_value.total_cmp(&a.usd_value));

    debug!("Assembled {} holdings", holdings.len());
    Ok(holdings)
}
