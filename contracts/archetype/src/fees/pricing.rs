use crate::*;
use primitive_types::U256;

/// Discount of the highest tier whose threshold is satisfied by `quantity`;
/// 0 when no tier qualifies. Ties cannot occur (thresholds are unique).
pub(crate) fn tier_discount_bps(tiers: &[MintTier], quantity: u32) -> u16 {
    tiers
        .iter()
        .filter(|tier| tier.num_mints <= quantity)
        .max_by_key(|tier| tier.num_mints)
        .map(|tier| tier.mint_discount_bps)
        .unwrap_or(0)
}

/// Effective per-unit price. Discounts are additive in basis points, clamped
/// at 100% so a misconfigured table can never produce a negative price.
pub(crate) fn unit_price(
    config: &Config,
    base_price: u128,
    quantity: u32,
    affiliate_used: bool,
) -> u128 {
    let mut discount_bps = tier_discount_bps(&config.discounts.mint_tiers, quantity) as u32;
    if affiliate_used {
        discount_bps += config.discounts.affiliate_discount_bps as u32;
    }
    let discount_bps = discount_bps.min(BASIS_POINTS as u32);

    (U256::from(base_price) * U256::from(BASIS_POINTS as u32 - discount_bps)
        / U256::from(BASIS_POINTS))
    .as_u128()
}

/// Floor share of `total` in basis points.
pub(crate) fn bps_share(total: u128, bps: u16) -> u128 {
    (U256::from(total) * U256::from(bps) / U256::from(BASIS_POINTS)).as_u128()
}
