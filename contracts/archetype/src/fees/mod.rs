mod pricing;
mod split;
mod withdraw;

pub(crate) use pricing::{bps_share, tier_discount_bps, unit_price};
pub use split::OwnerBalance;
pub(crate) use split::{split_revenue, RevenueSplit};
