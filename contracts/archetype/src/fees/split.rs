use crate::*;

/// Shares of one accepted payment, in yoctoNEAR.
pub(crate) struct RevenueSplit {
    pub owner: u128,
    pub platform: u128,
    pub affiliate: u128,
    pub super_affiliate: u128,
}

#[near(serializers = [json])]
#[derive(Clone)]
pub struct OwnerBalance {
    pub owner: U128,
    pub platform: U128,
}

impl Default for OwnerBalance {
    fn default() -> Self {
        Self {
            owner: U128(0),
            platform: U128(0),
        }
    }
}

/// Split `total` per the collection config. The super-affiliate, when
/// configured, takes half of the platform share; floor division leaves any
/// odd remainder with the platform.
pub(crate) fn split_revenue(config: &Config, total: u128, affiliate_used: bool) -> RevenueSplit {
    let platform_gross = fees::bps_share(total, config.platform_fee_bps);
    let (platform, super_affiliate) = match config.super_affiliate_payout {
        Some(_) => {
            let half = platform_gross / 2;
            (platform_gross - half, half)
        }
        None => (platform_gross, 0),
    };
    let affiliate = if affiliate_used {
        fees::bps_share(total, config.affiliate_fee_bps)
    } else {
        0
    };
    let owner = total - platform_gross - affiliate;
    RevenueSplit {
        owner,
        platform,
        affiliate,
        super_affiliate,
    }
}

impl Contract {
    /// Accrue one payment into the pull-payment ledger. No value moves here;
    /// beneficiaries withdraw later.
    pub(crate) fn credit_revenue(
        &mut self,
        collection: &mut Collection,
        collection_id: &str,
        total: u128,
        affiliate: Option<&AccountId>,
    ) -> RevenueSplit {
        let split = split_revenue(&collection.config, total, affiliate.is_some());

        collection.owner_balance += split.owner;
        collection.platform_balance += split.platform;
        collection.total_revenue += total;

        if split.affiliate > 0 {
            if let Some(account) = affiliate {
                self.credit_affiliate(collection_id, account, split.affiliate);
            }
        }
        if split.super_affiliate > 0 {
            if let Some(account) = collection.config.super_affiliate_payout.clone() {
                self.credit_affiliate(collection_id, &account, split.super_affiliate);
            }
        }
        split
    }

    fn credit_affiliate(&mut self, collection_id: &str, account: &AccountId, amount: u128) {
        let key = guards::account_key(collection_id, account);
        let prev = self.affiliate_balances.get(&key).copied().unwrap_or(0);
        self.affiliate_balances.insert(key, prev + amount);
    }

    pub(crate) fn affiliate_balance_of(&self, collection_id: &str, account: &AccountId) -> u128 {
        self.affiliate_balances
            .get(&guards::account_key(collection_id, account))
            .copied()
            .unwrap_or(0)
    }
}
