use near_sdk::json_types::U128;
use near_sdk::near;
use near_sdk::AccountId;
use std::collections::HashMap;

use crate::errors::ArchetypeError;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct MintTier {
    /// Quantity threshold: the tier applies to mints of at least this many units.
    pub num_mints: u32,
    pub mint_discount_bps: u16,
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Discounts {
    #[serde(default)]
    pub affiliate_discount_bps: u16,
    #[serde(default)]
    pub mint_tiers: Vec<MintTier>,
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Config {
    pub base_uri: String,
    pub unrevealed_uri: String,
    /// Hex-encoded 32-byte ed25519 public key attesting affiliate credentials.
    pub affiliate_signer: String,
    #[serde(default)]
    pub owner_alt_payout: Option<AccountId>,
    #[serde(default)]
    pub super_affiliate_payout: Option<AccountId>,
    pub max_supply: u32,
    pub max_batch_size: u32,
    pub affiliate_fee_bps: u16,
    pub platform_fee_bps: u16,
    #[serde(default)]
    pub discounts: Discounts,
}

#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Lock {
    #[default]
    Open,
    Locked,
}

impl Lock {
    // One-way transition: there is no method back to Open.
    pub(crate) fn lock(&mut self) {
        *self = Lock::Locked;
    }

    pub(crate) fn ensure_open(&self, what: &str) -> Result<(), ArchetypeError> {
        match self {
            Lock::Open => Ok(()),
            Lock::Locked => Err(ArchetypeError::LockedForever(what.into())),
        }
    }
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Locks {
    #[serde(default)]
    pub uri: Lock,
    #[serde(default)]
    pub max_supply: Lock,
    #[serde(default)]
    pub max_batch_size: Lock,
    #[serde(default)]
    pub affiliate_fee: Lock,
    #[serde(default)]
    pub discounts: Lock,
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Invite {
    pub price: U128,
    /// Unix timestamp in nanoseconds; the invite is inactive before this time.
    pub start: u64,
    /// Total units mintable under this key; 0 closes the invite.
    pub limit: u32,
    #[serde(default)]
    pub max_per_wallet: Option<u32>,
}

/// Stored invite record: the caller-supplied invite plus its published list
/// CID and the persisted minted counter.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct InviteRecord {
    #[serde(flatten)]
    pub invite: Invite,
    pub cid: String,
    pub minted: u32,
}

#[near(serializers = [json])]
#[derive(Clone)]
pub struct InviteInput {
    pub key: String,
    #[serde(default)]
    pub cid: String,
    pub invite: Invite,
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Collection {
    pub owner_id: AccountId,
    pub name: String,
    pub symbol: String,
    /// Archetype version in force when this instance was created; later
    /// factory pointer swaps never touch it.
    pub logic_version: u32,
    pub created_at: u64,
    pub config: Config,
    #[serde(default)]
    pub locks: Locks,
    #[serde(default)]
    pub invites: HashMap<String, InviteRecord>,
    pub minted_count: u32,
    // Ledger invariant: credited totals equal accepted payments minus withdrawals.
    #[serde(default)]
    pub owner_balance: u128,
    #[serde(default)]
    pub platform_balance: u128,
    #[serde(default)]
    pub total_revenue: u128,
    #[serde(default)]
    pub total_withdrawn: u128,
}
