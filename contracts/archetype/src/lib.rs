use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, LookupMap};
use near_sdk::{env, near, AccountId, NearToken, PanicOnDefault, Promise};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod events;
mod protocol;

mod collections;
mod factory;
mod fees;
mod scarce;

mod admin;
mod dispatch;
mod execute;


pub use collections::{
    Collection, Config, Discounts, Invite, InviteInput, InviteRecord, Lock, Locks, MintTier,
};
pub use constants::*;
pub use errors::ArchetypeError;
pub use fees::OwnerBalance;
pub(crate) use guards::collection_id_from_token_id;
pub use protocol::{Action, MintAuth};
pub use storage::StorageKey;

mod storage {
    use near_sdk::near;
    use near_sdk::BorshStorageKey;

    #[near]
    #[derive(BorshStorageKey)]
    pub enum StorageKey {
        Collections,
        AffiliateBalances,
        WalletMinted,
        TokenOwners,
        TokenCounts,
        TokenMsgs,
    }
}

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/archetype-labs/archetype-protocol",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    /// Factory owner: may swap the archetype version pointer and admin accounts.
    pub owner_id: AccountId,
    /// Payee of every collection's platform fee share.
    pub platform_account: AccountId,

    // Factory pointer invariant: bumping only affects collections created afterwards.
    pub archetype_version: u32,
    pub collections: IterableMap<String, Collection>,

    // Ledger invariant: covers ordinary affiliates and the super-affiliate alike.
    pub(crate) affiliate_balances: LookupMap<String, u128>,
    // Allocation invariant: per-invite per-wallet counters persist across invite replacement.
    pub(crate) wallet_minted: LookupMap<String, u32>,

    pub(crate) token_owners: LookupMap<String, AccountId>,
    pub(crate) token_counts: LookupMap<String, u32>,
    pub(crate) token_msgs: LookupMap<String, String>,
}
