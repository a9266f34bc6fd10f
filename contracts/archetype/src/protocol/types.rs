use near_sdk::near;
use near_sdk::AccountId;

use crate::collections::{Config, Discounts, Invite, InviteInput};

/// Invite credential accompanying a mint: the list key (Merkle root) and the
/// sibling path proving the minter's membership. The all-zero key is the
/// public list and takes an empty proof.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct MintAuth {
    pub key: String,
    #[serde(default)]
    pub proof: Vec<String>,
}

#[near(serializers = [json])]
#[serde(tag = "type", rename_all = "snake_case")]
#[derive(Clone)]
pub enum Action {
    CreateCollection {
        collection_id: String,
        owner_id: AccountId,
        name: String,
        symbol: String,
        config: Config,
    },
    SetArchetype {
        version: u32,
    },

    SetInvite {
        collection_id: String,
        key: String,
        #[serde(default)]
        cid: String,
        invite: Invite,
    },
    SetInvites {
        collection_id: String,
        invites: Vec<InviteInput>,
    },

    SetBaseUri {
        collection_id: String,
        base_uri: String,
    },
    SetMaxSupply {
        collection_id: String,
        max_supply: u32,
    },
    SetMaxBatchSize {
        collection_id: String,
        max_batch_size: u32,
    },
    SetAffiliateFee {
        collection_id: String,
        affiliate_fee_bps: u16,
    },
    SetDiscounts {
        collection_id: String,
        discounts: Discounts,
    },
    LockUri {
        collection_id: String,
    },
    LockMaxSupply {
        collection_id: String,
    },
    LockMaxBatchSize {
        collection_id: String,
    },
    LockAffiliateFee {
        collection_id: String,
    },
    LockDiscounts {
        collection_id: String,
    },

    Mint {
        collection_id: String,
        auth: MintAuth,
        quantity: u32,
        #[serde(default)]
        affiliate: Option<AccountId>,
        #[serde(default)]
        signature: Option<String>,
    },
    Withdraw {
        collection_id: String,
    },

    SetTokenMsg {
        token_id: String,
        msg: String,
    },

    TransferOwnership {
        new_owner: AccountId,
    },
    SetPlatformAccount {
        account_id: AccountId,
    },
}
