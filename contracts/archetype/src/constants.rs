use near_sdk::NearToken;

pub const BASIS_POINTS: u16 = 10_000; // 100%

/// Invite key of all-zero bits: the public/open list, no proof required.
pub const ZERO_KEY: &str = "0000000000000000000000000000000000000000000000000000000000000000";

pub const MAX_COLLECTION_ID_LEN: usize = 64;
pub const MAX_NAME_LEN: usize = 128;
pub const MAX_SYMBOL_LEN: usize = 16;
pub const MAX_URI_LEN: usize = 512;
pub const MAX_CID_LEN: usize = 128;
pub const MAX_TOKEN_MSG_LEN: usize = 1_024;

pub const MAX_COLLECTION_SUPPLY: u32 = 1_000_000;
pub const MAX_MINT_TIERS: usize = 16;
pub const MAX_INVITES_PER_CALL: usize = 100;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const INITIAL_ARCHETYPE_VERSION: u32 = 1;
