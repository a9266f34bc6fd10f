use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum ArchetypeError {
    Unauthorized(String),
    NotFound(String),
    InvalidInput(String),
    InvalidConfig(String),
    InternalError(String),

    AlreadyInitialized,
    LockedForever(String),

    MintingPaused,
    MintNotYetStarted,
    WalletUnauthorizedToMint,
    InvalidSignature,

    ListMaxSupplyExceeded,
    WalletMaxSupplyExceeded,
    MaxSupplyExceeded,
    MaxBatchSizeExceeded,

    InsufficientDeposit(String),
    ExcessiveDeposit(String),

    BalanceEmpty,
    NotTokenOwner,
}

impl std::fmt::Display for ArchetypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
            Self::AlreadyInitialized => write!(f, "Collection is already initialized"),
            Self::LockedForever(what) => write!(f, "{} is locked forever", what),
            Self::MintingPaused => write!(f, "Minting is paused for this invite"),
            Self::MintNotYetStarted => write!(f, "Minting has not started for this invite"),
            Self::WalletUnauthorizedToMint => write!(f, "Wallet is not authorized to mint"),
            Self::InvalidSignature => write!(f, "Affiliate signature is invalid"),
            Self::ListMaxSupplyExceeded => write!(f, "Invite mint limit exceeded"),
            Self::WalletMaxSupplyExceeded => write!(f, "Per-wallet mint limit exceeded"),
            Self::MaxSupplyExceeded => write!(f, "Collection max supply exceeded"),
            Self::MaxBatchSizeExceeded => write!(f, "Max batch size exceeded"),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::ExcessiveDeposit(msg) => write!(f, "Excessive deposit: {}", msg),
            Self::BalanceEmpty => write!(f, "No balance to withdraw"),
            Self::NotTokenOwner => write!(f, "Only the token owner can perform this action"),
        }
    }
}

impl ArchetypeError {
    pub fn collection_not_found() -> Self {
        Self::NotFound("Collection not found".into())
    }
    pub fn token_not_found() -> Self {
        Self::NotFound("Token not found".into())
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
}
