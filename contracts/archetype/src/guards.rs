use crate::*;

pub(crate) fn check_one_yocto() -> Result<(), ArchetypeError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(ArchetypeError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), ArchetypeError> {
        if actor_id != &self.owner_id {
            return Err(ArchetypeError::only_owner("the factory owner"));
        }
        Ok(())
    }
}

pub(crate) fn check_collection_owner(
    collection: &Collection,
    actor_id: &AccountId,
) -> Result<(), ArchetypeError> {
    if actor_id != &collection.owner_id {
        return Err(ArchetypeError::only_owner("the collection owner"));
    }
    Ok(())
}

pub(crate) fn make_token_id(collection_id: &str, index: u32) -> String {
    format!("{}:{}", collection_id, index)
}

pub(crate) fn collection_id_from_token_id(token_id: &str) -> &str {
    token_id.split_once(':').map_or("", |(prefix, _)| prefix)
}

/// Composite key for per-collection per-account maps.
pub(crate) fn account_key(collection_id: &str, account_id: &AccountId) -> String {
    format!("{}:{}", collection_id, account_id)
}

/// Composite key for per-invite per-wallet mint counters.
pub(crate) fn wallet_key(collection_id: &str, invite_key: &str, account_id: &AccountId) -> String {
    format!("{}:{}:{}", collection_id, invite_key, account_id)
}
