use crate::fees::OwnerBalance;
use crate::*;

#[near]
impl Contract {
    pub fn get_collection(&self, collection_id: String) -> Option<&Collection> {
        self.collections.get(&collection_id)
    }

    pub fn get_config(&self, collection_id: String) -> Option<&Config> {
        self.collections.get(&collection_id).map(|c| &c.config)
    }

    pub fn get_locks(&self, collection_id: String) -> Option<&Locks> {
        self.collections.get(&collection_id).map(|c| &c.locks)
    }

    pub fn get_invite(&self, collection_id: String, key: String) -> Option<&InviteRecord> {
        self.collections
            .get(&collection_id)
            .and_then(|c| c.invites.get(&key))
    }

    pub fn get_invites(&self, collection_id: String) -> Vec<(&String, &InviteRecord)> {
        self.collections
            .get(&collection_id)
            .map(|c| c.invites.iter().collect())
            .unwrap_or_default()
    }

    pub fn owner_balance(&self, collection_id: String) -> OwnerBalance {
        self.collections
            .get(&collection_id)
            .map(|c| OwnerBalance {
                owner: U128(c.owner_balance),
                platform: U128(c.platform_balance),
            })
            .unwrap_or_default()
    }

    pub fn affiliate_balance(&self, collection_id: String, account_id: AccountId) -> U128 {
        U128(self.affiliate_balance_of(&collection_id, &account_id))
    }

    /// Implementation pointer used for future collection creations.
    pub fn archetype(&self) -> u32 {
        self.archetype_version
    }
}
