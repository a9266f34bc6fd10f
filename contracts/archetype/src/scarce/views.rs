use crate::*;

#[near]
impl Contract {
    pub fn balance_of(&self, collection_id: String, account_id: AccountId) -> u32 {
        self.token_counts
            .get(&guards::account_key(&collection_id, &account_id))
            .copied()
            .unwrap_or(0)
    }

    pub fn owner_of(&self, token_id: String) -> Option<&AccountId> {
        self.token_owners.get(&token_id)
    }

    pub fn total_minted(&self, collection_id: String) -> u32 {
        self.collections
            .get(&collection_id)
            .map(|c| c.minted_count)
            .unwrap_or(0)
    }

    /// Base URI + token id when the collection is revealed, otherwise the
    /// unrevealed URI.
    pub fn token_uri(&self, token_id: String) -> Option<String> {
        let collection_id = collection_id_from_token_id(&token_id);
        let collection = self.collections.get(collection_id)?;
        self.token_owners.get(&token_id)?;
        if collection.config.base_uri.is_empty() {
            Some(collection.config.unrevealed_uri.clone())
        } else {
            Some(format!("{}{}", collection.config.base_uri, token_id))
        }
    }

    pub fn get_token_msg(&self, token_id: String) -> Option<&String> {
        self.token_msgs.get(&token_id)
    }
}
