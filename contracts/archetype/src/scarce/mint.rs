use crate::*;

impl Contract {
    /// Issue `quantity` sequential token ids to `receiver_id`. Ids are
    /// 1-based within the collection: "{collection_id}:{n}".
    pub(crate) fn issue_tokens(
        &mut self,
        collection: &mut Collection,
        collection_id: &str,
        receiver_id: &AccountId,
        quantity: u32,
    ) -> Vec<String> {
        let start = collection.minted_count;
        let token_ids: Vec<String> = (start..start + quantity)
            .map(|i| guards::make_token_id(collection_id, i + 1))
            .collect();

        for token_id in &token_ids {
            self.token_owners.insert(token_id.clone(), receiver_id.clone());
        }

        let count_key = guards::account_key(collection_id, receiver_id);
        let prev = self.token_counts.get(&count_key).copied().unwrap_or(0);
        self.token_counts.insert(count_key, prev + quantity);

        collection.minted_count += quantity;
        token_ids
    }
}
