use crate::*;

impl Contract {
    /// Caller-scoped pull withdrawal. Role resolution follows the source
    /// order: collection owner (or alt payout) first, then the platform
    /// account, then affiliate. Each call drains exactly one role's balance.
    ///
    /// The balance is zeroed and persisted before the transfer Promise is
    /// created (checks-effects-interactions).
    pub(crate) fn withdraw(
        &mut self,
        actor_id: &AccountId,
        collection_id: &str,
    ) -> Result<u128, ArchetypeError> {
        let mut collection = self
            .collections
            .get(collection_id)
            .ok_or_else(ArchetypeError::collection_not_found)?
            .clone();

        let is_owner = actor_id == &collection.owner_id
            || collection.config.owner_alt_payout.as_ref() == Some(actor_id);

        let (amount, payee) = if is_owner {
            let amount = collection.owner_balance;
            collection.owner_balance = 0;
            let payee = collection
                .config
                .owner_alt_payout
                .clone()
                .unwrap_or_else(|| collection.owner_id.clone());
            (amount, payee)
        } else if actor_id == &self.platform_account {
            let amount = collection.platform_balance;
            collection.platform_balance = 0;
            (amount, actor_id.clone())
        } else {
            let key = guards::account_key(collection_id, actor_id);
            let amount = self.affiliate_balances.remove(&key).unwrap_or(0);
            (amount, actor_id.clone())
        };

        if amount == 0 {
            return Err(ArchetypeError::BalanceEmpty);
        }

        collection.total_withdrawn += amount;
        self.collections
            .insert(collection_id.to_string(), collection);

        let _ = Promise::new(payee.clone()).transfer(NearToken::from_yoctonear(amount));
        events::emit_withdrawal(actor_id, collection_id, &payee, amount);
        Ok(amount)
    }
}
