use crate::*;

impl Contract {
    /// Mint entry: invite gate, allowlist proof, affiliate credential, exact
    /// payment, revenue split, token issuance. All-or-nothing within the call.
    pub(crate) fn mint(
        &mut self,
        minter_id: &AccountId,
        collection_id: &str,
        auth: MintAuth,
        quantity: u32,
        affiliate: Option<AccountId>,
        signature: Option<String>,
        deposit: u128,
    ) -> Result<Vec<String>, ArchetypeError> {
        if quantity == 0 {
            return Err(ArchetypeError::InvalidInput("Quantity must be > 0".into()));
        }

        let mut collection = self
            .collections
            .get(collection_id)
            .ok_or_else(ArchetypeError::collection_not_found)?
            .clone();

        self.check_invite_open(&collection, collection_id, &auth.key, minter_id, quantity)?;

        if !collections::allowlist::is_open_key(&auth.key) {
            collections::allowlist::verify_membership(minter_id, &auth.key, &auth.proof)?;
        }

        let affiliate = match affiliate {
            Some(account) => {
                collections::affiliate::verify_affiliate(
                    &collection.config.affiliate_signer,
                    &account,
                    signature.as_deref(),
                )?;
                Some(account)
            }
            None => None,
        };

        if quantity > collection.config.max_batch_size {
            return Err(ArchetypeError::MaxBatchSizeExceeded);
        }
        if collection.minted_count as u64 + quantity as u64 > collection.config.max_supply as u64 {
            return Err(ArchetypeError::MaxSupplyExceeded);
        }

        let invite_price = collection
            .invites
            .get(&auth.key)
            .map(|record| record.invite.price.0)
            .unwrap_or(0);
        let unit_price = fees::unit_price(
            &collection.config,
            invite_price,
            quantity,
            affiliate.is_some(),
        );
        let total_price = unit_price
            .checked_mul(quantity as u128)
            .ok_or_else(|| ArchetypeError::InternalError("Price overflow".into()))?;

        // Exact payment: mismatches reject instead of auto-refunding.
        if deposit < total_price {
            return Err(ArchetypeError::InsufficientDeposit(format!(
                "Required {}, got {}",
                total_price, deposit
            )));
        }
        if deposit > total_price {
            return Err(ArchetypeError::ExcessiveDeposit(format!(
                "Required {}, got {}",
                total_price, deposit
            )));
        }

        self.record_invite_mint(&mut collection, collection_id, &auth.key, minter_id, quantity);
        let split = self.credit_revenue(
            &mut collection,
            collection_id,
            total_price,
            affiliate.as_ref(),
        );
        let token_ids = self.issue_tokens(&mut collection, collection_id, minter_id, quantity);

        self.collections
            .insert(collection_id.to_string(), collection);

        events::emit_mint(&events::MintEvent {
            minter_id,
            collection_id,
            invite_key: &auth.key,
            quantity,
            total_price,
            affiliate: affiliate.as_ref(),
            owner_share: split.owner,
            platform_share: split.platform,
            affiliate_share: split.affiliate,
            super_affiliate_share: split.super_affiliate,
            token_ids: &token_ids,
        });
        Ok(token_ids)
    }
}
