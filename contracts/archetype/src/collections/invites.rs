use crate::*;

impl Contract {
    pub(crate) fn set_invite(
        &mut self,
        actor_id: &AccountId,
        collection_id: &str,
        key: String,
        cid: String,
        invite: Invite,
    ) -> Result<(), ArchetypeError> {
        self.set_invites(
            actor_id,
            collection_id,
            vec![InviteInput { key, cid, invite }],
        )
    }

    /// Owner-only bulk replace. Each entry fully replaces any prior invite
    /// under its key (no merge); the minted counter starts over at zero.
    pub(crate) fn set_invites(
        &mut self,
        actor_id: &AccountId,
        collection_id: &str,
        invites: Vec<InviteInput>,
    ) -> Result<(), ArchetypeError> {
        if invites.is_empty() || invites.len() > MAX_INVITES_PER_CALL {
            return Err(ArchetypeError::InvalidInput(format!(
                "1-{} invites per call",
                MAX_INVITES_PER_CALL
            )));
        }

        let mut collection = self
            .collections
            .get(collection_id)
            .ok_or_else(ArchetypeError::collection_not_found)?
            .clone();

        guards::check_collection_owner(&collection, actor_id)?;

        for input in &invites {
            validation::validate_invite_input(input)?;
        }

        for InviteInput { key, cid, invite } in invites {
            events::emit_invite_set(actor_id, collection_id, &key, &cid, &invite);
            collection.invites.insert(
                key,
                InviteRecord {
                    invite,
                    cid,
                    minted: 0,
                },
            );
        }

        self.collections
            .insert(collection_id.to_string(), collection);
        Ok(())
    }

    /// Invite-side gate of the mint flow. Checks availability, window, the
    /// per-invite limit and the optional per-wallet cap, in that order.
    pub(crate) fn check_invite_open(
        &self,
        collection: &Collection,
        collection_id: &str,
        key: &str,
        minter_id: &AccountId,
        quantity: u32,
    ) -> Result<(), ArchetypeError> {
        let record = collection
            .invites
            .get(key)
            .ok_or(ArchetypeError::MintingPaused)?;

        if record.invite.limit == 0 {
            return Err(ArchetypeError::MintingPaused);
        }
        if env::block_timestamp() < record.invite.start {
            return Err(ArchetypeError::MintNotYetStarted);
        }
        if record.minted as u64 + quantity as u64 > record.invite.limit as u64 {
            return Err(ArchetypeError::ListMaxSupplyExceeded);
        }
        if let Some(cap) = record.invite.max_per_wallet {
            let already = self
                .wallet_minted
                .get(&guards::wallet_key(collection_id, key, minter_id))
                .copied()
                .unwrap_or(0);
            if already as u64 + quantity as u64 > cap as u64 {
                return Err(ArchetypeError::WalletMaxSupplyExceeded);
            }
        }
        Ok(())
    }

    /// Persist the invite-side counters for an accepted mint. Must run in the
    /// same call as the checks above; there is no read-then-later-write window.
    pub(crate) fn record_invite_mint(
        &mut self,
        collection: &mut Collection,
        collection_id: &str,
        key: &str,
        minter_id: &AccountId,
        quantity: u32,
    ) {
        if let Some(record) = collection.invites.get_mut(key) {
            record.minted += quantity;
            if record.invite.max_per_wallet.is_some() {
                let wallet_key = guards::wallet_key(collection_id, key, minter_id);
                let prev = self.wallet_minted.get(&wallet_key).copied().unwrap_or(0);
                self.wallet_minted.insert(wallet_key, prev + quantity);
            }
        }
    }
}
