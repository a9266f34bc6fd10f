use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, platform_account: Option<AccountId>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            platform_account: platform_account.unwrap_or_else(|| owner_id.clone()),
            owner_id,
            archetype_version: INITIAL_ARCHETYPE_VERSION,
            collections: IterableMap::new(StorageKey::Collections),
            affiliate_balances: LookupMap::new(StorageKey::AffiliateBalances),
            wallet_minted: LookupMap::new(StorageKey::WalletMinted),
            token_owners: LookupMap::new(StorageKey::TokenOwners),
            token_counts: LookupMap::new(StorageKey::TokenCounts),
            token_msgs: LookupMap::new(StorageKey::TokenMsgs),
        }
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_platform_account(&self) -> &AccountId {
        &self.platform_account
    }

    pub fn get_version(&self) -> &String {
        &self.version
    }
}

impl Contract {
    pub(crate) fn transfer_ownership_internal(
        &mut self,
        actor_id: &AccountId,
        new_owner: AccountId,
    ) -> Result<(), ArchetypeError> {
        guards::check_one_yocto()?;
        self.check_contract_owner(actor_id)?;
        if new_owner == self.owner_id {
            return Err(ArchetypeError::InvalidInput(
                "New owner must differ from current owner".into(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    pub(crate) fn set_platform_account_internal(
        &mut self,
        actor_id: &AccountId,
        account_id: AccountId,
    ) -> Result<(), ArchetypeError> {
        guards::check_one_yocto()?;
        self.check_contract_owner(actor_id)?;
        let old = self.platform_account.clone();
        self.platform_account = account_id;
        events::emit_platform_account_changed(actor_id, &old, &self.platform_account);
        Ok(())
    }
}
