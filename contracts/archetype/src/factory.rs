use crate::*;
use std::collections::HashMap;

impl Contract {
    /// Instantiate a new collection against the archetype version currently
    /// in force. The collection id is the instance's address; creating it
    /// twice is the "second initialization" and fails permanently.
    pub(crate) fn create_collection(
        &mut self,
        creator_id: &AccountId,
        collection_id: String,
        owner_id: AccountId,
        name: String,
        symbol: String,
        config: Config,
    ) -> Result<(), ArchetypeError> {
        validation::validate_collection_id(&collection_id)?;
        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return Err(ArchetypeError::InvalidInput(format!(
                "Name must be 1-{} characters",
                MAX_NAME_LEN
            )));
        }
        if symbol.is_empty() || symbol.len() > MAX_SYMBOL_LEN {
            return Err(ArchetypeError::InvalidInput(format!(
                "Symbol must be 1-{} characters",
                MAX_SYMBOL_LEN
            )));
        }
        validation::validate_config(&config)?;

        if self.collections.contains_key(&collection_id) {
            return Err(ArchetypeError::AlreadyInitialized);
        }

        let collection = Collection {
            owner_id: owner_id.clone(),
            name,
            symbol,
            logic_version: self.archetype_version,
            created_at: env::block_timestamp(),
            config,
            locks: Locks::default(),
            invites: HashMap::new(),
            minted_count: 0,
            owner_balance: 0,
            platform_balance: 0,
            total_revenue: 0,
            total_withdrawn: 0,
        };

        self.collections.insert(collection_id.clone(), collection);

        events::emit_collection_created(
            creator_id,
            &owner_id,
            &collection_id,
            self.archetype_version,
        );
        Ok(())
    }

    /// Swap the implementation pointer for future creations only; existing
    /// collections keep the version they were created against.
    pub(crate) fn set_archetype(
        &mut self,
        actor_id: &AccountId,
        version: u32,
    ) -> Result<(), ArchetypeError> {
        self.check_contract_owner(actor_id)?;
        if version <= self.archetype_version {
            return Err(ArchetypeError::InvalidInput(
                "Archetype version must increase".into(),
            ));
        }
        let old = self.archetype_version;
        self.archetype_version = version;
        events::emit_archetype_changed(actor_id, old, version);
        Ok(())
    }
}
