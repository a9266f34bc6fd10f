use crate::*;

/// Owner-only config mutators, each paired with a one-way lock. A locked
/// field rejects its setter permanently; there is no unlock path.
impl Contract {
    fn with_collection<F>(
        &mut self,
        actor_id: &AccountId,
        collection_id: &str,
        mutate: F,
    ) -> Result<(), ArchetypeError>
    where
        F: FnOnce(&mut Collection) -> Result<&'static str, ArchetypeError>,
    {
        let mut collection = self
            .collections
            .get(collection_id)
            .ok_or_else(ArchetypeError::collection_not_found)?
            .clone();

        guards::check_collection_owner(&collection, actor_id)?;
        let field = mutate(&mut collection)?;

        self.collections
            .insert(collection_id.to_string(), collection);
        events::emit_config_updated(actor_id, collection_id, field);
        Ok(())
    }

    pub(crate) fn set_base_uri(
        &mut self,
        actor_id: &AccountId,
        collection_id: &str,
        base_uri: String,
    ) -> Result<(), ArchetypeError> {
        if base_uri.len() > MAX_URI_LEN {
            return Err(ArchetypeError::InvalidInput(format!(
                "URI must be at most {} characters",
                MAX_URI_LEN
            )));
        }
        self.with_collection(actor_id, collection_id, |collection| {
            collection.locks.uri.ensure_open("baseUri")?;
            collection.config.base_uri = base_uri;
            Ok("base_uri")
        })
    }

    pub(crate) fn set_max_supply(
        &mut self,
        actor_id: &AccountId,
        collection_id: &str,
        max_supply: u32,
    ) -> Result<(), ArchetypeError> {
        self.with_collection(actor_id, collection_id, |collection| {
            collection.locks.max_supply.ensure_open("maxSupply")?;
            if max_supply == 0 || max_supply > MAX_COLLECTION_SUPPLY {
                return Err(ArchetypeError::InvalidConfig(format!(
                    "max_supply must be 1-{}",
                    MAX_COLLECTION_SUPPLY
                )));
            }
            // Supply invariant: already-minted units can never exceed the cap.
            if max_supply < collection.minted_count {
                return Err(ArchetypeError::InvalidConfig(
                    "max_supply cannot go below the minted count".into(),
                ));
            }
            collection.config.max_supply = max_supply;
            Ok("max_supply")
        })
    }

    pub(crate) fn set_max_batch_size(
        &mut self,
        actor_id: &AccountId,
        collection_id: &str,
        max_batch_size: u32,
    ) -> Result<(), ArchetypeError> {
        self.with_collection(actor_id, collection_id, |collection| {
            collection.locks.max_batch_size.ensure_open("maxBatchSize")?;
            if max_batch_size == 0 {
                return Err(ArchetypeError::InvalidConfig(
                    "max_batch_size must be > 0".into(),
                ));
            }
            collection.config.max_batch_size = max_batch_size;
            Ok("max_batch_size")
        })
    }

    pub(crate) fn set_affiliate_fee(
        &mut self,
        actor_id: &AccountId,
        collection_id: &str,
        affiliate_fee_bps: u16,
    ) -> Result<(), ArchetypeError> {
        self.with_collection(actor_id, collection_id, |collection| {
            collection.locks.affiliate_fee.ensure_open("affiliateFee")?;
            if affiliate_fee_bps as u32 + collection.config.platform_fee_bps as u32
                > BASIS_POINTS as u32
            {
                return Err(ArchetypeError::InvalidConfig(
                    "affiliate_fee_bps + platform_fee_bps cannot exceed 10000".into(),
                ));
            }
            collection.config.affiliate_fee_bps = affiliate_fee_bps;
            Ok("affiliate_fee")
        })
    }

    pub(crate) fn set_discounts(
        &mut self,
        actor_id: &AccountId,
        collection_id: &str,
        discounts: Discounts,
    ) -> Result<(), ArchetypeError> {
        validation::validate_discounts(&discounts)?;
        self.with_collection(actor_id, collection_id, |collection| {
            collection.locks.discounts.ensure_open("discounts")?;
            collection.config.discounts = discounts;
            Ok("discounts")
        })
    }

    pub(crate) fn lock_field(
        &mut self,
        actor_id: &AccountId,
        collection_id: &str,
        field: LockField,
    ) -> Result<(), ArchetypeError> {
        let mut collection = self
            .collections
            .get(collection_id)
            .ok_or_else(ArchetypeError::collection_not_found)?
            .clone();

        guards::check_collection_owner(&collection, actor_id)?;

        // Idempotent: locking an already-locked field is a no-op.
        let name = match field {
            LockField::Uri => {
                collection.locks.uri.lock();
                "uri"
            }
            LockField::MaxSupply => {
                collection.locks.max_supply.lock();
                "max_supply"
            }
            LockField::MaxBatchSize => {
                collection.locks.max_batch_size.lock();
                "max_batch_size"
            }
            LockField::AffiliateFee => {
                collection.locks.affiliate_fee.lock();
                "affiliate_fee"
            }
            LockField::Discounts => {
                collection.locks.discounts.lock();
                "discounts"
            }
        };

        self.collections
            .insert(collection_id.to_string(), collection);
        events::emit_field_locked(actor_id, collection_id, name);
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub(crate) enum LockField {
    Uri,
    MaxSupply,
    MaxBatchSize,
    AffiliateFee,
    Discounts,
}
