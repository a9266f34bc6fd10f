use crate::collections::LockField;
use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(super) fn dispatch_collections(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, ArchetypeError> {
        match action {
            Action::CreateCollection {
                collection_id,
                owner_id,
                name,
                symbol,
                config,
            } => {
                self.create_collection(actor_id, collection_id, owner_id, name, symbol, config)?;
                Ok(Value::Null)
            }
            Action::SetInvite {
                collection_id,
                key,
                cid,
                invite,
            } => {
                self.set_invite(actor_id, &collection_id, key, cid, invite)?;
                Ok(Value::Null)
            }
            Action::SetInvites {
                collection_id,
                invites,
            } => {
                self.set_invites(actor_id, &collection_id, invites)?;
                Ok(Value::Null)
            }
            Action::SetBaseUri {
                collection_id,
                base_uri,
            } => {
                self.set_base_uri(actor_id, &collection_id, base_uri)?;
                Ok(Value::Null)
            }
            Action::SetMaxSupply {
                collection_id,
                max_supply,
            } => {
                self.set_max_supply(actor_id, &collection_id, max_supply)?;
                Ok(Value::Null)
            }
            Action::SetMaxBatchSize {
                collection_id,
                max_batch_size,
            } => {
                self.set_max_batch_size(actor_id, &collection_id, max_batch_size)?;
                Ok(Value::Null)
            }
            Action::SetAffiliateFee {
                collection_id,
                affiliate_fee_bps,
            } => {
                self.set_affiliate_fee(actor_id, &collection_id, affiliate_fee_bps)?;
                Ok(Value::Null)
            }
            Action::SetDiscounts {
                collection_id,
                discounts,
            } => {
                self.set_discounts(actor_id, &collection_id, discounts)?;
                Ok(Value::Null)
            }
            Action::LockUri { collection_id } => {
                self.lock_field(actor_id, &collection_id, LockField::Uri)?;
                Ok(Value::Null)
            }
            Action::LockMaxSupply { collection_id } => {
                self.lock_field(actor_id, &collection_id, LockField::MaxSupply)?;
                Ok(Value::Null)
            }
            Action::LockMaxBatchSize { collection_id } => {
                self.lock_field(actor_id, &collection_id, LockField::MaxBatchSize)?;
                Ok(Value::Null)
            }
            Action::LockAffiliateFee { collection_id } => {
                self.lock_field(actor_id, &collection_id, LockField::AffiliateFee)?;
                Ok(Value::Null)
            }
            Action::LockDiscounts { collection_id } => {
                self.lock_field(actor_id, &collection_id, LockField::Discounts)?;
                Ok(Value::Null)
            }
            _ => unreachable!("dispatch_collections called with non-collection action"),
        }
    }
}
