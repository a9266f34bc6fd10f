use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(super) fn dispatch_payments(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, ArchetypeError> {
        match action {
            Action::Mint {
                collection_id,
                auth,
                quantity,
                affiliate,
                signature,
            } => {
                let deposit = env::attached_deposit().as_yoctonear();
                let token_ids = self.mint(
                    actor_id,
                    &collection_id,
                    auth,
                    quantity,
                    affiliate,
                    signature,
                    deposit,
                )?;
                near_sdk::serde_json::to_value(token_ids)
                    .map_err(|_| ArchetypeError::InternalError("Failed to serialize result".into()))
            }
            _ => unreachable!("dispatch_payments called with non-payment action"),
        }
    }
}
