use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(super) fn dispatch_withdrawals(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, ArchetypeError> {
        match action {
            Action::Withdraw { collection_id } => {
                let amount = self.withdraw(actor_id, &collection_id)?;
                near_sdk::serde_json::to_value(U128(amount))
                    .map_err(|_| ArchetypeError::InternalError("Failed to serialize result".into()))
            }
            _ => unreachable!("dispatch_withdrawals called with non-withdrawal action"),
        }
    }
}
