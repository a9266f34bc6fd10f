use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(super) fn dispatch_admin(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, ArchetypeError> {
        match action {
            Action::SetArchetype { version } => {
                self.set_archetype(actor_id, version)?;
                Ok(Value::Null)
            }
            Action::TransferOwnership { new_owner } => {
                self.transfer_ownership_internal(actor_id, new_owner)?;
                Ok(Value::Null)
            }
            Action::SetPlatformAccount { account_id } => {
                self.set_platform_account_internal(actor_id, account_id)?;
                Ok(Value::Null)
            }
            _ => unreachable!("dispatch_admin called with non-admin action"),
        }
    }
}
