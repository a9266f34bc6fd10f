use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(super) fn dispatch_scarce(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, ArchetypeError> {
        match action {
            Action::SetTokenMsg { token_id, msg } => {
                self.set_token_msg(actor_id, &token_id, msg)?;
                Ok(Value::Null)
            }
            _ => unreachable!("dispatch_scarce called with non-scarce action"),
        }
    }
}
