use crate::*;
use near_sdk::serde_json::Value;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn execute(&mut self, action: Action) -> Result<Value, ArchetypeError> {
        let actor_id = env::predecessor_account_id();
        self.dispatch_action(action, &actor_id)
    }
}
