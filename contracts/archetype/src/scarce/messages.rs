use crate::*;

impl Contract {
    /// Holder-settable token message, overwritten on each call. The message
    /// stays with the token; transfers do not clear it.
    pub(crate) fn set_token_msg(
        &mut self,
        actor_id: &AccountId,
        token_id: &str,
        msg: String,
    ) -> Result<(), ArchetypeError> {
        if msg.len() > MAX_TOKEN_MSG_LEN {
            return Err(ArchetypeError::InvalidInput(format!(
                "Message must be at most {} bytes",
                MAX_TOKEN_MSG_LEN
            )));
        }
        let owner = self
            .token_owners
            .get(token_id)
            .ok_or_else(ArchetypeError::token_not_found)?;
        if owner != actor_id {
            return Err(ArchetypeError::NotTokenOwner);
        }
        self.token_msgs.insert(token_id.to_string(), msg);
        events::emit_token_msg_set(actor_id, token_id);
        Ok(())
    }
}
