// Announcement board command handlers
use super::require_admin;
use crate::error::AppResult;
use crate::models::{Info, InfoId, Reply};
use crate::state::SharedState;

/// Admin-only. Blank text is ignored and yields `Ok(None)`.
pub fn post_info(state: &SharedState, text: &str) -> AppResult<Option<Info>> {
    let mut guard = state.lock();
    require_admin(&guard, "post info")?;
    Ok(guard.post_info(text))
}

/// Anonymous replies are open to every viewer
pub fn reply_info(state: &SharedState, info_id: InfoId, text: &str) -> Option<Reply> {
    state.lock().reply_info(info_id, text)
}

pub fn list_infos(state: &SharedState) -> Vec<Info> {
    state.lock().infos().to_vec()
}
