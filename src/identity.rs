//! Identity resolution.
//!
//! Maps a configured identifier (email or display name) to the tracker's
//! stable account id via the free-text identity search.

use crate::error::EngineerError;
use crate::jira::Tracker;
use crate::models::ResolvedIdentity;
use tracing::warn;

/// Result cap for the identity search. Two is enough to observe ambiguity
/// without assuming uniqueness.
const USER_SEARCH_CAP: u32 = 2;

/// Resolves `identifier` to a canonical account identity.
///
/// Zero matches is a per-engineer failure. More than one match picks the
/// first returned and logs the potential misassignment; the underlying
/// search cannot distinguish an exact match from a near-match, so only
/// absence is treated as an error.
pub async fn resolve<T: Tracker>(
    tracker: &T,
    identifier: &str,
) -> Result<ResolvedIdentity, EngineerError> {
    let matches = tracker
        .search_users(identifier, USER_SEARCH_CAP)
        .await
        .map_err(|e| EngineerError::IdentityLookup(e.to_string()))?;

    let Some(first) = matches.first() else {
        return Err(EngineerError::IdentityNotFound);
    };

    if matches.len() > 1 {
        warn!(
            "Identity search for \"{}\" matched more than one account; using \"{}\" (first returned)",
            identifier, first.display_name
        );
    }

    Ok(ResolvedIdentity {
        input: identifier.to_string(),
        account_id: first.account_id.clone(),
        display_name: first.display_name.clone(),
    })
}
