//! Client model.

use serde::{Deserialize, Serialize};

/// Represents a client that work blocks are performed for.
///
/// Clients are referenced by work blocks but never owned by them: deleting
/// a client nulls the reference on its blocks rather than deleting the
/// blocks, which is why [`crate::models::WorkBlock::client_id`] is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier for the client.
    pub id: String,
    /// Unique display name of the client.
    pub name: String,
}
