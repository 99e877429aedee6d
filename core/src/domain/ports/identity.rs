//! Identity provider port

use crate::domain::entities::OwnerId;
use crate::error::IdentityError;

/// Supplies the stable anonymous owner identifier
///
/// Implementations create the identifier on first use and return the same
/// value afterwards.
pub trait IdentityProvider: Send + Sync {
    fn owner_id(&self) -> Result<OwnerId, IdentityError>;
}

/// Identity fixed at construction, e.g. from configuration
#[derive(Debug, Clone)]
pub struct StaticIdentity(pub OwnerId);

impl IdentityProvider for StaticIdentity {
    fn owner_id(&self) -> Result<OwnerId, IdentityError> {
        Ok(self.0.clone())
    }
}
