//! Helpers shared across command handlers.

use fabctl_api::{ResourceKind, Session};

use crate::error::CliError;

/// Resolve each fabric name to its controller id, in input order.
pub async fn resolve_fabrics(session: &Session, fabrics: &[String]) -> Result<Vec<String>, CliError> {
    let mut ids = Vec::with_capacity(fabrics.len());
    for fabric in fabrics {
        ids.push(session.resolve_id_by_name(ResourceKind::Fabric, fabric).await?);
    }
    Ok(ids)
}

/// Resolve a logic network by name (the scope for most child lookups).
pub async fn resolve_network(session: &Session, network: &str) -> Result<String, CliError> {
    Ok(session.resolve_id_by_name(ResourceKind::Network, network).await?)
}
