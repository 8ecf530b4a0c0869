//! Logic network command handlers.
//!
//! Unlike most kinds the network payload wraps a single object, not an
//! array, and the fabric list travels under the singular `fabricId`
//! key. Both quirks come from the controller's API.

use serde_json::json;
use uuid::Uuid;

use fabctl_api::{Condition, ResourceKind, Session};

use crate::cli::{GlobalOpts, NetworkArgs, NetworkCommand};
use crate::error::CliError;
use crate::output;

use super::util::resolve_fabrics;

pub async fn handle(
    session: &Session,
    args: NetworkArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        NetworkCommand::Create {
            name,
            description,
            tenant,
            fabrics,
        } => {
            let fabric_ids = resolve_fabrics(session, &fabrics).await?;
            let tenant_id = session.resolve_id_by_name(ResourceKind::Tenant, &tenant).await?;

            let body = json!({
                "network": {
                    "id": Uuid::new_v4().to_string(),
                    "name": name,
                    "description": description,
                    "tenantId": tenant_id,
                    "fabricId": fabric_ids,
                }
            });

            let url = session.collection_url(ResourceKind::Network);
            let outcome = session.create(url, &body).await?;
            output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
            Ok(())
        }

        NetworkCommand::Update {
            name,
            description,
            tenant,
            fabrics,
        } => {
            let tenant_id = session.resolve_id_by_name(ResourceKind::Tenant, &tenant).await?;
            let network_id = session.resolve_id_by_name(ResourceKind::Network, &name).await?;

            let mut network = json!({
                "id": network_id,
                "name": name,
                "description": description,
                "tenantId": tenant_id,
            });
            if let Some(fabrics) = fabrics {
                let fabric_ids = resolve_fabrics(session, &fabrics).await?;
                network["fabricId"] = json!(fabric_ids);
            }
            let body = json!({ "network": network });

            let url = session.object_url(ResourceKind::Network, &network_id)?;
            let outcome = session.update(url, &body).await?;
            output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
            Ok(())
        }

        NetworkCommand::Delete { name } => {
            let network_id = session.resolve_id_by_name(ResourceKind::Network, &name).await?;

            let url = session.object_url(ResourceKind::Network, &network_id)?;
            let outcome = session.delete(url).await?;
            output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
            Ok(())
        }

        NetworkCommand::Query { name } => {
            let condition = name.map(Condition::name);
            let records = session.query(ResourceKind::Network, condition.as_ref()).await?;
            output::print_output(&output::render_records(&global.output, &records), global.quiet);
            Ok(())
        }
    }
}
