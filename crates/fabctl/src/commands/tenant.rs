//! Tenant command handlers.
//!
//! Tenants are top-level objects: they resolve by name alone. The
//! create/update payload carries the fabric resource pool as resolved
//! fabric ids under `resPool.fabricIds`.

use serde_json::json;
use uuid::Uuid;

use fabctl_api::{Condition, ResourceKind, Session};

use crate::cli::{GlobalOpts, TenantArgs, TenantCommand};
use crate::error::CliError;
use crate::output;

use super::util::resolve_fabrics;

pub async fn handle(
    session: &Session,
    args: TenantArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        TenantCommand::Create {
            name,
            description,
            fabrics,
        } => {
            let fabric_ids = resolve_fabrics(session, &fabrics).await?;
            let body = json!({
                "tenant": [{
                    "id": Uuid::new_v4().to_string(),
                    "name": name,
                    "description": description,
                    "resPool": {
                        "fabricIds": fabric_ids,
                    },
                }]
            });

            let url = session.collection_url(ResourceKind::Tenant);
            let outcome = session.create(url, &body).await?;
            output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
            Ok(())
        }

        TenantCommand::Update {
            name,
            description,
            fabrics,
        } => {
            let tenant_id = session.resolve_id_by_name(ResourceKind::Tenant, &name).await?;

            let mut tenant = json!({
                "id": tenant_id,
                "name": name,
                "description": description,
            });
            if let Some(fabrics) = fabrics {
                let fabric_ids = resolve_fabrics(session, &fabrics).await?;
                tenant["resPool"] = json!({ "fabricIds": fabric_ids });
            }
            let body = json!({ "tenant": [tenant] });

            let url = session.object_url(ResourceKind::Tenant, &tenant_id)?;
            let outcome = session.update(url, &body).await?;
            output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
            Ok(())
        }

        TenantCommand::Delete { name } => {
            let tenant_id = session.resolve_id_by_name(ResourceKind::Tenant, &name).await?;

            let url = session.object_url(ResourceKind::Tenant, &tenant_id)?;
            let outcome = session.delete(url).await?;
            output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
            Ok(())
        }

        TenantCommand::Query { name } => {
            let condition = name.map(Condition::name);
            let records = session.query(ResourceKind::Tenant, condition.as_ref()).await?;
            output::print_output(&output::render_records(&global.output, &records), global.quiet);
            Ok(())
        }
    }
}
