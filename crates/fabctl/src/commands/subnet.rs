//! Logic subnet command handlers.
//!
//! Subnets have no name; they are keyed by CIDR within their owning
//! router. The resolve chain runs network -> router -> subnet.

use serde_json::json;
use uuid::Uuid;

use fabctl_api::{Condition, ResourceKind, Session};

use crate::cli::{GlobalOpts, SubnetArgs, SubnetCommand};
use crate::error::CliError;
use crate::output;

use super::util::resolve_network;

/// Resolve a router scoped to its network.
async fn resolve_router(
    session: &Session,
    router: &str,
    network: &str,
) -> Result<String, CliError> {
    let network_id = resolve_network(session, network).await?;
    let condition = Condition::name(router).field("logicNetworkId", network_id);
    Ok(session
        .resolve_id_by_condition(ResourceKind::Router, &condition)
        .await?)
}

pub async fn handle(
    session: &Session,
    args: SubnetArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SubnetCommand::Create {
            cidr,
            gateway_ip,
            router,
            network,
        } => {
            let router_id = resolve_router(session, &router, &network).await?;

            let body = json!({
                "subnet": [{
                    "id": Uuid::new_v4().to_string(),
                    "cidr": cidr,
                    "gatewayIp": gateway_ip,
                    "logicRouterId": router_id,
                }]
            });

            let url = session.collection_url(ResourceKind::Subnet);
            let outcome = session.create(url, &body).await?;
            output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
            Ok(())
        }

        SubnetCommand::Delete {
            cidr,
            router,
            network,
        } => {
            let router_id = resolve_router(session, &router, &network).await?;
            let condition = Condition::new()
                .field("cidr", cidr)
                .field("logicRouterId", router_id);
            let subnet_id = session
                .resolve_id_by_condition(ResourceKind::Subnet, &condition)
                .await?;

            let url = session.object_url(ResourceKind::Subnet, &subnet_id)?;
            let outcome = session.delete(url).await?;
            output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
            Ok(())
        }

        SubnetCommand::Query { router, network } => {
            // Scoped listing filters by the owning router only; there
            // is no per-CIDR query.
            let condition = match (router, network) {
                (Some(router), Some(network)) => {
                    let router_id = resolve_router(session, &router, &network).await?;
                    Some(Condition::new().field("logicRouterId", router_id))
                }
                _ => None,
            };

            let records = session.query(ResourceKind::Subnet, condition.as_ref()).await?;
            output::print_output(&output::render_records(&global.output, &records), global.quiet);
            Ok(())
        }
    }
}
