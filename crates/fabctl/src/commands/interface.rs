//! Router interface command handlers.
//!
//! The longest resolve chain: network -> router and switch (both
//! scoped by the network), then each CIDR -> subnet id scoped by the
//! router. The interface binds the router to the switch with the
//! resolved subnets under `ip.subnetIds`.

use serde_json::json;
use uuid::Uuid;

use fabctl_api::{Condition, ResourceKind, Session};

use crate::cli::{GlobalOpts, InterfaceArgs, InterfaceCommand};
use crate::error::CliError;
use crate::output;

use super::util::resolve_network;

pub async fn handle(
    session: &Session,
    args: InterfaceArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        InterfaceCommand::Create {
            name,
            router,
            switch,
            network,
            cidrs,
        } => {
            let network_id = resolve_network(session, &network).await?;
            let router_id = session
                .resolve_id_by_condition(
                    ResourceKind::Router,
                    &Condition::name(&router).field("logicNetworkId", network_id.clone()),
                )
                .await?;
            let switch_id = session
                .resolve_id_by_condition(
                    ResourceKind::Switch,
                    &Condition::name(&switch).field("logicNetworkId", network_id),
                )
                .await?;

            let mut subnet_ids = Vec::with_capacity(cidrs.len());
            for cidr in &cidrs {
                let condition = Condition::new()
                    .field("cidr", cidr.clone())
                    .field("logicRouterId", router_id.clone());
                subnet_ids.push(
                    session
                        .resolve_id_by_condition(ResourceKind::Subnet, &condition)
                        .await?,
                );
            }

            let body = json!({
                "interface": [{
                    "id": Uuid::new_v4().to_string(),
                    "name": name,
                    "interfaceType": "RouterInterface",
                    "logicRouterId": router_id,
                    "logicSwitchId": switch_id,
                    "ip": {
                        "subnetIds": subnet_ids,
                    },
                }]
            });

            let url = session.collection_url(ResourceKind::Interface);
            let outcome = session.create(url, &body).await?;
            output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
            Ok(())
        }

        InterfaceCommand::Delete {
            name,
            router,
            network,
        } => {
            let network_id = resolve_network(session, &network).await?;
            let router_id = session
                .resolve_id_by_condition(
                    ResourceKind::Router,
                    &Condition::name(&router).field("logicNetworkId", network_id),
                )
                .await?;
            let condition = Condition::name(&name).field("logicRouterId", router_id);
            let interface_id = session
                .resolve_id_by_condition(ResourceKind::Interface, &condition)
                .await?;

            let url = session.object_url(ResourceKind::Interface, &interface_id)?;
            let outcome = session.delete(url).await?;
            output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
            Ok(())
        }

        InterfaceCommand::Query {
            name,
            router,
            network,
        } => {
            let condition = match (name, router, network) {
                (Some(name), Some(router), Some(network)) => {
                    let network_id = resolve_network(session, &network).await?;
                    let router_id = session
                        .resolve_id_by_condition(
                            ResourceKind::Router,
                            &Condition::name(&router).field("logicNetworkId", network_id),
                        )
                        .await?;
                    Some(Condition::name(name).field("logicRouterId", router_id))
                }
                (Some(name), ..) => Some(Condition::name(name)),
                (None, ..) => None,
            };

            let records = session
                .query(ResourceKind::Interface, condition.as_ref())
                .await?;
            output::print_output(&output::render_records(&global.output, &records), global.quiet);
            Ok(())
        }
    }
}
