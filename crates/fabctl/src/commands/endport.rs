//! End port command handlers.
//!
//! End ports attach hosts behind a logic port. Creation posts a single
//! `endPort` object; lookups go through the plural `endPorts` listing
//! endpoint, which is the only place the controller reports them.

use serde_json::json;
use uuid::Uuid;

use fabctl_api::{Condition, ResourceKind, Session};

use crate::cli::{EndportArgs, EndportCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util::resolve_network;

pub async fn handle(
    session: &Session,
    args: EndportArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        EndportCommand::Create {
            name,
            description,
            network,
            switch,
            port,
        } => {
            let network_id = resolve_network(session, &network).await?;
            let switch_id = session
                .resolve_id_by_condition(
                    ResourceKind::Switch,
                    &Condition::name(&switch).field("logicNetworkId", network_id.clone()),
                )
                .await?;
            let port_id = session
                .resolve_id_by_condition(
                    ResourceKind::Port,
                    &Condition::name(&port).field("logicSwitchId", switch_id),
                )
                .await?;

            let body = json!({
                "endPort": {
                    "id": Uuid::new_v4().to_string(),
                    "name": name,
                    "description": description,
                    "logicNetworkId": network_id,
                    "logicPortId": port_id,
                }
            });

            let url = session.collection_url(ResourceKind::EndPort);
            let outcome = session.create(url, &body).await?;
            output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
            Ok(())
        }

        EndportCommand::Delete { name, network } => {
            let network_id = resolve_network(session, &network).await?;
            let condition = Condition::name(&name).field("logicNetworkId", network_id);
            let end_port_id = session
                .resolve_id_by_condition(ResourceKind::EndPorts, &condition)
                .await?;

            let url = session.object_url(ResourceKind::EndPort, &end_port_id)?;
            let outcome = session.delete(url).await?;
            output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
            Ok(())
        }

        EndportCommand::Query { name, network } => {
            let condition = match (name, network) {
                (Some(name), Some(network)) => {
                    let network_id = resolve_network(session, &network).await?;
                    Some(Condition::name(name).field("logicNetworkId", network_id))
                }
                (Some(name), None) => Some(Condition::name(name)),
                (None, _) => None,
            };

            let records = session
                .query(ResourceKind::EndPorts, condition.as_ref())
                .await?;
            output::print_output(&output::render_records(&global.output, &records), global.quiet);
            Ok(())
        }
    }
}
