//! Logic router command handlers.
//!
//! Routers live inside a logic network, so delete and scoped query
//! resolve the router by name plus the network's resolved id. The
//! optional `--fabric` pins the router's master location by fabric
//! name; the controller accepts the name directly there.

use serde_json::json;
use uuid::Uuid;

use fabctl_api::{Condition, ResourceKind, Session};

use crate::cli::{GlobalOpts, RouterArgs, RouterCommand};
use crate::error::CliError;
use crate::output;

use super::util::resolve_network;

pub async fn handle(
    session: &Session,
    args: RouterArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        RouterCommand::Create {
            name,
            description,
            network,
            fabric,
        } => {
            let network_id = resolve_network(session, &network).await?;

            let mut router = json!({
                "id": Uuid::new_v4().to_string(),
                "name": name,
                "description": description,
                "type": "Normal",
                "logicNetworkId": network_id,
            });
            if let Some(fabric) = fabric {
                router["routerLocations"] = json!([{
                    "fabricRole": "master",
                    "fabricName": fabric,
                }]);
            }
            let body = json!({ "router": router });

            let url = session.collection_url(ResourceKind::Router);
            let outcome = session.create(url, &body).await?;
            output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
            Ok(())
        }

        RouterCommand::Delete { name, network } => {
            let network_id = resolve_network(session, &network).await?;
            let condition = Condition::name(&name).field("logicNetworkId", network_id);
            let router_id = session
                .resolve_id_by_condition(ResourceKind::Router, &condition)
                .await?;

            let url = session.object_url(ResourceKind::Router, &router_id)?;
            let outcome = session.delete(url).await?;
            output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
            Ok(())
        }

        RouterCommand::Query { name, network } => {
            let condition = match (name, network) {
                (Some(name), Some(network)) => {
                    let network_id = resolve_network(session, &network).await?;
                    Some(Condition::name(name).field("logicNetworkId", network_id))
                }
                (Some(name), None) => Some(Condition::name(name)),
                (None, _) => None,
            };

            let records = session.query(ResourceKind::Router, condition.as_ref()).await?;
            output::print_output(&output::render_records(&global.output, &records), global.quiet);
            Ok(())
        }
    }
}
