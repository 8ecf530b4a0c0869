//! Logic switch command handlers.

use serde_json::json;
use uuid::Uuid;

use fabctl_api::{Condition, ResourceKind, Session};

use crate::cli::{GlobalOpts, SwitchArgs, SwitchCommand};
use crate::error::CliError;
use crate::output;

use super::util::resolve_network;

pub async fn handle(
    session: &Session,
    args: SwitchArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SwitchCommand::Create {
            name,
            description,
            network,
        } => {
            let network_id = resolve_network(session, &network).await?;

            let body = json!({
                "switch": [{
                    "id": Uuid::new_v4().to_string(),
                    "name": name,
                    "description": description,
                    "logicNetworkId": network_id,
                }]
            });

            let url = session.collection_url(ResourceKind::Switch);
            let outcome = session.create(url, &body).await?;
            output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
            Ok(())
        }

        SwitchCommand::Delete { name, network } => {
            let network_id = resolve_network(session, &network).await?;
            let condition = Condition::name(&name).field("logicNetworkId", network_id);
            let switch_id = session
                .resolve_id_by_condition(ResourceKind::Switch, &condition)
                .await?;

            let url = session.object_url(ResourceKind::Switch, &switch_id)?;
            let outcome = session.delete(url).await?;
            output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
            Ok(())
        }

        SwitchCommand::Query { name, network } => {
            let condition = match (name, network) {
                (Some(name), Some(network)) => {
                    let network_id = resolve_network(session, &network).await?;
                    Some(Condition::name(name).field("logicNetworkId", network_id))
                }
                (Some(name), None) => Some(Condition::name(name)),
                (None, _) => None,
            };

            let records = session.query(ResourceKind::Switch, condition.as_ref()).await?;
            output::print_output(&output::render_records(&global.output, &records), global.quiet);
            Ok(())
        }
    }
}
