//! Logic port command handlers.
//!
//! A port binds a logic switch to a physical device port. Without
//! `--vlan` the access info is UNTAG; supplying one switches it to
//! DOT1Q and carries the VLAN id.

use serde_json::json;
use uuid::Uuid;

use fabctl_api::{Condition, ResourceKind, Session};

use crate::cli::{GlobalOpts, PortArgs, PortCommand};
use crate::error::CliError;
use crate::output;

use super::util::resolve_network;

/// Resolve a switch scoped to its network.
async fn resolve_switch(
    session: &Session,
    switch: &str,
    network: &str,
) -> Result<String, CliError> {
    let network_id = resolve_network(session, network).await?;
    let condition = Condition::name(switch).field("logicNetworkId", network_id);
    Ok(session
        .resolve_id_by_condition(ResourceKind::Switch, &condition)
        .await?)
}

pub async fn handle(session: &Session, args: PortArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        PortCommand::Create {
            name,
            description,
            network,
            switch,
            device_ip,
            port_name,
            vlan,
        } => {
            let switch_id = resolve_switch(session, &switch, &network).await?;

            let mut access_info = json!({
                "mode": "UNI",
                "type": "UNTAG",
                "location": [{
                    "deviceIp": device_ip,
                    "portName": port_name,
                }],
            });
            if let Some(vlan) = vlan {
                access_info["type"] = json!("DOT1Q");
                access_info["vlan"] = json!(vlan);
            }

            let body = json!({
                "port": [{
                    "id": Uuid::new_v4().to_string(),
                    "name": name,
                    "description": description,
                    "logicSwitchId": switch_id,
                    "accessInfo": access_info,
                }]
            });

            let url = session.collection_url(ResourceKind::Port);
            let outcome = session.create(url, &body).await?;
            output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
            Ok(())
        }

        PortCommand::Delete {
            name,
            network,
            switch,
        } => {
            let switch_id = resolve_switch(session, &switch, &network).await?;
            let condition = Condition::name(&name).field("logicSwitchId", switch_id);
            let port_id = session
                .resolve_id_by_condition(ResourceKind::Port, &condition)
                .await?;

            let url = session.object_url(ResourceKind::Port, &port_id)?;
            let outcome = session.delete(url).await?;
            output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
            Ok(())
        }

        PortCommand::Query {
            name,
            network,
            switch,
        } => {
            let condition = match (name, switch, network) {
                (Some(name), Some(switch), Some(network)) => {
                    let switch_id = resolve_switch(session, &switch, &network).await?;
                    Some(Condition::name(name).field("logicSwitchId", switch_id))
                }
                (Some(name), ..) => Some(Condition::name(name)),
                (None, ..) => None,
            };

            let records = session.query(ResourceKind::Port, condition.as_ref()).await?;
            output::print_output(&output::render_records(&global.output, &records), global.quiet);
            Ok(())
        }
    }
}
