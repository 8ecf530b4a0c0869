//! Command dispatch: bridges CLI args -> session calls -> output formatting.

pub mod api;
pub mod endport;
pub mod fabric;
pub mod interface;
pub mod network;
pub mod port;
pub mod router;
pub mod subnet;
pub mod switch;
pub mod tenant;
pub mod token;
pub mod util;

use fabctl_api::Session;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a controller-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Tenant(args) => tenant::handle(session, args, global).await,
        Command::Network(args) => network::handle(session, args, global).await,
        Command::Router(args) => router::handle(session, args, global).await,
        Command::Switch(args) => switch::handle(session, args, global).await,
        Command::Subnet(args) => subnet::handle(session, args, global).await,
        Command::Interface(args) => interface::handle(session, args, global).await,
        Command::Port(args) => port::handle(session, args, global).await,
        Command::Endport(args) => endport::handle(session, args, global).await,
        Command::Fabric(args) => fabric::handle(session, args, global).await,
        Command::Token => {
            token::handle(session, global);
            Ok(())
        }
        Command::Api(args) => api::handle(session, args, global).await,
        // Completions are handled before dispatch.
        Command::Completions(_) => unreachable!(),
    }
}
