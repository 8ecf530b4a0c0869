//! Physical fabric command handlers.
//!
//! Fabrics are inventory discovered by the controller; the CLI can
//! only list them.

use fabctl_api::{Condition, ResourceKind, Session};

use crate::cli::{FabricArgs, FabricCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    session: &Session,
    args: FabricArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        FabricCommand::Query { name } => {
            let condition = name.map(Condition::name);
            let records = session.query(ResourceKind::Fabric, condition.as_ref()).await?;
            output::print_output(&output::render_records(&global.output, &records), global.quiet);
            Ok(())
        }
    }
}
