//! Raw API passthrough handler.
//!
//! Escape hatch for controller endpoints the resource commands do not
//! model. `--body` is validated as JSON before sending; `--body-json`
//! is forwarded byte-for-byte.

use fabctl_api::{OperateBody, Session};

use crate::cli::{ApiArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub async fn handle(session: &Session, args: ApiArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let body = match (args.body, args.body_json) {
        (Some(body), _) => {
            let value: serde_json::Value = serde_json::from_str(&body)?;
            Some(OperateBody::Json(value))
        }
        (None, Some(raw)) => Some(OperateBody::Raw(raw)),
        (None, None) => None,
    };

    let outcome = session.operate(&args.path, args.method.into(), body).await?;
    output::print_output(&output::render_outcome(&global.output, &outcome), global.quiet);
    Ok(())
}
