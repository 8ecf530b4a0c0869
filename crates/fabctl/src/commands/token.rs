//! Token command handler.
//!
//! Login already happened during dispatch; this just prints the bearer
//! token so scripts can reuse it against the raw API.

use fabctl_api::Session;

use crate::cli::GlobalOpts;
use crate::output;

pub fn handle(session: &Session, global: &GlobalOpts) {
    output::print_output(session.token(), global.quiet);
}
