// fabctl-api: Async Rust client for the fabric controller's northbound REST API
//
// The crate is organized around an explicit `Session` value: log in once,
// then pass the session to executor and resolver calls. There is no shared
// mutable state and no retry machinery — every call is a single attempt
// whose outcome is classified by `status::is_success`.

pub mod error;
pub mod executor;
pub mod registry;
pub mod resolver;
pub mod session;
pub mod status;
pub mod transport;

pub use error::Error;
pub use executor::{OperateBody, Outcome};
pub use registry::ResourceKind;
pub use resolver::Condition;
pub use session::{Session, SessionConfig, ACCESS_TOKEN_HEADER};
pub use status::{is_success, NO_CONNECTION};
pub use transport::TransportConfig;
