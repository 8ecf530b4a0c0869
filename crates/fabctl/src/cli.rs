//! Clap derive structures for the `fabctl` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! Every resource command mirrors the controller's dependency chains:
//! children are addressed by name plus the names of their parents.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// fabctl -- kubectl-style CLI for SDN fabric controller management
#[derive(Debug, Parser)]
#[command(
    name = "fabctl",
    version,
    about = "Manage SDN fabric controller resources from the command line",
    long_about = "A CLI for configuring logic networks on an SDN fabric controller.\n\n\
        Resources are addressed by name; the client resolves names into\n\
        controller-assigned identifiers before issuing each request.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Controller host name or address
    #[arg(long, short = 'H', env = "AC_HOST", global = true)]
    pub host: Option<String>,

    /// Controller northbound port (env: AC_NORTH_PORT, then AC_PORT)
    #[arg(long, short = 'P', global = true)]
    pub port: Option<u16>,

    /// Controller account (env: AC_USERNAME, then AC_USER)
    #[arg(long, short = 'u', global = true)]
    pub username: Option<String>,

    /// Controller password (env: AC_PASSWORD, then AC_PASSWD)
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "AC_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,

    /// Verify the controller's TLS certificate
    #[arg(long, global = true)]
    pub verify_tls: bool,

    /// Output format
    #[arg(long, short = 'o', env = "AC_OUTPUT", default_value = "json", global = true)]
    pub output: OutputFormat,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// id/name table for query results
    Table,
    /// Plain text, one value per line (scripting)
    Plain,
}

/// HTTP verbs accepted by the `api` passthrough command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage tenants
    Tenant(TenantArgs),

    /// Manage logic networks
    #[command(alias = "net")]
    Network(NetworkArgs),

    /// Manage logic routers
    Router(RouterArgs),

    /// Manage logic switches
    #[command(alias = "sw")]
    Switch(SwitchArgs),

    /// Manage logic subnets
    Subnet(SubnetArgs),

    /// Manage logic router interfaces
    #[command(alias = "iface")]
    Interface(InterfaceArgs),

    /// Manage logic ports
    Port(PortArgs),

    /// Manage end ports
    Endport(EndportArgs),

    /// Query physical fabrics
    Fabric(FabricArgs),

    /// Log in and print the bearer token
    Token,

    /// Call an arbitrary controller endpoint
    Api(ApiArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── TENANT ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TenantArgs {
    #[command(subcommand)]
    pub command: TenantCommand,
}

#[derive(Debug, Subcommand)]
pub enum TenantCommand {
    /// Create a tenant bound to one or more fabrics
    Create {
        /// Tenant name
        name: String,

        /// Tenant description
        #[arg(long)]
        description: Option<String>,

        /// Fabric names backing the tenant's resource pool
        #[arg(long, value_delimiter = ',', required = true)]
        fabrics: Vec<String>,
    },

    /// Update an existing tenant
    Update {
        /// Tenant name
        name: String,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// Replace the fabric resource pool
        #[arg(long, value_delimiter = ',')]
        fabrics: Option<Vec<String>>,
    },

    /// Delete a tenant
    Delete {
        /// Tenant name
        name: String,
    },

    /// List tenants, optionally by name
    Query {
        /// Tenant name (omit to list all)
        name: Option<String>,
    },
}

// ── NETWORK ─────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NetworkArgs {
    #[command(subcommand)]
    pub command: NetworkCommand,
}

#[derive(Debug, Subcommand)]
pub enum NetworkCommand {
    /// Create a logic network under a tenant
    Create {
        /// Logic network name
        name: String,

        /// Network description
        #[arg(long)]
        description: Option<String>,

        /// Owning tenant name
        #[arg(long, required = true)]
        tenant: String,

        /// Fabric names the network spans
        #[arg(long, value_delimiter = ',', required = true)]
        fabrics: Vec<String>,
    },

    /// Update an existing logic network
    Update {
        /// Logic network name
        name: String,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// Owning tenant name
        #[arg(long, required = true)]
        tenant: String,

        /// Replace the fabric list
        #[arg(long, value_delimiter = ',')]
        fabrics: Option<Vec<String>>,
    },

    /// Delete a logic network
    Delete {
        /// Logic network name
        name: String,
    },

    /// List logic networks, optionally by name
    Query {
        /// Logic network name (omit to list all)
        name: Option<String>,
    },
}

// ── ROUTER ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RouterArgs {
    #[command(subcommand)]
    pub command: RouterCommand,
}

#[derive(Debug, Subcommand)]
pub enum RouterCommand {
    /// Create a logic router in a logic network
    Create {
        /// Logic router name
        name: String,

        /// Router description
        #[arg(long)]
        description: Option<String>,

        /// Parent logic network name
        #[arg(long, required = true)]
        network: String,

        /// Master fabric location
        #[arg(long)]
        fabric: Option<String>,
    },

    /// Delete a logic router
    Delete {
        /// Logic router name
        name: String,

        /// Parent logic network name
        #[arg(long, required = true)]
        network: String,
    },

    /// List logic routers, optionally scoped to a network
    Query {
        /// Logic router name (omit to list all)
        name: Option<String>,

        /// Parent logic network name
        #[arg(long)]
        network: Option<String>,
    },
}

// ── SWITCH ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SwitchArgs {
    #[command(subcommand)]
    pub command: SwitchCommand,
}

#[derive(Debug, Subcommand)]
pub enum SwitchCommand {
    /// Create a logic switch in a logic network
    Create {
        /// Logic switch name
        name: String,

        /// Switch description
        #[arg(long)]
        description: Option<String>,

        /// Parent logic network name
        #[arg(long, required = true)]
        network: String,
    },

    /// Delete a logic switch
    Delete {
        /// Logic switch name
        name: String,

        /// Parent logic network name
        #[arg(long, required = true)]
        network: String,
    },

    /// List logic switches, optionally scoped to a network
    Query {
        /// Logic switch name (omit to list all)
        name: Option<String>,

        /// Parent logic network name
        #[arg(long)]
        network: Option<String>,
    },
}

// ── SUBNET ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SubnetArgs {
    #[command(subcommand)]
    pub command: SubnetCommand,
}

#[derive(Debug, Subcommand)]
pub enum SubnetCommand {
    /// Create a logic subnet on a router
    Create {
        /// Subnet CIDR (e.g. 10.1.0.0/24)
        #[arg(long, required = true)]
        cidr: String,

        /// Gateway IP inside the CIDR
        #[arg(long, required = true)]
        gateway_ip: String,

        /// Owning logic router name
        #[arg(long, required = true)]
        router: String,

        /// Parent logic network name
        #[arg(long, required = true)]
        network: String,
    },

    /// Delete a logic subnet (addressed by CIDR)
    Delete {
        /// Subnet CIDR
        #[arg(long, required = true)]
        cidr: String,

        /// Owning logic router name
        #[arg(long, required = true)]
        router: String,

        /// Parent logic network name
        #[arg(long, required = true)]
        network: String,
    },

    /// List logic subnets, optionally scoped to a router
    Query {
        /// Owning logic router name (requires --network)
        #[arg(long, requires = "network")]
        router: Option<String>,

        /// Parent logic network name
        #[arg(long)]
        network: Option<String>,
    },
}

// ── INTERFACE ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InterfaceArgs {
    #[command(subcommand)]
    pub command: InterfaceCommand,
}

#[derive(Debug, Subcommand)]
pub enum InterfaceCommand {
    /// Attach a router interface to a logic switch
    Create {
        /// Interface name
        name: String,

        /// Owning logic router name
        #[arg(long, required = true)]
        router: String,

        /// Logic switch to attach to
        #[arg(long, required = true)]
        switch: String,

        /// Parent logic network name
        #[arg(long, required = true)]
        network: String,

        /// Subnet CIDRs served by the interface
        #[arg(long, value_delimiter = ',', required = true)]
        cidrs: Vec<String>,
    },

    /// Delete a router interface
    Delete {
        /// Interface name
        name: String,

        /// Owning logic router name
        #[arg(long, required = true)]
        router: String,

        /// Parent logic network name
        #[arg(long, required = true)]
        network: String,
    },

    /// List router interfaces, optionally scoped to a router
    Query {
        /// Interface name (omit to list all)
        name: Option<String>,

        /// Owning logic router name (requires --network)
        #[arg(long, requires = "network")]
        router: Option<String>,

        /// Parent logic network name
        #[arg(long)]
        network: Option<String>,
    },
}

// ── PORT ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PortArgs {
    #[command(subcommand)]
    pub command: PortCommand,
}

#[derive(Debug, Subcommand)]
pub enum PortCommand {
    /// Create a logic port on a switch, bound to a device port
    Create {
        /// Logic port name
        name: String,

        /// Port description
        #[arg(long)]
        description: Option<String>,

        /// Parent logic network name
        #[arg(long, required = true)]
        network: String,

        /// Owning logic switch name
        #[arg(long, required = true)]
        switch: String,

        /// Device management IP
        #[arg(long, required = true)]
        device_ip: String,

        /// Physical port name on the device (e.g. 10GE1/0/1)
        #[arg(long, required = true)]
        port_name: String,

        /// Access VLAN; switches the port from UNTAG to DOT1Q
        #[arg(long)]
        vlan: Option<u16>,
    },

    /// Delete a logic port
    Delete {
        /// Logic port name
        name: String,

        /// Parent logic network name
        #[arg(long, required = true)]
        network: String,

        /// Owning logic switch name
        #[arg(long, required = true)]
        switch: String,
    },

    /// List logic ports, optionally scoped to a switch
    Query {
        /// Logic port name (omit to list all)
        name: Option<String>,

        /// Parent logic network name
        #[arg(long)]
        network: Option<String>,

        /// Owning logic switch name (requires --network)
        #[arg(long, requires = "network")]
        switch: Option<String>,
    },
}

// ── ENDPORT ─────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct EndportArgs {
    #[command(subcommand)]
    pub command: EndportCommand,
}

#[derive(Debug, Subcommand)]
pub enum EndportCommand {
    /// Create an end port behind a logic port
    Create {
        /// End port name
        name: String,

        /// End port description
        #[arg(long)]
        description: Option<String>,

        /// Parent logic network name
        #[arg(long, required = true)]
        network: String,

        /// Logic switch carrying the logic port
        #[arg(long, required = true)]
        switch: String,

        /// Logic port the end port attaches to
        #[arg(long, required = true)]
        port: String,
    },

    /// Delete an end port
    Delete {
        /// End port name
        name: String,

        /// Parent logic network name
        #[arg(long, required = true)]
        network: String,
    },

    /// List end ports, optionally scoped to a network
    Query {
        /// End port name (omit to list all)
        name: Option<String>,

        /// Parent logic network name
        #[arg(long)]
        network: Option<String>,
    },
}

// ── FABRIC ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct FabricArgs {
    #[command(subcommand)]
    pub command: FabricCommand,
}

#[derive(Debug, Subcommand)]
pub enum FabricCommand {
    /// List physical fabrics, optionally by name
    Query {
        /// Fabric name (omit to list all)
        name: Option<String>,
    },
}

// ── API (passthrough) ───────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ApiArgs {
    /// Endpoint path (controller-relative) or absolute URL
    pub path: String,

    /// HTTP method
    #[arg(long, short = 'X', value_enum, required = true)]
    pub method: HttpMethod,

    /// JSON request body
    #[arg(long, conflicts_with = "body_json")]
    pub body: Option<String>,

    /// Pre-serialized request body, sent as-is
    #[arg(long)]
    pub body_json: Option<String>,
}

// ── COMPLETIONS ─────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
