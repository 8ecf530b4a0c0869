// Resource registry
//
// Static map from resource kind to its URL templates and the JSON key
// under which the controller returns records of that kind. URL
// construction anywhere else in the crate goes through this table.

use std::fmt;

/// A kind of controller-managed resource.
///
/// `EndPorts` is the query alias for `EndPort`: the controller returns
/// end-port listings under the plural JSON key but mutates them through
/// the singular object path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Tenant,
    Network,
    Fabric,
    Router,
    Subnet,
    Switch,
    Interface,
    Port,
    EndPort,
    EndPorts,
}

impl ResourceKind {
    /// Every kind the registry knows about, for exhaustive validation.
    pub const ALL: [ResourceKind; 10] = [
        Self::Tenant,
        Self::Network,
        Self::Fabric,
        Self::Router,
        Self::Subnet,
        Self::Switch,
        Self::Interface,
        Self::Port,
        Self::EndPort,
        Self::EndPorts,
    ];

    /// The collection URL template for this kind.
    pub fn collection_path(self) -> &'static str {
        match self {
            Self::Tenant => "/controller/dc/v3/tenants",
            Self::Network => "/controller/dc/v3/logicnetwork/networks",
            Self::Fabric => "/controller/dc/v3/physicalnetwork/fabricresource/fabrics",
            Self::Router => "/controller/dc/v3/logicnetwork/routers",
            Self::Subnet => "/controller/dc/v3/logicnetwork/subnets",
            // "switchs" is the controller's own spelling.
            Self::Switch => "/controller/dc/v3/logicnetwork/switchs",
            Self::Interface => "/controller/dc/v3/logicnetwork/interfaces",
            Self::Port => "/controller/dc/v3/logicnetwork/ports",
            Self::EndPort | Self::EndPorts => "/controller/dc/v3/logicnetwork/endports",
        }
    }

    /// The singular object URL template, where the API distinguishes one.
    ///
    /// `None` for fabrics: the API exposes no per-fabric object endpoint,
    /// so fabrics can only be queried.
    pub fn object_path(self) -> Option<&'static str> {
        match self {
            Self::Tenant => Some("/controller/dc/v3/tenants/tenant"),
            Self::Network => Some("/controller/dc/v3/logicnetwork/networks/network"),
            Self::Fabric => None,
            Self::Router => Some("/controller/dc/v3/logicnetwork/routers/router"),
            Self::Subnet => Some("/controller/dc/v3/logicnetwork/subnets/subnet"),
            Self::Switch => Some("/controller/dc/v3/logicnetwork/switchs/switch"),
            Self::Interface => Some("/controller/dc/v3/logicnetwork/interfaces/interface"),
            Self::Port => Some("/controller/dc/v3/logicnetwork/ports/port"),
            Self::EndPort | Self::EndPorts => Some("/controller/dc/v3/logicnetwork/endports/endport"),
        }
    }

    /// The JSON key under which the controller returns the record array
    /// for this kind.
    pub fn key(self) -> &'static str {
        match self {
            Self::Tenant => "tenant",
            Self::Network => "network",
            Self::Fabric => "fabric",
            Self::Router => "router",
            Self::Subnet => "subnet",
            Self::Switch => "switch",
            Self::Interface => "interface",
            Self::Port => "port",
            Self::EndPort => "endPort",
            Self::EndPorts => "endPorts",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::ResourceKind;

    #[test]
    fn collection_paths_are_absolute() {
        for kind in ResourceKind::ALL {
            assert!(
                kind.collection_path().starts_with("/controller/"),
                "{kind} has a malformed collection path"
            );
        }
    }

    #[test]
    fn object_paths_extend_collection_paths() {
        for kind in ResourceKind::ALL {
            if let Some(object) = kind.object_path() {
                assert!(
                    object.starts_with(kind.collection_path()),
                    "{kind} object path does not extend its collection path"
                );
            }
        }
    }

    #[test]
    fn fabric_is_query_only() {
        assert!(ResourceKind::Fabric.object_path().is_none());
    }

    #[test]
    fn endports_alias_shares_endpoints() {
        assert_eq!(
            ResourceKind::EndPort.collection_path(),
            ResourceKind::EndPorts.collection_path()
        );
        assert_eq!(
            ResourceKind::EndPort.object_path(),
            ResourceKind::EndPorts.object_path()
        );
        // The alias differs only in the JSON key used for query results.
        assert_eq!(ResourceKind::EndPort.key(), "endPort");
        assert_eq!(ResourceKind::EndPorts.key(), "endPorts");
    }
}
