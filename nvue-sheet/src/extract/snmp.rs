use serde::Serialize;
use tracing::debug;

use crate::document::Document;

/// One (destination, community) pair reachable through the management VRF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrapDestination {
    pub destination_ip: String,
    pub community_password_name: String,
}

/// Extract SNMP trap destinations configured under `management_vrf`.
///
/// Destinations bound to other VRFs, or without a community-password block,
/// contribute nothing.
pub fn extract_trap_destinations(doc: &Document<'_>, management_vrf: &str) -> Vec<TrapDestination> {
    let mut destinations = Vec::new();

    let trap_destinations = doc
        .set
        .entries_at(&["system", "snmp-server", "trap-destination"]);
    for (destination_ip, destination) in trap_destinations {
        let communities = destination.entries_at(&["vrf", management_vrf, "community-password"]);
        for (community, _) in communities {
            destinations.push(TrapDestination {
                destination_ip: destination_ip.clone(),
                community_password_name: community.clone(),
            });
        }
    }

    debug!(
        trap_destinations = destinations.len(),
        management_vrf = management_vrf,
        "extracted snmp trap destinations"
    );
    destinations
}
