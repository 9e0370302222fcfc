use config_tree::ConfigNode;
use serde::Serialize;
use tracing::debug;

use crate::document::Document;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Neighbor {
    pub ip: String,
    pub peer_group: String,
    pub neighbor_type: String,
    pub remote_as: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeerGroup {
    pub name: String,
    pub description: String,
    pub remote_as: String,
    pub update_source: String,
    pub bfd_enabled: bool,
    pub bfd_min_rx_interval: String,
    pub bfd_min_tx_interval: String,
    pub bfd_detect_multiplier: String,
    pub multihop_ttl: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressFamily {
    pub name: String,
    pub enabled: bool,
    pub redistribute: ConfigNode,
    pub route_export: ConfigNode,
}

/// BGP instance of one VRF.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VrfBgp {
    pub vrf_name: String,
    pub router_id: String,
    pub autonomous_system: String,
    pub enabled: bool,
    pub neighbors: Vec<Neighbor>,
    pub peer_groups: Vec<PeerGroup>,
    pub address_families: Vec<AddressFamily>,
    /// Kept verbatim; only `multipath.aspath-ignore` is reported.
    pub path_selection: ConfigNode,
}

impl VrfBgp {
    /// `aspath-ignore: <value>` when a multipath block exists, else empty.
    pub fn multipath_info(&self) -> String {
        match self.path_selection.get(&["multipath"]) {
            Some(multipath) => format!(
                "aspath-ignore: {}",
                multipath.text_or(&["aspath-ignore"], "off")
            ),
            None => String::new(),
        }
    }
}

/// Extract the BGP instance of every VRF that has one.
///
/// VRFs without a `router.bgp` subtree are left out entirely. Inside an
/// included VRF, missing neighbor/peer-group/address-family blocks only
/// produce empty collections.
pub fn extract_vrf_bgp(doc: &Document<'_>) -> Vec<VrfBgp> {
    let vrfs: Vec<VrfBgp> = doc
        .set
        .entries_at(&["vrf"])
        .iter()
        .filter_map(|(vrf_name, vrf)| {
            vrf.get(&["router", "bgp"])
                .map(|bgp| vrf_bgp(vrf_name, bgp))
        })
        .collect();

    debug!(
        vrfs = vrfs.len(),
        neighbors = vrfs.iter().map(|v| v.neighbors.len()).sum::<usize>(),
        peer_groups = vrfs.iter().map(|v| v.peer_groups.len()).sum::<usize>(),
        "extracted vrf bgp instances"
    );
    vrfs
}

fn vrf_bgp(vrf_name: &str, bgp: &ConfigNode) -> VrfBgp {
    let peer_groups: Vec<PeerGroup> = bgp
        .entries_at(&["peer-group"])
        .iter()
        .map(|(name, group)| peer_group(name, group))
        .collect();

    let neighbors = bgp
        .entries_at(&["neighbor"])
        .iter()
        .map(|(ip, neighbor)| {
            let peer_group = neighbor.text(&["peer-group"]);
            let mut remote_as = neighbor.text(&["remote-as"]);
            if remote_as.is_empty() {
                remote_as = peer_groups
                    .iter()
                    .find(|group| group.name == peer_group)
                    .map(|group| group.remote_as.clone())
                    .unwrap_or_default();
            }
            Neighbor {
                ip: ip.clone(),
                peer_group,
                neighbor_type: neighbor.text(&["type"]),
                remote_as,
            }
        })
        .collect();

    let address_families = bgp
        .entries_at(&["address-family"])
        .iter()
        .map(|(name, family)| AddressFamily {
            name: name.clone(),
            enabled: family.flag(&["enable"]),
            redistribute: family.node(&["redistribute"]).clone(),
            route_export: family.node(&["route-export"]).clone(),
        })
        .collect();

    VrfBgp {
        vrf_name: vrf_name.to_string(),
        router_id: bgp.text(&["router-id"]),
        autonomous_system: bgp.text(&["autonomous-system"]),
        enabled: bgp.flag(&["enable"]),
        neighbors,
        peer_groups,
        address_families,
        path_selection: bgp.node(&["path-selection"]).clone(),
    }
}

fn peer_group(name: &str, group: &ConfigNode) -> PeerGroup {
    let bfd = group.node(&["bfd"]);
    PeerGroup {
        name: name.to_string(),
        description: group.text(&["description"]),
        remote_as: group.text(&["remote-as"]),
        update_source: group.text(&["update-source"]),
        bfd_enabled: bfd.flag(&["enable"]),
        bfd_min_rx_interval: bfd.text(&["min-rx-interval"]),
        bfd_min_tx_interval: bfd.text(&["min-tx-interval"]),
        bfd_detect_multiplier: bfd.text(&["detect-multiplier"]),
        multihop_ttl: group.text(&["multihop-ttl"]),
    }
}
