use config_tree::ConfigNode;
use serde::Serialize;
use tracing::debug;

use crate::document::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceKind {
    Physical,
    Bonded,
}

/// Bond-only settings, including the first bridge domain's access/STP view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BondSettings {
    pub mode: String,
    pub lacp_rate: String,
    pub lacp_bypass: String,
    pub members: Vec<String>,
    pub bridge_domains: Vec<String>,
    pub access_vlan: String,
    pub stp_admin_edge: String,
    pub stp_auto_edge: String,
    pub stp_bpdu_guard: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InterfaceDetails {
    Physical { breakout: String },
    Bonded(BondSettings),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceRecord {
    pub name: String,
    /// The `type` the configuration declares (`swp`, `bond`, `loopback`...).
    pub declared_type: String,
    pub description: String,
    pub ip_addresses: Vec<String>,
    pub vrf: String,
    pub mtu: String,
    pub details: InterfaceDetails,
}

impl InterfaceRecord {
    pub fn kind(&self) -> InterfaceKind {
        match self.details {
            InterfaceDetails::Physical { .. } => InterfaceKind::Physical,
            InterfaceDetails::Bonded(_) => InterfaceKind::Bonded,
        }
    }

    pub fn bond(&self) -> Option<&BondSettings> {
        match &self.details {
            InterfaceDetails::Bonded(bond) => Some(bond),
            InterfaceDetails::Physical { .. } => None,
        }
    }

    pub fn breakout(&self) -> &str {
        match &self.details {
            InterfaceDetails::Physical { breakout } => breakout,
            InterfaceDetails::Bonded(_) => "",
        }
    }
}

/// Extract one record per interface, in document order.
///
/// An interface is bonded when it declares a `bond` subtree; everything else
/// is treated as physical.
pub fn extract_interfaces(doc: &Document<'_>) -> Vec<InterfaceRecord> {
    let records: Vec<InterfaceRecord> = doc
        .set
        .entries_at(&["interface"])
        .iter()
        .map(|(name, node)| interface_record(name, node))
        .collect();

    debug!(
        interfaces = records.len(),
        bonds = records
            .iter()
            .filter(|r| r.kind() == InterfaceKind::Bonded)
            .count(),
        "extracted interfaces"
    );
    records
}

fn interface_record(name: &str, node: &ConfigNode) -> InterfaceRecord {
    let details = if node.has(&["bond"]) {
        InterfaceDetails::Bonded(bond_settings(node))
    } else {
        InterfaceDetails::Physical {
            breakout: breakout(node),
        }
    };

    InterfaceRecord {
        name: name.to_string(),
        declared_type: node.text(&["type"]),
        description: node.text(&["description"]),
        ip_addresses: node.keys_of(&["ip", "address"]),
        vrf: node.text(&["ip", "vrf"]),
        mtu: node.text(&["link", "mtu"]),
        details,
    }
}

/// First declared breakout value, exactly as the configuration spells it.
fn breakout(node: &ConfigNode) -> String {
    match node.node(&["link", "breakout"]) {
        ConfigNode::Map(entries) => entries
            .first()
            .map(|(key, _)| key.clone())
            .unwrap_or_default(),
        ConfigNode::Seq(items) => items.first().map(|item| item.text(&[])).unwrap_or_default(),
        ConfigNode::Scalar(value) => value.to_string(),
        ConfigNode::Null => String::new(),
    }
}

fn bond_settings(node: &ConfigNode) -> BondSettings {
    let bond = node.node(&["bond"]);
    let mut settings = BondSettings {
        mode: bond.text(&["mode"]),
        lacp_rate: bond.text(&["lacp-rate"]),
        lacp_bypass: bond.text(&["lacp-bypass"]),
        members: bond.keys_of(&["member"]),
        bridge_domains: node.keys_of(&["bridge", "domain"]),
        ..BondSettings::default()
    };

    // Only the first bridge domain feeds the access/STP columns.
    if let Some((_, domain)) = node.node(&["bridge", "domain"]).first_entry() {
        settings.access_vlan = domain.text(&["access"]);
        let [admin_edge, auto_edge, bpdu_guard] = stp_by_position(domain.node(&["stp"]));
        settings.stp_admin_edge = admin_edge;
        settings.stp_auto_edge = auto_edge;
        settings.stp_bpdu_guard = bpdu_guard;
    }

    settings
}

/// Read the STP trio by key position: admin-edge, auto-edge, bpdu-guard.
///
/// Exports list these keys alphabetically, which is the order relied on here.
/// Missing positions stay empty.
fn stp_by_position(stp: &ConfigNode) -> [String; 3] {
    let mut values = stp.entries().iter().map(|(_, value)| value.text(&[]));
    [
        values.next().unwrap_or_default(),
        values.next().unwrap_or_default(),
        values.next().unwrap_or_default(),
    ]
}
