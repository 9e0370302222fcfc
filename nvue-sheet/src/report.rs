use config_tree::ConfigNode;
use serde::Serialize;

use crate::document::Document;
use crate::extract::{extract_all, Extraction, GeneralSettings, InterfaceRecord, VrfBgp};
use crate::settings::Settings;
use crate::sink::Table;

pub const GENERAL_SETTINGS: &str = "General Settings";
pub const INTERFACE_SETTINGS: &str = "Interface Settings";
pub const BGP_VRF_SUMMARY: &str = "BGP VRF Summary";
pub const BGP_NEIGHBORS: &str = "BGP Neighbors";
pub const BGP_PEER_GROUPS: &str = "BGP Peer Groups";

const INTERFACE_COLUMNS: [&str; 16] = [
    "Interface",
    "Type",
    "Breakout",
    "Description",
    "IP Address",
    "VRF",
    "Bond Mode",
    "LACP Rate",
    "LACP Bypass",
    "Members",
    "MTU",
    "Bridge Domain",
    "Access VLAN",
    "STP Admin Edge",
    "STP Auto Edge",
    "STP BPDU Guard",
];

const VRF_SUMMARY_COLUMNS: [&str; 7] = [
    "VRF Name",
    "Router ID",
    "Autonomous System",
    "Enable",
    "Neighbors Count",
    "Peer Groups Count",
    "Multipath Info",
];

const NEIGHBOR_COLUMNS: [&str; 5] = ["VRF Name", "Neighbor IP", "Peer Group", "Type", "Remote AS"];

const PEER_GROUP_COLUMNS: [&str; 10] = [
    "VRF Name",
    "Peer Group",
    "Description",
    "Remote AS",
    "Update Source",
    "BFD Enable",
    "BFD Min Rx Interval",
    "BFD Min Tx Interval",
    "BFD Detect Multiplier",
    "Multihop TTL",
];

/// Named row-sets ready for a sink, plus the workbook file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub artifact_name: String,
    pub tables: Vec<Table>,
}

/// Extract everything from `root` and lay it out as report tables.
pub fn build_report(root: &ConfigNode, settings: &Settings) -> Report {
    let extraction = extract_all(&Document::from_tree(root), settings);
    Report {
        artifact_name: artifact_name(&extraction.general, &settings.fallback_name),
        tables: build_tables(&extraction),
    }
}

/// Build the five report tables in sheet order.
pub fn build_tables(extraction: &Extraction) -> Vec<Table> {
    vec![
        general_table(&extraction.general),
        interface_table(&extraction.interfaces),
        vrf_summary_table(&extraction.vrfs),
        neighbor_table(&extraction.vrfs),
        peer_group_table(&extraction.vrfs),
    ]
}

/// Workbook file name: `<hostname>.xlsx`, or `<fallback>.xlsx` without a hostname.
///
/// A hostname carrying path separators is cut to its last component, so the
/// workbook always lands in the chosen output directory.
pub fn artifact_name(general: &GeneralSettings, fallback: &str) -> String {
    match file_stem_from_hostname(&general.hostname) {
        Some(hostname) => format!("{hostname}.xlsx"),
        None => format!("{fallback}.xlsx"),
    }
}

fn file_stem_from_hostname(hostname: &str) -> Option<&str> {
    let last = hostname.trim().rsplit(|c: char| c == '/' || c == '\\').next()?.trim();
    match last {
        "" | "." | ".." => None,
        name => Some(name),
    }
}

/// General settings in long form, one `Key`/`Value` row per field.
pub fn general_table(general: &GeneralSettings) -> Table {
    let mut table = Table::new(GENERAL_SETTINGS, &["Key", "Value"]);
    let rows: [(&str, String); 15] = [
        ("Hostname", general.hostname.clone()),
        ("Model", general.model.clone()),
        ("Version", general.version.clone()),
        ("Router ID", general.router_id.clone()),
        ("Autonomous System", general.autonomous_system.clone()),
        ("SNMP Community", general.snmp_communities.join(", ")),
        ("SNMP Community Access", general.render_community_access()),
        ("SNMP Trap Destinations", general.snmp_trap_destinations.clone()),
        ("NTP Server", general.ntp_servers.join(", ")),
        ("DNS Server", general.dns_servers.join(", ")),
        ("Syslog Servers", general.syslog_servers.join(", ")),
        ("Bridge STP Priority", general.bridge_stp_priority.clone()),
        ("Bridge VLANs", general.bridge_vlans.join(", ")),
        ("EVPN Enable", general.evpn_enable.clone()),
        ("Multihoming Enable", general.multihoming_enable.clone()),
    ];
    for (key, value) in rows {
        table.push_row(vec![key.into(), value.into()]);
    }
    table
}

pub fn interface_table(interfaces: &[InterfaceRecord]) -> Table {
    let mut table = Table::new(INTERFACE_SETTINGS, &INTERFACE_COLUMNS);
    for record in interfaces {
        let bond = record.bond().cloned().unwrap_or_default();
        table.push_row(vec![
            record.name.as_str().into(),
            record.declared_type.as_str().into(),
            record.breakout().into(),
            record.description.as_str().into(),
            record.ip_addresses.join(", ").into(),
            record.vrf.as_str().into(),
            bond.mode.into(),
            bond.lacp_rate.into(),
            bond.lacp_bypass.into(),
            bond.members.join(", ").into(),
            record.mtu.as_str().into(),
            bond.bridge_domains.join(", ").into(),
            bond.access_vlan.into(),
            bond.stp_admin_edge.into(),
            bond.stp_auto_edge.into(),
            bond.stp_bpdu_guard.into(),
        ]);
    }
    table
}

pub fn vrf_summary_table(vrfs: &[VrfBgp]) -> Table {
    let mut table = Table::new(BGP_VRF_SUMMARY, &VRF_SUMMARY_COLUMNS);
    for vrf in vrfs {
        table.push_row(vec![
            vrf.vrf_name.as_str().into(),
            vrf.router_id.as_str().into(),
            vrf.autonomous_system.as_str().into(),
            vrf.enabled.into(),
            vrf.neighbors.len().into(),
            vrf.peer_groups.len().into(),
            vrf.multipath_info().into(),
        ]);
    }
    table
}

pub fn neighbor_table(vrfs: &[VrfBgp]) -> Table {
    let mut table = Table::new(BGP_NEIGHBORS, &NEIGHBOR_COLUMNS);
    for vrf in vrfs {
        for neighbor in &vrf.neighbors {
            table.push_row(vec![
                vrf.vrf_name.as_str().into(),
                neighbor.ip.as_str().into(),
                neighbor.peer_group.as_str().into(),
                neighbor.neighbor_type.as_str().into(),
                neighbor.remote_as.as_str().into(),
            ]);
        }
    }
    table
}

pub fn peer_group_table(vrfs: &[VrfBgp]) -> Table {
    let mut table = Table::new(BGP_PEER_GROUPS, &PEER_GROUP_COLUMNS);
    for vrf in vrfs {
        for group in &vrf.peer_groups {
            table.push_row(vec![
                vrf.vrf_name.as_str().into(),
                group.name.as_str().into(),
                group.description.as_str().into(),
                group.remote_as.as_str().into(),
                group.update_source.as_str().into(),
                group.bfd_enabled.into(),
                group.bfd_min_rx_interval.as_str().into(),
                group.bfd_min_tx_interval.as_str().into(),
                group.bfd_detect_multiplier.as_str().into(),
                group.multihop_ttl.as_str().into(),
            ]);
        }
    }
    table
}
