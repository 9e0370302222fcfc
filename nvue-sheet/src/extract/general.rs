use config_tree::ConfigNode;
use serde::Serialize;
use tracing::debug;

use crate::document::Document;
use crate::extract::snmp::TrapDestination;

/// Device-wide facts, one value per report row.
///
/// Every field defaults to empty. The EVPN switches are kept as text so an
/// unset switch stays distinguishable from an explicit `off`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneralSettings {
    pub hostname: String,
    pub model: String,
    pub version: String,
    pub router_id: String,
    pub autonomous_system: String,
    pub snmp_communities: Vec<String>,
    /// Read-only community name with its access list, for communities that have one.
    pub snmp_community_access: Vec<(String, Vec<String>)>,
    pub snmp_trap_destinations: String,
    pub ntp_servers: Vec<String>,
    pub dns_servers: Vec<String>,
    pub syslog_servers: Vec<String>,
    pub bridge_stp_priority: String,
    pub bridge_vlans: Vec<String>,
    pub evpn_enable: String,
    pub multihoming_enable: String,
}

pub fn extract_general_settings(
    doc: &Document<'_>,
    traps: &[TrapDestination],
    management_vrf: &str,
) -> GeneralSettings {
    let set = doc.set;
    let snmp = set.node(&["system", "snmp-server"]);
    let readonly = snmp.entries_at(&["readonly-community"]);
    // Only the first declared bridge domain is reported.
    let first_domain = set
        .node(&["bridge", "domain"])
        .first_entry()
        .map(|(_, domain)| domain);

    let settings = GeneralSettings {
        hostname: set.text(&["system", "hostname"]),
        model: doc.header.text(&["model"]),
        version: doc.header.text(&["version"]),
        router_id: set.text(&["router", "bgp", "router-id"]),
        autonomous_system: set.text(&["router", "bgp", "autonomous-system"]),
        snmp_communities: readonly.iter().map(|(name, _)| name.clone()).collect(),
        snmp_community_access: readonly
            .iter()
            .filter(|(_, community)| community.has(&["access"]))
            .map(|(name, community)| (name.clone(), community.keys_of(&["access"])))
            .collect(),
        snmp_trap_destinations: render_traps(traps),
        ntp_servers: service_servers(set, "ntp", management_vrf),
        dns_servers: service_servers(set, "dns", management_vrf),
        syslog_servers: service_servers(set, "syslog", management_vrf),
        bridge_stp_priority: first_domain
            .map(|domain| domain.text(&["stp", "priority"]))
            .unwrap_or_default(),
        bridge_vlans: first_domain
            .map(|domain| domain.keys_of(&["vlan"]))
            .unwrap_or_default(),
        evpn_enable: set.text(&["evpn", "enable"]),
        multihoming_enable: set.text(&["evpn", "multihoming", "enable"]),
    };

    debug!(hostname = %settings.hostname, "extracted general settings");
    settings
}

impl GeneralSettings {
    pub fn render_community_access(&self) -> String {
        self.snmp_community_access
            .iter()
            .map(|(name, access)| format!("{name}: {}", access.join(", ")))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// `"<ip> -> <community>"` for every trap, joined by `", "`.
pub fn render_traps(traps: &[TrapDestination]) -> String {
    traps
        .iter()
        .map(|trap| {
            format!(
                "{} -> {}",
                trap.destination_ip, trap.community_password_name
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn service_servers(set: &ConfigNode, service: &str, management_vrf: &str) -> Vec<String> {
    set.keys_of(&["service", service, management_vrf, "server"])
}

#[cfg(test)]
mod tests {
    use config_tree::parse;
    use pretty_assertions::assert_eq;

    use super::{extract_general_settings, render_traps, GeneralSettings};
    use crate::document::Document;
    use crate::extract::snmp::{extract_trap_destinations, TrapDestination};

    const YAML: &str = r#"
- header:
    model: VX
    version: Cumulus Linux 5.9.1
- set:
    system:
      hostname: leaf01
      snmp-server:
        readonly-community:
          public:
            access:
              10.0.0.0/8: {}
              any: {}
          private: {}
        trap-destination:
          192.0.2.10:
            vrf:
              mgmt:
                community-password:
                  pub1: {}
          192.0.2.20:
            vrf:
              other:
                community-password:
                  pub2: {}
    router:
      bgp:
        router-id: 10.10.10.1
        autonomous-system: 65101
    service:
      ntp:
        mgmt:
          server:
            0.pool.ntp.org: {}
            1.pool.ntp.org: {}
        default:
          server:
            ignored.example: {}
      dns:
        mgmt:
          server:
            192.0.2.1: {}
    bridge:
      domain:
        br_default:
          stp:
            priority: 4096
          vlan:
            '10': {}
            '20': {}
        br_second:
          stp:
            priority: 8192
          vlan:
            '30': {}
    evpn:
      enable: on
"#;

    #[test]
    fn resolves_device_wide_fields() {
        let tree = parse(YAML.as_bytes()).expect("parse");
        let doc = Document::from_tree(&tree);
        let traps = extract_trap_destinations(&doc, "mgmt");
        let settings = extract_general_settings(&doc, &traps, "mgmt");

        assert_eq!(settings.hostname, "leaf01");
        assert_eq!(settings.model, "VX");
        assert_eq!(settings.version, "Cumulus Linux 5.9.1");
        assert_eq!(settings.router_id, "10.10.10.1");
        assert_eq!(settings.autonomous_system, "65101");
        assert_eq!(settings.snmp_communities, vec!["public", "private"]);
        assert_eq!(
            settings.render_community_access(),
            "public: 10.0.0.0/8, any"
        );
        assert_eq!(settings.snmp_trap_destinations, "192.0.2.10 -> pub1");
        assert_eq!(settings.ntp_servers, vec!["0.pool.ntp.org", "1.pool.ntp.org"]);
        assert_eq!(settings.dns_servers, vec!["192.0.2.1"]);
        assert!(settings.syslog_servers.is_empty());
        assert_eq!(settings.bridge_stp_priority, "4096");
        assert_eq!(settings.bridge_vlans, vec!["10", "20"]);
        assert_eq!(settings.evpn_enable, "on");
        assert_eq!(settings.multihoming_enable, "");
    }

    #[test]
    fn empty_document_resolves_to_empty_fields() {
        let tree = parse(b"- set: {}\n").expect("parse");
        let settings = extract_general_settings(&Document::from_tree(&tree), &[], "mgmt");
        assert_eq!(settings, GeneralSettings::default());
    }

    #[test]
    fn renders_traps_in_order() {
        let traps = vec![
            TrapDestination {
                destination_ip: "192.0.2.10".to_string(),
                community_password_name: "pub1".to_string(),
            },
            TrapDestination {
                destination_ip: "192.0.2.11".to_string(),
                community_password_name: "pub2".to_string(),
            },
        ];
        assert_eq!(
            render_traps(&traps),
            "192.0.2.10 -> pub1, 192.0.2.11 -> pub2"
        );
        assert_eq!(render_traps(&[]), "");
    }
}
