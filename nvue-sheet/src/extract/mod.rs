//! Projections of an NVUE configuration tree into flat, typed records.
//!
//! Each extractor is a pure function over the same read-only [`Document`];
//! none depends on another's traversal, except general settings, which takes
//! the trap destinations by value.

pub mod bgp;
pub mod general;
pub mod interfaces;
pub mod snmp;

use serde::Serialize;

use crate::document::Document;
use crate::settings::Settings;

pub use bgp::{extract_vrf_bgp, AddressFamily, Neighbor, PeerGroup, VrfBgp};
pub use general::{extract_general_settings, GeneralSettings};
pub use interfaces::{extract_interfaces, InterfaceDetails, InterfaceKind, InterfaceRecord};
pub use snmp::{extract_trap_destinations, TrapDestination};

/// Everything extracted from one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    pub general: GeneralSettings,
    pub interfaces: Vec<InterfaceRecord>,
    pub vrfs: Vec<VrfBgp>,
    pub trap_destinations: Vec<TrapDestination>,
}

/// Run every extractor over `doc`.
pub fn extract_all(doc: &Document<'_>, settings: &Settings) -> Extraction {
    let trap_destinations = extract_trap_destinations(doc, &settings.management_vrf);
    let general = extract_general_settings(doc, &trap_destinations, &settings.management_vrf);

    Extraction {
        general,
        interfaces: extract_interfaces(doc),
        vrfs: extract_vrf_bgp(doc),
        trap_destinations,
    }
}
