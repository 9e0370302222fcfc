//! Spreadsheet review reports for Cumulus Linux NVUE configuration exports.
//!
//! The pipeline is a single synchronous pass:
//!
//! 1. [`config_tree`] loads the YAML export into an ordered [`config_tree::ConfigNode`].
//! 2. [`document`] locates the `header` and `set` sections.
//! 3. [`extract`] projects the tree into typed records: interfaces, per-VRF
//!    BGP, SNMP trap destinations and device-wide settings.
//! 4. [`report`] lays the records out as five named tables and picks the
//!    workbook name from the hostname.
//! 5. A [`sink::TableSink`] persists the tables (`.xlsx` workbook or JSON).
//!
//! Extraction never fails: absent fields resolve to empty text, empty lists
//! or `false`, depending on the field. Only loading the input can fail.
//!
//! ```ignore
//! use config_tree::parse_file;
//! use nvue_sheet::report::build_report;
//! use nvue_sheet::settings::default_settings;
//! use nvue_sheet::sink::{TableSink, XlsxSink};
//!
//! let tree = parse_file("leaf01.yaml".as_ref())?;
//! let report = build_report(&tree, &default_settings());
//! XlsxSink::new(&report.artifact_name).write_tables(&report.tables)?;
//! ```

pub mod document;
pub mod extract;
pub mod report;
pub mod settings;
pub mod sink;
pub mod summary;
