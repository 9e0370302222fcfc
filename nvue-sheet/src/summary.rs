use colored::Colorize;
use serde::Serialize;

use crate::report::{
    BGP_NEIGHBORS, BGP_PEER_GROUPS, BGP_VRF_SUMMARY, GENERAL_SETTINGS, INTERFACE_SETTINGS,
};
use crate::sink::Table;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SheetSummary {
    pub general: usize,
    pub interfaces: usize,
    pub vrfs: usize,
    pub neighbors: usize,
    pub peer_groups: usize,
}

pub fn summarize(tables: &[Table]) -> SheetSummary {
    SheetSummary {
        general: row_count(tables, GENERAL_SETTINGS),
        interfaces: row_count(tables, INTERFACE_SETTINGS),
        vrfs: row_count(tables, BGP_VRF_SUMMARY),
        neighbors: row_count(tables, BGP_NEIGHBORS),
        peer_groups: row_count(tables, BGP_PEER_GROUPS),
    }
}

pub fn render(summary: SheetSummary) -> String {
    format!(
        "sheet_summary general={} interfaces={} vrfs={} neighbors={} peer_groups={}",
        summary.general, summary.interfaces, summary.vrfs, summary.neighbors, summary.peer_groups
    )
    .cyan()
    .to_string()
}

fn row_count(tables: &[Table], name: &str) -> usize {
    tables
        .iter()
        .find(|table| table.name == name)
        .map(|table| table.rows.len())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{render, summarize, SheetSummary};
    use crate::report::{BGP_NEIGHBORS, INTERFACE_SETTINGS};
    use crate::sink::Table;

    #[test]
    fn counts_rows_per_sheet() {
        let mut interfaces = Table::new(INTERFACE_SETTINGS, &["Interface"]);
        interfaces.push_row(vec!["swp1".into()]);
        interfaces.push_row(vec!["swp2".into()]);
        let neighbors = Table::new(BGP_NEIGHBORS, &["Neighbor IP"]);

        let summary = summarize(&[interfaces, neighbors]);
        assert_eq!(
            summary,
            SheetSummary {
                interfaces: 2,
                ..SheetSummary::default()
            }
        );
    }

    #[test]
    fn render_lists_every_sheet() {
        colored::control::set_override(false);
        let line = render(SheetSummary {
            general: 15,
            interfaces: 6,
            vrfs: 2,
            neighbors: 1,
            peer_groups: 1,
        });
        assert_eq!(
            line,
            "sheet_summary general=15 interfaces=6 vrfs=2 neighbors=1 peer_groups=1"
        );
    }
}
