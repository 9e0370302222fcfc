use config_tree::ConfigNode;

static EMPTY: ConfigNode = ConfigNode::Null;

/// Borrowed view over an NVUE configuration export.
///
/// `nv config show -o yaml` emits a two-item list: a `header` item (model,
/// software version) followed by a `set` item holding the configuration. Some
/// tooling flattens that into one mapping, so both shapes are accepted. A
/// missing section reads as an empty node.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    pub header: &'a ConfigNode,
    pub set: &'a ConfigNode,
}

impl<'a> Document<'a> {
    pub fn from_tree(root: &'a ConfigNode) -> Self {
        Self {
            header: section(root, "header"),
            set: section(root, "set"),
        }
    }
}

fn section<'a>(root: &'a ConfigNode, key: &str) -> &'a ConfigNode {
    match root {
        ConfigNode::Seq(items) => items
            .iter()
            .find_map(|item| item.get_child(key))
            .unwrap_or(&EMPTY),
        ConfigNode::Map(_) => root.get_child(key).unwrap_or(&EMPTY),
        ConfigNode::Null | ConfigNode::Scalar(_) => &EMPTY,
    }
}
