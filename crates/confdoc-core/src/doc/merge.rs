//! Folding newly discovered documentation items into an existing tree

use tracing::{debug, trace};

use super::types::{ConfigDocItem, ConfigDocSection};

/// Merge `incoming` into `existing`, in order.
///
/// Keys are appended. A section is folded into the first existing section
/// with the same title, searched depth first through the whole tree; its
/// items are merged into that section with this same procedure and the
/// incoming section itself is dropped. A section with no match anywhere is
/// appended whole.
///
/// Existing entries always stay ahead of the ones added here.
pub fn append_config_items(existing: &mut Vec<ConfigDocItem>, incoming: Vec<ConfigDocItem>) {
    for item in incoming {
        match item {
            ConfigDocItem::Key(key) => {
                trace!(key = %key.key, "appending config key");
                existing.push(ConfigDocItem::Key(key));
            }
            ConfigDocItem::Section(section) => {
                if let Some(target) = find_section_mut(existing, &section.title) {
                    debug!(
                        title = %section.title,
                        items = section.items.len(),
                        "folding config section into existing section"
                    );
                    append_config_items(&mut target.items, section.items);
                } else {
                    debug!(title = %section.title, "appending new config section");
                    existing.push(ConfigDocItem::Section(section));
                }
            }
        }
    }
}

/// Find the first section titled `title`, depth first, in document order.
fn find_section_mut<'a>(
    items: &'a mut [ConfigDocItem],
    title: &str,
) -> Option<&'a mut ConfigDocSection> {
    for item in items.iter_mut() {
        let ConfigDocItem::Section(section) = item else {
            continue;
        };

        if section.title == title {
            return Some(section);
        }
        if let Some(found) = find_section_mut(&mut section.items, title) {
            return Some(found);
        }
    }

    None
}
