//! Grouping demos into per-folder sections.

/// Items that belong to a folder section.
pub trait Grouped {
    fn folder(&self) -> &str;
}

impl Grouped for crate::record::DemoRecord {
    fn folder(&self) -> &str {
        &self.folder
    }
}

impl Grouped for crate::record::Preview {
    fn folder(&self) -> &str {
        &self.record.folder
    }
}

/// One folder and the items found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a, T> {
    pub folder: &'a str,
    pub items: Vec<&'a T>,
}

/// Group `items` by folder.
///
/// Every entry of `folders` gets a group even when it ends up empty. Items whose
/// folder was not declared get a trailing group in first-seen order.
pub fn group_by_folder<'a, T: Grouped>(folders: &'a [String], items: &'a [T]) -> Vec<Group<'a, T>> {
    let mut groups: Vec<Group<'a, T>> = folders
        .iter()
        .map(|folder| Group {
            folder: folder.as_str(),
            items: Vec::new(),
        })
        .collect();

    for item in items {
        let folder = item.folder();
        match groups.iter_mut().find(|g| g.folder == folder) {
            Some(group) => group.items.push(item),
            None => groups.push(Group {
                folder,
                items: vec![item],
            }),
        }
    }

    groups
}
