use crate::document::Document;
use crate::idmap::{IdIndex, IdMap};

/// Id uniquely identifying an element or attribute name within one
/// [`Document`].
///
/// Name ids are interned per document: the same id means nothing in
/// another document. Copying between documents goes through the name
/// string.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct NameId(u32);

impl IdIndex<NameId> for NameId {
    fn to_id(index: usize) -> NameId {
        NameId(index as u32)
    }

    fn from_id(id: NameId) -> usize {
        id.0 as usize
    }
}

pub(crate) type NameLookup = IdMap<NameId, String>;

/// ## Names
impl Document {
    /// Look up a name id, adding the name if it is not known yet.
    ///
    /// ```rust
    /// let mut doc = xmlgraft::Document::new();
    /// let a = doc.add_name("a");
    /// assert_eq!(doc.name("a"), Some(a));
    /// assert_eq!(doc.name_str(a), "a");
    /// ```
    pub fn add_name(&mut self, name: &str) -> NameId {
        if let Some(name_id) = self.name_lookup.get_id(name) {
            return name_id;
        }
        self.name_lookup.get_id_mut(name.to_string())
    }

    /// Look up a name id without adding it.
    pub fn name(&self, name: &str) -> Option<NameId> {
        self.name_lookup.get_id(name)
    }

    /// The string for a name id.
    ///
    /// # Panics
    ///
    /// Name ids are local to a document. Passing one obtained from another
    /// document panics or yields an unrelated name.
    pub fn name_str(&self, name_id: NameId) -> &str {
        self.name_lookup.get_value(name_id)
    }
}
