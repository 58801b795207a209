//! Loose bibliography model handed over by the BibTeX reader.
//!
//! Entries keep their fields as an ordered name/value list, exactly as read.
//! The typed view used for rendering lives in [`crate::record`].

/// A parsed collection of bibliographic entries, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bibliography {
    pub entries: Vec<BibEntry>,
}

impl Bibliography {
    pub fn new(entries: Vec<BibEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A single `name = value` pair of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibField {
    pub name: String,
    pub value: String,
}

/// One bibliographic entry: lower-cased type tag, identifier and fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibEntry {
    pub entry_type: String,
    pub key: String,
    pub fields: Vec<BibField>,
}

impl BibEntry {
    pub fn new(entry_type: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            entry_type: entry_type.into().to_lowercase(),
            key: key.into(),
            fields: Vec::new(),
        }
    }

    /// Builder-style [`BibEntry::add_field`]
    pub fn with_field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.add_field(name, value);
        self
    }

    /// Set a field. Names are case-insensitive; an existing field is overwritten in place.
    pub fn add_field(&mut self, name: &str, value: impl Into<String>) {
        let name = name.to_lowercase();
        let value = value.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => field.value = value,
            None => self.fields.push(BibField { name, value }),
        }
    }

    /// Look up a field value by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}
