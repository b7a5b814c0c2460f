//! Hash Record Module
//!
//! Field map of a single key, kept in insertion order.

// == Hash Record ==
/// Ordered field-to-value map stored under one key.
///
/// Field order is the order fields were first written, which is also the
/// order summaries walk cart lines in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashRecord {
    fields: Vec<(String, String)>,
}

impl HashRecord {
    // == Constructor ==
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Returns the value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    // == Set ==
    /// Sets `field`, keeping its position if it already exists.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((field, value)),
        }
    }

    // == Remove ==
    /// Removes `field`, returning its previous value.
    pub fn remove(&mut self, field: &str) -> Option<String> {
        let index = self.fields.iter().position(|(name, _)| name == field)?;
        Some(self.fields.remove(index).1)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(field, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl From<Vec<(String, String)>> for HashRecord {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let mut record = HashRecord::new();
        for (field, value) in pairs {
            record.set(field, value);
        }
        record
    }
}

impl IntoIterator for HashRecord {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
