use {
    crate::{
        field::{Field, InternalField},
        EntryId,
    },
    std::{
        collections::BTreeMap,
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

/// Read-only access to a bibliographic entry, as needed for sorting.
///
/// Equality (`PartialEq`) is the entry's own notion of equivalence; sorting treats equivalent entries
/// as equal without looking at any field.
pub trait Entry: PartialEq {
    /// Returns the raw value of the given field, if set.
    fn field(&self, field: &Field) -> Option<&str>;

    /// Returns the entry type (article, book, ...).
    fn entry_type(&self) -> &str;

    /// Returns the citation key, if set.
    fn citation_key(&self) -> Option<&str>;

    /// Returns the unique id of the entry.
    fn id(&self) -> &EntryId;
}

/// A BibTeX entry: a type, an optional citation key, and a set of fields.
///
/// Each entry receives a random [EntryId] when it is created. The id is not part of the BibTeX data
/// and is never changed by the setters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BibEntry {
    id: EntryId,
    entry_type: String,
    citation_key: Option<String>,
    fields: BTreeMap<Field, String>,
}

impl BibEntry {
    /// Creates an empty entry of the given type with a fresh id.
    pub fn new(entry_type: &str) -> Self {
        Self::with_id(EntryId::random_id(), entry_type)
    }

    /// Creates an empty entry of the given type with the given id.
    pub fn with_id(id: EntryId, entry_type: &str) -> Self {
        Self {
            id,
            entry_type: entry_type.to_string(),
            citation_key: None,
            fields: BTreeMap::new(),
        }
    }

    /// Sets a field and returns the entry.
    pub fn with_field<F: Into<Field>>(mut self, field: F, value: &str) -> Self {
        self.set_field(field, value);
        self
    }

    /// Sets the citation key and returns the entry.
    pub fn with_citation_key(mut self, key: &str) -> Self {
        self.set_citation_key(key);
        self
    }

    /// Sets a field, returning the previous value if any. Setting a synthetic field changes the
    /// attribute it stands for.
    pub fn set_field<F: Into<Field>>(&mut self, field: F, value: &str) -> Option<String> {
        match field.into() {
            Field::Internal(InternalField::TypeHeader) => {
                Some(std::mem::replace(&mut self.entry_type, value.to_string()))
            }
            Field::Internal(InternalField::KeyField) => self.citation_key.replace(value.to_string()),
            field => self.fields.insert(field, value.to_string()),
        }
    }

    /// Removes a field, returning its value if it was set. The entry type cannot be cleared.
    pub fn clear_field<F: Into<Field>>(&mut self, field: F) -> Option<String> {
        match field.into() {
            Field::Internal(InternalField::TypeHeader) => None,
            Field::Internal(InternalField::KeyField) => self.citation_key.take(),
            field => self.fields.remove(&field),
        }
    }

    /// Sets the citation key.
    pub fn set_citation_key(&mut self, key: &str) {
        self.citation_key = Some(key.to_string());
    }

    /// Returns an iterator over the stored (non-synthetic) fields and their values.
    pub fn fields(&self) -> impl Iterator<Item = (&Field, &str)> {
        self.fields.iter().map(|(f, v)| (f, v.as_str()))
    }
}

impl Entry for BibEntry {
    /// The synthetic fields resolve to the entry type and citation key.
    fn field(&self, field: &Field) -> Option<&str> {
        match field {
            Field::Internal(InternalField::TypeHeader) => Some(self.entry_type.as_str()),
            Field::Internal(InternalField::KeyField) => self.citation_key.as_deref(),
            field => self.fields.get(field).map(|v| v.as_str()),
        }
    }

    #[inline]
    fn entry_type(&self) -> &str {
        &self.entry_type
    }

    #[inline]
    fn citation_key(&self) -> Option<&str> {
        self.citation_key.as_deref()
    }

    #[inline]
    fn id(&self) -> &EntryId {
        &self.id
    }
}

impl Display for BibEntry {
    /// Prints the entry in BibTeX syntax. Standard fields come first, in name order.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "@{}{{{}", self.entry_type, self.citation_key.as_deref().unwrap_or(""))?;

        for (field, value) in self.fields.iter() {
            write!(f, ",\n  {field} = {{{value}}}")?;
        }

        write!(f, "\n}}")
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::field::StandardField,
        pretty_assertions::assert_eq,
        test_log::test,
    };

    #[test]
    fn test_fields() {
        let mut entry = BibEntry::new("article")
            .with_field(StandardField::Author, "Donald E. Knuth")
            .with_field(StandardField::Year, "1984");

        assert_eq!(entry.field(&StandardField::Author.into()), Some("Donald E. Knuth"));
        assert_eq!(entry.field(&StandardField::Title.into()), None);
        assert_eq!(entry.set_field(StandardField::Year, "1986"), Some("1984".to_string()));
        assert_eq!(entry.clear_field(StandardField::Year), Some("1986".to_string()));
        assert_eq!(entry.field(&StandardField::Year.into()), None);
        assert_eq!(entry.fields().count(), 1);
    }

    #[test]
    fn test_synthetic_fields() {
        let mut entry = BibEntry::new("book");
        assert_eq!(entry.field(&InternalField::TypeHeader.into()), Some("book"));
        assert_eq!(entry.field(&InternalField::KeyField.into()), None);

        entry.set_field(InternalField::KeyField, "Knuth1984");
        assert_eq!(entry.citation_key(), Some("Knuth1984"));
        assert_eq!(entry.field(&InternalField::KeyField.into()), Some("Knuth1984"));

        assert_eq!(entry.set_field(InternalField::TypeHeader, "article"), Some("book".to_string()));
        assert_eq!(entry.entry_type(), "article");
        assert_eq!(entry.clear_field(InternalField::TypeHeader), None);
        assert_eq!(entry.clear_field(InternalField::KeyField), Some("Knuth1984".to_string()));
        assert_eq!(entry.fields().count(), 0);
    }

    #[test]
    fn test_equality() {
        let id = EntryId::from("0001");
        let a = BibEntry::with_id(id.clone(), "article").with_field(StandardField::Title, "TeX");
        let b = BibEntry::with_id(id, "article").with_field(StandardField::Title, "TeX");
        assert_eq!(a, b);
        assert_ne!(a.clone().with_field(StandardField::Year, "1984"), b);

        let c = BibEntry::new("article").with_field(StandardField::Title, "TeX");
        assert_ne!(a, c);
    }

    #[test]
    fn test_display() {
        let entry = BibEntry::new("book")
            .with_citation_key("Knuth1984")
            .with_field(StandardField::Year, "1984")
            .with_field(StandardField::Author, "Donald E. Knuth");
        assert_eq!(entry.to_string(), "@book{Knuth1984,\n  author = {Donald E. Knuth},\n  year = {1984}\n}");
    }
}
