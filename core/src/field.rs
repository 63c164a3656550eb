use {
    crate::BibSortError,
    log::error,
    once_cell::sync::Lazy,
    std::{
        collections::HashMap,
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// Semantic properties a field may carry. These decide how a field's content is prepared for
/// comparison.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldProperty {
    /// The field holds a list of person names (authors, editors, ...).
    PersonNames,

    /// The field normally holds an integer.
    Numeric,

    /// The field holds a date.
    Date,

    /// The field holds a DOI, URL, or other external identifier.
    ExternalId,
}

const PERSON_NAMES: &[FieldProperty] = &[FieldProperty::PersonNames];
const NUMERIC: &[FieldProperty] = &[FieldProperty::Numeric];
const DATE: &[FieldProperty] = &[FieldProperty::Date];
const EXTERNAL_ID: &[FieldProperty] = &[FieldProperty::ExternalId];
const NONE: &[FieldProperty] = &[];

/// The standard BibTeX/BibLaTeX fields.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum StandardField {
    #[allow(missing_docs)]
    Abstract,
    #[allow(missing_docs)]
    Address,
    #[allow(missing_docs)]
    Annotator,
    #[allow(missing_docs)]
    Author,
    #[allow(missing_docs)]
    BookAuthor,
    #[allow(missing_docs)]
    BookTitle,
    #[allow(missing_docs)]
    Chapter,
    #[allow(missing_docs)]
    Commentator,
    #[allow(missing_docs)]
    Date,
    #[allow(missing_docs)]
    Doi,
    #[allow(missing_docs)]
    Edition,
    #[allow(missing_docs)]
    Editor,
    #[allow(missing_docs)]
    EditorA,
    #[allow(missing_docs)]
    EditorB,
    #[allow(missing_docs)]
    EditorC,
    #[allow(missing_docs)]
    HowPublished,
    #[allow(missing_docs)]
    Institution,
    #[allow(missing_docs)]
    Isbn,
    #[allow(missing_docs)]
    Journal,
    #[allow(missing_docs)]
    Keywords,
    #[allow(missing_docs)]
    Month,
    #[allow(missing_docs)]
    Note,
    #[allow(missing_docs)]
    Number,
    #[allow(missing_docs)]
    Organization,
    #[allow(missing_docs)]
    Pages,
    #[allow(missing_docs)]
    Pmid,
    #[allow(missing_docs)]
    Publisher,
    #[allow(missing_docs)]
    School,
    #[allow(missing_docs)]
    Series,
    #[allow(missing_docs)]
    Title,
    #[allow(missing_docs)]
    Translator,
    #[allow(missing_docs)]
    Url,
    #[allow(missing_docs)]
    Volume,
    #[allow(missing_docs)]
    Year,
}

impl StandardField {
    /// Every standard field, in alphabetical order of their names.
    pub const ALL: [StandardField; 34] = [
        Self::Abstract,
        Self::Address,
        Self::Annotator,
        Self::Author,
        Self::BookAuthor,
        Self::BookTitle,
        Self::Chapter,
        Self::Commentator,
        Self::Date,
        Self::Doi,
        Self::Edition,
        Self::Editor,
        Self::EditorA,
        Self::EditorB,
        Self::EditorC,
        Self::HowPublished,
        Self::Institution,
        Self::Isbn,
        Self::Journal,
        Self::Keywords,
        Self::Month,
        Self::Note,
        Self::Number,
        Self::Organization,
        Self::Pages,
        Self::Pmid,
        Self::Publisher,
        Self::School,
        Self::Series,
        Self::Title,
        Self::Translator,
        Self::Url,
        Self::Volume,
        Self::Year,
    ];

    /// Returns the BibTeX name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Abstract => "abstract",
            Self::Address => "address",
            Self::Annotator => "annotator",
            Self::Author => "author",
            Self::BookAuthor => "bookauthor",
            Self::BookTitle => "booktitle",
            Self::Chapter => "chapter",
            Self::Commentator => "commentator",
            Self::Date => "date",
            Self::Doi => "doi",
            Self::Edition => "edition",
            Self::Editor => "editor",
            Self::EditorA => "editora",
            Self::EditorB => "editorb",
            Self::EditorC => "editorc",
            Self::HowPublished => "howpublished",
            Self::Institution => "institution",
            Self::Isbn => "isbn",
            Self::Journal => "journal",
            Self::Keywords => "keywords",
            Self::Month => "month",
            Self::Note => "note",
            Self::Number => "number",
            Self::Organization => "organization",
            Self::Pages => "pages",
            Self::Pmid => "pmid",
            Self::Publisher => "publisher",
            Self::School => "school",
            Self::Series => "series",
            Self::Title => "title",
            Self::Translator => "translator",
            Self::Url => "url",
            Self::Volume => "volume",
            Self::Year => "year",
        }
    }

    /// Returns the semantic properties of the field.
    pub fn properties(&self) -> &'static [FieldProperty] {
        match self {
            Self::Annotator
            | Self::Author
            | Self::BookAuthor
            | Self::Commentator
            | Self::Editor
            | Self::EditorA
            | Self::EditorB
            | Self::EditorC
            | Self::Translator => PERSON_NAMES,
            Self::Edition | Self::Number | Self::Pmid | Self::Volume | Self::Year => NUMERIC,
            Self::Date => DATE,
            Self::Doi | Self::Isbn | Self::Url => EXTERNAL_ID,
            _ => NONE,
        }
    }
}

/// Synthetic fields that are not stored as literal fields but computed from other entry attributes.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum InternalField {
    /// The entry type (article, book, ...).
    TypeHeader,

    /// The citation key of the entry.
    KeyField,
}

impl InternalField {
    /// Returns the name used to refer to the field in sort specifications.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TypeHeader => "entrytype",
            Self::KeyField => "citationkey",
        }
    }
}

/// Identifies a field of an entry.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Field {
    /// One of the well-known fields.
    Standard(StandardField),

    /// A synthetic field.
    Internal(InternalField),

    /// Any other field. The name is stored lowercased.
    Unknown(String),
}

static FIELDS_BY_NAME: Lazy<HashMap<&'static str, Field>> = Lazy::new(|| {
    let mut fields: HashMap<&'static str, Field> =
        StandardField::ALL.iter().map(|f| (f.name(), Field::Standard(*f))).collect();

    for f in [InternalField::TypeHeader, InternalField::KeyField] {
        fields.insert(f.name(), Field::Internal(f));
    }

    fields
});

impl Field {
    /// Creates a field from its name, matching known fields case-insensitively. Names that are not
    /// known become [Field::Unknown].
    pub fn new(name: &str) -> Result<Self, BibSortError> {
        let name = name.trim();
        if name.is_empty() {
            error!("Field names cannot be empty");
            return Err(BibSortError::InvalidFieldName(name.to_string()));
        }

        let name = name.to_lowercase();
        Ok(FIELDS_BY_NAME.get(name.as_str()).cloned().unwrap_or(Self::Unknown(name)))
    }

    /// Returns the name of the field.
    pub fn name(&self) -> &str {
        match self {
            Self::Standard(f) => f.name(),
            Self::Internal(f) => f.name(),
            Self::Unknown(name) => name.as_str(),
        }
    }

    /// Returns the semantic properties of the field. Internal and unknown fields have none.
    pub fn properties(&self) -> &'static [FieldProperty] {
        match self {
            Self::Standard(f) => f.properties(),
            _ => NONE,
        }
    }

    /// Indicates whether the field carries the given property.
    #[inline]
    pub fn has_property(&self, property: FieldProperty) -> bool {
        self.properties().contains(&property)
    }

    /// Indicates whether the field normally holds an integer.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.has_property(FieldProperty::Numeric)
    }
}

impl From<StandardField> for Field {
    fn from(f: StandardField) -> Self {
        Self::Standard(f)
    }
}

impl From<InternalField> for Field {
    fn from(f: InternalField) -> Self {
        Self::Internal(f)
    }
}

impl FromStr for Field {
    type Err = BibSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, pretty_assertions::assert_eq, test_log::test};

    #[test]
    fn test_names_round_trip() {
        for f in StandardField::ALL {
            assert_eq!(Field::new(f.name()).unwrap(), Field::Standard(f));
        }

        let names: Vec<&str> = StandardField::ALL.iter().map(|f| f.name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Author".parse::<Field>().unwrap(), Field::Standard(StandardField::Author));
        assert_eq!(" YEAR ".parse::<Field>().unwrap(), Field::Standard(StandardField::Year));
        assert_eq!("entrytype".parse::<Field>().unwrap(), Field::Internal(InternalField::TypeHeader));
        assert_eq!("CitationKey".parse::<Field>().unwrap(), Field::Internal(InternalField::KeyField));
        assert_eq!("Groups".parse::<Field>().unwrap(), Field::Unknown("groups".to_string()));
        assert_eq!("  ".parse::<Field>(), Err(BibSortError::InvalidFieldName("".to_string())));
    }

    #[test]
    fn test_properties() {
        let author = Field::from(StandardField::Author);
        assert!(author.has_property(FieldProperty::PersonNames));
        assert!(!author.is_numeric());

        let year = Field::from(StandardField::Year);
        assert!(year.is_numeric());
        assert!(!year.has_property(FieldProperty::PersonNames));

        assert!(Field::from(StandardField::Doi).has_property(FieldProperty::ExternalId));
        assert!(Field::from(StandardField::Title).properties().is_empty());
        assert!(Field::from(InternalField::TypeHeader).properties().is_empty());
        assert!(Field::Unknown("year2".to_string()).properties().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Field::from(StandardField::BookTitle).to_string(), "booktitle");
        assert_eq!(Field::from(InternalField::KeyField).to_string(), "citationkey");
        assert_eq!(Field::Unknown("groups".to_string()).to_string(), "groups");
    }
}
