use {
    crate::{
        entry::Entry,
        name::{LastFirstNormalizer, NameNormalizer},
        search::{CaseFolding, FieldComparator, SortField},
        BibSortError,
    },
    log::{debug, error},
    std::{
        cmp::Ordering,
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// Encapsulates sort criteria for entries.
///
/// The fields are checked in succession: the first [SortField] is checked first, but if it produces
/// a tie, the second one is used to break the tie, and so on. If there is still a tie after all fields
/// are checked, the entries' unique ids decide, so two distinct entries never compare as equal.
///
/// A `Sort` holds no mutable state and may be shared between threads sorting independently.
#[derive(Debug)]
pub struct Sort {
    fields: Vec<SortField>,
    normalizer: Box<dyn NameNormalizer>,
    case_folding: CaseFolding,
}

impl Sort {
    /// Sets the sort to the given criteria in succession.
    ///
    /// # Errors
    /// Returns [BibSortError::MissingSortDirectives] if `fields` is empty.
    pub fn new(fields: Vec<SortField>) -> Result<Self, BibSortError> {
        if fields.is_empty() {
            error!("Sort must contain at least one field");
            return Err(BibSortError::MissingSortDirectives);
        }

        let sort = Self {
            fields,
            normalizer: Box::new(LastFirstNormalizer),
            case_folding: CaseFolding::default(),
        };
        debug!("Created sort with {} field(s): {sort}", sort.fields.len());
        Ok(sort)
    }

    /// Parses a comma-separated list of sort fields, e.g. `author, year:desc, doi:binary`. See
    /// [SortField]'s [FromStr] implementation for the syntax of each field.
    pub fn parse(spec: &str) -> Result<Self, BibSortError> {
        if spec.trim().is_empty() {
            error!("Sort specification is empty");
            return Err(BibSortError::MissingSortDirectives);
        }

        let mut fields: Vec<SortField> = Vec::new();
        for directive in spec.split(',') {
            if directive.trim().is_empty() {
                error!("Empty sort directive in {spec:?}");
                return Err(BibSortError::InvalidSortField(format!("empty sort directive in {spec:?}")));
            }

            fields.push(directive.parse::<SortField>()?);
        }

        Self::new(fields)
    }

    /// Replaces the normalizer used for person-names fields.
    pub fn with_normalizer(mut self, normalizer: Box<dyn NameNormalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Replaces the case folding applied to string values.
    pub fn with_case_folding(mut self, case_folding: CaseFolding) -> Self {
        self.case_folding = case_folding;
        self
    }

    /// Returns the sort criteria.
    pub fn get_sort(&self) -> &[SortField] {
        &self.fields
    }

    /// Returns the case folding applied to string values.
    pub fn get_case_folding(&self) -> CaseFolding {
        self.case_folding
    }

    /// Compares two entries.
    pub fn compare<E: Entry>(&self, a: &E, b: &E) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }

        for sort_field in &self.fields {
            let result = FieldComparator::new(sort_field, self.normalizer.as_ref(), self.case_folding).compare(a, b);
            if result != Ordering::Equal {
                return result;
            }
        }

        a.id().cmp(b.id())
    }

    /// Compares two entries, returning -1, 0, or 1.
    pub fn compare_raw<E: Entry>(&self, a: &E, b: &E) -> i32 {
        self.compare(a, b) as i32
    }

    /// Sorts `entries` in place. The sort is stable, though with the id tie-break only entries that are
    /// equal to each other keep a relative order that matters.
    pub fn sort<E: Entry>(&self, entries: &mut [E]) {
        entries.sort_by(|a, b| self.compare(a, b));
    }

    /// Sorts `entries` in place without preserving the order of equal entries.
    pub fn sort_unstable<E: Entry>(&self, entries: &mut [E]) {
        entries.sort_unstable_by(|a, b| self.compare(a, b));
    }
}

impl FromStr for Sort {
    type Err = BibSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Sort {
    /// Writes the fields in the form accepted by [Sort::parse].
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{field}")?;
        }

        Ok(())
    }
}
