use {
    crate::{field::Field, BibSortError},
    log::error,
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// Stores information about how to sort entries by an individual field.
///
/// In the default (content) mode the values of the field are compared. In binary mode only the
/// presence of the field matters: entries with the field set come before entries without it, and
/// the direction is ignored.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SortField {
    field: Field,
    descending: bool,
    binary: bool,
}

impl SortField {
    /// Creates a new sort field.
    pub fn new<F: Into<Field>>(field: F, descending: bool, binary: bool) -> Self {
        Self {
            field: field.into(),
            descending,
            binary,
        }
    }

    /// Sorts on the content of `field`, lowest values first.
    pub fn ascending<F: Into<Field>>(field: F) -> Self {
        Self::new(field, false, false)
    }

    /// Sorts on the content of `field`, highest values first.
    pub fn descending<F: Into<Field>>(field: F) -> Self {
        Self::new(field, true, false)
    }

    /// Sorts on whether `field` is set.
    pub fn presence<F: Into<Field>>(field: F) -> Self {
        Self::new(field, false, true)
    }

    /// Returns the field to sort on.
    #[inline]
    pub fn get_field(&self) -> &Field {
        &self.field
    }

    /// Returns whether the content comparison should be reversed.
    #[inline]
    pub fn is_descending(&self) -> bool {
        self.descending
    }

    /// Returns whether only the presence of the field is compared.
    #[inline]
    pub fn is_binary(&self) -> bool {
        self.binary
    }
}

impl<F: Into<Field>> From<(F, bool, bool)> for SortField {
    fn from((field, descending, binary): (F, bool, bool)) -> Self {
        Self::new(field, descending, binary)
    }
}

/// Parses `field[:asc|:desc][:content|:binary]`. Qualifiers may appear in any order; a later
/// qualifier overrides an earlier one of the same kind.
impl FromStr for SortField {
    type Err = BibSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let field = Field::new(parts.next().unwrap_or(""))?;
        let mut descending = false;
        let mut binary = false;

        for qualifier in parts {
            match qualifier.trim().to_lowercase().as_str() {
                "asc" | "ascending" => descending = false,
                "desc" | "descending" => descending = true,
                "content" => binary = false,
                "binary" | "presence" => binary = true,
                other => {
                    error!("Unknown qualifier {other:?} in sort field {s:?}");
                    return Err(BibSortError::InvalidSortField(format!("unknown qualifier {other:?} in {s:?}")));
                }
            }
        }

        Ok(Self {
            field,
            descending,
            binary,
        })
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.field)?;
        if self.descending {
            write!(f, ":desc")?;
        }
        if self.binary {
            write!(f, ":binary")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::field::{InternalField, StandardField},
        pretty_assertions::assert_eq,
        test_log::test,
    };

    #[test]
    fn test_parse() {
        assert_eq!("author".parse::<SortField>().unwrap(), SortField::ascending(StandardField::Author));
        assert_eq!("Year:DESC".parse::<SortField>().unwrap(), SortField::descending(StandardField::Year));
        assert_eq!("doi:binary".parse::<SortField>().unwrap(), SortField::presence(StandardField::Doi));
        assert_eq!(
            "citationkey:binary:desc".parse::<SortField>().unwrap(),
            SortField::new(InternalField::KeyField, true, true)
        );
        assert_eq!("year:desc:asc".parse::<SortField>().unwrap(), SortField::ascending(StandardField::Year));
        assert_eq!(" title : content ".parse::<SortField>().unwrap(), SortField::ascending(StandardField::Title));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "year:up".parse::<SortField>(),
            Err(BibSortError::InvalidSortField("unknown qualifier \"up\" in \"year:up\"".to_string()))
        );
        assert_eq!(":desc".parse::<SortField>(), Err(BibSortError::InvalidFieldName("".to_string())));
    }

    #[test]
    fn test_display() {
        for spec in ["author", "year:desc", "doi:binary", "citationkey:desc:binary", "groups"] {
            let sort_field: SortField = spec.parse().unwrap();
            assert_eq!(sort_field.to_string(), spec);
        }
    }

    #[test]
    fn test_from_tuple() {
        let sort_field = SortField::from((StandardField::Volume, true, false));
        assert_eq!(sort_field.get_field(), &Field::Standard(StandardField::Volume));
        assert!(sort_field.is_descending());
        assert!(!sort_field.is_binary());
    }
}
