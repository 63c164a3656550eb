use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Errors that can occur while configuring a sort.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BibSortError {
    /// A field name was empty or otherwise unusable.
    InvalidFieldName(String),

    /// A sort field specification was invalid.
    InvalidSortField(String /* message */),

    /// No sort fields were given.
    MissingSortDirectives,
}

impl Display for BibSortError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::InvalidFieldName(name) => write!(f, "Invalid field name: {name:?}"),
            Self::InvalidSortField(message) => write!(f, "Invalid sort field: {message}"),
            Self::MissingSortDirectives => write!(f, "Missing sort directives: at least one sort field is required"),
        }
    }
}

impl Error for BibSortError {}

#[cfg(test)]
mod tests {
    use {super::*, pretty_assertions::assert_eq, test_log::test};

    #[test]
    fn test_display() {
        assert_eq!(BibSortError::InvalidFieldName("".to_string()).to_string(), "Invalid field name: \"\"");
        assert_eq!(
            BibSortError::InvalidSortField("unknown qualifier \"up\"".to_string()).to_string(),
            "Invalid sort field: unknown qualifier \"up\""
        );
        assert_eq!(
            BibSortError::MissingSortDirectives.to_string(),
            "Missing sort directives: at least one sort field is required"
        );
    }

    #[test]
    fn test_boxes() {
        let e: Box<dyn Error + Send + Sync> = BibSortError::MissingSortDirectives.into();
        assert!(e.downcast_ref::<BibSortError>().is_some());
    }
}
