use {
    crate::{
        entry::Entry,
        field::{Field, FieldProperty, InternalField},
        name::NameNormalizer,
        search::{parse_int, CaseFolding, FieldValue, SortField},
    },
    log::trace,
    std::{borrow::Cow, cmp::Ordering},
};

/// Compares two entries on a single [SortField].
///
/// [Ordering::Equal] means this field cannot tell the entries apart and the decision is left to the
/// next field in the [Sort](crate::search::Sort).
#[derive(Clone, Copy, Debug)]
pub struct FieldComparator<'s> {
    sort_field: &'s SortField,
    normalizer: &'s dyn NameNormalizer,
    case_folding: CaseFolding,
}

impl<'s> FieldComparator<'s> {
    /// Creates a comparator for `sort_field`.
    pub fn new(sort_field: &'s SortField, normalizer: &'s dyn NameNormalizer, case_folding: CaseFolding) -> Self {
        Self {
            sort_field,
            normalizer,
            case_folding,
        }
    }

    /// Compares `a` and `b` on the sort field.
    ///
    /// Where exactly one side is missing a value the result does not depend on the direction: in binary
    /// mode the entry with the field set comes first, otherwise the entry without a value comes first.
    pub fn compare<E: Entry>(&self, a: &E, b: &E) -> Ordering {
        let field = self.sort_field.get_field();
        let v1 = a.field(field);
        let v2 = b.field(field);

        if self.sort_field.is_binary() {
            return match (v1, v2) {
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                _ => Ordering::Equal,
            };
        }

        match self.prepare(a, b, v1, v2) {
            (None, None) => Ordering::Equal,
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (Some(v1), Some(v2)) => {
                let result = v1.compare(&v2, self.case_folding);
                if self.sort_field.is_descending() {
                    result.reverse()
                } else {
                    result
                }
            }
        }
    }

    /// Turns the raw values into the values actually compared. Person names take precedence over every
    /// other rule.
    fn prepare<'e, E: Entry>(
        &self,
        a: &'e E,
        b: &'e E,
        v1: Option<&'e str>,
        v2: Option<&'e str>,
    ) -> (Option<FieldValue<'e>>, Option<FieldValue<'e>>) {
        let field = self.sort_field.get_field();

        if field.has_property(FieldProperty::PersonNames) {
            return (v1.map(|v| self.person_names(v)), v2.map(|v| self.person_names(v)));
        }

        match field {
            Field::Internal(InternalField::TypeHeader) => {
                (Some(a.entry_type().into()), Some(b.entry_type().into()))
            }
            Field::Internal(InternalField::KeyField) => {
                (a.citation_key().map(FieldValue::from), b.citation_key().map(FieldValue::from))
            }
            field if field.is_numeric() => {
                match (v1.and_then(parse_int), v2.and_then(parse_int)) {
                    (Some(i1), Some(i2)) => (Some(FieldValue::Int(i1)), Some(FieldValue::Int(i2))),
                    _ => {
                        trace!("Comparing {field} as strings: {v1:?} and {v2:?} are not both integers");
                        (v1.map(FieldValue::from), v2.map(FieldValue::from))
                    }
                }
            }
            _ => (v1.map(FieldValue::from), v2.map(FieldValue::from)),
        }
    }

    /// Person names are always lowercased, whatever the case folding of the sort.
    fn person_names(&self, value: &str) -> FieldValue<'static> {
        let normalized = self.normalizer.normalize_for_alphabetization(value);
        FieldValue::String(Cow::Owned(CaseFolding::Invariant.fold(&normalized).into_owned()))
    }
}
