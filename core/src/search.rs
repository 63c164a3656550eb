mod case_folding;
mod field_comparator;
mod field_value;
mod sort;
mod sort_field;

pub use {case_folding::*, field_comparator::*, field_value::*, sort::*, sort_field::*};
