// Core algorithm exports
pub mod catalog;
pub mod compare;
pub mod filters;
pub mod ranker;

pub use catalog::Catalog;
pub use compare::{select, SelectionError, SELECT_TWO_MESSAGE};
pub use filters::{
    categorize_transmission, matches_criteria, FilterCriteria, FilterError, HorsepowerFilter,
    HorsepowerRange, ALL_HORSEPOWER,
};
pub use ranker::rank;
