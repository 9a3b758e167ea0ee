pub mod apply;
pub mod parser;
pub mod sort;
pub mod spec;
pub mod transitions;

pub use apply::{apply_filters, filter_refs, matches};
pub use parser::parse_query;
pub use sort::{SortOrder, sort_records};
pub use spec::{FilterField, FilterSpec, TimeRange};
pub use transitions::FilterAction;
