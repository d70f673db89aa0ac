// Unit model, cascading unit builder and the segment formatter

pub mod builder;
pub mod error;
pub mod formatter;
pub mod template;
pub mod types;


pub use builder::make_consecutive_units;
pub use error::UnitError;
pub use formatter::{utx, UnitFormatter};
pub use template::{parse_label_template, MAX_TEMPLATE_WIDTH};
pub use types::{exact_u64, make_unit, Decomposition, FormatOptions, Label, LabelFn, Unit};
