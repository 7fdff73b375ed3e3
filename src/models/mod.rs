// Domain models for agent attribute-group data

mod group;
mod value;

pub use group::{AttributeGroup, Row};
pub use value::CellValue;
