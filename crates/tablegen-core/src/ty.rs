mod column_type;
pub use column_type::{ColumnType, DbColumnType};

mod convert;
pub use convert::{DefaultTypeConvert, TypeConvert};

mod type_override;
pub use type_override::{TypeMatch, TypeOverride};
