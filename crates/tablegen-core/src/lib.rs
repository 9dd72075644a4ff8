pub mod config;
pub use config::Config;

mod context;
pub use context::{Context, ContextBuilder};

mod error;
pub use error::Error;

pub mod field;
pub use field::{ColumnMeta, Field, FieldBuilder, ResolvedField};

pub mod fill;
pub use fill::{FieldFill, FillRule, FillScope};

pub mod keyword;
pub use keyword::{KeywordPolicy, Keywords};

pub mod naming;
pub use naming::{NameConvert, NamingStrategy};

pub mod ty;
pub use ty::{ColumnType, TypeConvert};

/// A Result type alias that uses tablegen's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
