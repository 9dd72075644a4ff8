use serde::{Deserialize, Serialize};

/// A target-language type a column resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnType {
    /// Simple type name, as written in generated source (`String`, `LocalDateTime`)
    pub ty: String,

    /// Fully qualified name to import, if the type is not in scope by default
    pub pkg: Option<String>,
}

/// The types produced by the default type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbColumnType {
    Long,
    Integer,
    Short,
    Byte,
    Float,
    Double,
    Boolean,
    String,
    BigDecimal,
    ByteArray,
    Clob,
    Blob,
    LocalDate,
    LocalTime,
    LocalDateTime,
    Year,
    Date,
    SqlDate,
    Time,
    Timestamp,
    Object,
}

impl ColumnType {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            pkg: None,
        }
    }

    pub fn with_pkg(ty: impl Into<String>, pkg: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            pkg: Some(pkg.into()),
        }
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn pkg(&self) -> Option<&str> {
        self.pkg.as_deref()
    }

    /// Returns `true` for boolean types, whatever their capitalization.
    pub fn is_boolean(&self) -> bool {
        self.ty.eq_ignore_ascii_case("boolean")
    }
}

impl DbColumnType {
    fn parts(self) -> (&'static str, Option<&'static str>) {
        use DbColumnType::*;

        match self {
            Long => ("Long", None),
            Integer => ("Integer", None),
            Short => ("Short", None),
            Byte => ("Byte", None),
            Float => ("Float", None),
            Double => ("Double", None),
            Boolean => ("Boolean", None),
            String => ("String", None),
            BigDecimal => ("BigDecimal", Some("java.math.BigDecimal")),
            ByteArray => ("byte[]", None),
            Clob => ("Clob", Some("java.sql.Clob")),
            Blob => ("Blob", Some("java.sql.Blob")),
            LocalDate => ("LocalDate", Some("java.time.LocalDate")),
            LocalTime => ("LocalTime", Some("java.time.LocalTime")),
            LocalDateTime => ("LocalDateTime", Some("java.time.LocalDateTime")),
            Year => ("Year", Some("java.time.Year")),
            Date => ("Date", Some("java.util.Date")),
            SqlDate => ("Date", Some("java.sql.Date")),
            Time => ("Time", Some("java.sql.Time")),
            Timestamp => ("Timestamp", Some("java.sql.Timestamp")),
            Object => ("Object", None),
        }
    }
}

impl From<DbColumnType> for ColumnType {
    fn from(value: DbColumnType) -> Self {
        let (ty, pkg) = value.parts();
        ColumnType {
            ty: ty.to_string(),
            pkg: pkg.map(str::to_string),
        }
    }
}
