use super::{type_override::base_type, ColumnType, DbColumnType};
use crate::{config::DateType, field::Field, Config, Error, Result};

/// Maps a column's declared SQL type to a target-language type.
///
/// Implementations must be deterministic. Returning an error means "no type
/// could be derived"; the field then resolves without a type.
pub trait TypeConvert {
    fn convert(&self, field: &Field, config: &Config) -> Result<ColumnType>;
}

impl<F> TypeConvert for F
where
    F: Fn(&Field, &Config) -> Result<ColumnType>,
{
    fn convert(&self, field: &Field, config: &Config) -> Result<ColumnType> {
        self(field, config)
    }
}

/// Consults the configured type overrides in order, then falls back to the
/// built-in SQL type table.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTypeConvert;

impl TypeConvert for DefaultTypeConvert {
    fn convert(&self, field: &Field, config: &Config) -> Result<ColumnType> {
        if let Some(type_override) = config
            .type_overrides
            .iter()
            .find(|type_override| type_override.matches(field))
        {
            return Ok(type_override.ty.clone());
        }

        DefaultTypeConvert::from_declared(field.ty(), config.global.date_type)
    }
}

enum Temporal {
    Date,
    Time,
    DateTime,
    Year,
}

impl DefaultTypeConvert {
    /// Looks up the declared SQL type in the built-in table.
    ///
    /// Only the base name is considered (`varchar(32)` -> `varchar`), except
    /// for `tinyint(1)`, which maps to a boolean.
    pub fn from_declared(declared: &str, date_type: DateType) -> Result<ColumnType> {
        use DbColumnType::*;

        let declared_lower = declared.trim().to_ascii_lowercase();
        let base = base_type(&declared_lower);

        let ty = match base {
            "char" | "varchar" | "varchar2" | "nchar" | "nvarchar" | "nvarchar2" | "character"
            | "text" | "tinytext" | "mediumtext" | "longtext" | "json" | "jsonb" | "enum"
            | "set" | "uuid" | "xml" => String,
            "bit" | "bool" | "boolean" => Boolean,
            "tinyint" if declared_lower.starts_with("tinyint(1)") => Boolean,
            "tinyint" => Byte,
            "smallint" | "int2" | "smallserial" => Short,
            "int" | "integer" | "mediumint" | "int4" | "serial" => Integer,
            "bigint" | "int8" | "bigserial" => Long,
            "float" | "float4" | "real" => Float,
            "double" | "float8" => Double,
            "decimal" | "numeric" | "number" | "money" => BigDecimal,
            "clob" | "nclob" => Clob,
            "blob" => Blob,
            "binary" | "varbinary" | "tinyblob" | "mediumblob" | "longblob" | "bytea" => ByteArray,
            "date" => temporal(Temporal::Date, date_type),
            "time" | "timetz" => temporal(Temporal::Time, date_type),
            "datetime" | "timestamp" | "timestamptz" => temporal(Temporal::DateTime, date_type),
            "year" => temporal(Temporal::Year, date_type),
            _ => return Err(Error::unsupported_type(declared)),
        };

        Ok(ty.into())
    }
}

fn temporal(kind: Temporal, date_type: DateType) -> DbColumnType {
    match date_type {
        DateType::OnlyDate => DbColumnType::Date,
        DateType::SqlPack => match kind {
            Temporal::Date | Temporal::Year => DbColumnType::SqlDate,
            Temporal::Time => DbColumnType::Time,
            Temporal::DateTime => DbColumnType::Timestamp,
        },
        DateType::TimePack => match kind {
            Temporal::Date => DbColumnType::LocalDate,
            Temporal::Time => DbColumnType::LocalTime,
            Temporal::DateTime => DbColumnType::LocalDateTime,
            Temporal::Year => DbColumnType::Year,
        },
    }
}
