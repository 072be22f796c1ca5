use super::Column;
use crate::{
    stmt::{DbEnum, Primitive, Projection},
    Result,
};

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::{marker::PhantomData, sync::Arc};
use tabula_core::{
    schema::{ColumnDef, Index, ReferenceOption, Table, Type},
    stmt::Id,
    Error,
};

/// Declares a table one column at a time.
///
/// ```
/// # fn main() -> tabula::Result<()> {
/// use tabula::TableBuilder;
///
/// let mut cities = TableBuilder::new("Cities");
/// let id = cities.integer("id").auto_increment().primary_key().add()?;
/// let name = cities.varchar("name", 50).add()?;
/// let table = cities.build();
///
/// assert_eq!(table.columns.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TableBuilder {
    table: Table,
}

/// A column being declared. Transforms consume the builder and return the
/// updated declaration; [`add`](Self::add) appends it to the table.
#[derive(Debug)]
pub struct ColumnBuilder<'a, T> {
    table: &'a mut TableBuilder,
    def: ColumnDef,

    /// Single-column index to create, `Some(unique)`
    index: Option<bool>,

    _p: PhantomData<T>,
}

impl TableBuilder {
    pub fn new(name: impl Into<Arc<str>>) -> TableBuilder {
        TableBuilder {
            table: Table::new(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.table.name
    }

    fn column<T>(&mut self, name: &str, ty: Type) -> ColumnBuilder<'_, T> {
        let def = ColumnDef::new(self.table.name.clone(), name, ty);
        ColumnBuilder {
            table: self,
            def,
            index: None,
            _p: PhantomData,
        }
    }

    pub fn integer(&mut self, name: &str) -> ColumnBuilder<'_, i32> {
        self.column(name, Type::Integer)
    }

    pub fn long(&mut self, name: &str) -> ColumnBuilder<'_, i64> {
        self.column(name, Type::Long)
    }

    pub fn short(&mut self, name: &str) -> ColumnBuilder<'_, i16> {
        self.column(name, Type::Short)
    }

    pub fn char(&mut self, name: &str) -> ColumnBuilder<'_, char> {
        self.column(name, Type::Char)
    }

    pub fn decimal(&mut self, name: &str, scale: u32, precision: u32) -> ColumnBuilder<'_, Decimal> {
        self.column(name, Type::Decimal { scale, precision })
    }

    pub fn float(&mut self, name: &str) -> ColumnBuilder<'_, f32> {
        self.column(name, Type::Float)
    }

    pub fn bool(&mut self, name: &str) -> ColumnBuilder<'_, bool> {
        self.column(name, Type::Boolean)
    }

    pub fn date(&mut self, name: &str) -> ColumnBuilder<'_, NaiveDate> {
        self.column(name, Type::Date)
    }

    pub fn datetime(&mut self, name: &str) -> ColumnBuilder<'_, DateTime<Utc>> {
        self.column(name, Type::DateTime)
    }

    pub fn timestamp(&mut self, name: &str) -> ColumnBuilder<'_, DateTime<Utc>> {
        self.column(name, Type::Timestamp)
    }

    pub fn blob(&mut self, name: &str) -> ColumnBuilder<'_, Vec<u8>> {
        self.column(name, Type::Blob)
    }

    /// Unbounded text
    pub fn text(&mut self, name: &str) -> ColumnBuilder<'_, String> {
        self.column(name, Type::text())
    }

    pub fn varchar(&mut self, name: &str, length: u32) -> ColumnBuilder<'_, String> {
        self.column(name, Type::varchar(length))
    }

    pub fn enumeration<E: DbEnum>(&mut self, name: &str) -> ColumnBuilder<'_, E> {
        self.column(
            name,
            Type::Enumeration {
                variants: E::VARIANTS,
            },
        )
    }

    /// Integer key of a row in `table`.
    pub fn entity_id(&mut self, name: &str, table: &Table) -> ColumnBuilder<'_, Id> {
        self.column(
            name,
            Type::EntityId {
                table: table.name.clone(),
            },
        )
    }

    /// A column of the same type as `target` that references it.
    pub fn reference<T>(&mut self, name: &str, target: &Column<T>) -> ColumnBuilder<'_, T> {
        let ty = target.column_type().ty.clone();
        self.column(name, ty).references(target)
    }

    /// A nullable [`reference`](Self::reference).
    pub fn opt_reference<T: Primitive>(
        &mut self,
        name: &str,
        target: &Column<T>,
    ) -> ColumnBuilder<'_, T::Nullable> {
        self.reference(name, target).nullable()
    }

    /// Declares an index over several columns of this table.
    pub fn index(&mut self, unique: bool, columns: &[&dyn Projection]) -> Result<()> {
        let mut names = Vec::with_capacity(columns.len());

        for column in columns {
            let expr = column.to_untyped();
            let Some(def) = expr.as_column() else {
                return Err(Error::invalid_schema(format!(
                    "index on table {} must be declared over columns",
                    self.table.name
                )));
            };
            names.push(def.name.clone());
        }

        self.table.add_index(Index::new(names, unique))
    }

    pub fn build(self) -> Arc<Table> {
        Arc::new(self.table)
    }
}

impl<'a, T> ColumnBuilder<'a, T> {
    pub fn primary_key(mut self) -> Self {
        self.def = self.def.primary_key();
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.def = self.def.auto_increment();
        self
    }

    /// Makes the column nullable. The column now loads as `Option<T>`.
    pub fn nullable(self) -> ColumnBuilder<'a, T::Nullable>
    where
        T: Primitive,
    {
        ColumnBuilder {
            table: self.table,
            def: self.def.nullable(),
            index: self.index,
            _p: PhantomData,
        }
    }

    /// Value used when an insert does not assign the column.
    pub fn default(mut self, value: T) -> Self
    where
        T: Primitive,
    {
        self.def = self.def.default_value(value.into_value());
        self
    }

    pub fn references<U>(mut self, target: &Column<U>) -> Self {
        self.def = self.def.references(target.def());
        self
    }

    pub fn on_delete(mut self, option: ReferenceOption) -> Self {
        self.def = self.def.on_delete(option);
        self
    }

    pub fn index(mut self) -> Self {
        self.index = Some(false);
        self
    }

    pub fn unique_index(mut self) -> Self {
        self.index = Some(true);
        self
    }

    /// Appends the column to the table.
    pub fn add(self) -> Result<Column<T>> {
        let name = self.def.name.clone();
        let def = self.table.table.add_column(self.def)?;

        if let Some(unique) = self.index {
            self.table.table.add_index(Index::new([name], unique))?;
        }

        Ok(Column::new(def))
    }
}

impl ColumnBuilder<'_, String> {
    pub fn collate(mut self, collation: &str) -> Self {
        if let Type::VarChar { collate, .. } = &mut self.def.column_type.ty {
            *collate = Some(collation.into());
        }
        self
    }
}
