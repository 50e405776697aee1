use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::structs::query_builder::QueryBuilder;
use crate::database::structs::sql_statement::SqlStatement;
use crate::model::enums::column_kind::ColumnKind;
use crate::model::structs::model_base::ModelBase;
use crate::model::traits::entity::Entity;
use crate::query::enums::expression::Expression;
use crate::query::enums::sql_value::SqlValue;
use crate::query::structs::filter::Filter;
use crate::query::structs::page::Page;

impl QueryBuilder {
    pub fn new(engine: DatabaseDrivers) -> Self {
        Self { engine }
    }

    pub fn quote_identifier(&self, identifier: &str) -> String {
        match self.engine {
            DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => format!("`{}`", identifier),
            DatabaseDrivers::pgsql => identifier.to_string(),
        }
    }

    /// Placeholder for the `index`th bind value, counting from 1.
    pub fn placeholder(&self, index: usize) -> String {
        match self.engine {
            DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => "?".to_string(),
            DatabaseDrivers::pgsql => format!("${}", index),
        }
    }

    pub fn limit_offset(&self, offset: u64, limit: u64) -> String {
        match self.engine {
            DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => format!("LIMIT {}, {}", offset, limit),
            DatabaseDrivers::pgsql => format!("LIMIT {} OFFSET {}", limit, offset),
        }
    }

    pub fn primary_key(&self) -> String {
        let id = self.quote_identifier(ModelBase::ID);
        match self.engine {
            DatabaseDrivers::sqlite3 => format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", id),
            DatabaseDrivers::mysql => format!("{} BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY", id),
            DatabaseDrivers::pgsql => format!("{} bigserial PRIMARY KEY", id),
        }
    }

    pub fn bigint_type(&self) -> &'static str {
        match self.engine {
            DatabaseDrivers::sqlite3 => "INTEGER",
            DatabaseDrivers::mysql => "BIGINT",
            DatabaseDrivers::pgsql => "bigint",
        }
    }

    pub fn column_type(&self, kind: ColumnKind) -> String {
        match (self.engine, kind) {
            (_, ColumnKind::Integer) => self.bigint_type().to_string(),
            (DatabaseDrivers::sqlite3, ColumnKind::Varchar(_)) => "TEXT".to_string(),
            (DatabaseDrivers::mysql, ColumnKind::Varchar(size)) => format!("VARCHAR({})", size),
            (DatabaseDrivers::pgsql, ColumnKind::Varchar(size)) => format!("varchar({})", size),
            (DatabaseDrivers::pgsql, ColumnKind::Text) => "text".to_string(),
            (_, ColumnKind::Text) => "TEXT".to_string(),
        }
    }

    /// Empty string default keeps partial inserts valid on every engine.
    fn column_default(&self, kind: ColumnKind) -> &'static str {
        match (self.engine, kind) {
            (_, ColumnKind::Integer) => "NOT NULL DEFAULT 0",
            (DatabaseDrivers::mysql, ColumnKind::Text) => "NOT NULL",
            _ => "NOT NULL DEFAULT ''",
        }
    }

    pub fn engine_name(&self) -> &'static str {
        match self.engine {
            DatabaseDrivers::sqlite3 => "SQLite",
            DatabaseDrivers::mysql => "MySQL",
            DatabaseDrivers::pgsql => "PgSQL",
        }
    }

    pub fn create_table<E: Entity>(&self) -> String {
        let mut columns = vec![
            self.primary_key(),
            format!("{} {} NOT NULL DEFAULT 0", self.quote_identifier(ModelBase::CREATED_AT), self.bigint_type()),
            format!("{} {} NOT NULL DEFAULT 0", self.quote_identifier(ModelBase::UPDATED_AT), self.bigint_type()),
            format!("{} {} NULL", self.quote_identifier(ModelBase::DELETED_AT), self.bigint_type()),
        ];
        columns.extend(E::FIELDS.iter().map(|field| {
            format!(
                "{} {} {}",
                self.quote_identifier(field.name),
                self.column_type(field.kind),
                self.column_default(field.kind)
            )
        }));
        if self.engine == DatabaseDrivers::mysql {
            columns.push(format!(
                "INDEX {} ({})",
                self.deleted_at_index_name::<E>(),
                self.quote_identifier(ModelBase::DELETED_AT)
            ));
        }
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.quote_identifier(E::TABLE),
            columns.join(", ")
        )
    }

    fn deleted_at_index_name<E: Entity>(&self) -> String {
        self.quote_identifier(&format!("idx_{}_deleted_at", E::TABLE))
    }

    /// MySQL declares the index inside `CREATE TABLE`, so there is nothing
    /// to run separately.
    pub fn create_deleted_at_index<E: Entity>(&self) -> Option<String> {
        match self.engine {
            DatabaseDrivers::mysql => None,
            _ => Some(format!(
                "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
                self.deleted_at_index_name::<E>(),
                self.quote_identifier(E::TABLE),
                self.quote_identifier(ModelBase::DELETED_AT)
            )),
        }
    }

    fn select_columns<E: Entity>(&self) -> String {
        ModelBase::FIELDS
            .iter()
            .chain(E::FIELDS.iter())
            .map(|field| self.quote_identifier(field.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn bind(&self, values: &mut Vec<SqlValue>, value: SqlValue) -> String {
        values.push(value);
        self.placeholder(values.len())
    }

    fn bind_list(&self, values: &mut Vec<SqlValue>, list: impl IntoIterator<Item = SqlValue>) -> String {
        list.into_iter()
            .map(|value| self.bind(values, value))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Visible rows only, plus the filter's predicates grouped in parentheses.
    pub fn render_filter(&self, filter: &Filter, values: &mut Vec<SqlValue>) -> String {
        let visible = format!("{} IS NULL", self.quote_identifier(ModelBase::DELETED_AT));
        if filter.is_empty() {
            return visible;
        }
        let mut clause = String::new();
        let last = filter.predicates.len() - 1;
        for (index, predicate) in filter.predicates.iter().enumerate() {
            let column = self.quote_identifier(predicate.column);
            match predicate.expression {
                Expression::In => {
                    let list = self.bind_list(values, predicate.values.iter().cloned());
                    clause.push_str(&format!("{} IN ({})", column, list));
                }
                expression => {
                    let value = predicate.values.first().cloned().unwrap_or(SqlValue::Int(0));
                    let placeholder = self.bind(values, value);
                    clause.push_str(&format!("{} {} {}", column, expression.operator(), placeholder));
                }
            }
            if index < last {
                clause.push_str(&format!(" {} ", predicate.logic.keyword()));
            }
        }
        format!("{} AND ({})", visible, clause)
    }

    pub fn order_by(&self, page: &Page) -> String {
        let columns = page
            .sort
            .iter()
            .map(|sort| format!(
                "{} {}",
                self.quote_identifier(sort.column),
                if sort.descending { "DESC" } else { "ASC" }
            ))
            .collect::<Vec<_>>()
            .join(", ");
        format!("ORDER BY {}", columns)
    }

    pub fn select_by_id<E: Entity>(&self, id: u64) -> SqlStatement {
        self.select_by_ids::<E>(&[id])
    }

    pub fn select_by_ids<E: Entity>(&self, ids: &[u64]) -> SqlStatement {
        let mut values = Vec::with_capacity(ids.len());
        let list = self.bind_list(&mut values, ids.iter().map(|id| SqlValue::from_id(*id)));
        let sql = format!(
            "SELECT {} FROM {} WHERE {} IS NULL AND {} IN ({})",
            self.select_columns::<E>(),
            self.quote_identifier(E::TABLE),
            self.quote_identifier(ModelBase::DELETED_AT),
            self.quote_identifier(ModelBase::ID),
            list
        );
        SqlStatement { sql, values }
    }

    pub fn select_one<E: Entity>(&self, filter: &Filter) -> SqlStatement {
        let mut values = Vec::new();
        let clause = self.render_filter(filter, &mut values);
        let sql = format!(
            "SELECT {} FROM {} WHERE {} {}",
            self.select_columns::<E>(),
            self.quote_identifier(E::TABLE),
            clause,
            self.limit_offset(0, 1)
        );
        SqlStatement { sql, values }
    }

    pub fn select_page<E: Entity>(&self, filter: &Filter, page: &Page) -> SqlStatement {
        let mut values = Vec::new();
        let clause = self.render_filter(filter, &mut values);
        let sql = format!(
            "SELECT {} FROM {} WHERE {} {} {}",
            self.select_columns::<E>(),
            self.quote_identifier(E::TABLE),
            clause,
            self.order_by(page),
            self.limit_offset(page.offset(), page.limit)
        );
        SqlStatement { sql, values }
    }

    pub fn count<E: Entity>(&self, filter: &Filter) -> SqlStatement {
        let mut values = Vec::new();
        let clause = self.render_filter(filter, &mut values);
        let sql = format!(
            "SELECT COUNT({}) FROM {} WHERE {}",
            self.quote_identifier(ModelBase::ID),
            self.quote_identifier(E::TABLE),
            clause
        );
        SqlStatement { sql, values }
    }

    /// SQLite and PostgreSQL report the new id through `RETURNING`; MySQL has
    /// no such clause and is asked for `LAST_INSERT_ID()` afterwards.
    pub fn insert<E: Entity>(&self, entity: &E) -> SqlStatement {
        let base = entity.base();
        let mut values = Vec::with_capacity(E::FIELDS.len() + 2);
        let mut columns = vec![
            self.quote_identifier(ModelBase::CREATED_AT),
            self.quote_identifier(ModelBase::UPDATED_AT),
        ];
        columns.extend(E::FIELDS.iter().map(|field| self.quote_identifier(field.name)));
        let row = [SqlValue::Int(base.created_at), SqlValue::Int(base.updated_at)]
            .into_iter()
            .chain(entity.values());
        let placeholders = self.bind_list(&mut values, row);
        let returning = match self.engine {
            DatabaseDrivers::mysql => String::new(),
            _ => format!(" RETURNING {}", self.quote_identifier(ModelBase::ID)),
        };
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}){}",
            self.quote_identifier(E::TABLE),
            columns.join(", "),
            placeholders,
            returning
        );
        SqlStatement { sql, values }
    }

    pub fn update_partial<E: Entity>(&self, id: u64, columns: &[(&'static str, SqlValue)], now: i64) -> SqlStatement {
        let mut values = Vec::with_capacity(columns.len() + 2);
        let mut assignments = Vec::with_capacity(columns.len() + 1);
        for (column, value) in columns.iter().filter(|(column, _)| *column != ModelBase::UPDATED_AT) {
            let placeholder = self.bind(&mut values, value.clone());
            assignments.push(format!("{} = {}", self.quote_identifier(column), placeholder));
        }
        let placeholder = self.bind(&mut values, SqlValue::Int(now));
        assignments.push(format!("{} = {}", self.quote_identifier(ModelBase::UPDATED_AT), placeholder));
        let id_placeholder = self.bind(&mut values, SqlValue::from_id(id));
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = {} AND {} IS NULL",
            self.quote_identifier(E::TABLE),
            assignments.join(", "),
            self.quote_identifier(ModelBase::ID),
            id_placeholder,
            self.quote_identifier(ModelBase::DELETED_AT)
        );
        SqlStatement { sql, values }
    }

    pub fn soft_delete<E: Entity>(&self, ids: &[u64], now: i64) -> SqlStatement {
        let mut values = Vec::with_capacity(ids.len() + 1);
        let placeholder = self.bind(&mut values, SqlValue::Int(now));
        let list = self.bind_list(&mut values, ids.iter().map(|id| SqlValue::from_id(*id)));
        let sql = format!(
            "UPDATE {} SET {} = {} WHERE {} IN ({}) AND {} IS NULL",
            self.quote_identifier(E::TABLE),
            self.quote_identifier(ModelBase::DELETED_AT),
            placeholder,
            self.quote_identifier(ModelBase::ID),
            list,
            self.quote_identifier(ModelBase::DELETED_AT)
        );
        SqlStatement { sql, values }
    }
}
