//! Import rules persisted in SQLite.

use crate::database::{from_sql_id, to_sql_id, Database};
use crate::error::{StoreError, StoreResult};
use metabridge_behavior::{BehaviorError, BehaviorResult, ImportRule, RuleStore};
use metabridge_types::{BehaviorKind, ElementId, ItemId};
use rusqlite::{params, Connection, OptionalExtension, Params};
use tracing::{debug, info};

/// Rule store backed by the `import_rules` table.
///
/// The unique index on `(COALESCE(element_id, -1), COALESCE(item_id, -1))`
/// keeps one row per scope, null-partial scopes included.
#[derive(Debug, Clone)]
pub struct SqliteRuleStore {
    db: Database,
}

impl SqliteRuleStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Opens a store over a private in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self::new(Database::open_in_memory()?))
    }

    /// Looks up the rule stored under exactly this scope. `None` matches the
    /// null column, not any value.
    pub fn get_rule(
        &self,
        element_id: Option<ElementId>,
        item_id: Option<ItemId>,
    ) -> StoreResult<Option<ImportRule>> {
        let conn = self.db.lock()?;
        select_rule(&conn, element_id, item_id)
    }

    /// Stores a rule, replacing whatever was stored under its scope. Returns
    /// the replaced behavior.
    pub fn put_rule(&self, rule: ImportRule) -> StoreResult<Option<BehaviorKind>> {
        if !rule.is_scoped() {
            return Err(StoreError::InvalidData(
                "import rule needs an element, an item, or both".into(),
            ));
        }
        let mut conn = self.db.lock()?;
        let tx = conn.transaction()?;
        let previous = select_rule(&tx, rule.element_id, rule.item_id)?.map(|r| r.behavior);
        tx.execute(
            "INSERT OR REPLACE INTO import_rules (element_id, item_id, behavior) VALUES (?1, ?2, ?3)",
            params![
                element_param(rule.element_id)?,
                item_param(rule.item_id)?,
                rule.behavior.as_str(),
            ],
        )?;
        tx.commit()?;
        info!(
            element = ?rule.element_id.map(|e| e.get()),
            item = ?rule.item_id.map(|i| i.get()),
            behavior = %rule.behavior,
            "saved import rule"
        );
        Ok(previous)
    }

    /// Deletes the rule stored under this scope, returning it.
    pub fn remove_rule(
        &self,
        element_id: Option<ElementId>,
        item_id: Option<ItemId>,
    ) -> StoreResult<Option<ImportRule>> {
        let mut conn = self.db.lock()?;
        let tx = conn.transaction()?;
        let existing = select_rule(&tx, element_id, item_id)?;
        if existing.is_some() {
            tx.execute(
                "DELETE FROM import_rules WHERE element_id IS ?1 AND item_id IS ?2",
                params![element_param(element_id)?, item_param(item_id)?],
            )?;
        }
        tx.commit()?;
        Ok(existing)
    }

    /// Every stored rule in insertion order.
    pub fn list_rules(&self) -> StoreResult<Vec<ImportRule>> {
        let conn = self.db.lock()?;
        query_rules(
            &conn,
            "SELECT element_id, item_id, behavior FROM import_rules ORDER BY id",
            [],
        )
    }

    /// Every rule scoped to one item, item-wide default included, in
    /// insertion order.
    pub fn rules_for_item(&self, item_id: ItemId) -> StoreResult<Vec<ImportRule>> {
        let conn = self.db.lock()?;
        query_rules(
            &conn,
            "SELECT element_id, item_id, behavior FROM import_rules WHERE item_id = ?1 ORDER BY id",
            params![to_sql_id(item_id.get())?],
        )
    }
}

impl RuleStore for SqliteRuleStore {
    fn find_rule(
        &self,
        element_id: Option<ElementId>,
        item_id: Option<ItemId>,
    ) -> BehaviorResult<Option<ImportRule>> {
        self.get_rule(element_id, item_id)
            .map_err(|e| BehaviorError::Store(e.to_string()))
    }
}

fn select_rule(
    conn: &Connection,
    element_id: Option<ElementId>,
    item_id: Option<ItemId>,
) -> StoreResult<Option<ImportRule>> {
    let behavior: Option<String> = conn
        .query_row(
            "SELECT behavior FROM import_rules WHERE element_id IS ?1 AND item_id IS ?2",
            params![element_param(element_id)?, item_param(item_id)?],
            |row| row.get(0),
        )
        .optional()?;
    debug!(
        element = ?element_id.map(|e| e.get()),
        item = ?item_id.map(|i| i.get()),
        found = behavior.is_some(),
        "rule lookup"
    );
    behavior
        .map(|b| {
            Ok(ImportRule {
                element_id,
                item_id,
                behavior: parse_behavior(&b)?,
            })
        })
        .transpose()
}

fn query_rules(
    conn: &Connection,
    sql: &str,
    params: impl Params,
) -> StoreResult<Vec<ImportRule>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, |row| {
        Ok((
            row.get::<_, Option<i64>>(0)?,
            row.get::<_, Option<i64>>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut rules = Vec::new();
    for row in rows {
        let (element, item, behavior) = row?;
        rules.push(decode_rule(element, item, &behavior)?);
    }
    Ok(rules)
}

fn decode_rule(element: Option<i64>, item: Option<i64>, behavior: &str) -> StoreResult<ImportRule> {
    Ok(ImportRule {
        element_id: element.map(from_sql_id).transpose()?.map(ElementId::new),
        item_id: item.map(from_sql_id).transpose()?.map(ItemId::new),
        behavior: parse_behavior(behavior)?,
    })
}

fn parse_behavior(s: &str) -> StoreResult<BehaviorKind> {
    s.parse()
        .map_err(|e| StoreError::InvalidData(format!("stored behavior: {e}")))
}

fn element_param(id: Option<ElementId>) -> StoreResult<Option<i64>> {
    id.map(|e| to_sql_id(e.get())).transpose()
}

fn item_param(id: Option<ItemId>) -> StoreResult<Option<i64>> {
    id.map(|i| to_sql_id(i.get())).transpose()
}
