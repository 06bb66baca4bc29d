use rusqlite::{params, Connection};

// ── Local storage ──

pub fn get_item(conn: &Connection, area: &str, key: &str) -> anyhow::Result<Option<String>> {
    let result = conn.query_row(
        "SELECT value FROM local_storage WHERE area = ?1 AND key = ?2",
        params![area, key],
        |row| row.get::<_, String>(0),
    );

    match result {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn set_item(conn: &Connection, area: &str, key: &str, value: &str) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO local_storage (area, key, value) VALUES (?1, ?2, ?3)
         ON CONFLICT(area, key) DO UPDATE SET
           value = excluded.value,
           updated_at = datetime('now')",
        params![area, key, value],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[test]
    fn test_get_missing_item() {
        let conn = db::init_db(":memory:").unwrap();
        assert_eq!(get_item(&conn, "a@example.com", "bookings").unwrap(), None);
    }

    #[test]
    fn test_set_item_overwrites() {
        let conn = db::init_db(":memory:").unwrap();
        set_item(&conn, "a@example.com", "bookings", "[]").unwrap();
        set_item(&conn, "a@example.com", "bookings", "[1]").unwrap();

        assert_eq!(
            get_item(&conn, "a@example.com", "bookings").unwrap().as_deref(),
            Some("[1]")
        );
        assert_eq!(get_item(&conn, "b@example.com", "bookings").unwrap(), None);
    }
}
