//! SQL DDL for initializing the todo storage.

/// Postgres schema:
/// - `id` SERIAL PRIMARY KEY
/// - `title` non-empty text, trimmed before insert
/// - `done` defaults to false
pub const POSTGRES_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    done BOOLEAN NOT NULL DEFAULT FALSE
);
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_a_single_statement() {
        let body = POSTGRES_INIT.trim().trim_end_matches(';');
        assert!(!body.contains(';'));
        assert!(body.starts_with("CREATE TABLE IF NOT EXISTS todos"));
    }
}
