pub const SCHEMA: &str = r#"
-- Staff names are the join key for imports, so they stay unique
CREATE TABLE IF NOT EXISTS staff (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE NOT NULL
);

-- Store-wide budget per day; total_hours = 0 means "derive from roster"
CREATE TABLE IF NOT EXISTS daily_budgets (
    date TEXT PRIMARY KEY,
    total_budget REAL NOT NULL,
    total_hours REAL NOT NULL DEFAULT 0
);

-- Planned shift hours
CREATE TABLE IF NOT EXISTS rosters (
    staff_id INTEGER NOT NULL REFERENCES staff(id),
    date TEXT NOT NULL,
    shift_hours REAL NOT NULL,
    PRIMARY KEY (staff_id, date)
);

-- Submitted performance; target_sales is fixed at submit time
CREATE TABLE IF NOT EXISTS sales_entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    staff_id INTEGER NOT NULL REFERENCES staff(id),
    date TEXT NOT NULL,
    shift_hours REAL NOT NULL,
    actual_sales REAL NOT NULL,
    target_sales REAL NOT NULL,
    ips REAL NOT NULL DEFAULT 0,
    avg_sale REAL NOT NULL DEFAULT 0,
    jcp_sales REAL NOT NULL DEFAULT 0,

    UNIQUE(staff_id, date)
);

CREATE INDEX IF NOT EXISTS idx_rosters_date ON rosters(date);
CREATE INDEX IF NOT EXISTS idx_sales_entries_date ON sales_entries(date);
"#;
