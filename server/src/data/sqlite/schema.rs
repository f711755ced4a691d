//! SQLite schema
//!
//! The `pokemonattributes` table is filled by an external import. Creating it
//! here lets the server start against an empty database and keeps every
//! column the attribute registry can project.

/// A numbered schema step, applied once and recorded with its checksum
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: i32,
    pub name: &'static str,
    pub sql: &'static str,
}

/// Bookkeeping table, created before any migration runs
pub const MIGRATIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at INTEGER NOT NULL,
    checksum TEXT NOT NULL,
    execution_time_ms INTEGER NOT NULL
)
"#;

const POKEMON_ATTRIBUTES: &str = r#"
CREATE TABLE IF NOT EXISTS pokemonattributes (
    id INTEGER PRIMARY KEY,
    pokedex_number INTEGER,
    name TEXT NOT NULL,
    image TEXT NOT NULL,
    generation INTEGER,
    pokemon_type_1 TEXT,
    pokemon_type_2 TEXT,
    height_m REAL,
    weight_kg REAL,
    num_abilities INTEGER,
    hp INTEGER,
    attack INTEGER,
    defense INTEGER,
    special_attack INTEGER,
    special_defense INTEGER,
    speed INTEGER,
    catch_rate INTEGER,
    base_friendship INTEGER,
    base_experience INTEGER,
    growth_rate TEXT,
    egg_type_1 TEXT,
    egg_type_2 TEXT,
    percentage_male REAL,
    against_normal REAL,
    against_fire REAL,
    against_water REAL,
    against_electric REAL,
    against_grass REAL,
    against_ice REAL,
    against_fight REAL,
    against_poison REAL,
    against_ground REAL,
    against_flying REAL,
    against_psychic REAL,
    against_bug REAL,
    against_rock REAL,
    against_ghost REAL,
    against_dragon REAL,
    against_dark REAL,
    against_steel REAL,
    against_fairy REAL
)
"#;

const NAME_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_pokemonattributes_name ON pokemonattributes(name)";

/// Every migration in version order
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "pokemon_attributes",
        sql: POKEMON_ATTRIBUTES,
    },
    Migration {
        version: 2,
        name: "name_index",
        sql: NAME_INDEX,
    },
];
