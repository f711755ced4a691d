//! In-memory store seeded with a handful of real pokemon

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use super::migrations::run_migrations;

const FIXTURES: &str = r#"
INSERT INTO pokemonattributes (
    id, pokedex_number, name, image, generation, pokemon_type_1, pokemon_type_2,
    height_m, weight_kg, num_abilities,
    hp, attack, defense, special_attack, special_defense, speed,
    catch_rate, base_friendship, base_experience, growth_rate,
    egg_type_1, egg_type_2, percentage_male,
    against_normal, against_fire, against_water, against_electric, against_grass,
    against_ice, against_fight, against_poison, against_ground, against_flying,
    against_psychic, against_bug, against_rock, against_ghost, against_dragon,
    against_dark, against_steel, against_fairy
) VALUES
(1, 1, 'Bulbasaur', 'bulbasaur.png', 1, 'Grass', 'Poison',
    0.7, 6.9, 2,
    45, 49, 49, 65, 65, 45,
    45, 70, 64, 'Medium Slow',
    'Grass', 'Monster', 87.5,
    1, 2, 0.5, 0.5, 0.25, 2, 0.5, 1, 1, 2, 2, 1, 1, 1, 1, 1, 1, 0.5),
(2, 4, 'Charmander', 'charmander.png', 1, 'Fire', NULL,
    0.6, 8.5, 2,
    39, 52, 43, 60, 50, 65,
    45, 70, 62, 'Medium Slow',
    'Dragon', 'Monster', 87.5,
    1, 0.5, 2, 1, 0.5, 0.5, 1, 1, 2, 1, 1, 0.5, 2, 1, 1, 1, 0.5, 0.5),
(3, 6, 'Charizard', 'charizard.png', 1, 'Fire', 'Flying',
    1.7, 90.5, 2,
    78, 84, 78, 109, 85, 100,
    45, 70, 240, 'Medium Slow',
    'Dragon', 'Monster', 87.5,
    1, 0.5, 2, 2, 0.25, 1, 0.5, 1, 0, 1, 1, 0.25, 4, 1, 1, 1, 0.5, 0.5),
(4, 7, 'Squirtle', 'squirtle.png', 1, 'Water', NULL,
    0.5, 9.0, 2,
    44, 48, 65, 50, 64, 43,
    45, 70, 63, 'Medium Slow',
    'Monster', 'Water 1', 87.5,
    1, 0.5, 0.5, 2, 2, 0.5, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0.5, 1),
(5, 25, 'Pikachu', 'pikachu.png', 1, 'Electric', NULL,
    0.4, 6.0, 2,
    35, 55, 40, 50, 50, 90,
    190, 70, 112, 'Medium Fast',
    'Fairy', 'Field', 50.0,
    1, 1, 1, 0.5, 1, 1, 1, 1, 2, 0.5, 1, 1, 1, 1, 1, 1, 0.5, 1),
(6, 150, 'Mewtwo', 'mewtwo.png', 1, 'Psychic', NULL,
    2.0, 122.0, 2,
    106, 110, 90, 154, 90, 130,
    3, 0, 340, 'Slow',
    'Undiscovered', NULL, NULL,
    1, 1, 1, 1, 1, 1, 0.5, 1, 1, 1, 0.5, 2, 1, 2, 1, 2, 1, 1);
"#;

/// Single-connection in-memory pool with the schema applied and fixtures loaded
///
/// One connection keeps every query on the same `:memory:` database.
pub(crate) async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    sqlx::query(FIXTURES).execute(&pool).await.unwrap();
    pool
}
