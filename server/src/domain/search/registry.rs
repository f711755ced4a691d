//! Attribute registry
//!
//! One static table describes every searchable attribute: the form key it is
//! submitted under, the group it belongs to, how it turns into SQL and which
//! columns and descriptors it projects. Composition, collection and the
//! column whitelist are all driven from this table.

/// Attribute groups, in projection order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterGroup {
    Base,
    Quant,
    Categorical,
    TypeEffect,
}

impl FilterGroup {
    pub const ALL: [FilterGroup; 4] = [
        FilterGroup::Base,
        FilterGroup::Quant,
        FilterGroup::Categorical,
        FilterGroup::TypeEffect,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            FilterGroup::Base => "base",
            FilterGroup::Quant => "quant",
            FilterGroup::Categorical => "categorical",
            FilterGroup::TypeEffect => "type_effect",
        }
    }
}

/// How an attribute selection becomes a clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    /// `column BETWEEN ? AND ?`
    Range,
    /// `column = ?` for one value, `column IN ?` for several
    Choice,
    /// Choice over two columns: `(a = ? OR b = ?)`, projecting both
    CompositeChoice {
        second_column: &'static str,
        second_descriptor: &'static str,
    },
    /// `column IN ?` for any number of values, never projected
    Membership,
}

/// One searchable attribute
#[derive(Debug, PartialEq, Eq)]
pub struct AttributeSpec {
    /// Form key (`add_<key>`, `min_<key>`, `max_<key>` or repeated `<key>`)
    pub key: &'static str,
    pub group: FilterGroup,
    pub kind: ClauseKind,
    pub column: &'static str,
    pub descriptor: &'static str,
}

impl AttributeSpec {
    /// Columns this attribute adds to the projection, with their descriptors
    pub fn projection(&self) -> Vec<(&'static str, &'static str)> {
        match self.kind {
            ClauseKind::Membership => Vec::new(),
            ClauseKind::Range | ClauseKind::Choice => vec![(self.column, self.descriptor)],
            ClauseKind::CompositeChoice {
                second_column,
                second_descriptor,
            } => vec![
                (self.column, self.descriptor),
                (second_column, second_descriptor),
            ],
        }
    }

    pub fn is_range(&self) -> bool {
        self.kind == ClauseKind::Range
    }
}

const fn range(
    group: FilterGroup,
    key: &'static str,
    column: &'static str,
    descriptor: &'static str,
) -> AttributeSpec {
    AttributeSpec {
        key,
        group,
        kind: ClauseKind::Range,
        column,
        descriptor,
    }
}

const fn choice(key: &'static str, column: &'static str, descriptor: &'static str) -> AttributeSpec {
    AttributeSpec {
        key,
        group: FilterGroup::Categorical,
        kind: ClauseKind::Choice,
        column,
        descriptor,
    }
}

/// Key of the free-text name search in the base group
pub const NAME_KEY: &str = "name";

/// Every searchable attribute, in composition order
pub static ATTRIBUTES: &[AttributeSpec] = &[
    // Base stats
    AttributeSpec {
        key: NAME_KEY,
        group: FilterGroup::Base,
        kind: ClauseKind::Membership,
        column: "name",
        descriptor: "",
    },
    range(FilterGroup::Base, "hp", "hp", "HP: "),
    range(FilterGroup::Base, "attack", "attack", "Attack: "),
    range(FilterGroup::Base, "defense", "defense", "Defense: "),
    range(FilterGroup::Base, "special_attack", "special_attack", "Special Attack: "),
    range(FilterGroup::Base, "special_defense", "special_defense", "Special Defense: "),
    range(FilterGroup::Base, "speed", "speed", "Speed: "),
    // Secondary quantitative stats
    range(FilterGroup::Quant, "height", "height_m", "Height (m): "),
    range(FilterGroup::Quant, "weight", "weight_kg", "Weight (kg): "),
    range(FilterGroup::Quant, "catch_rate", "catch_rate", "Catch Rate: "),
    range(FilterGroup::Quant, "experience", "base_experience", "Base Experience: "),
    range(
        FilterGroup::Quant,
        "percentage_male",
        "percentage_male",
        "Percentage of Species that is Male: ",
    ),
    range(FilterGroup::Quant, "friendship", "base_friendship", "Base Friendship: "),
    // Categorical stats
    choice("primary_type", "pokemon_type_1", "Primary Type: "),
    choice("secondary_type", "pokemon_type_2", "Secondary Type: "),
    choice("generation", "generation", "Generation: "),
    choice("num_abilities", "num_abilities", "Number of Abilities: "),
    choice("growth_rate", "growth_rate", "Growth Rate: "),
    AttributeSpec {
        key: "egg_type",
        group: FilterGroup::Categorical,
        kind: ClauseKind::CompositeChoice {
            second_column: "egg_type_2",
            second_descriptor: "Secondary Egg Type: ",
        },
        column: "egg_type_1",
        descriptor: "Primary Egg Type: ",
    },
    // Type effectiveness multipliers
    range(
        FilterGroup::TypeEffect,
        "against_normal",
        "against_normal",
        "Damage multiplier applied when taking damage from a normal type attack: ",
    ),
    range(
        FilterGroup::TypeEffect,
        "against_fire",
        "against_fire",
        "Damage multiplier applied when taking damage from a fire type attack: ",
    ),
    range(
        FilterGroup::TypeEffect,
        "against_water",
        "against_water",
        "Damage multiplier applied when taking damage from a water type attack: ",
    ),
    range(
        FilterGroup::TypeEffect,
        "against_electric",
        "against_electric",
        "Damage multiplier applied when taking damage from a electric type attack: ",
    ),
    range(
        FilterGroup::TypeEffect,
        "against_grass",
        "against_grass",
        "Damage multiplier applied when taking damage from a grass type attack: ",
    ),
    range(
        FilterGroup::TypeEffect,
        "against_ice",
        "against_ice",
        "Damage multiplier applied when taking damage from a ice type attack: ",
    ),
    range(
        FilterGroup::TypeEffect,
        "against_fight",
        "against_fight",
        "Damage multiplier applied when taking damage from a fighting type attack: ",
    ),
    range(
        FilterGroup::TypeEffect,
        "against_poison",
        "against_poison",
        "Damage multiplier applied when taking damage from a poison type attack: ",
    ),
    range(
        FilterGroup::TypeEffect,
        "against_ground",
        "against_ground",
        "Damage multiplier applied when taking damage from a ground type attack: ",
    ),
    range(
        FilterGroup::TypeEffect,
        "against_flying",
        "against_flying",
        "Damage multiplier applied when taking damage from a flying type attack: ",
    ),
    range(
        FilterGroup::TypeEffect,
        "against_psychic",
        "against_psychic",
        "Damage multiplier applied when taking damage from a psychic type attack: ",
    ),
    range(
        FilterGroup::TypeEffect,
        "against_bug",
        "against_bug",
        "Damage multiplier applied when taking damage from a bug type attack: ",
    ),
    range(
        FilterGroup::TypeEffect,
        "against_rock",
        "against_rock",
        "Damage multiplier applied when taking damage from a rock type attack: ",
    ),
    range(
        FilterGroup::TypeEffect,
        "against_ghost",
        "against_ghost",
        "Damage multiplier applied when taking damage from a ghost type attack: ",
    ),
    range(
        FilterGroup::TypeEffect,
        "against_dragon",
        "against_dragon",
        "Damage multiplier applied when taking damage from a dragon type attack: ",
    ),
    range(
        FilterGroup::TypeEffect,
        "against_dark",
        "against_dark",
        "Damage multiplier applied when taking damage from a dark type attack: ",
    ),
    range(
        FilterGroup::TypeEffect,
        "against_steel",
        "against_steel",
        "Damage multiplier applied when taking damage from a steel type attack: ",
    ),
    range(
        FilterGroup::TypeEffect,
        "against_fairy",
        "against_fairy",
        "Damage multiplier applied when taking damage from a fairy type attack: ",
    ),
];

/// Attributes of one group, in declaration order
pub fn attributes_in(group: FilterGroup) -> impl Iterator<Item = &'static AttributeSpec> {
    ATTRIBUTES.iter().filter(move |a| a.group == group)
}

/// Look up an attribute by form key
pub fn lookup(key: &str) -> Option<&'static AttributeSpec> {
    ATTRIBUTES.iter().find(|a| a.key == key)
}
