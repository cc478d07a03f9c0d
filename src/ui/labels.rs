//! Display names and rules text for each animal

use jungle_engine::{Faction, Rank, Terrain};

pub fn animal_name(rank: Rank) -> &'static str {
    match rank {
        Rank::Rat => "Rat",
        Rank::Cat => "Cat",
        Rank::Dog => "Dog",
        Rank::Wolf => "Wolf",
        Rank::Leopard => "Leopard",
        Rank::Tiger => "Tiger",
        Rank::Lion => "Lion",
        Rank::Elephant => "Elephant",
    }
}

/// Two-letter board abbreviation
pub fn animal_abbrev(rank: Rank) -> &'static str {
    match rank {
        Rank::Rat => "Ra",
        Rank::Cat => "Ca",
        Rank::Dog => "Do",
        Rank::Wolf => "Wo",
        Rank::Leopard => "Le",
        Rank::Tiger => "Ti",
        Rank::Lion => "Li",
        Rank::Elephant => "El",
    }
}

pub fn animal_emoji(rank: Rank) -> &'static str {
    match rank {
        Rank::Rat => "🐭",
        Rank::Cat => "🐱",
        Rank::Dog => "🐶",
        Rank::Wolf => "🐺",
        Rank::Leopard => "🐆",
        Rank::Tiger => "🐯",
        Rank::Lion => "🦁",
        Rank::Elephant => "🐘",
    }
}

pub fn rules_text(rank: Rank) -> &'static str {
    match rank {
        Rank::Rat => "Swims in the river and captures the elephant. Cannot attack from the water onto land.",
        Rank::Cat | Rank::Dog | Rank::Wolf | Rank::Leopard => {
            "Moves one cell orthogonally. Captures equal or lower ranks."
        }
        Rank::Tiger | Rank::Lion => {
            "Jumps straight across a river, unless a swimming rat is in the way."
        }
        Rank::Elephant => "Strongest animal. Captures everything except the rat.",
    }
}

/// One line per animal, e.g. `Lion (7): Jumps straight across ...`
pub fn rules_line(rank: Rank) -> String {
    format!(
        "{} {} ({}): {}",
        animal_emoji(rank),
        animal_name(rank),
        rank.value(),
        rules_text(rank)
    )
}

/// Look up an animal by name, abbreviation or rank number
pub fn rank_from_name(name: &str) -> Option<Rank> {
    let name = name.trim();
    if let Ok(value) = name.parse::<u8>() {
        return Rank::from_value(value);
    }
    Rank::ALL.into_iter().find(|&rank| {
        animal_name(rank).eq_ignore_ascii_case(name) || animal_abbrev(rank).eq_ignore_ascii_case(name)
    })
}

/// Lowercase marker prefixed to piece abbreviations
pub fn faction_marker(faction: Faction) -> char {
    match faction {
        Faction::Blue => 'b',
        Faction::Red => 'r',
    }
}

/// Glyph for an empty cell
pub fn terrain_glyph(terrain: Terrain) -> &'static str {
    match terrain {
        Terrain::Land => ".",
        Terrain::River => "~",
        Terrain::Trap => "#",
        Terrain::Den => "@",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_lookup() {
        assert_eq!(rank_from_name("lion"), Some(Rank::Lion));
        assert_eq!(rank_from_name("Elephant"), Some(Rank::Elephant));
        assert_eq!(rank_from_name("ti"), Some(Rank::Tiger));
        assert_eq!(rank_from_name("1"), Some(Rank::Rat));
        assert_eq!(rank_from_name("9"), None);
        assert_eq!(rank_from_name("dragon"), None);
    }

    #[test]
    fn test_abbreviations_unique() {
        for a in Rank::ALL {
            for b in Rank::ALL {
                if a != b {
                    assert_ne!(animal_abbrev(a), animal_abbrev(b));
                }
            }
        }
    }

    #[test]
    fn test_rules_line_mentions_rank() {
        assert!(rules_line(Rank::Lion).contains("Lion (7)"));
    }
}
