//! Capture resolution
//!
//! The single predicate deciding whether one piece may take another. Move
//! generation calls it for every occupied destination; nothing else in the
//! engine compares ranks.

use crate::types::*;

/// Check whether `attacker` may capture `defender`.
///
/// Rules, first match wins:
/// 1. Same faction: never.
/// 2. Defender in a trap controlled by the attacker's faction: always.
/// 3. Rat attacking:
///    - the elephant, unless the rat is in the river;
///    - nothing on land from inside the river;
///    - otherwise only another rat.
/// 4. Elephant attacking a rat: never.
/// 5. Otherwise: attacker rank >= defender rank.
pub fn may_capture(
    attacker: Piece,
    defender: Piece,
    defender_in_opponent_trap: bool,
    attacker_in_river: bool,
    defender_in_river: bool,
) -> bool {
    if attacker.faction == defender.faction {
        return false;
    }

    if defender_in_opponent_trap {
        return true;
    }

    if attacker.rank == Rank::LOWEST {
        if defender.rank == Rank::HIGHEST {
            return !attacker_in_river;
        }
        if attacker_in_river && !defender_in_river {
            return false;
        }
        return defender.rank <= Rank::LOWEST;
    }

    if attacker.rank == Rank::HIGHEST && defender.rank == Rank::LOWEST {
        return false;
    }

    attacker.rank >= defender.rank
}
