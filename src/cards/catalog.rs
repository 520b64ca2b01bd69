//! The standard card catalog.
//!
//! Every card in the base game is declared here in one static table, one
//! row per card. The engine builds its registry from this table at session
//! start and consults `era_denylist` when a year transition retires cards.

use crate::board::RoomId;
use crate::core::ChipKind;

use super::definition::{CardDefinition, CardId, Effect, Era};
use super::registry::CardRegistry;

/// One row of the catalog table.
///
/// Effects are described by columns; rows with more than one non-empty
/// column become a `Batch`.
struct CardSpec {
    name: &'static str,
    era: u8,
    qp_delta: i64,
    chip: Option<ChipKind>,
    move_to: Option<u8>,
}

const fn course(name: &'static str, era: u8, qp_delta: i64) -> CardSpec {
    CardSpec {
        name,
        era,
        qp_delta,
        chip: None,
        move_to: None,
    }
}

const fn chip_card(name: &'static str, era: u8, qp_delta: i64, chip: ChipKind) -> CardSpec {
    CardSpec {
        name,
        era,
        qp_delta,
        chip: Some(chip),
        move_to: None,
    }
}

const fn move_card(name: &'static str, era: u8, qp_delta: i64, room: u8) -> CardSpec {
    CardSpec {
        name,
        era,
        qp_delta,
        chip: None,
        move_to: Some(room),
    }
}

/// The full catalog: 20 Freshman cards, 12 Sophomore cards.
static CARD_SPECS: [CardSpec; 32] = [
    // === Freshman (era 1) ===
    // Courses retired at the end of the Freshman year.
    course("CECS 105", 1, 4),
    course("CECS 100", 1, 3),
    course("Math 122", 1, 5),
    course("Professor Murgolo's CECS 174 Class", 1, 7),
    course("Math 123", 1, 5),
    course("Physics 151", 1, 6),
    course("KIN 253", 1, 2),
    course("Pass Soccer Class", 1, 2),
    course("Elective Class", 1, 3),
    course("Oral Communication", 1, 3),
    course("CHEM 111", 1, 5),
    // Freshman cards that survive into the Sophomore year.
    course("Library All-Nighter", 1, 4),
    chip_card("Office Hours", 1, 2, ChipKind::Learning),
    chip_card("Group Project", 1, 3, ChipKind::Craft),
    course("Parking Ticket", 1, -4),
    course("Free Pizza at the Quad", 1, 1),
    course("Midterm Curve", 1, 6),
    chip_card("Academic Integrity Seminar", 1, 1, ChipKind::Integrity),
    move_card("Campus Shuttle", 1, 0, 12),
    course("Scholarship Essay", 1, 5),
    // === Sophomore (era 2) ===
    course("CECS 274", 2, 6),
    course("CECS 225", 2, 6),
    course("CECS 228", 2, 6),
    course("EE 381", 2, 5),
    course("Math 323", 2, 7),
    chip_card("Stats Study Group", 2, 4, ChipKind::Learning),
    chip_card("Internship Fair", 2, 5, ChipKind::Craft),
    course("Hackathon Weekend", 2, 8),
    chip_card("Research Assistant", 2, 6, ChipKind::Learning),
    chip_card("Honor Board Duty", 2, 3, ChipKind::Integrity),
    course("Commuter Traffic", 2, -5),
    move_card("Transfer Orientation", 2, 2, 15),
];

/// Freshman courses removed from play when the Sophomore year begins.
pub const FRESHMAN_RETIRED: [&str; 11] = [
    "CECS 105",
    "CECS 100",
    "Math 122",
    "Professor Murgolo's CECS 174 Class",
    "Math 123",
    "Physics 151",
    "KIN 253",
    "Pass Soccer Class",
    "Elective Class",
    "Oral Communication",
    "CHEM 111",
];

/// Card names retired when the given era ends.
#[must_use]
pub fn era_denylist(era: Era) -> &'static [&'static str] {
    match era.raw() {
        1 => &FRESHMAN_RETIRED,
        _ => &[],
    }
}

/// Build the standard registry from the catalog table.
///
/// Card IDs are assigned from row order, so the same table always produces
/// the same registry.
#[must_use]
pub fn standard_catalog() -> CardRegistry {
    let mut registry = CardRegistry::new();

    for (row, spec) in CARD_SPECS.iter().enumerate() {
        let mut parts = Vec::new();
        if spec.qp_delta != 0 {
            parts.push(Effect::ModifyQp {
                delta: spec.qp_delta,
            });
        }
        if let Some(kind) = spec.chip {
            parts.push(Effect::GrantChip { kind });
        }
        if let Some(room) = spec.move_to {
            parts.push(Effect::MoveTo { room: RoomId(room) });
        }

        let effect = if parts.len() == 1 {
            parts.pop().expect("length checked above")
        } else {
            Effect::Batch(parts)
        };

        let card = CardDefinition::new(CardId::new(row as u32), spec.name, Era::new(spec.era))
            .with_effect(effect);
        registry.register(card);
    }

    registry
}
