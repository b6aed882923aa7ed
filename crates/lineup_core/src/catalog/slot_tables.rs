// Formation slot tables: position label -> ordered field coordinates
// Coordinates are percentages: x across the field, y from own goal (0) to the opposite end (100)

use serde::Serialize;

use crate::models::{Coordinate, Sport};

/// Ordered coordinates for one position label. The list length is the
/// number of players of that label the formation can place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionSlots {
    pub label: &'static str,
    pub coordinates: Vec<Coordinate>,
}

impl PositionSlots {
    fn new(label: &'static str, coords: &[(f32, f32)]) -> Self {
        Self {
            label,
            coordinates: coords.iter().map(|&(x, y)| Coordinate::new(x, y)).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.coordinates.len()
    }
}

/// Complete slot table of one formation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotTable {
    pub formation: &'static str,
    pub sport: Sport,
    pub slots: Vec<PositionSlots>,
}

impl SlotTable {
    fn new(formation: &'static str, sport: Sport, slots: Vec<PositionSlots>) -> Self {
        Self { formation, sport, slots }
    }

    /// Coordinates for `label`, or `None` when the formation has no slot for it.
    pub fn coordinates_for(&self, label: &str) -> Option<&[Coordinate]> {
        self.slots.iter().find(|s| s.label == label).map(|s| s.coordinates.as_slice())
    }

    pub fn total_slots(&self) -> usize {
        self.slots.iter().map(PositionSlots::capacity).sum()
    }

    pub fn all() -> Vec<SlotTable> {
        vec![
            Self::create_f442(),
            Self::create_f433(),
            Self::create_f352(),
            Self::create_volleyball_standard(),
            Self::create_volleyball_5_1(),
            Self::create_volleyball_4_2(),
            Self::create_badminton_singles(),
            Self::create_badminton_doubles(),
        ]
    }

    // ------------------------------------------------------------------
    // Football
    // ------------------------------------------------------------------

    fn create_f442() -> SlotTable {
        SlotTable::new(
            "4-4-2",
            Sport::Football,
            vec![
                PositionSlots::new("Goalkeeper", &[(50.0, 10.0)]),
                PositionSlots::new(
                    "Defender",
                    &[(20.0, 25.0), (40.0, 25.0), (60.0, 25.0), (80.0, 25.0)],
                ),
                PositionSlots::new(
                    "Midfielder",
                    &[(20.0, 55.0), (40.0, 55.0), (60.0, 55.0), (80.0, 55.0)],
                ),
                PositionSlots::new("Forward", &[(35.0, 85.0), (65.0, 85.0)]),
            ],
        )
    }

    fn create_f433() -> SlotTable {
        SlotTable::new(
            "4-3-3",
            Sport::Football,
            vec![
                PositionSlots::new("Goalkeeper", &[(50.0, 10.0)]),
                PositionSlots::new(
                    "Defender",
                    &[(20.0, 25.0), (40.0, 25.0), (60.0, 25.0), (80.0, 25.0)],
                ),
                PositionSlots::new("Midfielder", &[(30.0, 55.0), (50.0, 55.0), (70.0, 55.0)]),
                PositionSlots::new("Forward", &[(25.0, 85.0), (50.0, 85.0), (75.0, 85.0)]),
            ],
        )
    }

    fn create_f352() -> SlotTable {
        SlotTable::new(
            "3-5-2",
            Sport::Football,
            vec![
                PositionSlots::new("Goalkeeper", &[(50.0, 10.0)]),
                PositionSlots::new("Defender", &[(30.0, 25.0), (50.0, 25.0), (70.0, 25.0)]),
                PositionSlots::new(
                    "Midfielder",
                    &[(20.0, 55.0), (35.0, 55.0), (50.0, 55.0), (65.0, 55.0), (80.0, 55.0)],
                ),
                PositionSlots::new("Forward", &[(40.0, 85.0), (60.0, 85.0)]),
            ],
        )
    }

    // ------------------------------------------------------------------
    // Volleyball (Libero has no fixed slot in any rotation)
    // ------------------------------------------------------------------

    fn create_volleyball_standard() -> SlotTable {
        SlotTable::new(
            "6-Player Standard",
            Sport::Volleyball,
            vec![
                PositionSlots::new("Outside Hitter", &[(20.0, 30.0), (20.0, 70.0)]),
                PositionSlots::new("Middle Blocker", &[(40.0, 30.0), (40.0, 70.0)]),
                PositionSlots::new("Setter", &[(60.0, 30.0)]),
                PositionSlots::new("Opposite", &[(60.0, 70.0)]),
            ],
        )
    }

    fn create_volleyball_5_1() -> SlotTable {
        SlotTable::new(
            "5-1",
            Sport::Volleyball,
            vec![
                PositionSlots::new("Outside Hitter", &[(30.0, 30.0), (30.0, 70.0)]),
                PositionSlots::new("Middle Blocker", &[(50.0, 30.0), (50.0, 70.0)]),
                PositionSlots::new("Setter", &[(70.0, 30.0)]),
                PositionSlots::new("Opposite", &[(70.0, 70.0)]),
            ],
        )
    }

    /// Two setters opposite each other, no dedicated opposite hitter.
    fn create_volleyball_4_2() -> SlotTable {
        SlotTable::new(
            "4-2",
            Sport::Volleyball,
            vec![
                PositionSlots::new("Outside Hitter", &[(20.0, 30.0), (20.0, 70.0)]),
                PositionSlots::new("Middle Blocker", &[(40.0, 30.0), (40.0, 70.0)]),
                PositionSlots::new("Setter", &[(60.0, 30.0), (60.0, 70.0)]),
            ],
        )
    }

    // ------------------------------------------------------------------
    // Badminton
    // ------------------------------------------------------------------

    fn create_badminton_singles() -> SlotTable {
        SlotTable::new(
            "Singles",
            Sport::Badminton,
            vec![PositionSlots::new("Singles", &[(50.0, 50.0)])],
        )
    }

    fn create_badminton_doubles() -> SlotTable {
        SlotTable::new(
            "2-Player",
            Sport::Badminton,
            vec![
                PositionSlots::new("Doubles Front", &[(30.0, 50.0)]),
                PositionSlots::new("Doubles Back", &[(70.0, 50.0)]),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_football_tables_fill_eleven() {
        for table in SlotTable::all().iter().filter(|t| t.sport == Sport::Football) {
            assert_eq!(table.total_slots(), 11, "{} should place 11 players", table.formation);
        }
    }

    #[test]
    fn test_volleyball_tables_fill_six() {
        for table in SlotTable::all().iter().filter(|t| t.sport == Sport::Volleyball) {
            assert_eq!(table.total_slots(), 6, "{} should place 6 players", table.formation);
        }
    }

    #[test]
    fn test_coordinates_in_range() {
        for table in SlotTable::all() {
            for slots in &table.slots {
                for c in &slots.coordinates {
                    assert!(
                        c.is_within_field(),
                        "{} {} coordinate out of range: {:?}",
                        table.formation,
                        slots.label,
                        c
                    );
                }
            }
        }
    }

    #[test]
    fn test_no_duplicate_coordinates_within_table() {
        for table in SlotTable::all() {
            let coords: Vec<Coordinate> =
                table.slots.iter().flat_map(|s| s.coordinates.iter().copied()).collect();
            for (i, a) in coords.iter().enumerate() {
                for b in &coords[i + 1..] {
                    assert_ne!(a, b, "{} places two slots on the same spot", table.formation);
                }
            }
        }
    }
}
