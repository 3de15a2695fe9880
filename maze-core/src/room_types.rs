use crate::{
    constants::{
        AVAILABLE_COLORS, AVAILABLE_SYMBOLS, EXPECTED_TOTAL_WEIGHT, FALLBACK_COLOR,
        FALLBACK_SYMBOL, MAX_ROOM_WEIGHT, MIN_ROOM_TYPES, ROOM_NAME_ID_OFFSET,
    },
    error::RoomTypeError,
    types::{RoomType, RoomTypeId},
};

use std::{collections::HashSet, sync::Arc};

use tracing::event;

/// Ordered, editable set of room types sampled by the generator.
///
/// The table itself is never read during a run: generation works on a
/// [`RoomTypeTable::snapshot`] taken up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomTypeTable {
    room_types: Vec<RoomType>,
    next_id: u32,
}

impl Default for RoomTypeTable {
    fn default() -> Self {
        RoomTypeTable {
            room_types: vec![
                RoomType::new(RoomTypeId(0), "Empty", 50, "#f0f0f0", ""),
                RoomType::new(RoomTypeId(1), "Combat", 15, "#ffcccc", "F"),
                RoomType::new(RoomTypeId(2), "Puzzle", 15, "#ccffcc", "?"),
                RoomType::new(RoomTypeId(3), "Chest", 20, "#ccccff", "C"),
            ],
            next_id: 4,
        }
    }
}

impl RoomTypeTable {
    pub fn new(room_types: Vec<RoomType>) -> Result<Self, RoomTypeError> {
        if room_types.is_empty() {
            return Err(RoomTypeError::EmptyTable);
        }

        let mut seen_ids = HashSet::with_capacity(room_types.len());
        for room_type in room_types.iter() {
            if !seen_ids.insert(room_type.id()) {
                return Err(RoomTypeError::DuplicateId(room_type.id()));
            }
            Self::validate_weight(room_type.weight())?;
        }

        let next_id = room_types
            .iter()
            .map(|room_type| room_type.id().0.saturating_add(1))
            .max()
            .unwrap_or(0);

        Ok(RoomTypeTable {
            room_types,
            next_id,
        })
    }

    /// Builds a table from `(name, weight)` pairs, assigning ids, colours and
    /// symbols the same way [`RoomTypeTable::push`] does.
    pub fn from_weights<S: Into<String>>(
        entries: impl IntoIterator<Item = (S, u32)>,
    ) -> Result<Self, RoomTypeError> {
        let mut table = RoomTypeTable {
            room_types: Vec::new(),
            next_id: 0,
        };

        for (name, weight) in entries {
            table.push(name, weight)?;
        }

        if table.room_types.is_empty() {
            return Err(RoomTypeError::EmptyTable);
        }

        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.room_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.room_types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoomType> {
        self.room_types.iter()
    }

    pub fn get(&self, id: RoomTypeId) -> Option<&RoomType> {
        self.room_types.iter().find(|room_type| room_type.id() == id)
    }

    fn get_mut(&mut self, id: RoomTypeId) -> Result<&mut RoomType, RoomTypeError> {
        self.room_types
            .iter_mut()
            .find(|room_type| room_type.id() == id)
            .ok_or(RoomTypeError::UnknownRoomType(id))
    }

    pub fn total_weight(&self) -> u32 {
        self.room_types.iter().map(RoomType::weight).sum()
    }

    /// Front-ends only accept tables whose weights read as percentages.
    pub fn has_expected_total(&self) -> bool {
        self.total_weight() == EXPECTED_TOTAL_WEIGHT
    }

    /// Appends a zero-weight room type with a generated name.
    pub fn add_room_type(&mut self) -> RoomTypeId {
        let name = format!(
            "Room {}",
            (self.next_id + 1).saturating_sub(ROOM_NAME_ID_OFFSET)
        );
        let room_type = self.next_room_type(name, 0);
        let id = room_type.id();

        self.room_types.push(room_type);
        id
    }

    /// Appends a named room type with the given weight.
    pub fn push(
        &mut self,
        name: impl Into<String>,
        weight: u32,
    ) -> Result<RoomTypeId, RoomTypeError> {
        let name = Self::validate_name(name.into())?;
        Self::validate_weight(weight)?;

        let room_type = self.next_room_type(name, weight);
        let id = room_type.id();

        self.room_types.push(room_type);
        Ok(id)
    }

    fn next_room_type(&mut self, name: String, weight: u32) -> RoomType {
        let used_colors = self
            .room_types
            .iter()
            .map(RoomType::color)
            .collect::<HashSet<_>>();
        let color = AVAILABLE_COLORS
            .into_iter()
            .find(|color| !used_colors.contains(color))
            .unwrap_or(FALLBACK_COLOR);

        let used_symbols = self
            .room_types
            .iter()
            .map(RoomType::symbol)
            .collect::<HashSet<_>>();
        let symbol = AVAILABLE_SYMBOLS
            .into_iter()
            .find(|symbol| !used_symbols.contains(symbol))
            .unwrap_or(FALLBACK_SYMBOL);

        let id = RoomTypeId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);

        RoomType::new(id, name, weight, color, symbol)
    }

    pub fn remove(&mut self, id: RoomTypeId) -> Result<RoomType, RoomTypeError> {
        let idx = self
            .room_types
            .iter()
            .position(|room_type| room_type.id() == id)
            .ok_or(RoomTypeError::UnknownRoomType(id))?;

        if self.room_types.len() <= MIN_ROOM_TYPES {
            return Err(RoomTypeError::TooFewRoomTypes {
                min: MIN_ROOM_TYPES,
            });
        }

        Ok(self.room_types.remove(idx))
    }

    pub fn rename(
        &mut self,
        id: RoomTypeId,
        name: impl Into<String>,
    ) -> Result<(), RoomTypeError> {
        let name = Self::validate_name(name.into())?;
        self.get_mut(id)?.set_name(name);

        Ok(())
    }

    pub fn set_weight(&mut self, id: RoomTypeId, weight: u32) -> Result<(), RoomTypeError> {
        Self::validate_weight(weight)?;
        self.get_mut(id)?.set_weight(weight);

        Ok(())
    }

    /// Raises the weight by one, stopping at the maximum.
    pub fn increase_weight(&mut self, id: RoomTypeId) -> Result<u32, RoomTypeError> {
        let room_type = self.get_mut(id)?;
        let weight = (room_type.weight() + 1).min(MAX_ROOM_WEIGHT);
        room_type.set_weight(weight);

        Ok(weight)
    }

    /// Lowers the weight by one, stopping at zero.
    pub fn decrease_weight(&mut self, id: RoomTypeId) -> Result<u32, RoomTypeError> {
        let room_type = self.get_mut(id)?;
        let weight = room_type.weight().saturating_sub(1);
        room_type.set_weight(weight);

        Ok(weight)
    }

    /// Freezes the current entries for a generation run. Later edits to the
    /// table do not affect the returned room types.
    pub fn snapshot(&self) -> Vec<Arc<RoomType>> {
        event!(
            tracing::Level::DEBUG,
            "Snapshotting {} room types with a total weight of {}",
            self.room_types.len(),
            self.total_weight()
        );

        self.room_types.iter().cloned().map(Arc::new).collect()
    }

    fn validate_name(name: String) -> Result<String, RoomTypeError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            Err(RoomTypeError::EmptyName)
        } else {
            Ok(trimmed.to_string())
        }
    }

    fn validate_weight(weight: u32) -> Result<(), RoomTypeError> {
        if weight > MAX_ROOM_WEIGHT {
            Err(RoomTypeError::WeightOutOfRange {
                weight,
                max: MAX_ROOM_WEIGHT,
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_table_totals_one_hundred() {
        let table = RoomTypeTable::default();

        assert_eq!(table.len(), 4);
        assert_eq!(table.total_weight(), 100);
        assert!(table.has_expected_total());
        assert_eq!(table.get(RoomTypeId(3)).map(RoomType::name), Some("Chest"));
    }

    #[test]
    fn test_new_rejects_empty_and_duplicates() {
        assert_eq!(RoomTypeTable::new(vec![]), Err(RoomTypeError::EmptyTable));

        let duplicated = vec![
            RoomType::new(RoomTypeId(7), "A", 50, "#000000", "A"),
            RoomType::new(RoomTypeId(7), "B", 50, "#ffffff", "B"),
        ];
        assert_eq!(
            RoomTypeTable::new(duplicated),
            Err(RoomTypeError::DuplicateId(RoomTypeId(7)))
        );
    }

    #[test]
    fn test_new_rejects_oversized_weights() {
        let oversized = vec![
            RoomType::new(RoomTypeId(0), "A", u32::MAX, "#000000", "A"),
            RoomType::new(RoomTypeId(1), "B", u32::MAX, "#ffffff", "B"),
        ];

        assert_eq!(
            RoomTypeTable::new(oversized),
            Err(RoomTypeError::WeightOutOfRange {
                weight: u32::MAX,
                max: 100
            })
        );
    }

    #[test]
    fn test_new_with_highest_id_does_not_overflow() {
        let table = RoomTypeTable::new(vec![
            RoomType::new(RoomTypeId(u32::MAX), "A", 60, "#000000", "A"),
            RoomType::new(RoomTypeId(0), "B", 40, "#ffffff", "B"),
        ])
        .unwrap();

        assert_eq!(table.total_weight(), 100);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_add_room_type_picks_unused_palette_entries() {
        let mut table = RoomTypeTable::default();

        let first = table.add_room_type();
        let second = table.add_room_type();

        let first = table.get(first).unwrap();
        assert_eq!(first.id(), RoomTypeId(4));
        assert_eq!(first.name(), "Room 2");
        assert_eq!(first.weight(), 0);
        assert_eq!(first.color(), "#ffcc99");
        assert_eq!(first.symbol(), "T");

        let second = table.get(second).unwrap();
        assert_eq!(second.name(), "Room 3");
        assert_eq!(second.color(), "#ccffff");
        assert_eq!(second.symbol(), "B");

        // Adding zero-weight types keeps the total untouched
        assert_eq!(table.total_weight(), 100);
    }

    #[test]
    fn test_add_room_type_skips_colors_already_in_use() {
        // "#ccffcc" and "#ffcccc" are palette entries already used by the
        // default Puzzle and Combat types.
        let mut table = RoomTypeTable::default();

        let colors = (0..AVAILABLE_COLORS.len())
            .map(|_| {
                let id = table.add_room_type();
                table.get(id).unwrap().color().to_string()
            })
            .collect::<Vec<_>>();

        assert!(!colors[..9].contains(&"#ccffcc".to_string()));
        assert!(!colors[..9].contains(&"#ffcccc".to_string()));
        assert!(!colors[..9].contains(&"#ccccff".to_string()));
        assert_eq!(colors.last().map(String::as_str), Some(FALLBACK_COLOR));
    }

    #[test]
    fn test_symbols_fall_back_once_exhausted() {
        let mut table = RoomTypeTable::default();

        for _ in 0..AVAILABLE_SYMBOLS.len() {
            table.add_room_type();
        }
        let id = table.add_room_type();

        assert_eq!(table.get(id).unwrap().symbol(), FALLBACK_SYMBOL);
    }

    #[test]
    fn test_remove_keeps_at_least_two_types() {
        let mut table = RoomTypeTable::default();

        assert!(table.remove(RoomTypeId(1)).is_ok());
        assert!(table.remove(RoomTypeId(2)).is_ok());
        assert_eq!(
            table.remove(RoomTypeId(0)),
            Err(RoomTypeError::TooFewRoomTypes { min: 2 })
        );
        assert_eq!(
            table.remove(RoomTypeId(42)),
            Err(RoomTypeError::UnknownRoomType(RoomTypeId(42)))
        );
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_rename_trims_and_rejects_blank_names() {
        let mut table = RoomTypeTable::default();

        assert!(table.rename(RoomTypeId(1), "  Boss  ").is_ok());
        assert_eq!(table.get(RoomTypeId(1)).unwrap().name(), "Boss");

        assert_eq!(
            table.rename(RoomTypeId(1), "   "),
            Err(RoomTypeError::EmptyName)
        );
        assert_eq!(table.get(RoomTypeId(1)).unwrap().name(), "Boss");
    }

    #[test]
    fn test_weight_steps_saturate() {
        let mut table = RoomTypeTable::default();

        table.set_weight(RoomTypeId(0), 100).unwrap();
        assert_eq!(table.increase_weight(RoomTypeId(0)), Ok(100));

        table.set_weight(RoomTypeId(1), 0).unwrap();
        assert_eq!(table.decrease_weight(RoomTypeId(1)), Ok(0));
        assert_eq!(table.increase_weight(RoomTypeId(1)), Ok(1));

        assert_eq!(
            table.set_weight(RoomTypeId(2), 101),
            Err(RoomTypeError::WeightOutOfRange {
                weight: 101,
                max: 100
            })
        );
    }

    #[test]
    fn test_from_weights_assigns_sequential_ids() {
        let table = RoomTypeTable::from_weights([("Hall", 70), ("Vault", 30)]).unwrap();

        let ids = table.iter().map(RoomType::id).collect::<Vec<_>>();
        assert_eq!(ids, vec![RoomTypeId(0), RoomTypeId(1)]);
        assert!(table.has_expected_total());

        assert_eq!(
            RoomTypeTable::from_weights(Vec::<(&str, u32)>::new()),
            Err(RoomTypeError::EmptyTable)
        );
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_edits() {
        let mut table = RoomTypeTable::default();
        let snapshot = table.snapshot();

        table.set_weight(RoomTypeId(0), 0).unwrap();
        table.rename(RoomTypeId(0), "Renamed").unwrap();

        assert_eq!(snapshot[0].weight(), 50);
        assert_eq!(snapshot[0].name(), "Empty");
    }
}
