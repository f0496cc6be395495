//! In-memory terrain grid

use std::collections::{BTreeSet, HashMap};

use super::terrain::{blocks, Terrain, MAX_LIGHT};
use crate::core::types::{BlockId, IVec2, IVec3};

/// Contents of a single terrain cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub id: BlockId,
    pub subtype: u8,
}

impl Cell {
    /// Empty/air cell
    pub const EMPTY: Cell = Cell { id: blocks::AIR, subtype: 0 };

    pub fn new(id: BlockId, subtype: u8) -> Self {
        Self { id, subtype }
    }

    /// Check if cell is empty (air)
    pub fn is_empty(&self) -> bool {
        self.id == blocks::AIR
    }
}

/// Sparse terrain container keyed by cell position.
///
/// Light is not propagated: every cell reports the ambient level unless an
/// explicit override was set for it.
pub struct GridWorld {
    /// Non-empty cells
    cells: HashMap<IVec3, Cell>,
    /// Occupied heights per (X, Z) column
    columns: HashMap<IVec2, BTreeSet<i32>>,
    /// Per-cell light levels that replace the ambient level
    light_overrides: HashMap<IVec3, u8>,
    /// Light level reported for cells without an override
    ambient_light: u8,
    /// False for a replica that must not mutate canonical state
    authoritative: bool,
    /// Positions written since the last `take_modified`
    modified: Vec<IVec3>,
}

impl GridWorld {
    /// Create a new empty, authoritative world in full daylight
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
            columns: HashMap::new(),
            light_overrides: HashMap::new(),
            ambient_light: MAX_LIGHT,
            authoritative: true,
            modified: Vec::new(),
        }
    }

    /// Create an empty world acting as a passive replica
    pub fn replica() -> Self {
        Self {
            authoritative: false,
            ..Self::new()
        }
    }

    /// Set the ambient light level (clamped to `MAX_LIGHT`)
    pub fn with_ambient_light(mut self, level: u8) -> Self {
        self.ambient_light = level.min(MAX_LIGHT);
        self
    }

    /// Override the light level at a single position
    pub fn set_light(&mut self, pos: IVec3, level: u8) {
        self.light_overrides.insert(pos, level.min(MAX_LIGHT));
    }

    /// Get the cell at a position
    pub fn cell(&self, pos: IVec3) -> Cell {
        self.cells.get(&pos).copied().unwrap_or(Cell::EMPTY)
    }

    /// Fill the rectangle `min..=max` (X/Z) at height `y` with one block
    pub fn fill_layer(&mut self, y: i32, min: IVec2, max: IVec2, id: BlockId) {
        for x in min.x..=max.x {
            for z in min.y..=max.y {
                self.set_block(IVec3::new(x, y, z), id, 0);
            }
        }
    }

    /// Number of non-empty cells
    pub fn block_count(&self) -> usize {
        self.cells.len()
    }

    /// Positions of every cell holding `id`, sorted for stable iteration
    pub fn positions_of(&self, id: BlockId) -> Vec<IVec3> {
        let mut positions: Vec<IVec3> = self
            .cells
            .iter()
            .filter(|(_, cell)| cell.id == id)
            .map(|(pos, _)| *pos)
            .collect();
        positions.sort_by_key(|p| (p.y, p.z, p.x));
        positions
    }

    /// Take the list of written positions and clear the internal list
    pub fn take_modified(&mut self) -> Vec<IVec3> {
        std::mem::take(&mut self.modified)
    }

    fn mark_modified(&mut self, pos: IVec3) {
        if !self.modified.contains(&pos) {
            self.modified.push(pos);
        }
    }
}

fn column_key(pos: IVec3) -> IVec2 {
    IVec2::new(pos.x, pos.z)
}

impl Default for GridWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl Terrain for GridWorld {
    fn block_id(&self, pos: IVec3) -> BlockId {
        self.cell(pos).id
    }

    fn subtype(&self, pos: IVec3) -> u8 {
        self.cell(pos).subtype
    }

    fn light_level(&self, pos: IVec3) -> u8 {
        self.light_overrides
            .get(&pos)
            .copied()
            .unwrap_or(self.ambient_light)
    }

    fn sees_sky(&self, pos: IVec3) -> bool {
        self.columns
            .get(&column_key(pos))
            .and_then(|heights| heights.last())
            .is_none_or(|&top| top <= pos.y)
    }

    fn set_block(&mut self, pos: IVec3, id: BlockId, subtype: u8) {
        let key = column_key(pos);
        if id == blocks::AIR {
            if let Some(heights) = self.columns.get_mut(&key) {
                heights.remove(&pos.y);
                if heights.is_empty() {
                    self.columns.remove(&key);
                }
            }
            self.cells.remove(&pos);
        } else {
            self.cells.insert(pos, Cell::new(id, subtype));
            self.columns.entry(key).or_default().insert(pos.y);
        }
        self.mark_modified(pos);
    }

    fn set_subtype(&mut self, pos: IVec3, subtype: u8) {
        // Air has no sub-type to change
        if let Some(cell) = self.cells.get_mut(&pos) {
            cell.subtype = subtype;
            self.mark_modified(pos);
        }
    }

    fn is_authoritative(&self) -> bool {
        self.authoritative
    }
}
