//! Grid-aligned block editing: dig, place and pick.

use glam::Vec2;
use sandlot_core::GridPos;
use sandlot_entity::Block;
use sandlot_inventory::Item;
use thiserror::Error;
use tracing::debug;

use crate::events::WorldEvent;
use crate::World;

/// Why a block edit was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Cell occupied: {0:?}")]
    Occupied(GridPos),

    #[error("Cell holds the player: {0:?}")]
    PlayerCell(GridPos),

    #[error("No item selected")]
    NothingSelected,

    #[error("No block at {0:?}")]
    NoBlock(GridPos),

    #[error("Not enough items: {0}")]
    InsufficientItems(String),
}

impl World {
    fn cell_of(&self, point: Vec2) -> GridPos {
        GridPos::from_world(point, self.config.grid_size)
    }

    /// Remove the block in the cell under `point` and drop its item at
    /// the cell centre.
    pub fn remove_block_at(&mut self, point: Vec2) -> Result<GridPos, EditError> {
        let grid = self.config.grid_size;
        let cell = self.cell_of(point);
        let origin = cell.origin(grid);

        let index = self
            .blocks
            .iter()
            .position(|block| block.is_at(origin))
            .ok_or(EditError::NoBlock(cell))?;
        let block = self.blocks.remove(index);
        let kind = block.kind();
        debug!(?cell, ?kind, "Block removed");
        self.pending.push(WorldEvent::BlockRemoved { cell, kind });

        let half = Vec2::splat(self.config.drops.size * 0.5);
        let velocity = self.scatter_velocity();
        self.spawn_drop(cell.center(grid) - half, Item::block(kind, 1), velocity);

        Ok(cell)
    }

    /// Place one unit of the selected item into the cell under `point`.
    ///
    /// Refused when the cell is taken, when it is the player's cell or when
    /// nothing is selected. Survival mode consumes the item.
    pub fn place_block_at(&mut self, point: Vec2) -> Result<GridPos, EditError> {
        let grid = self.config.grid_size;
        let cell = self.cell_of(point);

        if self.block_at(cell).is_some() {
            return Err(EditError::Occupied(cell));
        }
        if self.player.cell(grid) == cell {
            return Err(EditError::PlayerCell(cell));
        }

        let item = self
            .inventory
            .selected_item()
            .and_then(|stack| stack.item())
            .cloned()
            .ok_or(EditError::NothingSelected)?;

        if !self.mode.is_creative() && !self.inventory.remove_item(&item.id, 1) {
            return Err(EditError::InsufficientItems(item.id));
        }

        let kind = item.block_kind();
        self.blocks.push(Block::at_cell(kind, cell, grid));
        debug!(?cell, ?kind, "Block placed");
        self.pending.push(WorldEvent::BlockPlaced { cell, kind });

        Ok(cell)
    }

    /// Select the inventory slot holding the block under `point`.
    ///
    /// Only slots inside the hotbar can be selected; otherwise nothing
    /// changes.
    pub fn pick_block_at(&mut self, point: Vec2) -> Result<GridPos, EditError> {
        let cell = self.cell_of(point);
        let kind = self
            .block_at(cell)
            .map(Block::kind)
            .ok_or(EditError::NoBlock(cell))?;

        let id = kind.item_id();
        let slot = self
            .inventory
            .find(id)
            .ok_or_else(|| EditError::InsufficientItems(id.to_owned()))?;

        let before = self.inventory.selected_slot();
        self.inventory.select_slot(slot);
        if self.inventory.selected_slot() != before {
            self.pending.push(WorldEvent::SlotSelected(slot));
        }

        Ok(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandlot_core::{BlockKind, GameConfig, GameMode};
    use sandlot_input::{Clicks, TickInput};
    use sandlot_inventory::{ItemKind, ItemStack};

    fn stocked_world() -> World {
        let mut world = World::new(GameConfig::default()).unwrap();
        world.inventory.add_item(Item::block(BlockKind::Stone, 3));
        world
    }

    #[test]
    fn place_snaps_to_cell_and_refuses_same_cell() {
        let mut world = stocked_world();
        assert_eq!(
            world.place_block_at(Vec2::new(40.0, 40.0)),
            Ok(GridPos::new(1, 1))
        );
        assert_eq!(world.blocks()[0].position(), Vec2::new(32.0, 32.0));
        assert_eq!(world.blocks()[0].kind(), BlockKind::Stone);

        assert_eq!(
            world.place_block_at(Vec2::new(45.0, 50.0)),
            Err(EditError::Occupied(GridPos::new(1, 1)))
        );
        assert_eq!(world.blocks().len(), 1);
        assert_eq!(world.inventory().item_count("stone"), 2);
    }

    #[test]
    fn place_refuses_player_cell() {
        let mut world = stocked_world();
        // Player spawns at (320, 160), cell (10, 5)
        assert_eq!(
            world.place_block_at(Vec2::new(330.0, 170.0)),
            Err(EditError::PlayerCell(GridPos::new(10, 5)))
        );
        assert!(world.blocks().is_empty());
    }

    #[test]
    fn place_needs_a_selected_item() {
        let mut world = World::new(GameConfig::default()).unwrap();
        assert_eq!(
            world.place_block_at(Vec2::ZERO),
            Err(EditError::NothingSelected)
        );
    }

    #[test]
    fn survival_consumes_creative_does_not() {
        let mut world = stocked_world();
        world.place_block_at(Vec2::new(0.0, 0.0)).unwrap();
        world.place_block_at(Vec2::new(32.0, 0.0)).unwrap();
        world.place_block_at(Vec2::new(64.0, 0.0)).unwrap();
        assert!(world.inventory().is_empty());
        assert_eq!(
            world.place_block_at(Vec2::new(96.0, 0.0)),
            Err(EditError::NothingSelected)
        );

        let mut world = stocked_world();
        world.set_mode(GameMode::Creative);
        for x in 0..5 {
            world.place_block_at(Vec2::new(x as f32 * 32.0, 0.0)).unwrap();
        }
        assert_eq!(world.inventory().item_count("stone"), 3);
        assert_eq!(world.blocks().len(), 5);
    }

    #[test]
    fn unknown_item_places_small_block() {
        let mut world = World::new(GameConfig::default()).unwrap();
        let kind = ItemKind::new("mystery", "Mystery", 64, BlockKind::Stone.color());
        world.inventory.set_slot(0, ItemStack::new(kind, 1)).unwrap();
        world.place_block_at(Vec2::ZERO).unwrap();
        assert_eq!(world.blocks()[0].kind(), BlockKind::SmallBlock);
    }

    #[test]
    fn remove_drops_item_at_cell_centre() {
        let mut world = stocked_world();
        world.insert_block(BlockKind::Wood, GridPos::new(2, 3));

        assert_eq!(
            world.remove_block_at(Vec2::new(70.0, 100.0)),
            Ok(GridPos::new(2, 3))
        );
        assert!(world.blocks().is_empty());
        let drop = &world.drops()[0];
        // Centre (80, 112) minus half the drop size
        assert_eq!(drop.position(), Vec2::new(72.0, 104.0));
        assert_eq!(drop.item().id(), "wood");
        assert_eq!(drop.velocity(), Vec2::ZERO);

        assert_eq!(
            world.remove_block_at(Vec2::new(70.0, 100.0)),
            Err(EditError::NoBlock(GridPos::new(2, 3)))
        );
    }

    #[test]
    fn pick_selects_hotbar_slot_holding_block() {
        let mut world = stocked_world();
        world.inventory.add_item(Item::block(BlockKind::Dirt, 1));
        world.insert_block(BlockKind::Dirt, GridPos::new(0, 0));
        world.insert_block(BlockKind::Lava, GridPos::new(1, 0));

        assert_eq!(
            world.pick_block_at(Vec2::new(5.0, 5.0)),
            Ok(GridPos::new(0, 0))
        );
        assert_eq!(world.inventory().selected_slot(), 1);

        assert_eq!(
            world.pick_block_at(Vec2::new(40.0, 5.0)),
            Err(EditError::InsufficientItems("lava".to_owned()))
        );
        assert_eq!(
            world.pick_block_at(Vec2::new(100.0, 5.0)),
            Err(EditError::NoBlock(GridPos::new(3, 0)))
        );
        assert_eq!(world.inventory().selected_slot(), 1);
    }

    #[test]
    fn pick_ignores_slots_outside_hotbar() {
        let mut world = World::new(GameConfig::default()).unwrap();
        world
            .inventory
            .set_slot(12, ItemStack::new(ItemKind::for_block(BlockKind::Dirt), 1))
            .unwrap();
        world.insert_block(BlockKind::Dirt, GridPos::new(0, 0));

        assert!(world.pick_block_at(Vec2::new(5.0, 5.0)).is_ok());
        assert_eq!(world.inventory().selected_slot(), 0);
    }

    #[test]
    fn held_dig_and_place_run_every_tick() {
        let mut world = stocked_world();
        world.insert_block(BlockKind::Stone, GridPos::new(0, 0));
        let input =
            TickInput::idle_at(Vec2::new(8.0, 8.0)).with_clicks(Clicks::DIG | Clicks::PLACE);

        // Dig then place in the same tick swaps the block for a placed one
        let report = world.update(1.0 / 60.0, &input);
        assert!(report.any(|e| matches!(e, WorldEvent::BlockRemoved { .. })));
        assert!(report.any(|e| matches!(e, WorldEvent::BlockPlaced { .. })));
        assert_eq!(world.blocks().len(), 1);
        assert_eq!(world.inventory().item_count("stone"), 2);
    }
}
