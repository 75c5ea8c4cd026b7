//! The world and its per-tick update.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sandlot_core::{Aabb, BlockKind, GameConfig, GameMode, GridPos, Result};
use sandlot_entity::{Block, DropFate, ItemDrop, Player};
use sandlot_input::{Clicks, SlotChange, TickInput};
use sandlot_inventory::{Inventory, Item};
use sandlot_physics::{fall_damage, integrate, resolve_collisions, Collider, MoveIntent};
use tracing::{debug, info, trace, warn};

use crate::events::{DamageCause, TickReport, WorldEvent};

/// The simulated world.
///
/// Owns every entity by value. Blocks and drops are kept in insertion
/// order, which is also the collision processing order. Hazard blocks
/// are not solid: the player sinks into them and takes contact damage.
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) config: GameConfig,
    pub(crate) mode: GameMode,
    pub(crate) player: Player,
    pub(crate) blocks: Vec<Block>,
    pub(crate) drops: Vec<ItemDrop>,
    pub(crate) inventory: Inventory,
    pub(crate) rng: StdRng,
    /// Events produced since the last report
    pub(crate) pending: Vec<WorldEvent>,
    tick: u64,
}

impl World {
    /// Create an empty world: the player at spawn, no blocks, no items.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            mode: GameMode::default(),
            player: Player::new(&config.player),
            blocks: Vec::new(),
            drops: Vec::new(),
            inventory: Inventory::from_config(&config.inventory),
            rng: StdRng::seed_from_u64(config.seed),
            pending: Vec::new(),
            tick: 0,
            config,
        })
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    #[inline]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[inline]
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[inline]
    #[must_use]
    pub fn drops(&self) -> &[ItemDrop] {
        &self.drops
    }

    #[inline]
    #[must_use]
    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    #[inline]
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Number of completed ticks
    #[inline]
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Block occupying `cell`, if any
    #[must_use]
    pub fn block_at(&self, cell: GridPos) -> Option<&Block> {
        let origin = cell.origin(self.config.grid_size);
        self.blocks.iter().find(|block| block.is_at(origin))
    }

    /// Switch game mode
    pub fn set_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            self.mode = mode;
            info!(?mode, "Game mode changed");
            self.pending.push(WorldEvent::ModeChanged(mode));
        }
    }

    /// Flip between survival and creative
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Drop `item` into the world with its top-left corner at `position`
    pub fn spawn_drop(&mut self, position: Vec2, item: Item, velocity: Vec2) {
        debug!(item = item.id(), ?position, "Drop spawned");
        self.pending.push(WorldEvent::DropSpawned {
            position,
            item_id: item.kind.id.clone(),
        });
        self.drops
            .push(ItemDrop::new(position, item, &self.config.drops).with_velocity(velocity));
    }

    /// Random launch velocity for a drop from a broken block
    pub(crate) fn scatter_velocity(&mut self) -> Vec2 {
        let scatter = self.config.drops.scatter;
        if scatter <= 0.0 {
            return Vec2::ZERO;
        }
        let rx: f32 = self.rng.gen();
        let ry: f32 = self.rng.gen();
        Vec2::new((0.5 - rx) * scatter, -scatter - ry * scatter * 0.5)
    }

    /// Advance the world by `dt` seconds.
    pub fn update(&mut self, dt: f32, input: &TickInput) -> TickReport {
        self.tick += 1;

        if input.toggle_mode {
            self.toggle_mode();
        }
        if let Some(change) = input.slot {
            self.apply_slot_change(change);
        }

        self.step_player(dt, input);
        self.update_drops(dt);
        self.apply_clicks(input);

        TickReport {
            tick: self.tick,
            events: std::mem::take(&mut self.pending),
        }
    }

    fn apply_slot_change(&mut self, change: SlotChange) {
        let before = self.inventory.selected_slot();
        match change {
            SlotChange::Next => self.inventory.select_next(),
            SlotChange::Previous => self.inventory.select_previous(),
            SlotChange::Select(index) => self.inventory.select_slot(index),
        }
        let after = self.inventory.selected_slot();
        if after != before {
            self.pending.push(WorldEvent::SlotSelected(after));
        }
    }

    fn step_player(&mut self, dt: f32, input: &TickInput) {
        let intent = MoveIntent {
            horizontal: input.horizontal,
            jump: input.jump,
            descend: input.descend,
        };
        let step = integrate(&mut self.player.body, intent, dt);
        resolve_collisions(
            &mut self.player.body,
            self.blocks.iter().filter(|block| !block.kind().is_hazard()),
        );

        if !self.mode.is_creative() {
            self.apply_fall_damage(step.previous_vertical_velocity);
            self.apply_hazards();
        }
        self.handle_death();
    }

    #[allow(clippy::float_cmp)]
    fn apply_fall_damage(&mut self, impact_speed: f32) {
        let body = &self.player.body;
        if !(body.on_ground && impact_speed > 0.0 && body.velocity.y == 0.0) {
            return;
        }

        let amount = fall_damage(impact_speed, &self.config.fall);
        if amount > 0 {
            debug!(impact_speed, amount, "Fall damage");
            self.damage_player(amount, DamageCause::Fall);
        }
    }

    fn apply_hazards(&mut self) {
        let player_box = self.player.aabb();
        let contacts = self
            .blocks
            .iter()
            .filter(|block| block.kind().is_hazard() && player_box.intersects(&block.aabb()))
            .count();
        for _ in 0..contacts {
            self.damage_player(self.config.hazard_damage, DamageCause::Hazard);
        }
    }

    fn damage_player(&mut self, amount: u32, cause: DamageCause) {
        self.player.health.take_damage(amount);
        self.pending.push(WorldEvent::PlayerDamaged { amount, cause });
    }

    fn handle_death(&mut self) {
        if self.player.health.is_alive() {
            return;
        }

        if self.mode.is_creative() {
            self.player.health.restore();
            info!("Player saved from death in creative mode");
            self.pending.push(WorldEvent::PlayerSaved);
        } else {
            let spawn = self.config.player.spawn;
            info!(position = ?self.player.position(), "Player died");
            self.pending.push(WorldEvent::PlayerDied);
            self.player.respawn(spawn);
            info!(?spawn, "Player respawned");
            self.pending.push(WorldEvent::PlayerRespawned { position: spawn });
        }
    }

    /// Update drops back to front so removal never skips an element.
    fn update_drops(&mut self, dt: f32) {
        let player_position = self.player.position();
        let config = self.config.drops;

        for index in (0..self.drops.len()).rev() {
            let drop = &mut self.drops[index];
            drop.update(
                player_position,
                dt,
                self.config.tick_rate,
                &config,
                self.blocks.iter().filter(|block| !block.kind().is_hazard()),
            );

            match drop.fate(player_position, &config) {
                DropFate::Active => {}
                DropFate::Expired => {
                    let drop = self.drops.remove(index);
                    debug!(item = drop.item().id(), "Drop expired");
                    self.pending.push(WorldEvent::DropExpired {
                        item_id: drop.item().kind.id.clone(),
                    });
                }
                DropFate::PickedUp => self.pick_up(index),
            }
        }
    }

    /// Move drop `index` into the inventory, leaving any overflow behind.
    fn pick_up(&mut self, index: usize) {
        let item = self.drops[index].item().clone();
        let offered = item.count;
        let item_id = item.kind.id.clone();

        match self.inventory.insert(item) {
            None => {
                self.drops.remove(index);
                debug!(item = %item_id, count = offered, "Drop picked up");
                self.pending.push(WorldEvent::DropPickedUp {
                    item_id,
                    count: offered,
                    remaining: 0,
                });
            }
            Some(rest) => {
                let accepted = offered - rest.count;
                self.drops[index].item_mut().count = rest.count;
                warn!(
                    item = %item_id,
                    accepted,
                    remaining = rest.count,
                    "Inventory full, leaving drop in the world"
                );
                if accepted > 0 {
                    self.pending.push(WorldEvent::DropPickedUp {
                        item_id,
                        count: accepted,
                        remaining: rest.count,
                    });
                }
            }
        }
    }

    fn apply_clicks(&mut self, input: &TickInput) {
        if input.clicks.contains(Clicks::DIG) {
            if let Err(err) = self.remove_block_at(input.cursor) {
                trace!(%err, "Dig refused");
            }
        }
        if input.clicks.contains(Clicks::PLACE) {
            if let Err(err) = self.place_block_at(input.cursor) {
                trace!(%err, "Place refused");
            }
        }
        if input.clicks.contains(Clicks::PICK) {
            if let Err(err) = self.pick_block_at(input.cursor) {
                trace!(%err, "Pick refused");
            }
        }
    }

    /// Add blocks, skipping any whose cell is already taken. Returns how
    /// many were added.
    pub fn extend_blocks(&mut self, blocks: impl IntoIterator<Item = Block>) -> usize {
        let mut added = 0;
        for block in blocks {
            if !self.blocks.iter().any(|b| b.is_at(block.position())) {
                self.blocks.push(block);
                added += 1;
            }
        }
        added
    }

    /// Put a block of `kind` into `cell` unless occupied
    pub fn insert_block(&mut self, kind: BlockKind, cell: GridPos) -> bool {
        self.extend_blocks([Block::at_cell(kind, cell, self.config.grid_size)]) == 1
    }

    /// Visible area helper for renderers: blocks overlapping `view`
    pub fn blocks_in(&self, view: Aabb) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .filter(move |block| block.aabb().intersects(&view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandlot_core::Error;

    const DT: f32 = 1.0 / 60.0;

    fn idle() -> TickInput {
        TickInput::default()
    }

    /// Player standing on a floor row at y = 512
    fn floored_world() -> World {
        let mut world = World::new(GameConfig::default()).unwrap();
        for x in 0..20 {
            world.insert_block(BlockKind::Stone, GridPos::new(x, 16));
        }
        world.player.body.teleport(Vec2::new(320.0, 480.0));
        world.player.body.on_ground = true;
        world
    }

    #[test]
    fn rejects_invalid_config() {
        let config = GameConfig::default().with_inventory(3, 9);
        assert!(matches!(World::new(config), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn player_rests_on_floor() {
        let mut world = floored_world();
        for _ in 0..30 {
            let report = world.update(DT, &idle());
            assert_eq!(report.damage_taken(), 0);
        }
        assert!(world.player().on_ground());
        assert!((world.player().position().y - 480.0).abs() < 0.5);
        assert_eq!(world.tick_count(), 30);
    }

    #[test]
    fn long_fall_hurts_in_survival_only() {
        for mode in [GameMode::Survival, GameMode::Creative] {
            let mut world = floored_world();
            world.set_mode(mode);
            world.player.body.teleport(Vec2::new(320.0, 470.0));
            world.player.body.velocity.y = 700.0;

            let report = world.update(DT, &idle());
            assert!(world.player().on_ground());
            let expected = if mode.is_creative() { 0 } else { 15 };
            assert_eq!(report.damage_taken(), expected, "{mode:?}");
            assert_eq!(world.player().health.current(), 100 - expected);
        }
    }

    #[test]
    fn lava_burns_each_tick_in_survival() {
        let mut world = floored_world();
        world.insert_block(BlockKind::Lava, GridPos::new(10, 15));
        // Standing inside the lava cell, held by the floor
        world.player.body.teleport(Vec2::new(330.0, 480.0));

        let report = world.update(DT, &idle());
        assert!(report.any(|e| matches!(
            e,
            WorldEvent::PlayerDamaged {
                amount: 5,
                cause: DamageCause::Hazard
            }
        )));
    }

    #[test]
    fn death_respawns_in_survival() {
        let mut world = floored_world();
        world.player.health.take_damage(99);
        world.insert_block(BlockKind::Lava, GridPos::new(10, 15));
        world.player.body.teleport(Vec2::new(330.0, 480.0));

        let report = world.update(DT, &idle());
        assert!(report.any(|e| *e == WorldEvent::PlayerDied));
        assert_eq!(world.player().position(), Vec2::new(320.0, 160.0));
        assert_eq!(world.player().velocity(), Vec2::ZERO);
        assert_eq!(world.player().health.current(), 100);
        assert!(!world.player().on_ground());
    }

    #[test]
    fn creative_heals_instead_of_dying() {
        let mut world = floored_world();
        world.set_mode(GameMode::Creative);
        world.player.health.take_damage(100);

        let report = world.update(DT, &idle());
        assert!(report.any(|e| *e == WorldEvent::PlayerSaved));
        assert!(world.player().health.is_alive());
        assert!((world.player().position().x - 320.0).abs() < 1.0);
    }

    #[test]
    fn drop_on_player_is_picked_up_after_one_tick() {
        let mut world = World::new(GameConfig::default()).unwrap();
        world.player.body.gravity = sandlot_core::Gravity::disabled();
        world.player.body.teleport(Vec2::new(100.0, 100.0));
        world.spawn_drop(Vec2::new(100.0, 100.0), Item::block(BlockKind::Stone, 1), Vec2::ZERO);

        let report = world.update(DT, &idle());
        assert!(world.drops().is_empty());
        assert_eq!(world.inventory().item_count("stone"), 1);
        assert!(report.any(|e| matches!(e, WorldEvent::DropPickedUp { count: 1, .. })));
    }

    #[test]
    fn overdue_drop_expires_even_on_player() {
        let mut world = World::new(GameConfig::default()).unwrap();
        world.player.body.gravity = sandlot_core::Gravity::disabled();
        world.player.body.teleport(Vec2::new(100.0, 100.0));
        world.spawn_drop(Vec2::new(100.0, 100.0), Item::block(BlockKind::Dirt, 1), Vec2::ZERO);

        let lifetime = world.config().drops.lifetime;
        let report = world.update(lifetime, &idle());
        assert!(world.drops().is_empty());
        assert_eq!(world.inventory().item_count("dirt"), 0);
        assert!(report.any(|e| matches!(e, WorldEvent::DropExpired { .. })));
    }

    #[test]
    fn full_inventory_leaves_remainder_in_world() {
        let config = GameConfig::default().with_inventory(1, 1);
        let mut world = World::new(config).unwrap();
        world.player.body.gravity = sandlot_core::Gravity::disabled();
        world.player.body.teleport(Vec2::new(100.0, 100.0));
        world.inventory.add_item(Item::block(BlockKind::Stone, 62));
        world.spawn_drop(Vec2::new(100.0, 100.0), Item::block(BlockKind::Stone, 5), Vec2::ZERO);

        let report = world.update(DT, &idle());
        assert_eq!(world.inventory().item_count("stone"), 64);
        assert_eq!(world.drops().len(), 1);
        assert_eq!(world.drops()[0].item().count, 3);
        assert!(report.any(|e| matches!(
            e,
            WorldEvent::DropPickedUp {
                count: 2,
                remaining: 3,
                ..
            }
        )));
    }

    #[test]
    fn slot_selection_and_mode_toggle_from_input() {
        let mut world = World::new(GameConfig::default()).unwrap();
        let input = TickInput {
            toggle_mode: true,
            slot: Some(SlotChange::Previous),
            ..TickInput::default()
        };

        let report = world.update(DT, &input);
        assert_eq!(world.mode(), GameMode::Creative);
        assert_eq!(world.inventory().selected_slot(), 8);
        assert_eq!(
            report.events[..2],
            [
                WorldEvent::ModeChanged(GameMode::Creative),
                WorldEvent::SlotSelected(8)
            ]
        );
    }

    #[test]
    fn scatter_is_seeded() {
        let config = GameConfig::default().with_drops(sandlot_core::DropConfig {
            scatter: 100.0,
            ..sandlot_core::DropConfig::default()
        });
        let mut a = World::new(config.clone()).unwrap();
        let mut b = World::new(config).unwrap();
        let va = a.scatter_velocity();
        assert_eq!(va, b.scatter_velocity());
        assert!(va.x.abs() <= 50.0);
        assert!(va.y <= -100.0 && va.y >= -150.0);
    }

    #[test]
    fn extend_skips_occupied_cells() {
        let mut world = World::new(GameConfig::default()).unwrap();
        assert!(world.insert_block(BlockKind::Stone, GridPos::new(1, 1)));
        assert!(!world.insert_block(BlockKind::Dirt, GridPos::new(1, 1)));
        assert_eq!(world.blocks().len(), 1);
        assert_eq!(
            world.block_at(GridPos::new(1, 1)).map(Block::kind),
            Some(BlockKind::Stone)
        );
    }
}
