use crate::{default_platforms, step, Config, Entity, InputState, Platform, StepEvents};

/// Everything one game needs between frames. The host owns it and calls
/// [`World::tick`] once per frame; nothing here schedules itself.
#[derive(Clone, Debug)]
pub struct World {
    config: Config,
    platforms: Vec<Platform>,
    pub entity: Entity,
    pub input: InputState,
    frame: u64,
}

impl World {
    pub fn new(config: Config) -> Self {
        log::info!(
            "world {}x{}, gravity {}, spawn ({}, {})",
            config.field_width,
            config.field_height,
            config.gravity,
            config.entity.x,
            config.entity.y
        );
        Self {
            platforms: default_platforms(config.field_width),
            entity: Entity::spawn(&config.entity),
            input: InputState::new(),
            frame: 0,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Ticks run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn key_down(&mut self, code: &str) {
        self.input.key_down(code);
    }

    pub fn key_up(&mut self, code: &str) {
        self.input.key_up(code);
    }

    pub fn tick(&mut self) -> StepEvents {
        self.frame += 1;
        step(
            &mut self.entity,
            &self.input,
            &self.platforms,
            self.config.gravity,
            self.config.field_width,
        )
    }

    /// Put the entity back at its spawn point. Input is left as held.
    pub fn respawn(&mut self) {
        self.entity = Entity::spawn(&self.config.entity);
    }
}

impl Default for World {
    fn default() -> Self {
        World::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::World;
    use crate::{Config, Control};

    #[test]
    fn default_world_settles_on_ground() {
        let mut world = World::default();
        let mut landings = 0;
        for _ in 0..60 {
            landings += world.tick().landed as u32;
        }
        assert_eq!(world.frame(), 60);
        // Spawn is already grounded, so the fall ends without a landing.
        assert_eq!(landings, 0);
        assert_eq!(world.entity.y, 500.0);
        assert!(world.entity.grounded);
    }

    #[test]
    fn space_jumps_straight_from_spawn() {
        let mut world = World::default();
        world.key_down("Space");
        assert!(world.tick().jumped);
        assert!(world.entity.y < 400.0);

        // Held through the arc: no second impulse, one landing at the end.
        let mut jumps = 0;
        let mut landings = 0;
        for _ in 0..120 {
            let ev = world.tick();
            jumps += ev.jumped as u32;
            landings += ev.landed as u32;
            if ev.landed {
                break;
            }
        }
        assert_eq!(jumps, 0);
        assert_eq!(landings, 1);
        assert_eq!(world.entity.y, 500.0);
    }

    #[test]
    fn keys_route_to_input() {
        let mut world = World::default();
        world.key_down("ArrowRight");
        world.key_down("KeyQ");
        assert!(world.input.is_pressed(Control::MoveRight));

        world.tick();
        assert_eq!(world.entity.x, 105.0);

        world.key_up("ArrowRight");
        world.tick();
        assert_eq!(world.entity.x, 105.0);
    }

    #[test]
    fn ground_follows_field_width() {
        let config = Config {
            field_width: 1024.0,
            ..Config::default()
        };
        let world = World::new(config);
        assert_eq!(world.platforms()[0].rect.w, 1024.0);
    }

    #[test]
    fn respawn_resets_entity_only() {
        let mut world = World::default();
        world.key_down("ArrowLeft");
        for _ in 0..30 {
            world.tick();
        }
        world.respawn();
        assert_eq!((world.entity.x, world.entity.y), (100.0, 400.0));
        assert_eq!(world.entity.dy, 0.0);
        assert!(world.input.is_pressed(Control::MoveLeft));
        assert_eq!(world.frame(), 30);
    }
}
