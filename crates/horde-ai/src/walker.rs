//! Walker: seeks the player on the ground plane.

use glam::Vec3;

use horde_core::types::{flat_heading, settle_to_ground};

use crate::enemy::{Body, EnemySignal};

#[derive(Debug, Clone)]
pub struct Walker {
    can_split: bool,
}

impl Walker {
    pub fn new(can_split: bool) -> Self {
        Self { can_split }
    }

    pub fn can_split(&self) -> bool {
        self.can_split
    }

    pub(crate) fn update(&mut self, body: &mut Body, dt: f32, player: Vec3) -> Option<EnemySignal> {
        let dir = flat_heading(body.position, player);
        let speed = body.speed;
        body.step(dir, speed, dt);
        settle_to_ground(&mut body.position, dt);
        None
    }
}
