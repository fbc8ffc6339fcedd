//! Enemy tactics
//!
//! The conditions and actions enemy decision trees are built from, plus
//! the default offensive and defensive trees.
//!
//! Conditions and actions are plain data. A [`TacticContext`] borrows the
//! enemy, the player and the world for one traversal and interprets them.

use crate::bullet::{Bullet, BulletKind};
use crate::config::{BulletConfig, EnemyConfig};
use crate::entity::Entity;
use crate::world::World;
use serde::{Deserialize, Serialize};
use vigil_ai::{flee, seek, BehaviorContext, DecisionTree, Result};
use vigil_core::Timer;
use vigil_math::Vec2;
use vigil_physics::{is_visible, HasBody};

/// Decision-node predicates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnemyCondition {
    /// Player within `distance` of the enemy
    Proximity { distance: f32 },
    /// Player can see the enemy
    Visibility { view_distance: f32 },
}

/// Action-node effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EnemyAction {
    /// Steer toward the player
    Seek { speed: f32 },
    /// Steer away from the player
    Flee { speed: f32 },
    /// Head for the waypoint nearest the player that has a view of them
    SeekVantage { view_distance: f32 },
    /// Head for the waypoint farthest from the player that is out of their sight
    SeekCover { view_distance: f32 },
    /// Fire at the player whenever the cooldown expires
    Shoot { cooldown: Timer },
}

impl EnemyAction {
    pub fn shoot(cooldown: f32) -> Self {
        Self::Shoot {
            cooldown: Timer::new(cooldown),
        }
    }
}

/// Decision tree over enemy tactics
pub type TacticTree = DecisionTree<EnemyCondition, EnemyAction>;

/// Everything a tactic can read or change during one traversal
pub struct TacticContext<'a> {
    pub enemy: &'a mut Entity,
    pub player: &'a Entity,
    pub world: &'a mut World,
    pub bullet: &'a BulletConfig,
    pub dt: f32,
}

impl TacticContext<'_> {
    fn steer_toward(&mut self, target: Vec2, speed: f32) {
        let body = &self.enemy.body;
        let acceleration = seek(target, body.position, body.velocity, speed);
        self.enemy.add_acceleration(acceleration);
    }

    fn player_visible_from(&self, point: Vec2, view_distance: f32) -> bool {
        is_visible(
            point,
            view_distance,
            self.player.body.position,
            self.player.radius(),
            &self.world.obstacles,
        )
    }

    fn fire_at_player(&mut self) {
        let origin = self.enemy.body.position;
        let direction = (self.player.body.position - origin).normalize();
        let spawn = origin + direction * (self.enemy.radius() + self.bullet.radius);
        let bullet = Bullet::fire(
            BulletKind::Enemy,
            self.bullet,
            spawn,
            direction * self.bullet.speed,
        );
        self.world.spawn_bullet(bullet);
    }
}

impl BehaviorContext for TacticContext<'_> {
    type Condition = EnemyCondition;
    type Action = EnemyAction;

    fn check(&mut self, condition: &EnemyCondition) -> bool {
        match *condition {
            EnemyCondition::Proximity { distance } => {
                (self.enemy.body.position - self.player.body.position).length_squared()
                    <= distance * distance
            }
            EnemyCondition::Visibility { view_distance } => is_visible(
                self.player.body.position,
                view_distance,
                self.enemy.body.position,
                self.enemy.radius(),
                &self.world.obstacles,
            ),
        }
    }

    fn perform(&mut self, action: &mut EnemyAction) {
        match action {
            EnemyAction::Seek { speed } => self.steer_toward(self.player.body.position, *speed),
            EnemyAction::Flee { speed } => {
                let body = &self.enemy.body;
                let acceleration =
                    flee(self.player.body.position, body.position, body.velocity, *speed);
                self.enemy.add_acceleration(acceleration);
            }
            EnemyAction::SeekVantage { view_distance } => {
                let vantage = self
                    .world
                    .waypoints_by_distance(self.player.body.position)
                    .into_iter()
                    .find(|&point| self.player_visible_from(point, *view_distance));
                if let Some(point) = vantage {
                    self.steer_toward(point, self.enemy.speed());
                }
            }
            EnemyAction::SeekCover { view_distance } => {
                let cover = self
                    .world
                    .waypoints_by_distance(self.player.body.position)
                    .into_iter()
                    .rev()
                    .find(|&point| !self.player_visible_from(point, *view_distance));
                if let Some(point) = cover {
                    self.steer_toward(point, self.enemy.speed());
                }
            }
            EnemyAction::Shoot { cooldown } => {
                cooldown.tick(self.dt);
                if cooldown.expired() {
                    cooldown.reset();
                    self.fire_at_player();
                }
            }
        }
    }
}

/// Default offensive tree
///
/// Too close: back off while firing. In sight: close in while firing.
/// Otherwise move to a waypoint with a view of the player.
pub fn offensive_tree(config: &EnemyConfig) -> Result<TacticTree> {
    let mut tree = TacticTree::new();
    let speed = config.speed;
    let view_distance = config.view_distance;

    let retreat_shot = tree.action(EnemyAction::shoot(config.shoot_cooldown), None);
    let retreat = tree.action(EnemyAction::Flee { speed }, Some(retreat_shot));

    let chase_shot = tree.action(EnemyAction::shoot(config.shoot_cooldown), None);
    let chase = tree.action(EnemyAction::Seek { speed }, Some(chase_shot));

    let reposition = tree.action(EnemyAction::SeekVantage { view_distance }, None);
    let in_sight = tree.decision(
        EnemyCondition::Visibility { view_distance },
        Some(chase),
        Some(reposition),
    );

    let too_close = tree.decision(
        EnemyCondition::Proximity {
            distance: config.proximity,
        },
        Some(retreat),
        Some(in_sight),
    );
    tree.set_root(too_close)?;
    Ok(tree)
}

/// Default defensive tree
///
/// Seen: break line of sight. Hidden: keep firing.
pub fn defensive_tree(config: &EnemyConfig) -> Result<TacticTree> {
    let mut tree = TacticTree::new();
    let view_distance = config.view_distance;

    let hide = tree.action(EnemyAction::SeekCover { view_distance }, None);
    let shoot = tree.action(EnemyAction::shoot(config.shoot_cooldown), None);
    let seen = tree.decision(
        EnemyCondition::Visibility { view_distance },
        Some(hide),
        Some(shoot),
    );
    tree.set_root(seen)?;
    Ok(tree)
}
