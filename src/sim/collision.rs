//! Hitboxes and axis-aligned overlap tests
//!
//! Hitboxes are deliberately not the sprite bounds: player and obstacle
//! boxes are inset so near-misses are forgiven, coin boxes are padded so
//! pickups feel generous. World plane: x scrolls left, y is height above
//! the ground.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

use super::state::{Coin, Obstacle, Player};

/// An axis-aligned box in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub min: Vec2,
    pub max: Vec2,
}

impl Hitbox {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Standard 4-way interval test: overlap iff the projections intersect
    /// on both axes. Touching edges do not count.
    #[inline]
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Player hitbox: sprite bounds at the fixed anchor, inset on both sides
/// and the top. The feet stay honest so ground obstacles still connect.
pub fn player_hitbox(player: &Player) -> Hitbox {
    Hitbox::new(
        Vec2::new(PLAYER_X + PLAYER_INSET_X, player.pos_y),
        Vec2::new(
            PLAYER_X + PLAYER_WIDTH - PLAYER_INSET_X,
            player.pos_y + PLAYER_HEIGHT - PLAYER_INSET_TOP,
        ),
    )
}

/// Obstacle hitbox: inset sides and top, base on the ground.
pub fn obstacle_hitbox(obstacle: &Obstacle) -> Hitbox {
    Hitbox::new(
        Vec2::new(obstacle.x + OBSTACLE_INSET_X, 0.0),
        Vec2::new(
            obstacle.x + obstacle.width - OBSTACLE_INSET_X,
            obstacle.height - OBSTACLE_INSET_TOP,
        ),
    )
}

/// Coin hitbox: sprite square around the center plus pickup padding.
pub fn coin_hitbox(coin: &Coin) -> Hitbox {
    let half = COIN_SIZE / 2.0 + COIN_PICKUP_PAD;
    Hitbox::new(coin.pos - Vec2::splat(half), coin.pos + Vec2::splat(half))
}

/// First obstacle whose hitbox overlaps the player's, in list order.
pub fn first_obstacle_hit(player: &Player, obstacles: &[Obstacle]) -> Option<u32> {
    let player_box = player_hitbox(player);
    obstacles
        .iter()
        .find(|o| obstacle_hitbox(o).overlaps(&player_box))
        .map(|o| o.id)
}

/// Mark every live coin overlapping the player as collected and return
/// their IDs in list order. Unlike obstacles, all coins are checked.
pub fn collect_coins(player: &Player, coins: &mut [Coin]) -> Vec<u32> {
    let player_box = player_hitbox(player);
    let mut collected = Vec::new();
    for coin in coins.iter_mut().filter(|c| !c.collected) {
        if coin_hitbox(coin).overlaps(&player_box) {
            coin.collected = true;
            collected.push(coin.id);
        }
    }
    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ObstacleKind;
    use proptest::prelude::*;

    fn obstacle(id: u32, x: f32, kind: ObstacleKind) -> Obstacle {
        let (width, height) = kind.dimensions();
        Obstacle {
            id,
            x,
            width,
            height,
            kind,
        }
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Hitbox::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Hitbox::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_grounded_player_hits_rock_underfoot() {
        let player = Player::default();
        let rocks = [obstacle(1, PLAYER_X, ObstacleKind::Rock)];
        assert_eq!(first_obstacle_hit(&player, &rocks), Some(1));
    }

    #[test]
    fn test_sprite_graze_is_forgiven() {
        // Sprites overlap by a sliver but the inset hitboxes do not.
        let player = Player::default();
        let rocks = [obstacle(1, PLAYER_X - 30.0, ObstacleKind::Rock)];
        let sprite_right = rocks[0].x + rocks[0].width;
        assert!(sprite_right > PLAYER_X, "sprites must visually touch");
        assert_eq!(first_obstacle_hit(&player, &rocks), None);
    }

    #[test]
    fn test_airborne_player_clears_rock() {
        let player = Player {
            pos_y: 100.0,
            vel_y: 0.0,
            grounded: false,
        };
        let rocks = [obstacle(1, PLAYER_X, ObstacleKind::Rock)];
        assert_eq!(first_obstacle_hit(&player, &rocks), None);
    }

    #[test]
    fn test_first_overlapping_obstacle_wins() {
        let player = Player::default();
        let rocks = [
            obstacle(3, PLAYER_X + 4.0, ObstacleKind::Rock),
            obstacle(7, PLAYER_X, ObstacleKind::Rock),
        ];
        assert_eq!(first_obstacle_hit(&player, &rocks), Some(3));
    }

    #[test]
    fn test_coin_pickup_pad_is_generous() {
        let player = Player::default();
        // Center sits past the sprite reach but inside the padded box.
        let mut coins = [Coin {
            id: 5,
            pos: Vec2::new(PLAYER_X + PLAYER_WIDTH - PLAYER_INSET_X + 18.0, 32.0),
            collected: false,
        }];
        assert_eq!(collect_coins(&player, &mut coins), vec![5]);
        assert!(coins[0].collected);
    }

    #[test]
    fn test_collected_coins_are_skipped() {
        let player = Player::default();
        let mut coins = [
            Coin {
                id: 1,
                pos: Vec2::new(150.0, 30.0),
                collected: true,
            },
            Coin {
                id: 2,
                pos: Vec2::new(150.0, 30.0),
                collected: false,
            },
        ];
        assert_eq!(collect_coins(&player, &mut coins), vec![2]);
    }

    proptest! {
        #[test]
        fn prop_disjoint_x_projections_never_overlap(
            ax in -500.0f32..500.0,
            aw in 1.0f32..200.0,
            gap in 0.001f32..300.0,
            bw in 1.0f32..200.0,
            ay in -100.0f32..100.0,
            ah in 1.0f32..200.0,
            by in -100.0f32..100.0,
            bh in 1.0f32..200.0,
        ) {
            let a = Hitbox::new(Vec2::new(ax, ay), Vec2::new(ax + aw, ay + ah));
            let bx = ax + aw + gap;
            let b = Hitbox::new(Vec2::new(bx, by), Vec2::new(bx + bw, by + bh));
            prop_assert!(!a.overlaps(&b));
            prop_assert!(!b.overlaps(&a));
        }

        #[test]
        fn prop_box_around_interior_point_overlaps(
            ax in -500.0f32..500.0,
            aw in 1.0f32..200.0,
            ay in -100.0f32..100.0,
            ah in 1.0f32..200.0,
            fx in 0.01f32..0.99,
            fy in 0.01f32..0.99,
            bw in 1.0f32..200.0,
            bh in 1.0f32..200.0,
        ) {
            let a = Hitbox::new(Vec2::new(ax, ay), Vec2::new(ax + aw, ay + ah));
            let p = Vec2::new(ax + aw * fx, ay + ah * fy);
            let half = Vec2::new(bw / 2.0, bh / 2.0);
            let b = Hitbox::new(p - half, p + half);
            prop_assert!(a.overlaps(&b));
            prop_assert!(b.overlaps(&a));
        }
    }
}
