use std::any::Any;
use crate::bodies::{BodyInfo, Contact};
use crate::core::{Role, SoundCue, SublevelId};
use crate::gameplay::anim::{AnimState, FRAME_TIME};
use crate::math::Vector2;

/// Immobilization added per stun
pub const IMMOBILIZATION_TICK: f64 = 0.2;

/// Immobilization level past which the sprite can move again
pub const IMMOBILIZATION_LIMIT: f64 = 2.0;

/// Items that item blocks and powerup bodies grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Powerup {
    Health,
    Star,
    Fire,
    Token,
}

/// Player power state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PowerMode {
    #[default]
    Normal,
    /// Invincible, kills enemies on touch
    Star,
    /// Can throw fireballs
    Fire,
}

impl PowerMode {
    /// Sprite sheet row offset of the mode
    pub fn row_offset(self) -> u32 {
        match self {
            PowerMode::Normal => 0,
            PowerMode::Star => 2,
            PowerMode::Fire => 4,
        }
    }
}

/// Entry sides and destination of a tunnel block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tunnel {
    pub top: bool,
    pub left: bool,
    pub bottom: bool,
    pub right: bool,

    /// Sublevel the tunnel leads to
    pub sublevel: SublevelId,

    /// Where the player appears in the sublevel
    pub exit: Vector2,
}

impl Tunnel {
    pub fn new(top: bool, left: bool, bottom: bool, right: bool, sublevel: SublevelId, exit: Vector2) -> Self {
        Self { top, left, bottom, right, sublevel, exit }
    }
}

/// Kind of game object within its role
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Subrole {
    None,
    Background,
    Goomba,
    Koopa,
    Player1,
    Player2,
    Powerup(Powerup),
    Fireball,
    RegularBlock,
    ItemBlock(Powerup),
    DeathBlock,
    TunnelBlock(Tunnel),
    InvisibleBlock,
}

/// Game object record carried by every body in a level
#[derive(Debug, Clone)]
pub struct Sprite {
    role: Role,
    subrole: Subrole,

    health: u32,
    tokens: u32,
    kills: u32,

    /// Sides currently resting against platforms
    contact: Contact,

    /// Zero when the sprite may move
    immobilized: f64,

    power: PowerMode,

    state: AnimState,
    frame: u32,
    time_since_last_frame: f64,

    /// Exit recorded by the last tunnel the sprite entered
    exit: Option<Vector2>,
}

impl Sprite {
    pub fn new(role: Role, subrole: Subrole, health: u32) -> Self {
        Self {
            role,
            subrole,
            health,
            tokens: 0,
            kills: 0,
            contact: Contact::empty(),
            immobilized: 0.0,
            power: PowerMode::Normal,
            state: AnimState::select(role, subrole),
            frame: 0,
            time_since_last_frame: 0.0,
            exit: None,
        }
    }

    pub fn get_role(&self) -> Role {
        self.role
    }

    pub fn get_subrole(&self) -> Subrole {
        self.subrole
    }

    pub fn get_health(&self) -> u32 {
        self.health
    }

    pub fn get_tokens(&self) -> u32 {
        self.tokens
    }

    pub fn get_kills(&self) -> u32 {
        self.kills
    }

    /// Overwrites the persistent counters, e.g. when carrying a player into a sublevel
    pub fn restore(&mut self, health: u32, kills: u32, tokens: u32) {
        self.health = health;
        self.kills = kills;
        self.tokens = tokens;
    }

    pub fn get_contact(&self) -> Contact {
        self.contact
    }

    pub fn set_contact(&mut self, contact: Contact) {
        self.contact = contact;
    }

    pub fn get_power_mode(&self) -> PowerMode {
        self.power
    }

    pub fn set_power_mode(&mut self, mode: PowerMode) {
        self.power = mode;
    }

    pub fn is_star(&self) -> bool {
        self.power == PowerMode::Star
    }

    /// Item held by an item block
    pub fn get_item(&self) -> Option<Powerup> {
        match self.subrole {
            Subrole::ItemBlock(item) => Some(item),
            Subrole::Powerup(item) => Some(item),
            _ => None,
        }
    }

    /// Tunnel settings of a tunnel block
    pub fn get_tunnel(&self) -> Option<&Tunnel> {
        match &self.subrole {
            Subrole::TunnelBlock(tunnel) => Some(tunnel),
            _ => None,
        }
    }

    pub fn get_exit(&self) -> Option<Vector2> {
        self.exit
    }

    pub fn set_exit(&mut self, exit: Vector2) {
        self.exit = Some(exit);
    }

    /// Takes one point of health and drops any power mode; no-op in star mode
    pub fn lower_health(&mut self) {
        if self.is_star() {
            return;
        }
        self.health = self.health.saturating_sub(1);
        self.power = PowerMode::Normal;
    }

    /// Takes all remaining health; no-op in star mode
    pub fn drain_health(&mut self) {
        if self.is_star() {
            return;
        }
        self.health = 0;
        self.power = PowerMode::Normal;
    }

    /// # Panics
    ///
    /// Panics if the sprite is not a player.
    pub fn add_token(&mut self) {
        assert_eq!(self.role, Role::Player, "only players collect tokens");
        self.tokens += 1;
    }

    /// # Panics
    ///
    /// Panics if the sprite is not a player.
    pub fn add_kill(&mut self) {
        assert_eq!(self.role, Role::Player, "only players score kills");
        self.kills += 1;
    }

    /// Grants `powerup` to a player and returns the cue to play.
    ///
    /// # Panics
    ///
    /// Panics if the sprite is not a player.
    pub fn activate_powerup(&mut self, powerup: Powerup) -> SoundCue {
        assert_eq!(self.role, Role::Player, "only players take powerups");
        match powerup {
            Powerup::Health => {
                self.health += 1;
                SoundCue::Powerup
            }
            Powerup::Star => {
                self.power = PowerMode::Star;
                SoundCue::Powerup
            }
            Powerup::Fire => {
                self.power = PowerMode::Fire;
                SoundCue::Powerup
            }
            Powerup::Token => {
                self.tokens += 1;
                SoundCue::Token
            }
        }
    }

    /// Stuns the sprite; the timer runs until it passes the release limit
    pub fn immobilize(&mut self) {
        self.immobilized += IMMOBILIZATION_TICK;
    }

    pub fn is_immobilized(&self) -> bool {
        self.immobilized != 0.0
    }

    pub fn get_state(&self) -> AnimState {
        self.state
    }

    /// Switches animation, restarting single-frame states
    pub fn set_state(&mut self, state: AnimState) {
        self.state = state;
        let frames = state.frames();
        if frames == 1 {
            self.frame = 0;
        } else {
            self.frame %= frames;
        }
    }

    /// Sheet row and frame index within the current animation.
    ///
    /// Player rows are offset by slot (0 or 6) and power mode (0, 2 or 4);
    /// groundpound states sit one row below.
    pub fn current_frame(&self) -> (u32, u32) {
        let slot = match self.subrole {
            Subrole::Player2 => 6,
            _ => 0,
        };
        let row = slot + self.power.row_offset() + self.state.sheet().start.0;
        (row, self.frame)
    }
}

impl BodyInfo for Sprite {
    fn contact(&self) -> Contact {
        self.contact
    }

    fn tick(&mut self, dt: f64) {
        if self.immobilized > IMMOBILIZATION_LIMIT {
            self.immobilized = 0.0;
        } else if self.immobilized >= IMMOBILIZATION_TICK {
            self.immobilized += dt;
        }

        let frames = self.state.frames();
        if frames == 1 {
            return;
        }

        self.time_since_last_frame += dt;
        if self.time_since_last_frame > FRAME_TIME {
            self.time_since_last_frame = 0.0;
            self.frame = (self.frame + 1) % frames;
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Sprite {
        Sprite::new(Role::Player, Subrole::Player1, 3)
    }

    #[test]
    fn test_restore_overwrites_counters() {
        let mut sprite = player();
        sprite.add_token();
        sprite.add_kill();

        sprite.restore(5, 7, 42);
        assert_eq!(sprite.get_health(), 5);
        assert_eq!(sprite.get_kills(), 7);
        assert_eq!(sprite.get_tokens(), 42);
    }

    #[test]
    fn test_star_mode_blocks_damage() {
        let mut sprite = player();
        sprite.activate_powerup(Powerup::Star);
        sprite.lower_health();
        sprite.drain_health();
        assert_eq!(sprite.get_health(), 3);

        sprite.set_power_mode(PowerMode::Normal);
        sprite.lower_health();
        assert_eq!(sprite.get_health(), 2);
        sprite.drain_health();
        assert_eq!(sprite.get_health(), 0);
        sprite.lower_health();
        assert_eq!(sprite.get_health(), 0);
    }

    #[test]
    fn test_damage_drops_fire_mode() {
        let mut sprite = player();
        assert_eq!(sprite.activate_powerup(Powerup::Fire), SoundCue::Powerup);
        assert_eq!(sprite.current_frame().0, 4);
        sprite.lower_health();
        assert_eq!(sprite.get_power_mode(), PowerMode::Normal);
        assert_eq!(sprite.current_frame().0, 0);
    }

    #[test]
    fn test_player_two_rows() {
        let mut sprite = Sprite::new(Role::Player, Subrole::Player2, 3);
        sprite.set_power_mode(PowerMode::Star);
        sprite.set_state(AnimState::PlayerGroundpoundLeft);
        assert_eq!(sprite.current_frame().0, 6 + 2 + 1);
    }

    #[test]
    fn test_token_powerup_counts() {
        let mut sprite = player();
        assert_eq!(sprite.activate_powerup(Powerup::Token), SoundCue::Token);
        sprite.add_token();
        assert_eq!(sprite.get_tokens(), 2);
    }

    #[test]
    fn test_immobilization_wears_off() {
        let mut sprite = player();
        sprite.immobilize();
        assert!(sprite.is_immobilized());

        for _ in 0..20 {
            sprite.tick(0.2);
        }
        assert!(!sprite.is_immobilized());
    }

    #[test]
    fn test_animation_advances() {
        let mut sprite = player();
        sprite.set_state(AnimState::PlayerRunningRight);
        sprite.tick(0.3);
        assert_eq!(sprite.current_frame().1, 1);
        sprite.tick(0.3);
        sprite.tick(0.3);
        assert_eq!(sprite.current_frame().1, 0);

        sprite.set_state(AnimState::PlayerIdleRight);
        sprite.tick(1.0);
        assert_eq!(sprite.current_frame().1, 0);
    }
}
