use approx::assert_abs_diff_eq;
use platformer_physics::bodies::Contact;
use platformer_physics::core::{SoundCue, SublevelId};
use platformer_physics::gameplay::{
    add_borders, add_enemy, add_fireball, add_platform_corners, add_player, add_token, apply_action,
    wire_interactions, AnimState, Koopa, PlayerAction, PowerMode, Powerup, Sprite, Subrole, Tunnel,
};
use platformer_physics::{BodyHandle, Marker, Role, Scene, SceneConfig, TransitionRequest, Vector2};

const DT: f64 = 1e-3;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sprite(scene: &Scene, handle: BodyHandle) -> &Sprite {
    scene.get_body(handle).unwrap().get_info::<Sprite>().unwrap()
}

fn sprite_mut(scene: &mut Scene, handle: BodyHandle) -> &mut Sprite {
    scene.get_body_mut(handle).unwrap().get_info_mut::<Sprite>().unwrap()
}

fn run(scene: &mut Scene, ticks: usize) {
    for _ in 0..ticks {
        scene.tick(DT);
    }
}

fn count_cue(scene: &Scene, cue: SoundCue) -> usize {
    scene.get_events().sound_cues().into_iter().filter(|c| *c == cue).count()
}

fn add_floor(scene: &mut Scene) -> BodyHandle {
    add_platform_corners(scene, Vector2::new(-100.0, -20.0), Vector2::new(100.0, 0.0), Subrole::RegularBlock).unwrap()
}

#[test]
fn test_token_is_collected_once() {
    init_logging();
    let mut scene = Scene::new();
    let player = add_player(&mut scene, Vector2::ZERO, Subrole::Player1).unwrap();
    let token = add_token(&mut scene, Vector2::new(5.0, 0.0)).unwrap();
    wire_interactions(&mut scene).unwrap();
    assert_eq!(scene.interaction_count(), 3);

    scene.tick(DT);

    assert_eq!(sprite(&scene, player).get_tokens(), 1);
    assert_eq!(scene.role_len(Role::Token), 0);
    assert!(scene.get_body(token).is_err());
    assert_eq!(scene.get_events().sound_cues(), vec![SoundCue::Token]);
    assert_eq!(scene.interaction_count(), 2);

    run(&mut scene, 10);
    assert_eq!(sprite(&scene, player).get_tokens(), 1);
}

#[test]
fn test_stomp_squashes_goomba() {
    init_logging();
    let mut scene = Scene::new();
    let player = add_player(&mut scene, Vector2::new(0.0, 30.0), Subrole::Player1).unwrap();
    let goomba = add_enemy(&mut scene, Vector2::ZERO, Subrole::Goomba).unwrap();
    wire_interactions(&mut scene).unwrap();
    scene.get_body_mut(goomba).unwrap().set_velocity(Vector2::new(0.0, 200.0));

    run(&mut scene, 100);
    assert_eq!(sprite(&scene, player).get_kills(), 1);
    assert_eq!(sprite(&scene, goomba).get_state(), AnimState::GoombaSquashed);
    assert_eq!(scene.get_body(goomba).unwrap().get_velocity(), Vector2::ZERO);

    run(&mut scene, 300);
    let stats = sprite(&scene, player);
    assert_eq!(stats.get_kills(), 1);
    assert_eq!(stats.get_health(), 3);
    assert_eq!(scene.role_len(Role::Enemy), 0);
}

#[test]
fn test_side_hit_hurts_player() {
    let mut scene = Scene::new();
    let player = add_player(&mut scene, Vector2::ZERO, Subrole::Player1).unwrap();
    let goomba = add_enemy(&mut scene, Vector2::new(30.0, 0.0), Subrole::Goomba).unwrap();
    wire_interactions(&mut scene).unwrap();
    assert_eq!(scene.get_body(goomba).unwrap().get_velocity(), Vector2::new(-20.0, 0.0));

    run(&mut scene, 450);

    assert_eq!(sprite(&scene, player).get_health(), 2);
    assert_eq!(sprite(&scene, player).get_kills(), 0);
    assert!(sprite(&scene, player).is_immobilized());
    assert!(scene.get_body(goomba).unwrap().get_velocity().x > 0.0);
    assert!(scene.get_body(player).unwrap().get_velocity().x < 0.0);
    assert_eq!(scene.role_len(Role::Enemy), 1);
}

#[test]
fn test_star_mode_kills_on_touch_and_expires() {
    let mut config = SceneConfig::default();
    config.star_ticks = 5;
    let mut scene = Scene::with_config(config);
    let player = add_player(&mut scene, Vector2::ZERO, Subrole::Player1).unwrap();
    add_enemy(&mut scene, Vector2::new(20.0, 0.0), Subrole::Goomba).unwrap();
    wire_interactions(&mut scene).unwrap();
    sprite_mut(&mut scene, player).activate_powerup(Powerup::Star);

    scene.tick(DT);
    assert_eq!(scene.role_len(Role::Enemy), 0);
    assert_eq!(sprite(&scene, player).get_health(), 3);
    assert!(sprite(&scene, player).is_star());

    run(&mut scene, 4);
    assert_eq!(sprite(&scene, player).get_power_mode(), PowerMode::Normal);
}

#[test]
fn test_player_lands_on_regular_block() {
    init_logging();
    let mut scene = Scene::new();
    add_floor(&mut scene);
    let player = add_player(&mut scene, Vector2::new(0.0, 20.0), Subrole::Player1).unwrap();
    wire_interactions(&mut scene).unwrap();

    run(&mut scene, 2000);

    let body = scene.get_body(player).unwrap();
    assert!(body.get_contact().contains(Contact::BELOW));
    assert_eq!(body.get_velocity().y, 0.0);
    let min_overlap = scene.get_config().min_overlap;
    assert_abs_diff_eq!(body.get_centroid().y, 14.0 - min_overlap, epsilon = 1e-6);
}

#[test]
fn test_enemy_turns_at_wall() {
    let mut scene = Scene::new();
    add_floor(&mut scene);
    add_platform_corners(&mut scene, Vector2::new(-60.0, 0.0), Vector2::new(-50.0, 100.0), Subrole::RegularBlock).unwrap();
    let goomba = add_enemy(&mut scene, Vector2::new(-35.0, 10.0), Subrole::Goomba).unwrap();
    wire_interactions(&mut scene).unwrap();

    run(&mut scene, 400);

    let body = scene.get_body(goomba).unwrap();
    assert!(body.get_velocity().x > 0.0);
    assert!(body.get_centroid().x > -40.0);
    assert!(body.get_contact().contains(Contact::BELOW));
}

#[test]
fn test_patrol_turns_around() {
    let mut config = SceneConfig::default();
    config.patrol_switch_ticks = 10;
    let mut scene = Scene::with_config(config);
    let goomba = add_enemy(&mut scene, Vector2::ZERO, Subrole::Goomba).unwrap();
    wire_interactions(&mut scene).unwrap();

    run(&mut scene, 10);
    assert_eq!(scene.get_body(goomba).unwrap().get_velocity().x, -20.0);
    scene.tick(DT);
    assert_eq!(scene.get_body(goomba).unwrap().get_velocity().x, 20.0);
}

#[test]
fn test_item_block_pays_out_once() {
    init_logging();
    let mut scene = Scene::new();
    let block = add_platform_corners(
        &mut scene,
        Vector2::new(-20.0, 50.0),
        Vector2::new(20.0, 70.0),
        Subrole::ItemBlock(Powerup::Health),
    )
    .unwrap();
    assert_eq!(scene.role_len(Role::Platform), 2);

    let player = add_player(&mut scene, Vector2::new(0.0, 30.0), Subrole::Player1).unwrap();
    wire_interactions(&mut scene).unwrap();
    scene.get_body_mut(player).unwrap().set_velocity(Vector2::new(0.0, 300.0));

    run(&mut scene, 500);

    assert_eq!(sprite(&scene, player).get_health(), 4);
    assert_eq!(count_cue(&scene, SoundCue::Powerup), 1);
    assert_eq!(sprite(&scene, block).get_state(), AnimState::BlockHealth);

    // The backing block stopped the player rising through the item block
    assert!(scene.get_body(player).unwrap().get_centroid().y < 50.0);
}

#[test]
fn test_tunnel_requests_transition() {
    init_logging();
    let exit = Vector2::new(100.0, 40.0);
    let tunnel = Tunnel::new(false, false, true, false, SublevelId(3), exit);

    let mut scene = Scene::new();
    add_platform_corners(&mut scene, Vector2::new(-20.0, 50.0), Vector2::new(20.0, 70.0), Subrole::TunnelBlock(tunnel))
        .unwrap();
    let player = add_player(&mut scene, Vector2::new(0.0, 30.0), Subrole::Player1).unwrap();
    wire_interactions(&mut scene).unwrap();
    scene.get_body_mut(player).unwrap().set_velocity(Vector2::new(0.0, 300.0));

    let mut request = None;
    for _ in 0..200 {
        request = scene.tick(DT);
        if request.is_some() {
            break;
        }
    }

    assert_eq!(request, Some(TransitionRequest { sublevel: SublevelId(3), exit }));
    assert_eq!(sprite(&scene, player).get_exit(), Some(exit));
}

#[test]
fn test_tunnel_top_needs_groundpound() {
    let tunnel = Tunnel::new(true, false, false, false, SublevelId(1), Vector2::ZERO);

    let mut scene = Scene::new();
    add_platform_corners(&mut scene, Vector2::new(-20.0, -20.0), Vector2::new(20.0, 0.0), Subrole::TunnelBlock(tunnel))
        .unwrap();
    let player = add_player(&mut scene, Vector2::new(0.0, 14.5), Subrole::Player1).unwrap();
    wire_interactions(&mut scene).unwrap();

    for _ in 0..300 {
        assert_eq!(scene.tick(DT), None);
    }
    assert!(scene.get_body(player).unwrap().get_contact().contains(Contact::BELOW));

    sprite_mut(&mut scene, player).set_state(AnimState::PlayerGroundpoundRight);
    assert!(scene.tick(DT).is_some());
}

#[test]
fn test_death_block_kills() {
    let mut scene = Scene::new();
    add_platform_corners(&mut scene, Vector2::new(-100.0, -20.0), Vector2::new(100.0, 0.0), Subrole::DeathBlock).unwrap();
    let player = add_player(&mut scene, Vector2::new(0.0, 15.0), Subrole::Player1).unwrap();
    add_enemy(&mut scene, Vector2::new(50.0, 11.0), Subrole::Goomba).unwrap();
    wire_interactions(&mut scene).unwrap();

    run(&mut scene, 300);

    assert_eq!(sprite(&scene, player).get_health(), 0);
    assert_eq!(count_cue(&scene, SoundCue::Death), 1);
    assert_eq!(scene.role_len(Role::Enemy), 0);
    assert_eq!(scene.role_len(Role::Player), 1);
}

#[test]
fn test_fireball_burns_enemy_and_expires() {
    init_logging();
    let mut scene = Scene::new();
    let player = add_player(&mut scene, Vector2::ZERO, Subrole::Player1).unwrap();
    let goomba = add_enemy(&mut scene, Vector2::new(45.0, 0.0), Subrole::Goomba).unwrap();
    wire_interactions(&mut scene).unwrap();

    // Without fire mode the throw is ignored
    apply_action(&mut scene, player, PlayerAction::Fireball).unwrap();
    assert_eq!(scene.role_len(Role::Enemy), 1);

    sprite_mut(&mut scene, player).set_power_mode(PowerMode::Fire);
    apply_action(&mut scene, player, PlayerAction::Fireball).unwrap();
    assert_eq!(scene.role_len(Role::Enemy), 2);
    assert_eq!(count_cue(&scene, SoundCue::Fireball), 1);

    let fireball = scene.body_at(Role::Enemy, 1);
    assert_eq!(sprite(&scene, fireball).get_subrole(), Subrole::Fireball);
    assert_abs_diff_eq!(scene.get_body(fireball).unwrap().get_centroid(), Vector2::new(18.5, 0.0), epsilon = 1e-9);
    assert_eq!(scene.get_body(fireball).unwrap().get_velocity(), Vector2::new(40.0, 0.0));

    run(&mut scene, 300);
    assert!(scene.get_body(goomba).is_err());
    assert_eq!(scene.bodies_in(Role::Enemy), &[fireball]);

    run(&mut scene, 300);
    assert_eq!(scene.role_len(Role::Enemy), 0);
    assert_eq!(scene.interactions_for(player), 2);
}

#[test]
fn test_shell_knocks_out_enemy() {
    let mut scene = Scene::new();
    let koopa = add_enemy(&mut scene, Vector2::ZERO, Subrole::Koopa).unwrap();
    let goomba = add_enemy(&mut scene, Vector2::new(20.0, 0.0), Subrole::Goomba).unwrap();
    wire_interactions(&mut scene).unwrap();

    // A walking koopa leaves other enemies alone
    scene.tick(DT);
    assert!(scene.get_body(goomba).is_ok());

    sprite_mut(&mut scene, koopa).set_state(AnimState::KoopaShell);
    scene.tick(DT);
    assert!(scene.get_body(goomba).is_err());
    assert_eq!(scene.bodies_in(Role::Enemy), &[koopa]);
}

#[test]
fn test_stomp_pulls_koopa_into_shell() {
    let mut scene = Scene::new();
    let player = add_player(&mut scene, Vector2::new(0.0, 40.0), Subrole::Player1).unwrap();
    let koopa = add_enemy(&mut scene, Vector2::ZERO, Subrole::Koopa).unwrap();
    wire_interactions(&mut scene).unwrap();
    scene.get_body_mut(player).unwrap().set_velocity(Vector2::new(0.0, -100.0));

    scene.tick(DT);
    assert_eq!(sprite(&scene, koopa).get_state(), AnimState::KoopaRight);

    run(&mut scene, 150);

    let hits = scene
        .interactions()
        .find_map(|i| i.behavior_as::<Koopa>())
        .map(Koopa::get_hits)
        .unwrap();
    assert_eq!(hits, 1);
    assert_eq!(sprite(&scene, koopa).get_state(), AnimState::KoopaShell);
    assert_eq!(scene.get_body(koopa).unwrap().get_velocity(), Vector2::ZERO);
    assert_eq!(sprite(&scene, player).get_health(), 3);
}

#[test]
fn test_jump_needs_ground() {
    let mut scene = Scene::new();
    add_floor(&mut scene);
    let player = add_player(&mut scene, Vector2::new(0.0, 14.5), Subrole::Player1).unwrap();
    wire_interactions(&mut scene).unwrap();

    run(&mut scene, 300);
    assert!(scene.get_body(player).unwrap().get_contact().contains(Contact::BELOW));

    apply_action(&mut scene, player, PlayerAction::Jump).unwrap();
    assert_eq!(sprite(&scene, player).get_state(), AnimState::PlayerJumpingLeft);
    scene.tick(DT);
    assert_abs_diff_eq!(scene.get_body(player).unwrap().get_velocity().y, 200.0, epsilon = 1e-9);
    assert!(scene.get_body(player).unwrap().get_contact().is_empty());

    // No double jumps
    apply_action(&mut scene, player, PlayerAction::Jump).unwrap();
    assert_eq!(count_cue(&scene, SoundCue::Jump), 1);
}

#[test]
fn test_running_and_animation() {
    let mut scene = Scene::new();
    add_floor(&mut scene);
    let player = add_player(&mut scene, Vector2::new(0.0, 14.5), Subrole::Player1).unwrap();
    wire_interactions(&mut scene).unwrap();
    run(&mut scene, 300);

    apply_action(&mut scene, player, PlayerAction::MoveRight).unwrap();
    assert_eq!(scene.get_body(player).unwrap().get_velocity().x, 800.0);
    scene.tick(DT);
    assert_eq!(sprite(&scene, player).get_state(), AnimState::PlayerRunningRight);
    assert_eq!(scene.get_body(player).unwrap().get_velocity().x, scene.get_config().velocity_limit.x);

    apply_action(&mut scene, player, PlayerAction::Release).unwrap();
    scene.tick(DT);
    assert_eq!(sprite(&scene, player).get_state(), AnimState::PlayerIdleRight);

    sprite_mut(&mut scene, player).immobilize();
    apply_action(&mut scene, player, PlayerAction::MoveLeft).unwrap();
    assert_eq!(scene.get_body(player).unwrap().get_velocity().x, 0.0);
}

#[test]
fn test_groundpound_in_the_air() {
    let mut scene = Scene::new();
    let player = add_player(&mut scene, Vector2::new(0.0, 100.0), Subrole::Player1).unwrap();
    wire_interactions(&mut scene).unwrap();

    apply_action(&mut scene, player, PlayerAction::GroundPound).unwrap();
    assert_eq!(sprite(&scene, player).get_state(), AnimState::PlayerGroundpoundRight);
    assert!(sprite(&scene, player).is_immobilized());

    scene.tick(DT);
    assert_abs_diff_eq!(scene.get_body(player).unwrap().get_velocity().y, -100.0, epsilon = 1e-9);
}

#[test]
fn test_borders_are_marked() {
    let mut scene = Scene::new();
    add_borders(&mut scene, Vector2::new(400.0, 300.0)).unwrap();

    assert_eq!(scene.role_len(Role::Platform), 4);
    let floor = scene.get_marked(Marker::Floor).unwrap();
    assert_eq!(sprite(&scene, floor).get_subrole(), Subrole::DeathBlock);
    assert_abs_diff_eq!(scene.get_body(floor).unwrap().get_centroid(), Vector2::new(200.0, -15.0), epsilon = 1e-9);

    for marker in [Marker::Roof, Marker::LeftWall, Marker::RightWall] {
        let wall = scene.get_marked(marker).unwrap();
        assert_eq!(sprite(&scene, wall).get_subrole(), Subrole::RegularBlock);
    }
}

#[test]
fn test_fireball_spawned_directly_binds_to_enemies() {
    let mut scene = Scene::new();
    add_floor(&mut scene);
    let goomba = add_enemy(&mut scene, Vector2::new(50.0, 10.0), Subrole::Goomba).unwrap();
    wire_interactions(&mut scene).unwrap();
    let before = scene.interactions_for(goomba);

    let fireball = add_fireball(&mut scene, Vector2::new(0.0, 20.0), Vector2::new(40.0, 0.0)).unwrap();

    assert_eq!(scene.interactions_for(goomba), before + 1);
    // Burn, lifetime, gravity and one block behavior
    assert_eq!(scene.interactions_for(fireball), 4);
    assert_eq!(scene.get_role(fireball), Some(Role::Enemy));
}
