//! Multi-frame scenarios driven through recordings, the way the host runs them.

use padarena_core::*;

fn xbox_solo() -> Recording {
    Recording::new(
        default_config(),
        [Some(XBOX.to_string()), None, None, None],
    )
}

fn idle_pads() -> [PadState; N_PLAYERS] {
    [PadState::idle(), NULL_PAD, NULL_PAD, NULL_PAD]
}

#[test]
fn walk_to_center_then_fire_right() {
    let mut rec = xbox_solo();
    // 120 frames of full right + full "up" stick: (600, 600)
    for _ in 0..120 {
        rec.push([PadState::idle().with_stick(1.0, 1.0), NULL_PAD, NULL_PAD, NULL_PAD]);
    }
    // Back off vertically to (600, 300) so the bullet lane is clear
    for _ in 0..60 {
        rec.push([PadState::idle().with_stick(0.0, -1.0), NULL_PAD, NULL_PAD, NULL_PAD]);
    }
    let walked = rec.replay();
    let p0 = &walked.players[0];
    assert_eq!((p0.hitbox.x, p0.hitbox.y), (600.0, 300.0));
    assert_eq!(p0.facing, Facing::Down);

    // Face right again without moving far
    rec.push([PadState::idle().with_stick(0.5, 0.0), NULL_PAD, NULL_PAD, NULL_PAD]);
    rec.push([
        PadState::idle().with_button(PadButton::RightFaceDown),
        NULL_PAD,
        NULL_PAD,
        NULL_PAD,
    ]);
    let fired = rec.replay();
    let p0 = &fired.players[0];
    assert_eq!(p0.facing, Facing::Right);
    assert!(p0.shot);
    assert!(p0.bullet.active);
    assert_eq!(p0.bullet.age, 1);
    assert_eq!(p0.bullet.hitbox.x, p0.hitbox.x + 70.0);
    assert_eq!(p0.bullet.hitbox.y, p0.hitbox.y);
    assert_eq!(p0.bullet.hitbox.width, 32.0);
}

#[test]
fn bullet_fired_at_origin_dies_on_first_frame() {
    // At (0, 0) every bullet starts touching the top edge
    let mut rec = xbox_solo();
    rec.push([
        PadState::idle().with_button(PadButton::RightFaceDown),
        NULL_PAD,
        NULL_PAD,
        NULL_PAD,
    ]);
    let state = rec.replay();
    let p0 = &state.players[0];
    assert!(p0.shot);
    assert!(!p0.bullet.active);
    assert_eq!(p0.bullet.age, 0);
    assert_eq!(p0.bullet.hitbox, Rect::new(0.0, 0.0, 32.0, 32.0));
}

#[test]
fn idle_session_draws_only_ready_players() {
    let mut rec = Recording::new(
        default_config(),
        [
            Some(XBOX.to_string()),
            Some(PS3.to_string()),
            Some(NINTENDO.to_string()),
            Some(XBOX_LEGACY.to_string()),
        ],
    );
    for _ in 0..10 {
        rec.push([PadState::idle(), NULL_PAD, PadState::idle(), NULL_PAD]);
    }

    let mut draws = Vec::new();
    let final_state = rec.replay_with(|state| {
        let mut canvas = DrawList::new();
        draw_frame(state, &mut canvas);
        draws.push(canvas);
    });

    assert_eq!(draws.len(), 10);
    for canvas in &draws {
        let colors: Vec<Color> = canvas.commands.iter().map(|c| c.color).collect();
        assert_eq!(colors, vec![Color::Red, Color::Yellow]);
    }
    for player in &final_state.players {
        assert_eq!(player.hitbox, Rect::new(0.0, 0.0, 64.0, 64.0));
        assert_eq!(player.facing, Facing::for_player(player.id));
    }
}

#[test]
fn recording_survives_disk_round_trip() {
    let mut rec = xbox_solo();
    for frame in 0..90u32 {
        let x = if frame % 30 < 15 { 1.0 } else { -0.8 };
        let mut pad = PadState::idle().with_stick(x, 0.25);
        if frame % 7 == 0 {
            pad = pad.with_button(PadButton::RightFaceDown);
        }
        rec.push([pad, NULL_PAD, NULL_PAD, NULL_PAD]);
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    rec.save(&path).unwrap();
    let loaded = Recording::load(&path).unwrap();

    assert_eq!(hash_frames(&loaded.frames), hash_frames(&rec.frames));
    assert_eq!(hash_state(&loaded.replay()), hash_state(&rec.replay()));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Recording::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, RecordingError::Io(_)));
}

#[test]
fn unplugged_pad_keeps_simulating() {
    let mut rec = xbox_solo();
    rec.push(idle_pads());
    rec.push([
        PadState::idle().with_button(PadButton::RightFaceDown),
        NULL_PAD,
        NULL_PAD,
        NULL_PAD,
    ]);
    for _ in 0..3 {
        rec.push([NULL_PAD; N_PLAYERS]);
    }
    let state = rec.replay();
    let p0 = &state.players[0];
    assert!(!p0.ready);
    // Cooldown kept counting while the pad was gone
    assert!(p0.shot);
    assert_eq!(p0.shoot_timer, 3);
}
