//! Command dispatch tests — the serialized input surface.

use life_clicker_core::{
    command::{CommandOutcome, PlayerCommand},
    engine::EconomyEngine,
    error::GameError,
    state::EconomyState,
    upgrade::UpgradeKind,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn parse(json: &str) -> PlayerCommand {
    serde_json::from_str(json).expect("valid command")
}

#[test]
fn wire_commands_parse() {
    assert_eq!(parse(r#"{"cmd":"click"}"#), PlayerCommand::Click);
    assert_eq!(
        parse(r#"{"cmd":"purchase","kind":"auto-drip-2"}"#),
        PlayerCommand::Purchase { kind: UpgradeKind::AutoDrip2 }
    );
    assert_eq!(
        parse(r#"{"cmd":"purchase","kind":"click1"}"#),
        PlayerCommand::Purchase { kind: UpgradeKind::Click1 }
    );
    assert_eq!(
        parse(r#"{"cmd":"set_autosave_interval","ms":60000}"#),
        PlayerCommand::SetAutosaveInterval { ms: 60_000 }
    );
    assert!(serde_json::from_str::<PlayerCommand>(r#"{"cmd":"purchase","kind":"sea-1"}"#).is_err());
}

#[test]
fn commands_dispatch_to_operations() {
    init_logging();
    let mut engine = EconomyEngine::build_test_with_state(EconomyState {
        life: 74,
        ..EconomyState::default()
    })
    .unwrap();

    assert_eq!(engine.apply(PlayerCommand::Click).unwrap(), CommandOutcome::Credited(1));
    assert_eq!(
        engine.apply(PlayerCommand::Purchase { kind: UpgradeKind::Click1 }).unwrap(),
        CommandOutcome::Purchased(true)
    );
    assert_eq!(engine.apply(PlayerCommand::Click).unwrap(), CommandOutcome::Credited(2));
    assert_eq!(
        engine.apply(PlayerCommand::Purchase { kind: UpgradeKind::Click2 }).unwrap(),
        CommandOutcome::Purchased(false)
    );
    assert_eq!(
        engine.apply(PlayerCommand::SetSound { enabled: true }).unwrap(),
        CommandOutcome::Done
    );
    assert_eq!(engine.apply(PlayerCommand::Tick).unwrap(), CommandOutcome::Credited(0));

    let state = engine.state();
    assert_eq!((state.life, state.per_click), (2, 2));
    assert!(state.sound);
}

#[test]
fn invalid_settings_command_is_an_error() {
    let mut engine = EconomyEngine::build_test().unwrap();
    let result = engine.apply(PlayerCommand::SetAutosaveInterval { ms: 0 });
    assert!(matches!(result, Err(GameError::InvalidAutosaveInterval)));
}

#[test]
fn reset_command_returns_to_defaults() {
    let mut engine = EconomyEngine::build_test_with_state(EconomyState {
        life: 150,
        lakes: 4,
        per_second: 3,
        ..EconomyState::default()
    })
    .unwrap();

    engine.apply(PlayerCommand::Advance { elapsed_ms: 2_000 }).unwrap();
    engine.apply(PlayerCommand::Reset).unwrap();
    assert_eq!(engine.state(), &EconomyState::default());
}
