use tokebi_core::{Environment, EventRecord, FlatMap, GameRegistration, PlayerId};

#[test]
fn pending_registration_uses_temp_placeholder() {
    let reg = GameRegistration::pending();
    assert!(reg.game_id.starts_with("game_temp_"));
    assert!(!reg.is_initialized);
    assert!(!reg.is_fallback());
}

#[test]
fn registration_opens_exactly_once() {
    let mut reg = GameRegistration::pending();
    assert!(reg.open("game_42".into()));
    assert!(reg.is_initialized);
    assert_eq!(reg.game_id, "game_42");

    assert!(!reg.open("game_other".into()));
    assert_eq!(reg.game_id, "game_42", "game id never re-assigned");
    assert!(reg.is_initialized);
}

#[test]
fn fallback_ids_are_recognised() {
    let mut reg = GameRegistration::pending();
    reg.open(GameRegistration::fallback_game_id());
    assert!(reg.is_fallback());
}

#[test]
fn player_id_is_transparent_on_the_wire() {
    let id = PlayerId::new("player_1700000000_42");
    assert!(id.is_generated());
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"player_1700000000_42\"");
    assert!(!PlayerId::new("legacy-uuid").is_generated());
}

#[test]
fn event_record_serializes_with_camel_case_wire_names() {
    let mut payload = FlatMap::new();
    payload.insert("level".into(), 3.into());

    let record = EventRecord {
        event_type: "level_up".into(),
        payload,
        game_id: "game_42".into(),
        player_id: "player_1_2".into(),
        platform: "rpgmaker-mv".into(),
        environment: Environment::Production,
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "eventType": "level_up",
            "payload": {"level": 3},
            "gameId": "game_42",
            "playerId": "player_1_2",
            "platform": "rpgmaker-mv",
            "environment": "production"
        })
    );
}
