//! Property tests for config parsing and the registration state machine.

use std::collections::HashMap;

use proptest::prelude::*;

use tokebi_core::config::defaults;
use tokebi_core::constants::PLACEHOLDER_API_KEY;
use tokebi_core::errors::ConfigError;
use tokebi_core::{GameRegistration, TokebiConfig};

fn params(tracking: &str, debug: &str) -> HashMap<String, String> {
    HashMap::from([
        (defaults::PARAM_API_KEY.to_string(), "live_key".to_string()),
        (defaults::PARAM_TRACKING_ENABLED.to_string(), tracking.to_string()),
        (defaults::PARAM_DEBUG_MODE.to_string(), debug.to_string()),
    ])
}

// =============================================================================
// Plugin parameters: a flag is on only for the exact string "true"
// =============================================================================
proptest! {
    #[test]
    fn plugin_flags_require_exact_true(tracking in ".{0,8}", debug in "(true|TRUE|True| true|1|false|)") {
        let config = TokebiConfig::from_plugin_parameters(&params(&tracking, &debug));
        prop_assert_eq!(config.tracking_enabled, tracking == "true");
        prop_assert_eq!(config.debug_mode, debug == "true");
    }
}

// =============================================================================
// API key validation
// =============================================================================
proptest! {
    #[test]
    fn blank_keys_are_missing(key in "[ \t\n]{0,6}") {
        let config = TokebiConfig { api_key: key, ..TokebiConfig::default() };
        prop_assert!(matches!(config.validate_api_key(), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn real_keys_are_accepted(key in "[A-Za-z0-9_-]{1,40}") {
        prop_assume!(key != PLACEHOLDER_API_KEY);
        let config = TokebiConfig { api_key: key, ..TokebiConfig::default() };
        prop_assert!(config.validate_api_key().is_ok());
    }

    #[test]
    fn padded_placeholder_is_still_rejected(pad in "[ \t]{0,3}") {
        let config = TokebiConfig {
            api_key: format!("{pad}{PLACEHOLDER_API_KEY}{pad}"),
            ..TokebiConfig::default()
        };
        let is_placeholder = matches!(
            config.validate_api_key(),
            Err(ConfigError::PlaceholderApiKey { .. })
        );
        prop_assert!(is_placeholder);
    }
}

// =============================================================================
// Environment overrides: unparseable booleans leave the value alone
// =============================================================================
proptest! {
    #[test]
    fn unparseable_boolean_overrides_are_ignored(raw in "[a-z0-9]{0,6}") {
        prop_assume!(raw != "true" && raw != "false");
        let mut config = TokebiConfig::default();
        config.apply_overrides_from(|name| (name == defaults::ENV_TRACKING_ENABLED).then(|| raw.clone()));
        prop_assert!(config.tracking_enabled);
    }
}

// =============================================================================
// Registration opens exactly once, whatever ids arrive afterwards
// =============================================================================
proptest! {
    #[test]
    fn first_open_wins(ids in prop::collection::vec("[a-z0-9_]{1,12}", 1..6)) {
        let mut registration = GameRegistration::pending();
        let outcomes: Vec<bool> = ids.iter().map(|id| registration.open(id.clone())).collect();

        prop_assert!(outcomes[0]);
        prop_assert!(outcomes[1..].iter().all(|opened| !opened));
        prop_assert_eq!(&registration.game_id, &ids[0]);
        prop_assert!(registration.is_initialized);
    }
}
