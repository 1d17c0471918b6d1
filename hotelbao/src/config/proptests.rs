//! Property-based tests for configuration merging and validation.

use proptest::prelude::*;
use std::path::PathBuf;

use super::{Config, ConfigMerger, ConfigSource, ConfigValidator, OutputFormat};

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Table),
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
        Just(OutputFormat::Tsv),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(0u64..=600),
        prop::option::of("[A-Z]{1,3}\\$?"),
        prop::option::of(prop_oneof![
            Just("%d/%m/%Y".to_string()),
            Just("%Y-%m-%d".to_string()),
            Just("%e %b %Y".to_string()),
        ]),
        prop::option::of(output_format_strategy()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(
            |(maximum_lock_wait_seconds, currency_symbol, date_format, output_format, disable_autoinit)| {
                Config {
                    maximum_lock_wait_seconds,
                    currency_symbol,
                    date_format,
                    output_format,
                    disable_autoinit,
                }
            },
        )
}

fn last_set<T: Clone>(layers: &[Config], field: impl Fn(&Config) -> Option<T>) -> Option<T> {
    layers.iter().rev().find_map(field)
}

proptest! {
    // Every field of the merged config comes from the highest layer that sets it
    #[test]
    fn merge_takes_last_set_value(layers in prop::collection::vec(config_strategy(), 0..6)) {
        let sources = layers
            .iter()
            .enumerate()
            .map(|(i, config)| ConfigSource {
                path: PathBuf::from(format!("/layer/{i}")),
                precedence: u8::try_from(i).unwrap(),
                config: config.clone(),
            })
            .collect();
        let merged = ConfigMerger::merge(sources);

        prop_assert_eq!(merged.maximum_lock_wait_seconds, last_set(&layers, |c| c.maximum_lock_wait_seconds));
        prop_assert_eq!(merged.currency_symbol, last_set(&layers, |c| c.currency_symbol.clone()));
        prop_assert_eq!(merged.date_format, last_set(&layers, |c| c.date_format.clone()));
        prop_assert_eq!(merged.output_format, last_set(&layers, |c| c.output_format));
        prop_assert_eq!(merged.disable_autoinit, last_set(&layers, |c| c.disable_autoinit));
    }

    // Merging a config into itself changes nothing
    #[test]
    fn merge_is_idempotent(config in config_strategy()) {
        let mut target = config.clone();
        ConfigMerger::merge_into(&mut target, &config);
        prop_assert_eq!(target, config);
    }

    // Generated configs are always valid, and YAML round trips preserve them
    #[test]
    fn generated_configs_validate(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
