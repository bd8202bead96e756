//! Property-based tests for the attribute resolver using proptest.
//!
//! Properties:
//! 1. Precedence: the highest layer that sets a key decides its value
//! 2. Class accumulation: every class token from every layer survives, once
//! 3. Determinism: resolving the same layers twice gives identical output
//! 4. Uniqueness: no attribute name appears twice in the serialized output

use bootlets_core::{resolve, AttrLayers, AttrMap, Value};
use proptest::prelude::*;
use std::collections::HashSet;

const KEYS: &[&str] = &["id", "role", "href", "title", "type", "aria_label"];

fn arb_layer() -> impl Strategy<Value = AttrMap> {
    prop::collection::vec((prop::sample::select(KEYS), "[a-z0-9]{1,8}"), 0..=4).prop_map(
        |pairs| {
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), Value::from(v)))
                .collect()
        },
    )
}

fn arb_classes() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 0..=3)
}

fn arb_layers() -> impl Strategy<Value = AttrLayers> {
    (arb_layer(), arb_layer(), arb_layer(), arb_layer()).prop_map(
        |(defaults, positional, keywords, derived)| AttrLayers {
            defaults,
            positional,
            keywords,
            derived,
        },
    )
}

proptest! {
    #[test]
    fn prop_highest_layer_wins(layers in arb_layers()) {
        let attrs = resolve("prop", &layers).unwrap();
        for key in KEYS {
            let expected = [&layers.derived, &layers.keywords, &layers.positional, &layers.defaults]
                .iter()
                .find_map(|layer| layer.get(*key))
                .map(|v| v.to_string());
            let wire = key.replace('_', "-");
            prop_assert_eq!(attrs.get(&wire).map(str::to_string), expected);
        }
    }

    #[test]
    fn prop_class_tokens_accumulate(
        defaults in arb_classes(),
        keywords in arb_classes(),
        derived in arb_classes(),
    ) {
        let mut layers = AttrLayers::new();
        layers.defaults.insert("class".to_string(), Value::from(defaults.clone()));
        layers.keywords.insert("class_".to_string(), Value::from(keywords.join(" ")));
        layers.derived.insert("class".to_string(), Value::from(derived.clone()));

        let attrs = resolve("prop", &layers).unwrap();
        let all: Vec<&String> = defaults.iter().chain(&keywords).chain(&derived).collect();

        match attrs.class() {
            None => prop_assert!(all.is_empty()),
            Some(class) => {
                let tokens: Vec<&str> = class.split(' ').collect();
                let unique: HashSet<&str> = tokens.iter().copied().collect();
                prop_assert_eq!(unique.len(), tokens.len());
                for token in all {
                    prop_assert!(unique.contains(token.as_str()));
                }
            }
        }
    }

    #[test]
    fn prop_resolve_is_deterministic(layers in arb_layers()) {
        let first = resolve("prop", &layers).unwrap().to_string();
        let second = resolve("prop", &layers).unwrap().to_string();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_keys_are_unique(layers in arb_layers()) {
        let attrs = resolve("prop", &layers).unwrap();
        let keys: Vec<&str> = attrs.keys().collect();
        let unique: HashSet<&str> = keys.iter().copied().collect();
        prop_assert_eq!(keys.len(), unique.len());
    }
}

#[test]
fn test_documented_precedence_example() {
    let mut layers = AttrLayers::new();
    layers.defaults.insert("a".to_string(), Value::from(1));
    layers.positional.insert("a".to_string(), Value::from(2));
    layers.keywords.insert("a".to_string(), Value::from(3));

    assert_eq!(resolve("example", &layers).unwrap().get("a"), Some("3"));
}
