//! Properties of capability resolution over generated capability lists.
#![cfg(not(target_arch = "wasm32"))]

use mytoken_capability::{Capabilities, Capability, resolve, tighten};
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(prop::sample::select(vec!["a", "b", "ab", "AT"]), 1..4),
    )
        .prop_map(|(read_only, segments)| {
            let path = segments.join(":");
            if read_only { format!("read@{path}") } else { path }
        })
}

fn identifiers() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(identifier(), 0..12)
}

fn is_subsequence(needle: &[String], haystack: &[String]) -> bool {
    let mut haystack = haystack.iter();
    needle
        .iter()
        .all(|wanted| haystack.any(|candidate| candidate == wanted))
}

proptest! {
    #[test]
    fn it_returns_a_subsequence_of_the_input(requested in identifiers()) {
        let resolved = resolve(&requested);
        prop_assert!(is_subsequence(&resolved, &requested));
    }

    #[test]
    fn it_is_idempotent(requested in identifiers()) {
        let resolved = resolve(&requested);
        prop_assert_eq!(resolve(&resolved), resolved);
    }

    #[test]
    fn it_leaves_no_covered_entries(requested in identifiers()) {
        let resolved: Capabilities = resolve(&requested).into_iter().collect();
        for (index, capability) in resolved.iter().enumerate() {
            for (other_index, other) in resolved.iter().enumerate() {
                if index != other_index {
                    prop_assert!(!capability.is_child_of(other), "{} covered by {}", capability, other);
                }
            }
        }
    }

    #[test]
    fn it_keeps_every_requested_permission(requested in identifiers()) {
        let resolved: Capabilities = resolve(&requested).into_iter().collect();
        for identifier in &requested {
            prop_assert!(resolved.has(&Capability::new(identifier)), "{} lost", identifier);
        }
    }

    #[test]
    fn it_preserves_identifiers_through_parsing(identifier in identifier()) {
        prop_assert_eq!(Capability::new(&identifier).to_string(), identifier.clone());
        prop_assert!(identifier.parse::<Capability>().is_ok());
    }

    #[test]
    fn it_never_tightens_beyond_the_granted_set(
        granted in identifiers(),
        requested in identifiers(),
    ) {
        let granted: Capabilities = granted.into_iter().collect();
        let requested: Capabilities = requested.into_iter().collect();
        let tightened = tighten(&granted, Some(&requested));
        for capability in &tightened {
            prop_assert!(granted.has(capability));
            prop_assert!(requested.iter().any(|wanted| wanted == capability));
        }
    }
}
