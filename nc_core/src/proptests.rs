#[cfg(test)]
mod proptests {
    use crate::reconcile::{display_order, remove, sort_for_display, upsert};
    use crate::types::{ComponentConfiguration, LogSeverity};
    use proptest::prelude::*;
    use std::cmp::Ordering;

    fn severity() -> impl Strategy<Value = LogSeverity> {
        prop_oneof![Just(LogSeverity::Info), Just(LogSeverity::Debug)]
    }

    // Small alphabets so keys collide often.
    fn component() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("felix".to_string()),
            Just("typha".to_string()),
            Just("bird".to_string())
        ]
    }

    fn node() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just("node1".to_string()),
            Just("node2".to_string())
        ]
    }

    /// Lists that hold at most one entry per (component, node).
    fn entries() -> impl Strategy<Value = Vec<ComponentConfiguration>> {
        prop::collection::vec((component(), node(), severity()), 0..12).prop_map(|raw| {
            raw.into_iter()
                .fold(Vec::new(), |acc, (c, n, s)| upsert(&acc, &c, &n, s))
        })
    }

    proptest! {
        #[test]
        fn upsert_last_value_wins(
            list in entries(),
            c in component(),
            n in node(),
            s1 in severity(),
            s2 in severity()
        ) {
            let twice = upsert(&upsert(&list, &c, &n, s1), &c, &n, s2);
            let once = upsert(&list, &c, &n, s2);

            prop_assert_eq!(twice.len(), once.len());
            let hit: Vec<_> = twice.iter().filter(|e| e.matches(&c, &n)).collect();
            prop_assert_eq!(hit.len(), 1);
            prop_assert_eq!(hit[0].log_severity, s2);
        }

        #[test]
        fn remove_is_idempotent(list in entries(), c in component(), n in node()) {
            let once = remove(&list, &c, &n);
            let twice = remove(&once, &c, &n);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn remove_cancels_upsert(
            list in entries(),
            c in component(),
            n in node(),
            s in severity()
        ) {
            let expected: Vec<_> = list.iter().filter(|e| !e.matches(&c, &n)).cloned().collect();
            prop_assert_eq!(remove(&upsert(&list, &c, &n, s), &c, &n), expected);
        }

        #[test]
        fn upsert_keeps_keys_unique(list in entries(), c in component(), n in node(), s in severity()) {
            let next = upsert(&list, &c, &n, s);
            for (i, a) in next.iter().enumerate() {
                for b in &next[i + 1..] {
                    prop_assert!(!(a.component == b.component && a.node == b.node));
                }
            }
        }

        #[test]
        fn sort_orders_adjacent_pairs(list in entries()) {
            let sorted = sort_for_display(&list);
            prop_assert_eq!(sorted.len(), list.len());

            for pair in sorted.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(a.component <= b.component);
                if a.component == b.component {
                    prop_assert!(!(a.node.is_empty() && !b.node.is_empty()));
                    if !a.node.is_empty() && !b.node.is_empty() {
                        prop_assert!(a.node <= b.node);
                    }
                }
            }
        }

        #[test]
        fn sort_is_stable(
            raw in prop::collection::vec((component(), node(), severity()), 0..12)
        ) {
            // Duplicate keys are allowed here so ties actually occur.
            let list: Vec<_> = raw
                .into_iter()
                .map(|(c, n, s)| ComponentConfiguration::new(c, n, s))
                .collect();
            let tagged: Vec<(usize, &ComponentConfiguration)> = list.iter().enumerate().collect();
            let sorted = sort_for_display(&list);

            let mut expected = tagged.clone();
            expected.sort_by(|(ia, a), (ib, b)| match display_order(a, b) {
                Ordering::Equal => ia.cmp(ib),
                other => other
            });
            let expected: Vec<ComponentConfiguration> =
                expected.into_iter().map(|(_, e)| e.clone()).collect();
            prop_assert_eq!(sorted, expected);
        }
    }
}
