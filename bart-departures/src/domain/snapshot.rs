//! A validated ETD response for one station at one instant.

use super::{Departure, Minutes, sort_departures};

/// All estimates heading toward one destination from the board station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationGroup {
    /// Destination name, e.g. "Dublin/Pleasanton".
    pub destination: String,

    /// Destination station abbreviation, if the API sent one.
    pub abbreviation: Option<String>,

    /// Estimates in the order the API returned them.
    pub estimates: Vec<Minutes>,
}

/// Decoded departure board for a single station.
///
/// Read-only once built; produced by `crate::bart::convert_etd_response`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSnapshot {
    /// Date the snapshot was generated, as sent (e.g. "05/09/2024").
    pub date: String,

    /// Time the snapshot was generated, as sent (e.g. "04:24:03 PM PDT").
    pub time: String,

    /// Human-readable name of the board station.
    pub station_name: String,

    /// Destination groups in API order. Empty when no trains are running.
    pub groups: Vec<DestinationGroup>,
}

impl ResponseSnapshot {
    /// Total number of estimates across all destination groups.
    pub fn estimate_count(&self) -> usize {
        self.groups.iter().map(|g| g.estimates.len()).sum()
    }

    /// Flatten every estimate into a departure and sort soonest first.
    ///
    /// Flattening is lossless: one departure per estimate, no filtering or
    /// de-duplication. Equal minutes keep group-then-estimate order.
    pub fn departures(&self) -> Vec<Departure> {
        let flat: Vec<Departure> = self
            .groups
            .iter()
            .flat_map(|group| {
                group
                    .estimates
                    .iter()
                    .map(move |&minutes| Departure::new(minutes, group.destination.clone()))
            })
            .collect();

        if flat.is_empty() {
            return flat;
        }

        sort_departures(flat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(destination: &str, estimates: &[&str]) -> DestinationGroup {
        DestinationGroup {
            destination: destination.to_string(),
            abbreviation: None,
            estimates: estimates.iter().map(|s| Minutes::parse(s).unwrap()).collect(),
        }
    }

    fn snapshot(groups: Vec<DestinationGroup>) -> ResponseSnapshot {
        ResponseSnapshot {
            date: "05/09/2024".into(),
            time: "04:24:03 PM PDT".into(),
            station_name: "Montgomery St.".into(),
            groups,
        }
    }

    fn pairs(departures: &[Departure]) -> Vec<(u32, &str)> {
        departures
            .iter()
            .map(|d| (d.minutes.get(), d.destination.as_str()))
            .collect()
    }

    #[test]
    fn leaving_sorts_first() {
        let snap = snapshot(vec![
            group("Daly City", &["4"]),
            group("Dublin/Pleasanton", &["Leaving"]),
            group("Pleasant Hill", &["9"]),
        ]);

        assert_eq!(
            pairs(&snap.departures()),
            vec![
                (0, "Dublin/Pleasanton"),
                (4, "Daly City"),
                (9, "Pleasant Hill"),
            ]
        );
    }

    #[test]
    fn interleaves_groups() {
        let snap = snapshot(vec![
            group("Antioch", &["3", "18", "33"]),
            group("SFO Airport", &["10", "25"]),
        ]);

        assert_eq!(
            pairs(&snap.departures()),
            vec![
                (3, "Antioch"),
                (10, "SFO Airport"),
                (18, "Antioch"),
                (25, "SFO Airport"),
                (33, "Antioch"),
            ]
        );
    }

    #[test]
    fn ties_keep_group_order() {
        let snap = snapshot(vec![
            group("Richmond", &["7"]),
            group("Millbrae", &["7"]),
            group("Berryessa", &["Leaving", "7"]),
        ]);

        assert_eq!(
            pairs(&snap.departures()),
            vec![
                (0, "Berryessa"),
                (7, "Richmond"),
                (7, "Millbrae"),
                (7, "Berryessa"),
            ]
        );
    }

    #[test]
    fn no_groups_yields_empty() {
        let snap = snapshot(Vec::new());
        assert!(snap.departures().is_empty());
        assert_eq!(snap.estimate_count(), 0);
    }

}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_group() -> impl Strategy<Value = DestinationGroup> {
        (
            "[A-Z][a-z]{2,10}",
            prop::collection::vec(prop_oneof![Just(None), (0u32..60).prop_map(Some)], 1..4),
        )
            .prop_map(|(destination, raw)| DestinationGroup {
                destination,
                abbreviation: None,
                estimates: raw
                    .into_iter()
                    .map(|m| m.map(Minutes::new).unwrap_or(Minutes::NOW))
                    .collect(),
            })
    }

    fn arb_snapshot() -> impl Strategy<Value = ResponseSnapshot> {
        prop::collection::vec(arb_group(), 0..8).prop_map(|groups| ResponseSnapshot {
            date: "05/09/2024".into(),
            time: "04:24:03 PM PDT".into(),
            station_name: "Montgomery St.".into(),
            groups,
        })
    }

    proptest! {
        #[test]
        fn flattening_is_lossless(snap in arb_snapshot()) {
            let departures = snap.departures();
            prop_assert_eq!(departures.len(), snap.estimate_count());

            for group in &snap.groups {
                let expected: usize = snap
                    .groups
                    .iter()
                    .filter(|g| g.destination == group.destination)
                    .map(|g| g.estimates.len())
                    .sum();
                let found = departures
                    .iter()
                    .filter(|d| d.destination == group.destination)
                    .count();
                prop_assert_eq!(found, expected);
            }
        }

        #[test]
        fn departures_are_sorted(snap in arb_snapshot()) {
            let departures = snap.departures();
            prop_assert!(departures.windows(2).all(|w| w[0].minutes <= w[1].minutes));
        }

        #[test]
        fn zero_minutes_come_first(snap in arb_snapshot()) {
            let departures = snap.departures();
            let zeros = departures.iter().take_while(|d| d.minutes == Minutes::NOW).count();
            let total_zeros = departures.iter().filter(|d| d.minutes == Minutes::NOW).count();
            prop_assert_eq!(zeros, total_zeros);
        }
    }
}
