#[cfg(test)]
mod tests {
    use crate::logic::{format_hour_label, partition_by_period, AFTERNOON_START_HOUR};
    use gobarber_common::AvailabilitySlot;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    // Any day's worth of slots, possibly unordered and with repeated hours
    fn arb_day() -> impl Strategy<Value = Vec<AvailabilitySlot>> {
        prop::collection::vec(
            (0u8..=23, any::<bool>()).prop_map(|(hour, available)| AvailabilitySlot::new(hour, available)),
            0..40,
        )
    }

    proptest! {
        #[test]
        fn test_partition_is_total(day in arb_day()) {
            let periods = partition_by_period(&day);

            let input: BTreeSet<u8> = day.iter().map(|s| s.hour).collect();
            let output: BTreeSet<u8> = periods
                .morning
                .iter()
                .chain(periods.afternoon.iter())
                .map(|s| s.hour)
                .collect();

            prop_assert_eq!(input, output);
            prop_assert_eq!(periods.len(), day.len());
        }

        #[test]
        fn test_partition_is_disjoint(day in arb_day()) {
            let periods = partition_by_period(&day);

            prop_assert!(periods.morning.iter().all(|s| s.hour < AFTERNOON_START_HOUR));
            prop_assert!(periods.afternoon.iter().all(|s| s.hour >= AFTERNOON_START_HOUR));
        }

        #[test]
        fn test_partition_preserves_relative_order(day in arb_day()) {
            let periods = partition_by_period(&day);

            let expected_morning: Vec<AvailabilitySlot> =
                day.iter().copied().filter(|s| s.hour < AFTERNOON_START_HOUR).collect();
            let actual_morning: Vec<AvailabilitySlot> = periods
                .morning
                .iter()
                .map(|s| AvailabilitySlot::new(s.hour, s.available))
                .collect();

            prop_assert_eq!(expected_morning, actual_morning);
        }

        #[test]
        fn test_partition_is_idempotent(day in arb_day()) {
            prop_assert_eq!(partition_by_period(&day), partition_by_period(&day));
        }

        #[test]
        fn test_label_format(hour in 0u8..=23) {
            let label = format_hour_label(hour);

            prop_assert_eq!(label.len(), 5);
            prop_assert!(label.ends_with(":00"));
            prop_assert_eq!(label[..2].parse::<u8>().unwrap(), hour);
        }

        #[test]
        fn test_every_slot_label_matches_hour(day in arb_day()) {
            let periods = partition_by_period(&day);

            for slot in periods.morning.iter().chain(periods.afternoon.iter()) {
                prop_assert_eq!(&slot.label, &format_hour_label(slot.hour));
            }
        }
    }
}
