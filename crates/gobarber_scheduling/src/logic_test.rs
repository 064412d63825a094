#[cfg(test)]
mod tests {
    use crate::logic::{
        format_hour_label, partition_by_period, FormattedSlot, PartitionCache, Period,
    };
    use gobarber_common::AvailabilitySlot;

    fn slot(hour: u8, available: bool) -> AvailabilitySlot {
        AvailabilitySlot::new(hour, available)
    }

    #[test]
    fn test_labels_are_zero_padded() {
        assert_eq!(format_hour_label(0), "00:00");
        assert_eq!(format_hour_label(9), "09:00");
        assert_eq!(format_hour_label(14), "14:00");
        assert_eq!(format_hour_label(23), "23:00");
    }

    #[test]
    fn test_noon_is_afternoon() {
        assert_eq!(Period::of(11), Period::Morning);
        assert_eq!(Period::of(12), Period::Afternoon);
        assert_eq!(Period::of(0), Period::Morning);
        assert_eq!(Period::of(23), Period::Afternoon);
    }

    #[test]
    fn test_partition_of_typical_day() {
        let day = vec![slot(9, true), slot(14, false)];

        let periods = partition_by_period(&day);

        assert_eq!(
            periods.morning,
            vec![FormattedSlot {
                hour: 9,
                available: true,
                label: "09:00".to_string()
            }]
        );
        assert_eq!(
            periods.afternoon,
            vec![FormattedSlot {
                hour: 14,
                available: false,
                label: "14:00".to_string()
            }]
        );
    }

    #[test]
    fn test_partition_keeps_gateway_order() {
        let day = vec![slot(10, true), slot(8, true), slot(17, false), slot(13, true)];

        let periods = partition_by_period(&day);

        let morning: Vec<u8> = periods.morning.iter().map(|s| s.hour).collect();
        let afternoon: Vec<u8> = periods.afternoon.iter().map(|s| s.hour).collect();
        assert_eq!(morning, vec![10, 8]);
        assert_eq!(afternoon, vec![17, 13]);
    }

    #[test]
    fn test_duplicate_hours_are_passed_through() {
        let day = vec![slot(9, true), slot(9, false)];

        let periods = partition_by_period(&day);

        assert_eq!(periods.morning.len(), 2);
        assert!(periods.afternoon.is_empty());
    }

    #[test]
    fn test_empty_availability_gives_empty_periods() {
        let periods = partition_by_period(&[]);
        assert!(periods.is_empty());
        assert_eq!(periods.len(), 0);
    }

    #[test]
    fn test_cache_recomputes_only_on_change() {
        let mut cache = PartitionCache::new();
        let day = vec![slot(8, true), slot(15, true)];

        cache.refresh(&day);
        cache.refresh(&day.clone());
        assert_eq!(cache.recomputations(), 1);

        let other_day = vec![slot(8, false)];
        let periods = cache.refresh(&other_day).clone();
        assert_eq!(cache.recomputations(), 2);
        assert_eq!(periods.morning.len(), 1);
        assert!(periods.afternoon.is_empty());
        assert_eq!(cache.current(), &periods);
    }

    #[test]
    fn test_cache_computes_empty_input_once() {
        let mut cache = PartitionCache::new();

        assert!(cache.refresh(&[]).is_empty());
        assert!(cache.refresh(&[]).is_empty());
        assert_eq!(cache.recomputations(), 1);
    }

    #[test]
    fn test_period_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Period::Morning).unwrap(), "\"morning\"");
        assert_eq!(Period::Afternoon.as_str(), "afternoon");
    }
}
