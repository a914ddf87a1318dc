#[cfg(test)]
mod tests {
    use super::super::value_objects::*;
    use crate::shared::DomainError;

    #[test]
    fn test_from_record_parses_utc_instant() {
        let record = ActivityRecord::new("42", "2013-10-01T14:22:16.719Z");
        let event = ActivityEvent::from_record(&record).unwrap();

        assert_eq!(event.user_id().as_str(), "42");
        assert_eq!(event.date().to_string(), "2013-10-01");
    }

    #[test]
    fn test_from_record_parses_offset_instant() {
        let record = ActivityRecord::new("42", "2013-10-02T01:30:00+08:00");
        let event = ActivityEvent::from_record(&record).unwrap();

        // Date is taken in the event's own offset (UTC would still be 10-01)
        assert_eq!(event.date().to_string(), "2013-10-02");
    }

    #[test]
    fn test_from_record_rejects_garbage_timestamp() {
        let record = ActivityRecord::new("42", "not-a-timestamp");
        let result = ActivityEvent::from_record(&record);

        match result {
            Err(DomainError::InvalidTimestamp(msg)) => {
                assert!(msg.contains("not-a-timestamp"));
            }
            _ => panic!("Expected InvalidTimestamp error"),
        }
    }

    #[test]
    fn test_from_record_rejects_date_without_time() {
        let record = ActivityRecord::new("42", "2013-10-01");
        assert!(ActivityEvent::from_record(&record).is_err());
    }

    #[test]
    fn test_record_deserializes_camel_case_fields() {
        let json = r#"{"userId": "7", "timestamp": "2013-10-01T14:22:16.719Z"}"#;
        let record: ActivityRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.user_id, "7");
        assert_eq!(record.timestamp, "2013-10-01T14:22:16.719Z");
    }

    #[test]
    fn test_parse_events_propagates_first_bad_record() {
        let records = vec![
            ActivityRecord::new("1", "2013-10-01T14:22:16.719Z"),
            ActivityRecord::new("1", "bogus"),
            ActivityRecord::new("1", "2013-10-03T14:22:16.719Z"),
        ];

        let result = parse_events(&records);
        match result {
            Err(DomainError::InvalidTimestamp(msg)) => assert!(msg.contains("bogus")),
            _ => panic!("Expected InvalidTimestamp error"),
        }
    }

    #[test]
    fn test_parse_events_keeps_feed_order() {
        let records = vec![
            ActivityRecord::new("b", "2013-10-02T00:00:00Z"),
            ActivityRecord::new("a", "2013-10-01T00:00:00Z"),
        ];

        // Feed order is trusted as-is, never re-sorted
        let events = parse_events(&records).unwrap();
        assert_eq!(events[0].user_id().as_str(), "b");
        assert_eq!(events[1].user_id().as_str(), "a");
    }
}
