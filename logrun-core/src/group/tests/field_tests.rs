use crate::classify::GrammarTier;
use crate::group::{FieldValue, GroupError, GroupField, GroupSelector};
use crate::test_support::AccessLine;
use pretty_assertions::assert_eq;

#[test]
fn parses_canonical_names_case_insensitively() {
    assert_eq!("address".parse::<GroupField>(), Ok(GroupField::Address));
    assert_eq!("Address".parse::<GroupField>(), Ok(GroupField::Address));
    assert_eq!("USER_AGENT".parse::<GroupField>(), Ok(GroupField::UserAgent));
    assert_eq!(" status ".parse::<GroupField>(), Ok(GroupField::Status));
}

#[test]
fn parses_aliases() {
    assert_eq!("Ip".parse::<GroupField>(), Ok(GroupField::Address));
    assert_eq!("ua".parse::<GroupField>(), Ok(GroupField::UserAgent));
    assert_eq!("status_code".parse::<GroupField>(), Ok(GroupField::Status));
}

#[test]
fn every_canonical_name_round_trips() {
    for field in GroupField::ALL {
        assert_eq!(field.as_str().parse::<GroupField>(), Ok(field));
    }
}

#[test]
fn unknown_name_is_rejected_with_the_supported_list() {
    // Act
    let err = "Nonexistent".parse::<GroupField>().unwrap_err();

    // Assert
    let GroupError::UnknownGroupField { name, supported } = &err else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!(name, "Nonexistent");
    for field in GroupField::ALL {
        assert!(supported.contains(field.as_str()), "missing {field}");
    }
    assert!(err.to_string().starts_with("unknown group field 'Nonexistent'"));
}

#[test]
fn request_fields_are_unavailable_for_the_minimal_tier() {
    // Act
    let err = GroupSelector::resolve("method", GrammarTier::Minimal).unwrap_err();

    // Assert
    assert_eq!(
        err,
        GroupError::FieldUnavailable {
            field: GroupField::Method,
            tier: GrammarTier::Minimal,
            available: "address, date, time, timestamp, action".to_string(),
        }
    );
}

#[test]
fn record_fields_are_available_for_both_tiers() {
    for tier in GrammarTier::ALL {
        for name in ["address", "date", "time", "timestamp", "action"] {
            assert!(GroupSelector::resolve(name, tier).is_ok(), "{name} / {tier}");
        }
    }
}

#[test]
fn value_of_reads_each_field() {
    // Arrange
    let record = AccessLine::new("203.0.113.5")
        .method("POST")
        .endpoint("/login")
        .status("302")
        .user_agent("Mozilla/5.0")
        .record(GrammarTier::Extended);

    // Act / Assert
    let text = |field: GroupField| field.value_of(&record).to_string();
    assert_eq!(text(GroupField::Address), "203.0.113.5");
    assert_eq!(text(GroupField::Date), "08/Apr/2018");
    assert_eq!(text(GroupField::Time), "07:54:55");
    assert_eq!(text(GroupField::Timestamp), "2018-04-08T07:54:55+00:00");
    assert_eq!(text(GroupField::Action), "\"POST /login HTTP/1.1\" 302 100 \"-\" \"Mozilla/5.0\"");
    assert_eq!(text(GroupField::Method), "POST");
    assert_eq!(text(GroupField::Endpoint), "/login");
    assert_eq!(text(GroupField::Protocol), "HTTP/1.1");
    assert_eq!(text(GroupField::Status), "302");
    assert_eq!(text(GroupField::Size), "100");
    assert_eq!(text(GroupField::Referrer), "-");
    assert_eq!(text(GroupField::UserAgent), "Mozilla/5.0");
}

#[test]
fn malformed_timestamp_value_carries_the_raw_text() {
    // Arrange
    let record = AccessLine::new("203.0.113.5")
        .on("31/Feb/2018")
        .record(GrammarTier::Extended);

    // Act
    let value = GroupField::Timestamp.value_of(&record);

    // Assert
    assert_eq!(value, FieldValue::Malformed("31/Feb/2018 07:54:55 +0000"));
}

#[test]
fn minimal_records_have_no_request_values() {
    // Arrange
    let record = AccessLine::new("203.0.113.5").record(GrammarTier::Minimal);

    // Act / Assert
    assert_eq!(GroupField::Method.value_of(&record), FieldValue::Absent);
    assert_eq!(GroupField::UserAgent.value_of(&record), FieldValue::Absent);
}
