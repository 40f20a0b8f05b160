use super::record;
use crate::error::TimelineError;
use crate::timeline::{TimelineEntry, build_timeline, write_tsv};

#[test]
fn records_without_event_are_dropped() {
    let records = vec![
        record(r#"{ "player": "A", "time": { "value": 0.5 }, "speed": 80 }"#),
        record(r#"{ "player": "A", "time": { "value": 1.0 }, "event": { "type": "hop" } }"#),
        record(r#"{ "player": "B", "time": { "value": 1.5 }, "event": null }"#),
        record(r#"{ "player": "B", "time": { "value": 2.0 }, "event": { "type": "finish", "rank": 1 } }"#),
    ];
    let with_event = records.iter().filter(|r| r.has_event()).count();

    let entries = build_timeline(&records).expect("build timeline");
    assert_eq!(entries.len(), with_event);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].event.as_deref(), Some("hop"));
    assert_eq!(entries[1].event.as_deref(), Some("finish"));
}

#[test]
fn original_order_is_kept_not_sorted_by_time() {
    let records = vec![
        record(r#"{ "player": "A", "time": { "value": 9.0 }, "event": { "type": "start" } }"#),
        record(r#"{ "player": "B", "time": { "value": 3.0 }, "event": { "type": "start" } }"#),
        record(r#"{ "player": "A", "time": { "value": 9.0 }, "event": { "type": "start" } }"#),
    ];
    let entries = build_timeline(&records).expect("build timeline");
    let times: Vec<_> = entries.iter().map(|e| e.time).collect();
    assert_eq!(times, vec![Some(9.0), Some(3.0), Some(9.0)]);
    assert_eq!(entries[0], entries[2]);
}

#[test]
fn malformed_time_or_event_degrade_to_none() {
    let records = vec![
        record(r#"{ "player": "A", "time": 12, "event": { "type": "finish", "rank": 2 } }"#),
        record(r#"{ "player": "A", "time": { "value": 4.0 }, "event": "finish" }"#),
    ];
    let entries = build_timeline(&records).expect("build timeline");
    assert_eq!(
        entries[0],
        TimelineEntry {
            player: "A".to_string(),
            time: None,
            event: Some("finish".to_string()),
            event_detail: "2".to_string(),
        }
    );
    assert_eq!(
        entries[1],
        TimelineEntry {
            player: "A".to_string(),
            time: Some(4.0),
            event: None,
            event_detail: String::new(),
        }
    );
}

#[test]
fn simultaneous_finishes_keep_both_rows() {
    let records = vec![
        record(r#"{"player":"A","time":{"value":1.0},"event":{"type":"finish","rank":1}}"#),
        record(r#"{"player":"B","time":{"value":1.0},"event":{"type":"finish","rank":2}}"#),
    ];
    let entries = build_timeline(&records).expect("build timeline");
    let details: Vec<_> = entries.iter().map(|e| e.event_detail.as_str()).collect();
    assert_eq!(details, vec!["1", "2"]);
    assert!(entries.iter().all(|e| e.time == Some(1.0)));
}

#[test]
fn missing_required_field_aborts_the_build() {
    let records = vec![
        record(r#"{"player":"A","time":{"value":1.0},"event":{"type":"finish","rank":1}}"#),
        record(r#"{"player":"A","time":{"value":2.0},"event":{"type":"spinout","cause":"banana"}}"#),
    ];
    let err = build_timeline(&records).expect_err("spinout without is_effect");
    assert!(matches!(err, TimelineError::MissingField { ref event_type, .. } if event_type == "spinout"));
}

#[test]
fn non_string_type_keeps_row_without_event_name() {
    let records = vec![record(
        r#"{"player":"A","time":{"value":2.0},"event":{"type":5}}"#,
    )];
    let entries = build_timeline(&records).expect("build timeline");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].event, None);
    assert_eq!(entries[0].event_detail, "");
}

#[test]
fn tsv_escapes_tabs_and_newlines_in_text() {
    let entries = vec![TimelineEntry {
        player: "Team\tA".to_string(),
        time: Some(2.0),
        event: Some("collision".to_string()),
        event_detail: "line1\nline2 \\ end".to_string(),
    }];
    let mut out = Vec::new();
    write_tsv(&entries, &mut out).expect("write tsv");
    let text = String::from_utf8(out).expect("utf8");
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].split('\t').count(), 4);
    assert_eq!(lines[1], "Team\\tA\t2\tcollision\tline1\\nline2 \\\\ end");
}

#[test]
fn tsv_leaves_missing_values_blank() {
    let entries = vec![
        TimelineEntry {
            player: "A".to_string(),
            time: Some(1.5),
            event: Some("item_get".to_string()),
            event_detail: "2".to_string(),
        },
        TimelineEntry {
            player: "B".to_string(),
            time: None,
            event: None,
            event_detail: String::new(),
        },
    ];
    let mut out = Vec::new();
    write_tsv(&entries, &mut out).expect("write tsv");
    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(
        text,
        "player\ttime\tevent\tevent_detail\nA\t1.5\titem_get\t2\nB\t\t\t\n"
    );
}
