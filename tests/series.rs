use sparkdeck::data::{SeriesBuffer, SeriesStore};
use sparkdeck::{channel_deck, DeckCommand};

#[test]
fn buffer_evicts_oldest_beyond_window() {
    let mut buf = SeriesBuffer::new(3);
    for v in [1.0, 2.0, 3.0, 4.0] {
        buf.push(v);
    }
    assert_eq!(buf.values(), vec![2.0, 3.0, 4.0]);
    assert_eq!(buf.latest(), Some(4.0));
    assert_eq!(buf.len(), 3);
}

#[test]
fn buffer_set_keeps_trailing_window() {
    let mut buf = SeriesBuffer::new(4);
    buf.set((1..=10).map(f64::from).collect());
    assert_eq!(buf.values(), vec![7.0, 8.0, 9.0, 10.0]);
}

#[test]
fn buffer_resize_shrinks_from_the_front() {
    let mut buf = SeriesBuffer::new(5);
    for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
        buf.push(v);
    }
    buf.resize(2);
    assert_eq!(buf.values(), vec![4.0, 5.0]);
    assert_eq!(buf.window(), 2);
}

#[test]
fn store_ingests_registration_and_samples() {
    let (sink, rx) = channel_deck();
    let latency = sink.create_series("latency", Some("ms"));
    let errors = sink.create_series("errors", None);
    sink.push(&latency, 12.0).unwrap();
    sink.push_many(&errors, vec![1.0, 2.0, 3.0]).unwrap();

    let mut store = SeriesStore::new(12);
    let (registered, updated) = store.ingest(&rx);
    assert!(registered);
    assert!(updated);
    assert_eq!(store.len(), 2);

    let names: Vec<&str> = store.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["latency", "errors"], "registration order is kept");

    let entry = store.get(latency.id).expect("registered series");
    assert_eq!(entry.unit.as_deref(), Some("ms"));
    assert_eq!(entry.buffer.latest(), Some(12.0));
    assert!(entry.last_updated.is_some());

    let entry = store.get(errors.id).expect("registered series");
    assert_eq!(entry.buffer.values(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn store_ignores_unregistered_series() {
    let (sink, rx) = channel_deck();
    sink.push_by_id(9_999, 1.0).unwrap();

    let mut store = SeriesStore::new(12);
    let (registered, updated) = store.ingest(&rx);
    assert!(!registered);
    assert!(!updated, "samples for unknown series are dropped");
    assert!(store.is_empty());
}

#[test]
fn store_applies_window_and_clear_commands() {
    let (sink, rx) = channel_deck();
    let series = sink.create_series("cpu", Some("%"));
    sink.push_many(&series, vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    sink.set_window(&series, 2).unwrap();

    let mut store = SeriesStore::new(12);
    store.ingest(&rx);
    assert_eq!(
        store.get(series.id).unwrap().buffer.values(),
        vec![4.0, 5.0]
    );

    sink.clear(&series).unwrap();
    store.ingest(&rx);
    assert!(store.get(series.id).unwrap().buffer.is_empty());
}

#[test]
fn set_values_replaces_contents() {
    let (sink, rx) = channel_deck();
    let series = sink.create_series("mem", None);
    sink.push(&series, 1.0).unwrap();
    sink.set_values(&series, vec![7.0, 8.0]).unwrap();

    let mut store = SeriesStore::new(12);
    store.ingest(&rx);
    assert_eq!(store.get(series.id).unwrap().buffer.values(), vec![7.0, 8.0]);
}

#[test]
fn duplicate_command_for_unknown_window_resize_is_harmless() {
    let (sink, rx) = channel_deck();
    // SetWindow / Clear for a series that never registered must be ignored.
    sink.push_by_id(12_345, 1.0).unwrap();
    let _ = sink.clear(&sparkdeck::Series {
        id: 12_345,
        name: "ghost".into(),
        unit: None,
    });
    let mut store = SeriesStore::new(12);
    store.ingest(&rx);
    assert!(store.is_empty());
}

#[test]
fn raw_commands_can_drive_the_store() {
    let (_, rx) = channel_deck();
    drop(rx);
    let (tx, rx) = std::sync::mpsc::channel();
    tx.send(DeckCommand::RegisterSeries {
        id: 77,
        name: "direct".into(),
        unit: None,
    })
    .unwrap();
    tx.send(DeckCommand::Push {
        series_id: 77,
        value: 5.0,
    })
    .unwrap();

    let mut store = SeriesStore::new(3);
    store.ingest(&rx);
    assert_eq!(store.get(77).unwrap().buffer.latest(), Some(5.0));
}
