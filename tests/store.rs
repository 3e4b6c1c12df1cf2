use tempseries::{DEFAULT_FLOOR, SeriesError, SeriesStore};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn construction_preserves_order() {
    init_logger();

    let readings = [100.0, -40.0, 25.5];
    let store = SeriesStore::from_readings(&readings).unwrap();

    assert_eq!(store.snapshot(), readings);
    assert_eq!(store.len(), 3);
    assert!(!store.is_empty());
    assert_eq!(store.floor(), DEFAULT_FLOOR);
}

#[test]
fn new_store_is_empty() {
    let store = SeriesStore::new();

    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.snapshot().is_empty());
}

#[test]
fn construction_rejects_reading_below_floor() {
    let result = SeriesStore::from_readings(&[100.0, -300.0, 25.5]);

    assert_eq!(
        result.unwrap_err(),
        SeriesError::BelowFloor {
            value: -300.0,
            floor: DEFAULT_FLOOR,
        }
    );
}

#[test]
fn construction_validates_against_custom_floor() {
    assert!(SeriesStore::from_readings_with_floor(&[-300.0], -400.0).is_ok());
    assert!(SeriesStore::from_readings_with_floor(&[-300.0], -273.15).is_err());
}

#[test]
fn floor_boundary_is_valid() {
    let store = SeriesStore::from_readings(&[DEFAULT_FLOOR]).unwrap();
    assert_eq!(store.snapshot(), [DEFAULT_FLOOR]);
}

#[test]
fn append_returns_new_count() {
    let mut store = SeriesStore::from_readings(&[30.0, 25.0]).unwrap();

    assert_eq!(store.append(&[28.0, 29.0]), 4);
    assert_eq!(store.append(&[32.0]), 5);
    assert_eq!(store.snapshot(), [30.0, 25.0, 28.0, 29.0, 32.0]);
}

#[test]
fn append_to_empty_store() {
    let mut store = SeriesStore::new();

    assert_eq!(store.append(&[28.0, 29.0]), 2);
    assert_eq!(store.snapshot(), [28.0, 29.0]);
}

#[test]
fn append_grows_capacity_by_doubling() {
    let mut store = SeriesStore::from_readings(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(store.capacity(), 4);

    // needed = 5, doubled = 8
    store.append(&[5.0]);
    assert_eq!(store.len(), 5);
    assert_eq!(store.capacity(), 8);

    // Within capacity, no growth.
    store.append(&[6.0, 7.0, 8.0]);
    assert_eq!(store.capacity(), 8);
}

#[test]
fn append_grows_to_needed_when_doubling_is_not_enough() {
    let mut store = SeriesStore::from_readings(&[30.0]).unwrap();
    assert_eq!(store.capacity(), 1);

    // needed = 5 exceeds the doubled capacity of 2
    store.append(&[28.0, 29.0, 32.0, 35.0]);
    assert_eq!(store.len(), 5);
    assert_eq!(store.capacity(), 5);
}

#[test]
fn append_does_not_revalidate_against_floor() {
    let mut store = SeriesStore::new();

    assert_eq!(store.append(&[-500.0]), 1);
    assert_eq!(store.snapshot(), [-500.0]);
}

#[test]
fn snapshot_is_independent_of_later_mutation() {
    let mut store = SeriesStore::from_readings(&[1.0, 2.0]).unwrap();

    let snapshot = store.snapshot();
    store.append(&[3.0]);

    assert_eq!(snapshot, [1.0, 2.0]);
    assert_eq!(store.snapshot(), [1.0, 2.0, 3.0]);
}

#[test]
fn mutating_a_snapshot_does_not_touch_the_store() {
    let store = SeriesStore::from_readings(&[1.0, 2.0]).unwrap();

    let mut snapshot = store.snapshot();
    snapshot[0] = 99.0;
    snapshot.push(100.0);

    assert_eq!(store.snapshot(), [1.0, 2.0]);
}

#[test]
fn reset_returns_store_to_empty_state() {
    let mut store = SeriesStore::from_readings(&[1.0, 2.0, 3.0]).unwrap();

    store.reset();

    assert!(store.is_empty());
    assert!(store.snapshot().is_empty());

    // The store stays usable after a reset.
    assert_eq!(store.append(&[4.0]), 1);
    assert_eq!(store.snapshot(), [4.0]);
}
