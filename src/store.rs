use crate::error::SeriesError;

/// Lowest physically valid reading, in degrees Celsius (absolute zero).
pub const DEFAULT_FLOOR: f64 = -273.0;

/// Growable ordered series of temperature readings.
///
/// Readings are validated against the physical floor once, at construction.
/// Analysis happens on detached snapshots, never on the live buffer.
#[derive(Debug, Clone)]
pub struct SeriesStore {
    readings: Vec<f64>,
    floor: f64,
}

impl SeriesStore {
    /// Create an empty store with the default floor.
    pub fn new() -> Self {
        Self::with_floor(DEFAULT_FLOOR)
    }

    /// Create an empty store with a custom validity floor.
    pub fn with_floor(floor: f64) -> Self {
        Self {
            readings: Vec::new(),
            floor,
        }
    }

    /// Create a store from an initial batch of readings.
    ///
    /// Every element is checked against the floor before the store is built;
    /// a single out-of-range reading fails the whole construction.
    ///
    /// # Errors
    /// Returns [`SeriesError::BelowFloor`] if any reading is below the floor.
    pub fn from_readings(readings: &[f64]) -> Result<Self, SeriesError> {
        Self::from_readings_with_floor(readings, DEFAULT_FLOOR)
    }

    /// Like [`SeriesStore::from_readings`], with a custom validity floor.
    pub fn from_readings_with_floor(readings: &[f64], floor: f64) -> Result<Self, SeriesError> {
        for &value in readings {
            if value < floor {
                return Err(SeriesError::BelowFloor { value, floor });
            }
        }

        Ok(Self {
            readings: readings.to_vec(),
            floor,
        })
    }

    /// Append readings to the end of the series and return the new count.
    ///
    /// When the backing capacity is insufficient it grows to
    /// `max(count + new, 2 * capacity)`, and it never shrinks. Appended
    /// readings are not checked against the floor; validation is
    /// construction-time only.
    pub fn append(&mut self, readings: &[f64]) -> usize {
        let needed = self.readings.len() + readings.len();
        let capacity = self.readings.capacity();
        if needed > capacity {
            let target = needed.max(2 * capacity);
            self.readings.reserve_exact(target - self.readings.len());
            log::debug!(
                "grew backing capacity from {capacity} to {}",
                self.readings.capacity()
            );
        }

        self.readings.extend_from_slice(readings);
        self.readings.len()
    }

    /// Discard all readings, returning the store to the empty state.
    pub fn reset(&mut self) {
        self.readings.clear();
        log::debug!("reset series to the empty state");
    }

    /// Detached copy of the current series, in insertion order.
    ///
    /// Later mutations of the store are not visible through the copy, and
    /// mutating the copy does not touch the store.
    pub fn snapshot(&self) -> Vec<f64> {
        self.readings.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Logical number of readings.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Backing capacity, distinct from the logical count.
    pub fn capacity(&self) -> usize {
        self.readings.capacity()
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }
}

impl Default for SeriesStore {
    fn default() -> Self {
        Self::new()
    }
}
