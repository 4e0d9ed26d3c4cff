/// Options for configuring a [`HashtableMap`](crate::HashtableMap)
///
/// Default options:
/// ```
/// # use campus_pathfinding::HashtableConfig;
/// assert_eq!(
///     HashtableConfig {
///         initial_capacity: 64,
///         max_load_factor: 0.8,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HashtableConfig {
    /// The number of Buckets allocated up front (defaults to `64`)
    ///
    /// A capacity of `0` is treated as `1`.
    pub initial_capacity: usize,
    /// The ratio of stored Pairs to Buckets at which the Table doubles its capacity
    /// (defaults to `0.8`)
    ///
    /// The Table grows as soon as `len / capacity >= max_load_factor`. Values outside of
    /// `(0, 1]` fall back to the default.
    pub max_load_factor: f64,
}

impl HashtableConfig {
    /// an example HashtableConfig for Tables that are expected to stay small
    ///
    /// Values:
    /// ```
    /// # use campus_pathfinding::HashtableConfig;
    /// assert_eq!(
    ///     HashtableConfig {
    ///         initial_capacity: 8,
    ///         max_load_factor: 0.8,
    ///     },
    ///     HashtableConfig::SMALL
    /// );
    /// ```
    pub const SMALL: HashtableConfig = HashtableConfig {
        initial_capacity: 8,
        max_load_factor: 0.8,
    };
    /// an example HashtableConfig for large Maps, trading Memory for fewer rehashes
    ///
    /// Values:
    /// ```
    /// # use campus_pathfinding::HashtableConfig;
    /// assert_eq!(
    ///     HashtableConfig {
    ///         initial_capacity: 1024,
    ///         max_load_factor: 0.5,
    ///     },
    ///     HashtableConfig::LARGE
    /// );
    /// ```
    pub const LARGE: HashtableConfig = HashtableConfig {
        initial_capacity: 1024,
        max_load_factor: 0.5,
    };

    /// Creates a default Config with a different initial capacity
    pub fn with_capacity(initial_capacity: usize) -> HashtableConfig {
        HashtableConfig {
            initial_capacity,
            ..Default::default()
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.initial_capacity.max(1)
    }

    pub(crate) fn load_factor(&self) -> f64 {
        if self.max_load_factor > 0.0 && self.max_load_factor <= 1.0 {
            self.max_load_factor
        } else {
            Self::default().max_load_factor
        }
    }
}

impl Default for HashtableConfig {
    fn default() -> HashtableConfig {
        HashtableConfig {
            initial_capacity: 64,
            max_load_factor: 0.8,
        }
    }
}
