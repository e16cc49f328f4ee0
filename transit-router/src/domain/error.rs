//! Domain error types.
//!
//! These errors represent malformed input topology detected while the
//! catalogue is built. Lookups never fail; absence is reported with `None`.

/// Errors raised while building a catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// A bus was defined with no stops
    #[error("bus {bus} has an empty route")]
    EmptyRoute { bus: String },

    /// The same stop name was defined twice
    #[error("stop {stop} is defined more than once")]
    DuplicateStop { stop: String },

    /// The same bus name was defined twice
    #[error("bus {bus} is defined more than once")]
    DuplicateBus { bus: String },

    /// A bus references a stop that is not mentioned anywhere
    #[error("bus {bus} references unknown stop {stop}")]
    UnknownStop { bus: String, stop: String },

    /// A bus references a stop that was never defined with coordinates
    #[error("bus {bus} references stop {stop}, which has no coordinates")]
    MissingGeometry { bus: String, stop: String },

    /// No road distance is known in either direction for a traversed pair
    #[error("bus {bus} travels {from} -> {to}, but no road distance is known")]
    MissingDistance {
        bus: String,
        from: String,
        to: String,
    },
}
