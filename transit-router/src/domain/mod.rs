//! Domain types for the transit network.
//!
//! Input definitions (`StopDefinition`, `BusDefinition`) are plain records
//! supplied by the ingestion layer. The catalogue turns them into validated
//! `Stop` and `Bus` records, so code that receives those can trust that
//! every referenced stop exists and every traversed pair has a distance.

mod bus;
mod error;
mod geo;
mod stats;
mod stop;

pub use bus::{Bus, BusDefinition};
pub use error::CatalogueError;
pub use geo::{Coordinates, compute_distance};
pub use stats::{BusData, StopData};
pub use stop::{Stop, StopDefinition};
