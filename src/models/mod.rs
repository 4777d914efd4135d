//! Survey planning domain models.
//!
//! Typed records for the planning inputs (sites, robots) and the
//! scheduler's output (missions).
//!
//! # Domain Mappings
//!
//! | u-survey | Scheduling term | Role |
//! |----------|-----------------|------|
//! | Site | Task | Work to be placed on the plan |
//! | Robot | Resource | Performs the work, one mission at a time |
//! | Mission | Assignment | Robot × site × time interval |

mod geo;
mod mission;
mod robot;
mod site;

pub use geo::{knots_to_kmh, GeoPoint, KM_PER_NAUTICAL_MILE};
pub use mission::{mission_id, Mission};
pub use robot::{Robot, RobotStatus, DEPTH_SAFETY_FACTOR};
pub use site::Site;
