mod category;
mod coordinates;
mod participant;
mod place;
mod recommendation;
mod share;

pub use category::Category;
pub use coordinates::{round_coordinate, Coordinates, COORDINATE_PRECISION};
pub use participant::{Label, Participant};
pub use place::Place;
pub use recommendation::{Outcome, Recommendation, Usage, MAX_CANDIDATES};
pub use share::{Share, ShareData, ShareLink, SHARE_TTL_DAYS};
