mod galaxy_url;
mod ids;
/// Primitive Galaxy API data types and NewType-patterns.
mod strings;

pub use galaxy_url::*;
pub use ids::*;
pub use strings::*;
