//! Collision detection and response over a whole set of bodies.

pub use self::collision_pair::{CollisionPair, PairKind};
pub use self::collision_pipeline::CollisionPipeline;
pub use self::pair_scanner::{PairScanner, StepReport};

mod collision_pair;
mod collision_pipeline;
mod pair_scanner;
