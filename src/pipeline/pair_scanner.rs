use crate::dynamics::{
    resolve_collision_with, resolve_wall_collision, ResolutionError, ResponseParameters,
    RigidBody,
};
use crate::pipeline::{CollisionPair, PairKind};
use crate::query::{self, CenterLineResolver, PenetrationResolver};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Summary of one [`PairScanner::step`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Number of pairs that went through the intersection test.
    pub tested_pairs: usize,
    /// Number of wall-wall pairs, which are neither tested nor resolved.
    pub skipped_pairs: usize,
    /// The intersecting pairs, in the order they were resolved.
    pub colliding_pairs: Vec<CollisionPair>,
    /// Number of colliding pairs successfully resolved.
    pub resolved_pairs: usize,
    /// The colliding pairs whose resolution failed, with the reason of the failure.
    pub failed_pairs: Vec<(CollisionPair, ResolutionError)>,
}

impl StepReport {
    /// `true` if no pair failed to be resolved.
    pub fn is_ok(&self) -> bool {
        self.failed_pairs.is_empty()
    }
}

/// Detects and resolves the collisions among a set of bodies.
///
/// Each step considers every unordered pair of distinct bodies exactly once, as `(i, j)`
/// with `i < j` in lexicographic order. Intersections are detected on the geometry the
/// bodies had at the beginning of the step, then resolved one pair after the other in the
/// same order. A body involved in several pairs therefore sees the corrections of the
/// earlier pairs when a later one is resolved.
#[derive(Clone, Debug, Default)]
pub struct PairScanner<R = CenterLineResolver> {
    /// Parameters of the collision response.
    pub params: ResponseParameters,
    resolver: R,
    candidates: Vec<CollisionPair>,
}

impl PairScanner<CenterLineResolver> {
    /// A scanner resolving body-body penetrations along the center line of both bodies.
    pub fn new(params: ResponseParameters) -> Self {
        Self::with_resolver(params, CenterLineResolver)
    }
}

impl<R: PenetrationResolver> PairScanner<R> {
    /// A scanner using a custom penetration resolver for body-body collisions.
    pub fn with_resolver(params: ResponseParameters, resolver: R) -> Self {
        PairScanner {
            params,
            resolver,
            candidates: Vec::new(),
        }
    }

    /// Finds all the intersecting pairs of `bodies`, without modifying them.
    pub fn colliding_pairs(&mut self, bodies: &[RigidBody]) -> Vec<CollisionPair> {
        let mut report = StepReport::default();
        self.detect(bodies, &mut report);
        report.colliding_pairs
    }

    /// Detects then resolves all the collisions among `bodies`.
    ///
    /// A pair that fails to be resolved is left untouched, logged, and reported in
    /// [`StepReport::failed_pairs`]. It does not prevent the other pairs from being resolved.
    pub fn step(&mut self, bodies: &mut [RigidBody]) -> StepReport {
        let mut report = StepReport::default();
        self.detect(bodies, &mut report);

        for pair in &report.colliding_pairs {
            let kind = pair.kind(bodies);
            let (body1, body2) = pair.bodies_mut(bodies);

            let result = match kind {
                PairKind::BodyBody => {
                    resolve_collision_with(&self.resolver, body1, body2, &self.params)
                }
                PairKind::BodyWall => resolve_wall_collision(body1, body2, &self.params),
                PairKind::WallWall => continue,
            };

            match result {
                Ok(response) => {
                    log::trace!("resolved {:?}: {:?}", pair, response);
                    report.resolved_pairs += 1;
                }
                Err(err) => {
                    log::warn!("failed to resolve the collision of {:?}: {}", pair, err);
                    report.failed_pairs.push((*pair, err));
                }
            }
        }

        log::debug!(
            "pair scan: {} tested, {} skipped, {} colliding, {} resolved, {} failed",
            report.tested_pairs,
            report.skipped_pairs,
            report.colliding_pairs.len(),
            report.resolved_pairs,
            report.failed_pairs.len()
        );

        report
    }

    fn detect(&mut self, bodies: &[RigidBody], report: &mut StepReport) {
        self.candidates.clear();

        for i in 0..bodies.len() {
            for j in i + 1..bodies.len() {
                if PairKind::classify(bodies[i].kind(), bodies[j].kind()) == PairKind::WallWall {
                    report.skipped_pairs += 1;
                } else if let Some(pair) = CollisionPair::new(i, j) {
                    self.candidates.push(pair);
                }
            }
        }

        report.tested_pairs = self.candidates.len();

        let intersects = |pair: &CollisionPair| {
            query::are_colliding(bodies[pair.first()].obb(), bodies[pair.second()].obb())
        };

        #[cfg(not(feature = "parallel"))]
        {
            report.colliding_pairs = self
                .candidates
                .iter()
                .copied()
                .filter(|pair| intersects(pair))
                .collect();
        }

        // Collecting into a `Vec` keeps the sequential order.
        #[cfg(feature = "parallel")]
        {
            report.colliding_pairs = self
                .candidates
                .par_iter()
                .copied()
                .filter(|pair| intersects(pair))
                .collect();
        }
    }
}
