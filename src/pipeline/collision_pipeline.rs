use crate::dynamics::{integrate, IntegrationParameters, ResponseParameters, RigidBody};
use crate::pipeline::{PairScanner, StepReport};
use crate::query::{CenterLineResolver, PenetrationResolver};

/// One simulation tick over a set of bodies: collision detection and response, then
/// momentum integration.
#[derive(Clone, Debug, Default)]
pub struct CollisionPipeline<R = CenterLineResolver> {
    /// The pair scanner detecting and resolving collisions.
    pub scanner: PairScanner<R>,
    /// Parameters of the momentum integration.
    pub integration: IntegrationParameters,
}

impl CollisionPipeline<CenterLineResolver> {
    /// Creates a pipeline with the given response and integration parameters.
    pub fn new(response: ResponseParameters, integration: IntegrationParameters) -> Self {
        CollisionPipeline {
            scanner: PairScanner::new(response),
            integration,
        }
    }
}

impl<R: PenetrationResolver> CollisionPipeline<R> {
    /// Resolves the collisions among `bodies`, then integrates all the dynamic bodies.
    pub fn step(&mut self, bodies: &mut [RigidBody]) -> StepReport {
        let report = self.scanner.step(bodies);

        for body in bodies.iter_mut() {
            integrate(body, &self.integration);
        }

        report
    }
}
