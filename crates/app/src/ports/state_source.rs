//! State source port — reads one sensor's current state from the hub.

use std::future::Future;

use hubreport_domain::endpoint::SensorEndpoint;
use hubreport_domain::fetch::FetchOutcome;

/// Something that can fetch the state record behind a [`SensorEndpoint`].
///
/// Implementations absorb every failure into [`FetchOutcome::Failure`];
/// a fetch never aborts the run.
pub trait StateSource {
    /// Perform a single attempt against `endpoint`.
    fn fetch(&self, endpoint: &SensorEndpoint) -> impl Future<Output = FetchOutcome> + Send;
}
