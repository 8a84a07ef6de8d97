use crate::errors::AgendaResult;
use crate::implementations::alerts::ExpirationAlert;

/// Surfaces expiration alerts to the user
pub trait ExpirationNotifier {
    /// Called only with a non-empty list of alerts
    fn notify(&self, alerts: &[ExpirationAlert]) -> AgendaResult<()>;
}
