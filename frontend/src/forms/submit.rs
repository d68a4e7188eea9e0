use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{error, info};

use super::lead::{FormFields, GENERIC_SUBMIT_ERROR};
use crate::config::{LeadSink, SUBMIT_TIMEOUT_MS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    Encode(String),
    Network(String),
    Status(u16),
    TimedOut,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Encode(e) => write!(f, "could not encode lead: {}", e),
            SubmitError::Network(e) => write!(f, "network error: {}", e),
            SubmitError::Status(code) => write!(f, "lead endpoint answered {}", code),
            SubmitError::TimedOut => write!(f, "lead submission timed out"),
        }
    }
}

impl SubmitError {
    /// What the visitor sees above the form.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::TimedOut => "The request timed out. Please try again.".to_string(),
            _ => GENERIC_SUBMIT_ERROR.to_string(),
        }
    }
}

/// Resolves to `work`'s result, or `TimedOut` if `timeout` finishes first.
/// The losing future is dropped.
pub async fn race_timeout<T, W, D>(work: W, timeout: D) -> Result<T, SubmitError>
where
    W: Future<Output = Result<T, SubmitError>>,
    D: Future<Output = ()>,
{
    futures::pin_mut!(work);
    futures::pin_mut!(timeout);
    match select(work, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(SubmitError::TimedOut),
    }
}

async fn send_lead(sink: &LeadSink, fields: &FormFields) -> Result<(), SubmitError> {
    match sink {
        LeadSink::Simulated { delay_ms } => {
            TimeoutFuture::new(*delay_ms).await;
            info!("Lead captured locally, no endpoint configured");
            Ok(())
        }
        LeadSink::Endpoint(url) => {
            let request = Request::post(url)
                .json(fields)
                .map_err(|e| SubmitError::Encode(e.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|e| SubmitError::Network(e.to_string()))?;
            if response.ok() {
                info!("Lead accepted by {}", url);
                Ok(())
            } else {
                Err(SubmitError::Status(response.status()))
            }
        }
    }
}

pub async fn submit_lead(sink: LeadSink, fields: FormFields) -> Result<(), SubmitError> {
    let result = race_timeout(send_lead(&sink, &fields), TimeoutFuture::new(SUBMIT_TIMEOUT_MS)).await;
    if let Err(e) = &result {
        error!("Form submission error: {}", e);
    }
    result
}

/// Shared flag telling an in-flight submission its result is no longer
/// wanted (the form unmounted).
#[derive(Clone, Debug, Default)]
pub struct Cancellation(Rc<Cell<bool>>);

impl Cancellation {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    #[test]
    fn work_finishing_first_wins() {
        let result = block_on(race_timeout(ready(Ok::<_, SubmitError>(7)), pending()));
        assert_eq!(result, Ok(7));

        let failed = block_on(race_timeout(ready(Err::<(), _>(SubmitError::Status(502))), pending()));
        assert_eq!(failed, Err(SubmitError::Status(502)));
    }

    #[test]
    fn hung_submission_times_out() {
        let result = block_on(race_timeout(pending::<Result<(), SubmitError>>(), ready(())));
        assert_eq!(result, Err(SubmitError::TimedOut));
    }

    #[test]
    fn user_messages() {
        assert_eq!(SubmitError::Status(500).user_message(), GENERIC_SUBMIT_ERROR);
        assert_eq!(SubmitError::Network("offline".into()).user_message(), GENERIC_SUBMIT_ERROR);
        assert!(SubmitError::TimedOut.user_message().contains("timed out"));
    }

    #[test]
    fn cancellation_is_shared_between_clones() {
        let token = Cancellation::default();
        let in_flight = token.clone();
        assert!(!in_flight.is_cancelled());
        token.cancel();
        assert!(in_flight.is_cancelled());
    }
}
