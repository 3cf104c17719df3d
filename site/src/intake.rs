//! Lead intake: where captured emails go.
//!
//! The form only knows the [`LeadIntake`] trait. Hosts plug in
//! [`HttpIntake`] (feature `intake-http`) or their own implementation; tests
//! use in-memory fakes.

use std::sync::Arc;

use futures::future::{self, FutureExt, LocalBoxFuture};
use serde::{Deserialize, Serialize};

use crate::error::IntakeError;

/// Tag sent with every lead so the intake can tell where it came from.
pub const LEAD_SOURCE: &str = "landing-page";

/// A captured lead as sent to the intake endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub email: String,
    pub source: String,
}

impl Lead {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            source: LEAD_SOURCE.to_string(),
        }
    }

    /// Domain part of the address, safe to log.
    pub fn domain(&self) -> &str {
        self.email.rsplit_once('@').map(|(_, d)| d).unwrap_or("")
    }
}

/// External system that accepts captured leads.
pub trait LeadIntake: Send + Sync {
    /// Submit one lead. The future runs on the UI thread and may be dropped
    /// (cancelled) if the form is torn down first.
    fn submit(&self, lead: Lead) -> LocalBoxFuture<'static, Result<(), IntakeError>>;
}

pub type SharedIntake = Arc<dyn LeadIntake>;

/// Intake used where no endpoint exists (static export, previews).
#[derive(Clone, Copy, Debug, Default)]
pub struct UnconfiguredIntake;

impl LeadIntake for UnconfiguredIntake {
    fn submit(&self, _lead: Lead) -> LocalBoxFuture<'static, Result<(), IntakeError>> {
        future::ready(Err(IntakeError::NotConfigured)).boxed_local()
    }
}

/// JSON `POST` of a [`Lead`] to an absolute HTTP(S) endpoint.
///
/// Any 2xx response counts as accepted; other statuses map to
/// [`IntakeError::Rejected`].
#[cfg(feature = "intake-http")]
#[derive(Clone, Debug)]
pub struct HttpIntake {
    endpoint: reqwest::Url,
    http: reqwest::Client,
}

#[cfg(feature = "intake-http")]
impl HttpIntake {
    /// Intake posting to `endpoint`, which must be an absolute http(s) URL.
    /// Use [`HttpIntake::resolve`] for paths like `/api/leads`.
    pub fn new(endpoint: &str) -> Result<Self, IntakeError> {
        let url = reqwest::Url::parse(endpoint).map_err(|err| invalid_endpoint(endpoint, err))?;
        Self::from_url(url)
    }

    /// Intake posting to `endpoint` resolved against `base` (usually the
    /// page origin). Absolute endpoints are kept as they are.
    pub fn resolve(base: &str, endpoint: &str) -> Result<Self, IntakeError> {
        let url = reqwest::Url::parse(base)
            .and_then(|base| base.join(endpoint))
            .map_err(|err| invalid_endpoint(endpoint, err))?;
        Self::from_url(url)
    }

    fn from_url(endpoint: reqwest::Url) -> Result<Self, IntakeError> {
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(invalid_endpoint(endpoint.as_str(), "expected an http or https URL"));
        }
        Ok(Self {
            endpoint,
            http: reqwest::Client::new(),
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[cfg(feature = "intake-http")]
fn invalid_endpoint(endpoint: &str, reason: impl std::fmt::Display) -> IntakeError {
    IntakeError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(feature = "intake-http")]
impl LeadIntake for HttpIntake {
    fn submit(&self, lead: Lead) -> LocalBoxFuture<'static, Result<(), IntakeError>> {
        let request = self.http.post(self.endpoint.clone()).json(&lead);
        async move {
            let response = request.send().await?;
            let status = response.status();
            if status.is_success() {
                Ok(())
            } else {
                Err(IntakeError::Rejected {
                    status: status.as_u16(),
                })
            }
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn lead_carries_source_tag() {
        let lead = Lead::new("a@b.com");
        assert_eq!(lead.source, LEAD_SOURCE);
        assert_eq!(lead.domain(), "b.com");

        let json = serde_json::to_value(&lead).expect("serialize lead");
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["source"], "landing-page");
    }

    #[test]
    fn unconfigured_intake_fails_softly() {
        let result = block_on(UnconfiguredIntake.submit(Lead::new("a@b.com")));
        assert_eq!(result, Err(IntakeError::NotConfigured));
    }

    #[cfg(feature = "intake-http")]
    mod http {
        use super::super::*;

        #[test]
        fn relative_endpoint_is_refused_up_front() {
            assert!(matches!(
                HttpIntake::new("/api/leads"),
                Err(IntakeError::InvalidEndpoint { endpoint, .. }) if endpoint == "/api/leads"
            ));
        }

        #[test]
        fn relative_endpoint_resolves_against_origin() {
            let intake = HttpIntake::resolve("https://readywrite.app", "/api/leads")
                .expect("resolvable endpoint");
            assert_eq!(intake.endpoint(), "https://readywrite.app/api/leads");
        }

        #[test]
        fn absolute_endpoint_ignores_origin() {
            let intake = HttpIntake::resolve("https://readywrite.app", "https://intake.example.com/leads")
                .expect("absolute endpoint");
            assert_eq!(intake.endpoint(), "https://intake.example.com/leads");

            let intake = HttpIntake::new("http://localhost:8080/leads").expect("absolute endpoint");
            assert_eq!(intake.endpoint(), "http://localhost:8080/leads");
        }

        #[test]
        fn non_http_endpoint_is_refused() {
            assert!(matches!(
                HttpIntake::new("mailto:leads@readywrite.app"),
                Err(IntakeError::InvalidEndpoint { .. })
            ));
            assert!(matches!(
                HttpIntake::resolve("not a url", "/api/leads"),
                Err(IntakeError::InvalidEndpoint { .. })
            ));
        }
    }
}
