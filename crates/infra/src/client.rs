//! Wiring of configuration, HTTP transport and audit sink into an
//! `OwnerService`

use std::sync::Arc;
use std::time::Duration;

use intercall_core::{AuditSink, OwnerService};
use intercall_domain::{IntercallConfig, Result};

use crate::audit::TracingAuditSink;
use crate::http::HttpClient;
use crate::soap::HttpSoapTransport;

/// Build the HTTP transport described by `config`.
///
/// # Errors
/// Returns `IntercallError::Config` when the configuration is invalid.
pub fn build_transport(config: &IntercallConfig) -> Result<HttpSoapTransport> {
    config.validate()?;

    let mut http = HttpClient::builder().timeout(Duration::from_secs(config.timeout_secs));
    if let Some(agent) = &config.user_agent {
        http = http.user_agent(agent.clone());
    }

    Ok(HttpSoapTransport::new(http.build()?, &config.endpoint)?
        .with_document(config.document.clone()))
}

/// Owner service backed by HTTP, auditing to `tracing`.
pub fn build_owner_service(config: &IntercallConfig) -> Result<OwnerService> {
    build_owner_service_with_audit(config, Arc::new(TracingAuditSink::new()))
}

/// Owner service backed by HTTP with a caller-supplied audit sink.
pub fn build_owner_service_with_audit(
    config: &IntercallConfig,
    audit: Arc<dyn AuditSink>,
) -> Result<OwnerService> {
    let transport = build_transport(config)?;
    tracing::info!(endpoint = %transport.endpoint(), "InterCall client configured");

    Ok(OwnerService::new(config.credentials.clone(), Arc::new(transport), audit)
        .with_default_owner_number(config.default_owner_number.clone()))
}

#[cfg(test)]
mod tests {
    use intercall_domain::{Credentials, IntercallError};

    use super::*;

    #[test]
    fn invalid_config_is_rejected_before_building() {
        let config = IntercallConfig::new(Credentials::new("synapse", "secret", ""), "https://x");
        let result = build_owner_service(&config);
        assert!(matches!(result, Err(IntercallError::Config(_))));
    }

    #[test]
    fn transport_uses_configured_endpoint() {
        let config = IntercallConfig::new(
            Credentials::new("synapse", "secret", "889797"),
            "https://soap.intercall.example/ownerAPI",
        );
        let transport = build_transport(&config).unwrap();
        assert_eq!(transport.endpoint().as_str(), "https://soap.intercall.example/ownerAPI");
    }
}
