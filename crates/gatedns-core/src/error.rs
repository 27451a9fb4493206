use thiserror::Error;

/// Result type alias for gatedns operations
pub type Result<T> = std::result::Result<T, GateDnsError>;

/// Errors that can occur during DNS registration
#[derive(Error, Debug)]
pub enum GateDnsError {
    /// The requested application is not in the registry catalog
    #[error("application \"{app}\" not found in registry for {environment}/{region}")]
    ApplicationNotFound {
        /// Application name as requested
        app: String,
        /// Requested environment
        environment: String,
        /// Requested region
        region: String,
    },

    /// The registry catalog fetch failed
    #[error("registry application list for {app} in {environment}/{region} failed: {message}")]
    ApplicationList {
        /// Application whose lookup triggered the fetch
        app: String,
        /// Requested environment
        environment: String,
        /// Requested region
        region: String,
        /// Error body or status text from the registry
        message: String,
    },

    /// No load balancer matches the requested environment and region
    #[error("load balancer for {app} in {environment}/{region} not found")]
    LoadBalancerNotFound {
        /// Application name
        app: String,
        /// Requested environment
        environment: String,
        /// Requested region
        region: String,
    },

    /// Zone discovery or record submission failed
    #[error("DNS record creation for {app} in {environment}/{region} failed: {message}")]
    DnsCreationFailed {
        /// Application name
        app: String,
        /// Requested environment
        environment: String,
        /// Requested region
        region: String,
        /// Aggregated failure detail
        message: String,
    },

    /// A remote API returned an error response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the remote
        message: String,
    },

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Change-batch template rendering failed
    #[error("template error: {0}")]
    Template(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl GateDnsError {
    /// Application-not-found with the deployment target still unknown.
    /// Callers that know the target attach it with [`Self::with_target`].
    #[must_use]
    pub fn app_not_found(app: impl Into<String>) -> Self {
        Self::ApplicationNotFound {
            app: app.into(),
            environment: String::new(),
            region: String::new(),
        }
    }

    /// Catalog-fetch failure with application and target still unknown
    #[must_use]
    pub fn application_list(message: impl Into<String>) -> Self {
        Self::ApplicationList {
            app: String::new(),
            environment: String::new(),
            region: String::new(),
            message: message.into(),
        }
    }

    /// Attach the requested application to catalog-level errors
    #[must_use]
    pub fn for_app(self, app: &str) -> Self {
        match self {
            Self::ApplicationList {
                environment,
                region,
                message,
                ..
            } => Self::ApplicationList {
                app: app.to_string(),
                environment,
                region,
                message,
            },
            other => other,
        }
    }

    /// Attach the requested environment and region to registry-stage
    /// errors so operators can correlate them with provider logs
    #[must_use]
    pub fn with_target(self, environment: &str, region: &str) -> Self {
        match self {
            Self::ApplicationNotFound { app, .. } => Self::ApplicationNotFound {
                app,
                environment: environment.to_string(),
                region: region.to_string(),
            },
            Self::ApplicationList { app, message, .. } => Self::ApplicationList {
                app,
                environment: environment.to_string(),
                region: region.to_string(),
                message,
            },
            other => other,
        }
    }

    /// Returns true if the error indicates a missing application or binding
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ApplicationNotFound { .. } | Self::LoadBalancerNotFound { .. }
        )
    }

    /// Returns the HTTP status code if this is an API error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_correlation_fields() {
        let errors = [
            GateDnsError::LoadBalancerNotFound {
                app: "sample-app".into(),
                environment: "stage".into(),
                region: "us-east-1".into(),
            },
            GateDnsError::app_not_found("sample-app").with_target("stage", "us-east-1"),
            GateDnsError::application_list("gate is down")
                .for_app("sample-app")
                .with_target("stage", "us-east-1"),
            GateDnsError::DnsCreationFailed {
                app: "sample-app".into(),
                environment: "stage".into(),
                region: "us-east-1".into(),
                message: "zone is locked".into(),
            },
        ];

        for err in errors {
            let text = err.to_string();
            assert!(text.contains("sample-app"), "message lacks app: {text}");
            assert!(text.contains("stage"), "message lacks environment: {text}");
            assert!(text.contains("us-east-1"), "message lacks region: {text}");
        }
    }

    #[test]
    fn with_target_leaves_other_errors_alone() {
        let err = GateDnsError::Http("boom".into()).with_target("stage", "us-east-1");
        assert!(matches!(err, GateDnsError::Http(_)));
    }

    #[test]
    fn not_found_predicates() {
        assert!(GateDnsError::app_not_found("x").is_not_found());
        assert!(!GateDnsError::Http("boom".into()).is_not_found());
    }
}
