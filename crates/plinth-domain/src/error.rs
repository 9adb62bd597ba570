//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Plinth
///
/// Every error raised while bootstrapping is fatal to the bootstrap in
/// progress. None of them is retried or downgraded by the engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or missing settings (e.g. unusable data provider settings)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The configured data provider name is not one of the known providers
    #[error("Not supported data provider name: {name} (available: {available:?})")]
    UnsupportedProvider {
        /// The offending provider name, exactly as configured
        name: String,
        /// Canonical names of the providers that are registered
        available: Vec<&'static str>,
    },

    /// Enumerating the plugin modules failed
    #[error("Discovery error: {message}")]
    Discovery {
        /// Description of the discovery failure
        message: String,
    },

    /// A discovered registrar or startup task could not be constructed
    #[error("Failed to instantiate {type_name}: {message}")]
    Instantiation {
        /// Type name of the unit that failed to construct
        type_name: &'static str,
        /// Reason reported by the constructor
        message: String,
    },

    /// A dependency registrar's own logic failed
    #[error("Registrar {unit} failed: {source}")]
    Registration {
        /// Type name of the failing registrar
        unit: &'static str,
        /// Underlying error
        #[source]
        source: Box<Error>,
    },

    /// A single-value lookup found zero or ambiguous registrations
    #[error("Cannot resolve {service}: {message}")]
    Resolution {
        /// Type name of the requested service
        service: &'static str,
        /// Why the resolution failed
        message: String,
    },

    /// A startup task failed after the resolver was finalized
    #[error("Startup task {task} failed: {source}")]
    StartupTask {
        /// Type name of the failing task
        task: &'static str,
        /// Underlying error
        #[source]
        source: Box<Error>,
    },

    /// An operation was attempted in the wrong bootstrap phase
    #[error("Invalid engine phase: expected {expected}, found {actual}")]
    InvalidPhase {
        /// Phase the operation requires
        expected: String,
        /// Phase the engine is actually in
        actual: String,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an unsupported provider error
    pub fn unsupported_provider<S: Into<String>>(name: S, available: Vec<&'static str>) -> Self {
        Self::UnsupportedProvider {
            name: name.into(),
            available,
        }
    }
}

// Bootstrap error creation methods
impl Error {
    /// Create a discovery error
    pub fn discovery<S: Into<String>>(message: S) -> Self {
        Self::Discovery {
            message: message.into(),
        }
    }

    /// Create an instantiation error
    pub fn instantiation<S: Into<String>>(type_name: &'static str, message: S) -> Self {
        Self::Instantiation {
            type_name,
            message: message.into(),
        }
    }

    /// Wrap a registrar failure
    pub fn registration(unit: &'static str, source: Error) -> Self {
        Self::Registration {
            unit,
            source: Box::new(source),
        }
    }

    /// Create a resolution error
    pub fn resolution<S: Into<String>>(service: &'static str, message: S) -> Self {
        Self::Resolution {
            service,
            message: message.into(),
        }
    }

    /// Wrap a startup task failure
    pub fn startup_task(task: &'static str, source: Error) -> Self {
        Self::StartupTask {
            task,
            source: Box::new(source),
        }
    }

    /// Create an invalid phase error
    pub fn invalid_phase(expected: impl ToString, actual: impl ToString) -> Self {
        Self::InvalidPhase {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification
impl Error {
    /// Whether this is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Whether this is an unsupported provider error
    pub fn is_unsupported_provider(&self) -> bool {
        matches!(self, Self::UnsupportedProvider { .. })
    }

    /// Whether this is a resolution error
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution { .. })
    }

    /// Whether the error belongs to the settings family and must surface
    /// unchanged from the registrar that raised it
    pub fn is_settings_error(&self) -> bool {
        self.is_configuration() || self.is_unsupported_provider()
    }
}
