//! Logging and OpenTelemetry tracing setup.
//!
//! Responsibilities:
//! - Install the global `tracing` subscriber (env filter plus a stderr fmt layer).
//! - Optionally export spans over OTLP when an endpoint is configured.
//! - Propagate W3C trace context on outgoing probe requests.
//!
//! Does NOT handle:
//! - Metrics (see [`crate::metrics`]).
//!
//! Invariants:
//! - Log output goes to stderr so stdout stays reserved for rendered results.
//! - `RUST_LOG` overrides the default filter directive.

use opentelemetry::trace::TracerProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive when `RUST_LOG` is unset.
pub const DEFAULT_LOG_DIRECTIVE: &str = "warn";

/// Configuration for logging and OpenTelemetry tracing.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// OTLP endpoint (e.g., "http://localhost:4317").
    pub otlp_endpoint: Option<String>,
    /// Service name for trace attribution.
    pub service_name: String,
    pub service_version: String,
    /// Filter directive used when `RUST_LOG` is unset.
    pub default_directive: String,
    /// Whether to write human-readable log lines to stderr.
    pub enable_fmt: bool,
    /// Export timeout for the OTLP exporter.
    pub timeout: Duration,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            otlp_endpoint: None,
            service_name: "keyprobe".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            default_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
            enable_fmt: true,
            timeout: Duration::from_secs(5),
        }
    }
}

impl TracingConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_otlp_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    pub fn with_default_directive(mut self, directive: impl Into<String>) -> Self {
        self.default_directive = directive.into();
        self
    }

    pub fn with_fmt(mut self, enable: bool) -> Self {
        self.enable_fmt = enable;
        self
    }

    /// Initialize the global subscriber.
    ///
    /// The returned guard must be held until shutdown so pending spans are flushed.
    ///
    /// # Errors
    /// Returns an error if the OTLP pipeline fails to initialize.
    pub fn init(&self) -> Result<TracingGuard, TracingError> {
        use tracing_subscriber::fmt;

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.default_directive));

        let provider = match self.otlp_endpoint.as_deref() {
            Some(endpoint) => Some(self.create_tracer_provider(endpoint)?),
            None => None,
        };

        let otel_layer = provider.as_ref().map(|provider| {
            tracing_opentelemetry::layer().with_tracer(provider.tracer("keyprobe-client"))
        });
        let fmt_layer = self
            .enable_fmt
            .then(|| fmt::layer().with_writer(std::io::stderr));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(otel_layer)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TracingError::InitError(e.to_string()))?;

        Ok(TracingGuard { provider })
    }

    fn create_tracer_provider(&self, endpoint: &str) -> Result<SdkTracerProvider, TracingError> {
        use opentelemetry_otlp::{Protocol, WithExportConfig};
        use opentelemetry_sdk::trace::{BatchConfig, BatchSpanProcessor, Sampler};

        let otlp_exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .with_timeout(self.timeout)
            .with_protocol(Protocol::Grpc)
            .build()
            .map_err(|e| TracingError::InitError(e.to_string()))?;

        let batch_processor = BatchSpanProcessor::builder(otlp_exporter)
            .with_batch_config(BatchConfig::default())
            .build();

        let resource = opentelemetry_sdk::Resource::builder()
            .with_attributes(vec![
                opentelemetry::KeyValue::new("service.name", self.service_name.clone()),
                opentelemetry::KeyValue::new("service.version", self.service_version.clone()),
            ])
            .build();

        Ok(SdkTracerProvider::builder()
            .with_span_processor(batch_processor)
            .with_resource(resource)
            .with_sampler(Sampler::ParentBased(Box::new(Sampler::AlwaysOn)))
            .build())
    }
}

/// Holds the tracer provider until shutdown.
pub struct TracingGuard {
    provider: Option<SdkTracerProvider>,
}

impl TracingGuard {
    /// Whether spans are being exported over OTLP.
    pub fn is_exporting(&self) -> bool {
        self.provider.is_some()
    }

    /// Flush pending spans and shut the provider down.
    pub fn shutdown(&self) {
        if let Some(ref provider) = self.provider {
            let _ = provider.shutdown();
        }
    }
}

/// Errors that can occur during tracing initialization.
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Failed to initialize tracing: {0}")]
    InitError(String),
}

/// Add W3C trace context headers (`traceparent`) for the current span to a request.
pub fn inject_trace_context(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    use opentelemetry::propagation::TextMapPropagator;
    use opentelemetry_sdk::propagation::TraceContextPropagator;
    use std::collections::HashMap;
    use tracing_opentelemetry::OpenTelemetrySpanExt;

    let propagator = TraceContextPropagator::new();
    let mut headers = HashMap::new();
    let context = tracing::Span::current().context();

    propagator.inject_context(&context, &mut headers);

    headers
        .into_iter()
        .fold(builder, |builder, (key, value)| builder.header(key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TracingConfig::default();
        assert!(config.otlp_endpoint.is_none());
        assert_eq!(config.service_name, "keyprobe");
        assert_eq!(config.default_directive, "warn");
        assert!(config.enable_fmt);
    }

    #[test]
    fn test_builder_methods() {
        let config = TracingConfig::new()
            .with_otlp_endpoint("http://localhost:4317")
            .with_service_name("keyprobe-test")
            .with_default_directive("debug")
            .with_fmt(false);

        assert_eq!(
            config.otlp_endpoint.as_deref(),
            Some("http://localhost:4317")
        );
        assert_eq!(config.service_name, "keyprobe-test");
        assert_eq!(config.default_directive, "debug");
        assert!(!config.enable_fmt);
    }

    #[test]
    fn test_inject_without_active_span_adds_no_traceparent() {
        let client = reqwest::Client::new();
        let request = inject_trace_context(client.get("http://localhost/"))
            .build()
            .unwrap();
        assert!(request.headers().get("traceparent").is_none());
    }
}
