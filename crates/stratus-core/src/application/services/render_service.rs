//! Render Service - main application orchestrator.
//!
//! This service coordinates the whole render workflow:
//! 1. Build the stack's template from the catalog
//! 2. Render the template to a document
//! 3. Serialize and hand the text to the sink
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{DocumentSink, StackCatalog},
    },
    domain::{DomainValidator as validator, JsonStyle, Template},
    error::StratusResult,
};

/// What a successful render produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub stack: String,
    pub parameters: usize,
    pub resources: usize,
    pub bytes: usize,
    pub destination: String,
}

/// Main rendering service.
pub struct RenderService {
    catalog: Box<dyn StackCatalog>,
    sink: Box<dyn DocumentSink>,
}

impl RenderService {
    /// Create a new render service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use stratus_core::application::RenderService;
    /// # use stratus_core::application::ports::{DocumentSink, StackCatalog};
    /// # fn demo(catalog: Box<dyn StackCatalog>, sink: Box<dyn DocumentSink>) {
    /// let service = RenderService::new(catalog, sink);
    /// # }
    /// ```
    pub fn new(catalog: Box<dyn StackCatalog>, sink: Box<dyn DocumentSink>) -> Self {
        Self { catalog, sink }
    }

    /// Render a catalog stack and write it to the sink.
    #[instrument(skip(self), fields(destination = %self.sink.destination()))]
    pub fn render_stack(&self, name: &str, style: JsonStyle) -> StratusResult<RenderSummary> {
        info!("Rendering stack");
        let template = self.catalog.build(name)?;
        self.render_template(name, &template, style)
    }

    /// Render an already built template and write it to the sink.
    ///
    /// Nothing reaches the sink unless rendering and serialization both
    /// succeed.
    pub fn render_template(
        &self,
        label: &str,
        template: &Template,
        style: JsonStyle,
    ) -> StratusResult<RenderSummary> {
        for unused in validator::unused_parameters(template) {
            warn!(parameter = %unused, "Parameter is never referenced");
        }

        let document = template.render()?;
        let text = document
            .to_json_string(style)
            .map_err(|e| ApplicationError::SerializationFailed {
                reason: e.to_string(),
            })?;

        self.sink.write(&text)?;

        let summary = RenderSummary {
            stack: label.to_string(),
            parameters: template.parameters().len(),
            resources: template.resources().len(),
            bytes: text.len(),
            destination: self.sink.destination(),
        };
        info!(
            stack = %summary.stack,
            resources = summary.resources,
            bytes = summary.bytes,
            "Render completed"
        );
        Ok(summary)
    }
}
