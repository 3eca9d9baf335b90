//! Stratus Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stratus
//! CloudFormation template builder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stratus-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (RenderService, StackService)       │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: DocumentSink, StackCatalog)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     stratus-adapters (Infrastructure)   │
//! │  (StdoutSink, FileSink, InMemoryCatalog)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Template, Parameter, Resource, Value) │
//! │         No I/O, No Async                │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use stratus_core::domain::{JsonStyle, Parameter, Resource, Template};
//!
//! let mut template = Template::new();
//! let vpc = template
//!     .add_parameter(Parameter::builder("VpcId", "AWS::EC2::VPC::Id").build().unwrap())
//!     .unwrap();
//! template
//!     .add_resource(
//!         Resource::builder("Sg", "AWS::EC2::SecurityGroup")
//!             .property("GroupDescription", "demo")
//!             .property("VpcId", &vpc)
//!             .build()
//!             .unwrap(),
//!     )
//!     .unwrap();
//!
//! let text = template.render().unwrap().to_json_string(JsonStyle::Compact).unwrap();
//! assert!(text.contains(r#""VpcId":{"Ref":"VpcId"}"#));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        RenderService, RenderSummary, StackService,
        ports::{DocumentSink, StackCatalog},
    };
    pub use crate::domain::{
        Document, Intrinsic, JsonStyle, LogicalName, Parameter, PseudoParam, Reference, Resource,
        StackDefinition, StackInfo, Template, Value, base64, get_att, join, pseudo,
    };
    pub use crate::error::{StratusError, StratusResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
