//! Portfolio Common Library
//!
//! Web(WASM)とCLIで共有されるビュー状態コントローラとコンテンツ

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod menu;
pub mod scroll;
pub mod sections;
pub mod types;
pub mod viewport;
pub mod visibility;

pub use config::{ContactConfig, MenuConfig, ObserverConfig, SiteConfig};
pub use contact::{
    validate, ContactForm, ContactPayload, Field, FieldErrors, LifecycleEvent, SubmissionStatus,
    SubmitAttempt, ValidationError, ValidationKind,
};
pub use content::Portfolio;
pub use error::{Error, GatewayError, MeasurementError, Result};
pub use filter::{Category, FilterState, FilterableItem};
pub use gateway::{run_submission, SimulatedGateway, Sleeper, SubmitGateway};
pub use menu::{NavMenu, PaperDetail};
pub use scroll::{active_section, ScrollObserver, ScrollState, TickReport};
pub use sections::{Section, SectionRegistry};
pub use types::{Certification, ContactChannel, Experience, Profile, Project, ResearchPaper, SkillCategory};
pub use viewport::{LayoutBox, StaticViewport, ViewportProvider};
pub use visibility::{VisibilityRecord, VisibilityTracker};
