//! Browser-facing adapters for the domain ports.

pub mod http;
pub mod services;
pub mod storage;
pub mod ui;

pub use http::LottoApiClient;
pub use services::{BrowserTimeProvider, ConsoleLogger};
pub use storage::{InMemoryPreferenceStore, LocalStoragePreferences};
pub use ui::{DomEventSource, DomSurface};
