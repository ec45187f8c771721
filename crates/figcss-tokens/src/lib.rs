//! figcss token lookup
//!
//! Reads spacing variables and text styles from a design-tool document.
//! The document is reached through the [`TokenSource`] trait so the rest of
//! the pipeline never touches the host API directly. A JSON [`Snapshot`] of
//! the three host queries implements it.
//!
//! # Example
//!
//! ```
//! use figcss_tokens::{lookup, Settings, Snapshot};
//!
//! let snapshot = Snapshot::from_json("{}").unwrap();
//! let context = lookup::find_screen_context(&snapshot, &Settings::default());
//! assert!(context.is_none());
//! ```

pub mod host;
pub mod lookup;
pub mod settings;
pub mod source;

pub use host::{
    FontName, Metric, MetricUnit, Mode, TextStyle, Variable, VariableCollection, VariableType,
    VariableValue,
};
pub use lookup::{ScreenContext, Space, SpaceLookup, SpaceSkip, StyleGroups};
pub use settings::{Settings, SettingsError};
pub use source::{Snapshot, SnapshotError, TokenSource};
