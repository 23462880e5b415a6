//! Patient directory core: loading, filtering, and the selection hand-off.
//!
//! The modules here hold the screen's logic; the IPC layer in
//! `crate::commands` is a thin wrapper over them. External capabilities
//! (the store read, navigation, window focus) enter through traits so
//! tests can inject fakes.

pub mod filter;
pub mod loader;
pub mod selection;

pub use filter::{filter_patients, FilteredView};
pub use loader::{load_patients, FsStoreReader, LoadError, PatientCollection, StoreReader};
pub use selection::{
    FlowState, NavigationError, NavigationHost, SelectionFlow, TauriNavigationHost,
};
