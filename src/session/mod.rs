//! Session Store
//!
//! Holds the signed-in identity between login and logout and mirrors it to
//! durable client storage.
//!
//! ## Architecture
//!
//! - **SessionStore**: in-memory session plus the two persisted keys
//! - **SessionStorage**: `localStorage`-shaped key/value seam
//! - **MemoryStorage** / **FileStorage**: ephemeral and on-disk backends
//!
//! The web front end supplies its own backend over `window.localStorage`.

mod storage;
mod store;
mod types;

pub use storage::{MemoryStorage, SessionStorage, StorageError, StorageResult};
#[cfg(feature = "native")]
pub use storage::FileStorage;
pub use store::{SessionStore, TOKEN_KEY, USER_KEY};
pub use types::{Session, User, FALLBACK_DISPLAY_NAME};

pub(crate) use types::null_as_default;
