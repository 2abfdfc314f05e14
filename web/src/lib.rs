//! Axum web shell for Listkeeper.
//!
//! Serves session-scoped todo lists as server-rendered HTML. Each browser
//! session owns its lists; nothing is shared between users and nothing
//! outlives the session store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, forms, cookies
//! │  - Session load / save                  │  ← Flash messages
//! │  - Page rendering (Liquid)              │  ← Logging, metrics
//! ├─────────────────────────────────────────┤
//! │         Functional Core                 │
//! │  - ListsReducer                         │  ← Pure validation and updates
//! │  - View helpers (counts, ordering)      │  ← No I/O
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Load** the session's `ListsState`
//! 3. **Build Action** from the path and form
//! 4. **Reduce** it into an event or a `ListError`
//! 5. **Save** the state and queue a flash on success
//! 6. **Map result** to a redirect, a re-rendered form or a page
//!
//! # Example
//!
//! ```no_run
//! use listkeeper_web::{build_router, config::SessionConfig, views::Views, AppState};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let views = Views::new().map_err(|e| anyhow::anyhow!("{e}"))?;
//! let state = AppState::new(views, SessionConfig::default());
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:4567").await?;
//! axum::serve(listener, build_router(state)).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod flash;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;

// Re-export key types for convenience
pub use config::Config;
pub use error::AppError;
pub use flash::{Flash, FlashKind};
pub use middleware::REQUEST_ID_HEADER;
pub use routes::build_router;
pub use session::ListsSession;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
