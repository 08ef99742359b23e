//! The incremental paginated feed: filter snapshots, the fetch state
//! machine, dedup merging, the search debouncer, and the scroll trigger.
//!
//! Everything here is synchronous and side-effect free toward the network:
//! the controller emits [`controller::FetchDirective`]s and the async driver
//! (see `app::spawn_fetch`) reports results back as events.

pub mod controller;
pub mod debounce;
pub mod filter;
pub mod merge;
pub mod visibility;

pub use controller::{FeedController, FetchDirective, Phase};
pub use debounce::Debouncer;
pub use filter::{Category, FilterState, SortKey, SortOrder};
pub use merge::{merge, MergeMode};
pub use visibility::LoadMoreTrigger;
