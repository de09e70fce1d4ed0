//! Story search core: the collection state machine, the app update loop
//! and the pure helpers around them. Nothing in here performs I/O.
mod aggregate;
mod collection;
mod effect;
mod endpoint;
mod msg;
mod preference;
mod record;
mod state;
mod update;
mod view_model;

pub use aggregate::{compute_aggregate, AggregateCache, AggregateObserver, NoopObserver};
pub use collection::{transition, CollectionState, Event};
pub use effect::Effect;
pub use endpoint::{Endpoint, API_ENDPOINT};
pub use msg::Msg;
pub use preference::{
    load_query, save_query, ArmedPreference, LoadedPreference, MemoryPreferenceStore,
    PreferenceStore, DEFAULT_QUERY, SEARCH_KEY,
};
pub use record::{Collection, Record};
pub use state::{AppState, RequestId};
pub use update::update;
pub use view_model::AppViewModel;
