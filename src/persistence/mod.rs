pub mod files;
pub mod state;

pub use files::{
    atomic_write, ensure_agenda_dir, get_agenda_dir, init_local_agenda, schedule_file,
};
pub use state::{load_or_default, load_state, save_state, PersistedState, StateError};
