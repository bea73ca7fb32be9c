pub mod refresher;

pub use refresher::{FETCH_ERROR_MESSAGE, RefreshScheduler};
