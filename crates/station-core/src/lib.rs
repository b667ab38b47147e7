pub mod ambient;
pub mod calibration;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod idle;
pub mod mixer;
pub mod modal;
pub mod playback;
pub mod scale;
pub mod session;
pub mod settings;
pub mod state;
pub mod station;

pub use ambient::*;
pub use calibration::*;
pub use catalog::*;
pub use error::{Result, StationError};
pub use idle::*;
pub use mixer::*;
pub use modal::*;
pub use playback::*;
pub use scale::*;
pub use session::*;
pub use settings::*;
pub use state::*;
pub use station::*;
