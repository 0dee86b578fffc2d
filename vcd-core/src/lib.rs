pub mod client;
pub mod constants;
pub mod control_plane;
pub mod errors;
pub mod logging;

pub mod prelude {
    pub use crate::client::types::*;
    pub use crate::client::{
        SessionConfig,
        VcdClient,
        VcdError,
        is_not_found,
    };
    pub use crate::constants::*;
    #[cfg(feature = "mock")]
    pub use crate::control_plane::MockControlPlane;
    pub use crate::control_plane::ControlPlane;
    pub use crate::errors::EmptyResult;
}
