pub use std::result::Result as StdResult;

pub use anyhow::{anyhow, bail, Context};
pub use tracing::{debug, error, info, instrument, warn};

pub type Result<T = (), E = anyhow::Error> = StdResult<T, E>;
