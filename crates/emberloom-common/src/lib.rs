pub mod endpoint;
pub mod errors;
pub mod id;
pub mod journal;

pub use endpoint::{parse_endpoint, validate_endpoint, EndpointError};
pub use errors::{ConfigError, EmberloomError, HostError, PlatformError, ShellError};
pub use id::{new_id, SessionId};
pub use journal::{ErrorJournal, ErrorRecord};

pub type Result<T> = std::result::Result<T, EmberloomError>;
