use shelf_domain::route::ContentKey;
use shelf_kernel::api::ApiEndpointError;
use shelf_kernel::registry::RegistryValidationError;
use std::borrow::Cow;

/// Start-up failures. Any of these keeps the shell from mounting.
#[shelf_derive::shelf_error]
pub enum BootstrapError {
    #[error("Route registry error{}: {source}", format_context(.context))]
    Registry { source: RegistryValidationError, context: Option<Cow<'static, str>> },

    #[error("API endpoint error{}: {source}", format_context(.context))]
    Api { source: ApiEndpointError, context: Option<Cow<'static, str>> },

    #[error("Route at index {index} names unknown content '{key}'{}", format_context(.context))]
    UnknownContent { index: usize, key: ContentKey, context: Option<Cow<'static, str>> },
}
