use std::borrow::Cow;

#[shelf_derive::shelf_error]
pub enum ApiEndpointError {
    #[error("Invalid API URL{}: {source}", format_context(.context))]
    Url { source: url::ParseError, context: Option<Cow<'static, str>> },

    #[error("Unsupported API URL{}: {message}", format_context(.context))]
    Unsupported { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
