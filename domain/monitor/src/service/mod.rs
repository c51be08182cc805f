mod status_parser;

#[rustfmt::skip]
pub use {
    status_parser::{JobStatusResponseParser, JobStatusResponseParserProvider, RemoteJobStatusService},
};
