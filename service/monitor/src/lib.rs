mod factory;
mod parser;
mod status_check;

pub use factory::JobStatusResponseParserFactory;
pub use parser::*;
pub use status_check::RemoteJobStatusServiceImpl;
