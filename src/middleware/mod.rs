mod request_logging;

pub(crate) use request_logging::request_logging_middleware;
