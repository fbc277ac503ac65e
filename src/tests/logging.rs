#[cfg(test)]
mod tests {
    use crate::logging::builder;
    use log::{Level, Log, Metadata};

    #[test]
    fn test_debug_enables_request_logging() {
        let logger = builder(true).build();
        let metadata = Metadata::builder()
            .level(Level::Info)
            .target("infoblox_client::api::infoblox")
            .build();
        assert!(logger.enabled(&metadata));
    }

    #[test]
    fn test_debug_filter_stops_at_debug_level() {
        let logger = builder(true).build();
        let metadata = Metadata::builder()
            .level(Level::Trace)
            .target("infoblox_client::api::infoblox")
            .build();
        assert!(!logger.enabled(&metadata));
    }
}
