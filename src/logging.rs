use env_logger::Builder;
use log::LevelFilter;

/// Logger honouring `RUST_LOG`. With `debug` set, request and response
/// logging from this crate is shown even when `RUST_LOG` is unset.
pub fn builder(debug: bool) -> Builder {
    let mut builder = Builder::from_default_env();
    if debug {
        builder.filter_module("infoblox_client", LevelFilter::Debug);
    }
    builder
}
