use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// filter; later calls are ignored.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,protobot=info"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_init_twice() {
        super::init();
        super::init();
        tracing::info!("logging initialised");
    }
}
