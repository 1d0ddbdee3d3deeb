//! Serve command - run the submission proxy

use crate::cli::style::{arrow, Stylize};
use anstream::println;
use maestera::config::ProxyConfig;
use maestera::error::{Error, Result};
use maestera::server;
use maestera::types::FormPart;
use std::net::SocketAddr;
use std::time::Duration;

/// Run the serve command until Ctrl-C
pub async fn run_serve(bind: Option<SocketAddr>, timeout_secs: Option<u64>) -> Result<()> {
    let mut config = ProxyConfig::from_env()?;

    if let Some(bind) = bind {
        config.bind = bind;
    }
    if let Some(secs) = timeout_secs {
        if secs == 0 {
            return Err(Error::Config(
                "--timeout-secs must be a positive number of seconds".to_string(),
            ));
        }
        config.upstream_timeout = Duration::from_secs(secs);
    }

    println!(
        "{} Serving {} and {} on {}",
        arrow(),
        FormPart::Onboarding.route().accent(),
        FormPart::Instruments.route().accent(),
        config.bind.emphasis()
    );

    server::serve(&config).await
}
