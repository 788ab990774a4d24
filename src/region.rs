use crate::models::local::ExternalSession;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

const DEPLOYMENT_ARG: &str = "-ares-deployment=";
const HOST_APP: &str = "host_app";

/// Scan external sessions for the `-ares-deployment=<region>` launch argument.
///
/// The `host_app` entry is the Riot Client itself and is skipped before it is
/// decoded. Each remaining block is decoded on its own; one that does not
/// look like a session simply yields no region. The first match wins; keys
/// are visited in sorted order.
pub fn region_from_sessions(sessions: &BTreeMap<String, Value>) -> Option<String> {
    sessions
        .iter()
        .filter(|(key, _)| key.as_str() != HOST_APP)
        .filter_map(|(_, block)| ExternalSession::deserialize(block).ok())
        .find_map(|session| deployment_region(&session))
}

fn deployment_region(session: &ExternalSession) -> Option<String> {
    session
        .launch_configuration
        .arguments
        .iter()
        .filter_map(|arg| arg.strip_prefix(DEPLOYMENT_ARG))
        .find(|region| !region.is_empty())
        .map(str::to_string)
}

/// The three regional base URLs, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionalUrls {
    pub pd: String,
    pub glz: String,
    pub shared: String,
}

impl RegionalUrls {
    pub fn for_region(region: &str) -> Self {
        Self {
            pd: format!("https://pd.{region}.a.pvp.net"),
            glz: format!("https://glz-{region}-1.{region}.a.pvp.net"),
            shared: format!("https://shared.{region}.a.pvp.net"),
        }
    }

    /// Every family pointed at one base.
    pub fn uniform(base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        Self {
            pd: base.clone(),
            glz: base.clone(),
            shared: base,
        }
    }
}
