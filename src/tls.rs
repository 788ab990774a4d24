//! HTTP clients for the two sides of a session.
//!
//! The local client API serves a self-signed certificate, so its client skips
//! verification. The regional web API is verified against the webpki roots
//! but only offers the cipher suites below.

use crate::error::ValorantError;
use rustls::crypto::{ring, CryptoProvider};
use rustls::{CipherSuite, SupportedCipherSuite};
use std::sync::Arc;

const ALLOWED_TLS12_SUITES: &[CipherSuite] = &[
    CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
    CipherSuite::TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256,
    CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
    CipherSuite::TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
    CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
    CipherSuite::TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
];

fn is_allowed(suite: &SupportedCipherSuite) -> bool {
    match suite {
        SupportedCipherSuite::Tls13(_) => true,
        SupportedCipherSuite::Tls12(_) => ALLOWED_TLS12_SUITES.contains(&suite.suite()),
    }
}

fn remote_provider() -> CryptoProvider {
    let mut provider = ring::default_provider();
    provider.cipher_suites.retain(is_allowed);
    provider
}

pub fn remote_tls_config() -> Result<rustls::ClientConfig, ValorantError> {
    let mut roots = rustls::RootCertStore::empty();
    roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = rustls::ClientConfig::builder_with_provider(Arc::new(remote_provider()))
        .with_safe_default_protocol_versions()?
        .with_root_certificates(roots)
        .with_no_client_auth();
    Ok(config)
}

pub fn remote_client() -> Result<reqwest::Client, ValorantError> {
    Ok(reqwest::Client::builder()
        .use_preconfigured_tls(remote_tls_config()?)
        .build()?)
}

pub fn local_client() -> Result<reqwest::Client, ValorantError> {
    Ok(reqwest::Client::builder()
        .danger_accept_invalid_certs(true)
        .build()?)
}
