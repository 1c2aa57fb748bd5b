//! Client address resolution

use std::{
    convert::Infallible,
    fmt,
    net::{IpAddr, SocketAddr},
};

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, request::Parts},
};

use crate::state::AppState;

const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";

/// Address of the calling client, if it can be determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIp(pub Option<IpAddr>);

impl fmt::Display for ClientIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ip) => ip.fmt(f),
            None => f.write_str("unknown"),
        }
    }
}

impl FromRequestParts<AppState> for ClientIp {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(ClientIp(resolve_client_ip(
            &parts.headers,
            peer,
            state.config().server.trust_forwarded_headers,
        )))
    }
}

/// Pick the client address from proxy headers (when trusted) or the socket peer
pub fn resolve_client_ip(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    trust_forwarded_headers: bool,
) -> Option<IpAddr> {
    if trust_forwarded_headers {
        let forwarded: Option<IpAddr> = header_str(headers, X_FORWARDED_FOR)
            .and_then(|value| value.split(',').next())
            .and_then(|first| first.trim().parse().ok());
        let real_ip = || -> Option<IpAddr> {
            header_str(headers, X_REAL_IP).and_then(|value| value.trim().parse().ok())
        };

        if let Some(ip) = forwarded.or_else(real_ip) {
            return Some(ip);
        }
    }

    peer.map(|addr| addr.ip())
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
