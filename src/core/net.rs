// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only). Plain http:// only; no TLS.

use std::{error::Error, io::{Read, Write}, net::TcpStream, time::Duration};
use crate::config::consts::{NET_TIMEOUT_SECS, USER_AGENT};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpUrl {
    pub host: String,
    pub port: u16,
    pub path: String,
}

pub fn parse_http_url(url: &str) -> Result<HttpUrl, Box<dyn Error>> {
    if url.starts_with("https://") {
        return Err(format!("https is not supported, download the document and pass a path: {url}").into());
    }
    let rest = url.strip_prefix("http://").ok_or_else(|| format!("Not an http:// URL: {url}"))?;

    let (authority, path) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, "/"),
    };
    if authority.is_empty() {
        return Err(format!("Missing host in URL: {url}").into());
    }

    let (host, port) = match authority.rsplit_once(':') {
        Some((h, p)) => (h, p.parse::<u16>().map_err(|_| format!("Bad port in URL: {url}"))?),
        None => (authority, 80),
    };

    Ok(HttpUrl { host: s!(host), port, path: s!(path) })
}

pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    let HttpUrl { host, port, path } = parse_http_url(url)?;

    let mut s = TcpStream::connect((host.as_str(), port))?;
    s.set_read_timeout(Some(Duration::from_secs(NET_TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(NET_TIMEOUT_SECS)))?;

    let req = format!(
        "GET {path} HTTP/1.0\r\nHost: {host}\r\nUser-Agent: {USER_AGENT}\r\nAccept: application/json\r\nConnection: close\r\n\r\n"
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if status.split_whitespace().nth(1) != Some("200") {
        return Err(format!("HTTP error: {status} {url}").into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}
