// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only).
// HTTP/1.0 + Connection: close means the server ends the stream
// for us (no chunked transfer to deal with).

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::params::{HTTP_PORT, HTTP_TIMEOUT_SECS, USER_AGENT};

/// Split `http://host[:port]/path` into (host, port, path).
/// A bare `host/path` is accepted; https is not (no TLS here).
pub fn split_url(url: &str) -> Result<(String, u16, String), Box<dyn std::error::Error>> {
    let rest = if let Some(r) = url.strip_prefix("http://") {
        r
    } else if url.starts_with("https://") {
        return Err(format!("https not supported: {}", url).into());
    } else {
        url
    };

    let (authority, path) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, "/"),
    };
    if authority.is_empty() {
        return Err(format!("No host in url: {}", url).into());
    }

    let (host, port) = match authority.rfind(':') {
        Some(i) => (&authority[..i], authority[i + 1..].parse::<u16>()?),
        None => (authority, HTTP_PORT),
    };

    Ok((host.to_string(), port, path.to_string()))
}

/// Resolve a script `src` attribute against the page it came from.
/// Absolute and protocol-relative URLs pass through; `/rooted` and
/// relative paths are joined onto the page's host and directory.
pub fn resolve_href(page_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    if let Some(rest) = href.strip_prefix("//") {
        return format!("http://{}", rest);
    }

    let (host, port, page_path) = match split_url(page_url) {
        Ok(t) => t,
        Err(_) => return href.to_string(),
    };
    let authority = if port == HTTP_PORT { host } else { format!("{}:{}", host, port) };

    if href.starts_with('/') {
        return format!("http://{}{}", authority, href);
    }
    let dir = match page_path.rfind('/') {
        Some(i) => &page_path[..i + 1],
        None => "/",
    };
    format!("http://{}{}{}", authority, dir, href)
}

pub fn http_get(url: &str) -> Result<String, Box<dyn std::error::Error>> {
    let (host, port, path) = split_url(url)?;

    let mut s = TcpStream::connect((host.as_str(), port))?;
    s.set_read_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n\r\n",
        path, host, USER_AGENT
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}
