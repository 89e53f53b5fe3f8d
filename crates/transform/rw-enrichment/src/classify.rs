//! Token classification for IP/subnet entries.

use ip_network::IpNetwork;
use std::net::IpAddr;

/// Classification of a raw IP/subnet token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A bare IPv4 or IPv6 address, no prefix.
    SingleIp,

    /// A full-length prefix (`/32` for IPv4, `/128` for IPv6); semantically
    /// a single host and resolved against the IP table.
    HostRoute,

    /// A network with a non-host prefix; resolved against the subnet tables.
    Subnet,

    /// Not a syntactically valid address or network.
    Unparseable,
}

/// Classifies a raw token.
///
/// The token is trimmed first. Host bits under the prefix are tolerated, so
/// `192.168.5.10/24` classifies as a subnet the same way `192.168.5.0/24`
/// does. Never panics; anything that is not a valid address or network comes
/// back as [`EntryKind::Unparseable`].
pub fn classify(token: &str) -> EntryKind {
    let token = token.trim();
    if token.is_empty() {
        return EntryKind::Unparseable;
    }

    let (addr, prefix) = match token.split_once('/') {
        None => {
            return if token.parse::<IpAddr>().is_ok() {
                EntryKind::SingleIp
            } else {
                EntryKind::Unparseable
            };
        }
        Some(parts) => parts,
    };

    let addr: IpAddr = match addr.parse() {
        Ok(a) => a,
        Err(_) => return EntryKind::Unparseable,
    };
    let prefix: u8 = match prefix.parse() {
        Ok(p) => p,
        Err(_) => return EntryKind::Unparseable,
    };

    // Validates the prefix length for the address family without requiring
    // the host bits to be zero.
    if IpNetwork::new_truncate(addr, prefix).is_err() {
        return EntryKind::Unparseable;
    }

    let full_length = match addr {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    };
    if prefix == full_length {
        EntryKind::HostRoute
    } else {
        EntryKind::Subnet
    }
}
