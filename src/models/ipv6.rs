//! IPv6 block arithmetic and the per-VLAN IPv6 addressing scheme.
//!
//! Every inventoried VLAN gets a unique-local /64 built from its VLAN number,
//! plus a link-local address offset by the same number.

use crate::config;
use crate::error::InventoryError;
use std::error::Error;
use std::net::Ipv6Addr;

/// Maximum length for an IPv6 prefix (128 bits).
const MAX_LENGTH: u8 = 128;

/// Get the network address for a given IPv6 address and prefix length.
fn cut_addr(addr: Ipv6Addr, len: u8) -> Result<Ipv6Addr, Box<dyn Error>> {
    if len > MAX_LENGTH {
        return Err("Network length is too long".into());
    }
    let bits = u128::from(addr);
    let network = match len {
        0 => 0,
        _ => bits & (u128::MAX << (MAX_LENGTH - len)),
    };
    Ok(Ipv6Addr::from(network))
}

/// IPv6 block in CIDR notation.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv6 {
    addr: Ipv6Addr,
    mask: u8,
}

impl Ipv6 {
    /// Create a new [`Ipv6`] from a CIDR string (e.g. "fd65:a1a8:60ad:42::/64").
    ///
    /// Host bits are cleared, so the stored address is always the network.
    pub fn new(addr_cidr: &str) -> Result<Ipv6, Box<dyn Error>> {
        let (addr, mask) = addr_cidr
            .trim()
            .split_once('/')
            .ok_or("Invalid address/mask")?;
        let addr: Ipv6Addr = addr
            .parse()
            .map_err(|_| format!("Invalid address {addr}"))?;
        Ipv6::from_parts(addr, mask.parse()?)
    }

    /// Block of length `mask` containing `addr`.
    pub fn from_parts(addr: Ipv6Addr, mask: u8) -> Result<Ipv6, Box<dyn Error>> {
        Ok(Ipv6 {
            addr: cut_addr(addr, mask)?,
            mask,
        })
    }

    /// Network address of the block.
    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    /// Prefix length (0-128).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Number of host bits in the block.
    fn host_bits(&self) -> u8 {
        MAX_LENGTH.saturating_sub(self.mask)
    }

    /// Address `offset` positions above the network address (index 0).
    pub fn nth(&self, offset: u128) -> Result<Ipv6Addr, Box<dyn Error>> {
        let host_bits = self.host_bits();
        if host_bits < MAX_LENGTH && offset >> host_bits != 0 {
            return Err(format!("Offset {offset} is outside {self}").into());
        }
        Ok(Ipv6Addr::from(u128::from(self.addr) + offset))
    }

    #[cfg(test)]
    fn contains(&self, addr: Ipv6Addr) -> bool {
        cut_addr(addr, self.mask).map_or(false, |net| net == self.addr)
    }
}

impl std::fmt::Display for Ipv6 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

/// IPv6 addressing reserved for one VLAN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv6Fields {
    /// The VLAN's unique-local /64.
    pub prefix: Ipv6,
    pub gateway: Ipv6Addr,
    /// First address of the reserved host window.
    pub start: Ipv6Addr,
    /// Last address of the reserved host window.
    pub stop: Ipv6Addr,
    pub link_local: Ipv6Addr,
    pub link_local_prefix_len: u8,
}

impl Ipv6Fields {
    /// Prefix length of the derived block.
    pub fn prefix_len(&self) -> u8 {
        self.prefix.mask
    }

    /// Link-local address with its prefix length, e.g. "fe80::2a/64".
    pub fn link_local_cidr(&self) -> String {
        format!("{}/{}", self.link_local, self.link_local_prefix_len)
    }
}

/// Derive the IPv6 addressing for a VLAN number.
///
/// The number is written in decimal into the fourth hextet of the
/// unique-local template, so 42 becomes `fd65:a1a8:60ad:42::/64`.
/// Numbers longer than four digits do not fit a hextet.
pub fn derive_ipv6(vlan_number: u32) -> Result<Ipv6Fields, Box<dyn Error>> {
    let hextet = vlan_number.to_string();
    if hextet.len() > 4 {
        return Err(InventoryError::InvalidVlanNumber(vlan_number).into());
    }
    let prefix = Ipv6::new(&format!(
        "{}:{hextet}::/{}",
        config::IPV6_PREFIX_HEAD,
        config::IPV6_PREFIX_LEN
    ))?;
    let link_local_block =
        Ipv6::from_parts(config::LINK_LOCAL_NETWORK, config::LINK_LOCAL_PREFIX_LEN)?;

    Ok(Ipv6Fields {
        prefix,
        gateway: prefix.nth(config::IPV6_GATEWAY_OFFSET)?,
        start: prefix.nth(config::IPV6_START_OFFSET)?,
        stop: prefix.nth(config::IPV6_STOP_OFFSET)?,
        link_local: link_local_block.nth(u128::from(vlan_number))?,
        link_local_prefix_len: link_local_block.mask(),
    })
}
