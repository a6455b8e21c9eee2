use std::path::PathBuf;

use thiserror::Error;

use crate::network::address::AddressFamily;

#[derive(Debug, Error)]
pub enum LinkError {
    /// An address whose declared family disagrees with its byte length.
    #[error("invalid {family} address: expected {} bytes, got {len}", .family.octet_len())]
    InvalidAddressFormat { family: AddressFamily, len: usize },

    /// A system file backing the link source could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PartialEq for LinkError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::InvalidAddressFormat { family: a, len: x },
                Self::InvalidAddressFormat { family: b, len: y },
            ) => a == b && x == y,
            (Self::Io { path: a, source: e1 }, Self::Io { path: b, source: e2 }) => {
                a == b && e1.kind() == e2.kind()
            }
            _ => false,
        }
    }
}
