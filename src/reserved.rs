// src/reserved.rs
// Reserved elements: fixed preimages that ordinary content is not expected to hit.

use crate::groups::GroupVersion;
use crate::hosh::Hosh;
use crate::kind::ElementKind;

pub fn rho_bytes(index: u64) -> Vec<u8> {
    format!("<RESERVED ELEMENT: rho_{index}>").into_bytes()
}

/// Element tagging the `index`-th reserved slot.
pub fn rho(index: u64, version: &'static GroupVersion) -> Hosh {
    Hosh::from_blob(&rho_bytes(index), ElementKind::Generic, version)
}

pub fn removal_bytes(field: &str) -> Vec<u8> {
    format!("<RESERVED ELEMENT: DELETE VALUE AT FIELD {field}>").into_bytes()
}

/// Element marking the deletion of `field`.
pub fn removal(field: &str, version: &'static GroupVersion) -> Hosh {
    Hosh::from_blob(&removal_bytes(field), ElementKind::Generic, version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids() {
        let v = GroupVersion::default_version();
        assert_eq!(rho(1, v).id(), "L9.Vd4B6O6z0WdCgyk4mx1v118i91N.DkR7nS5Ua");
        assert_eq!(rho(2, v).id(), "Od4uNccS.19C9PuEHnzB-VK0GKFajq5VJUJi1rCf");
        assert_eq!(rho_bytes(2), b"<RESERVED ELEMENT: rho_2>");
        assert_eq!(removal("_myfield", v).id(), "zZgRpxed-6aboKQ39.v5.HfBjr3j8WJlDwYVvUpi");
        assert_eq!(removal("myfield", v).id(), "eE-IoUO1EiZkxKkRyrXJcgXHc0pTD2As7IODrxTc");
        assert_eq!(removal_bytes("myfield"), b"<RESERVED ELEMENT: DELETE VALUE AT FIELD myfield>");
    }

    #[test]
    fn other_versions() {
        let v = GroupVersion::ut64_4();
        assert_eq!(rho(1, v).version(), v);
        assert_eq!(rho(1, v).id().len(), 64);
        assert_ne!(removal("a", v), removal("b", v));
    }
}
