//! Published identifiers that independent implementations must reproduce.

use hosh::{reserved, Config, ElementKind, GroupVersion, Hosh, HoshError};
use num_bigint::BigUint;

#[test]
fn default_version_scenarios() {
    let a = Hosh::hash(b"lots of data");
    let b = Hosh::hash(b"lots of data 2");
    assert_eq!(&a * &b * b.inv(), a);
    assert_eq!((&a * &b).id(), "ALiaB9XPu.MoIwwoTPYrxqkGfVpktOgUv0tDB3IB");

    let c = Hosh::hash(b"a");
    assert_eq!((&a * &b) * &c, &a * (&b * &c));
    assert_eq!(Hosh::identity(GroupVersion::default_version()).id(), "0".repeat(40));
    for k in 1..=4 {
        assert_eq!(c.root(k).unwrap().pow(k).unwrap(), c);
    }
}

#[test]
fn central_request_yields_central_layout() {
    for version in GroupVersion::all() {
        let z = Hosh::from_blob(b"central", ElementKind::Central, version);
        assert_eq!(z.kind(), ElementKind::Central);
        assert!(z.cells()[..5].iter().all(|&c| c == 0));
        let id = z.id();
        assert_eq!(&id[1..2], "_");
        assert!(id[2 + version.hexsize()..].chars().all(|c| c == '_'));
    }
}

#[test]
fn sdff_across_strata_ut64() {
    let v = GroupVersion::ut64_4();
    let ids = [
        (ElementKind::Central, "b_eb59ed419924b52_______________________________________________"),
        (ElementKind::Intermediate, "tE_8e5c560bbad4f9fc2a4a77a2464954241764b19b52828cada8d31df557cac"),
        (ElementKind::Generic, "E95vAx690xMQic14Q6w0nn10CHHkjoVZLJ1MuIfYZYQlRTgqitzXt2X8WhFeXcxq"),
    ];
    for (kind, id) in ids {
        let h = Hosh::from_blob(b"sdff", kind, v);
        assert_eq!(h.id(), id);
        // Recomputed from cells, not taken from the digest.
        assert_eq!(Hosh::from_cells(h.cells(), v).unwrap().id(), id);
        assert_eq!(kind.legacy_name().parse::<ElementKind>().unwrap(), kind);
    }
}

#[test]
fn rank_to_id() {
    let identity = Config::default().identity();
    let n: BigUint = "872696823986235926596245".parse().unwrap();
    assert_eq!(identity.try_mul(n).unwrap().id(), "00_dea47151b84085dfcc8b00000000000000000");
    let n: BigUint = "7647544756746324134134".parse().unwrap();
    assert_eq!(Hosh::from_rank(&n, GroupVersion::ut40_4()).unwrap().id(), "00_e49c1c505dcd0039e91000000000000000000");
}

#[test]
fn short_ids() {
    let h = Hosh::hash(b"asdf86fasd");
    assert_eq!(h.id(), "voh8t1KrYmzCqpyrUO9.5QbGdouoZsnExarMSa34");
    assert_eq!(h.sid(), "lϊӑơӫǯÃϺŮϳȐŁЬĽҪƉǏԛȪƜfÞӠȕՇ");
    assert_eq!(Hosh::from_sid(h.sid()).unwrap(), h);
}

#[test]
fn reserved_elements() {
    let v = GroupVersion::default_version();
    assert_eq!(reserved::rho(1, v).id(), "L9.Vd4B6O6z0WdCgyk4mx1v118i91N.DkR7nS5Ua");
    assert_eq!(reserved::removal("myfield", v).id(), "eE-IoUO1EiZkxKkRyrXJcgXHc0pTD2As7IODrxTc");
}

#[test]
fn errors_surface_verbatim() {
    assert!(matches!(Hosh::from_id("a"), Err(HoshError::WrongIdentifier(_))));
    let err = Hosh::hash(b"x").try_mul(&Hosh::identity(GroupVersion::ut16_4())).unwrap_err();
    assert_eq!(err.to_string(), "Incompatible operands: 40 digits != 16 digits");
    let err = Hosh::from_cells(&[0, 0, u64::MAX, 0, 0, 0], GroupVersion::ut32_4()).unwrap_err();
    assert_eq!(err, HoshError::CellValueTooHigh { value: u64::MAX, p: 4294967291 });
}
