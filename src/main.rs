use hosh::{compose, reserved, Config, ElementKind, GroupVersion, Hosh};

fn main() -> hosh::Result<()> {
    println!("=== HOSH: Operable Identifiers over UT(4, p) ===");
    let config = Config::default();
    println!("Group: {:?}", config.version);

    // 1. Hash content
    let a = config.hosh(b"Some large binary content...");
    let b = config.hosh(b"Some other binary content. Might be, e.g., an action or another large content.");
    let c = &a * &b;
    println!("\na = {a}\nb = {b}");
    println!("{a} * {b} = {c}");

    // 2. Inverse and identity
    let identity = config.identity();
    println!("\n~b = {}", b.inv());
    println!("{b} * {} = {} = identity", b.inv(), &b * b.inv());
    println!("{b} * {identity} = {} = b", &b * &identity);
    println!("{c} * {} = {} = a", b.inv(), &c * b.inv());
    println!("{} * {c} = {} = b", a.inv(), a.inv() * &c);
    println!("{c} / {b} = {} = a", &c / &b);

    // 3. Order matters, bracketing does not
    println!("\n{} != {}", &a * &b, &b * &a);
    println!("{} = {}", &a * (&b * &c), (&a * &b) * &c);

    // 4. Strata
    for kind in [ElementKind::Central, ElementKind::Intermediate, ElementKind::Generic] {
        let h = Hosh::from_blob(b"654", kind, config.version);
        println!("{kind:>12} ({:>9}): {h}", kind.legacy_name());
    }

    // 5. Roots, reversal and short ids
    let r = a.root(3)?;
    println!("\ncube root of a: {r}, cubed: {}", r.pow(3)?);
    println!("rev(a) = {}, rev(rev(a)) = {}", a.rev(), a.rev().rev());
    println!("short(a) = {}", config.clone().short(true).render(&a));

    // 6. Decomposition
    let parts = a.components(0, 4, 4)?;
    for (i, p) in parts.iter().enumerate() {
        println!("a[{i}/4] = {p}");
    }
    println!("product of parts = {}", compose(&parts)?);

    // 7. Reserved elements and other versions
    println!("\nrho_1 = {}", reserved::rho(1, config.version));
    for version in GroupVersion::all() {
        println!("{version:?}: {}", Hosh::from_blob(b"sdff", ElementKind::Generic, version));
    }
    Ok(())
}
