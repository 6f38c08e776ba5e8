//! Kore symbolic multivector demo.
//!
//! Usage: RUST_LOG=debug cargo run --example multivector_demo -p kore-symbolic

use kore_symbolic::{AlgebraDescriptor, BladeMask, Expr, CGA3D, PGA3D};

fn describe(name: &str, algebra: &AlgebraDescriptor) {
    let names: Vec<&str> = algebra.basis_names().collect();
    println!("{:<6} dim={} signature={:?} basis={:?}", name, algebra.dimension(), algebra.signature(), names);
    if !algebra.off_diagonal().is_empty() {
        println!("{:<6} off-diagonal={:?}", "", algebra.off_diagonal());
    }
    match algebra.check_consistency() {
        Ok(()) => println!("{:<6} consistent", ""),
        Err(e) => println!("{:<6} inconsistent: {}", "", e),
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Kore Symbolic Multivectors ===\n");
    describe("PGA3D", &PGA3D);
    describe("CGA3D", &CGA3D);
    println!();

    // A PGA3D motor-like element: scalar + bivector part.
    let a = Expr::symbol("a");
    let b = Expr::symbol("b");
    let blades = [BladeMask::SCALAR, BladeMask::new(0b0011), BladeMask::new(0b0110), BladeMask::new(0b0011)];
    let e = Expr::multivector([
        (blades[0], a.clone()),
        (blades[1], Expr::int(2) * b.clone()),
        (blades[2], Expr::int(1)),
        (blades[3], b.clone()),
    ]);
    let Some(m) = e.as_multivector() else {
        return;
    };

    println!("expression:  {}", e);
    println!("grades:      {:?}", m.grades());
    for (mask, coeff) in m.iter() {
        println!("  {:<4} {:<6} grade {}  coefficient {}", mask, PGA3D.blade_name(mask), mask.grade(), coeff);
    }
    println!();

    let substituted = e.substitute(&a, &Expr::int(5)).substitute(&b, &Expr::int(3));
    println!("a=5, b=3:    {}", substituted);
    let evaluated = substituted.replace(|node| node.eval());
    println!("evaluated:   {}", evaluated);
    println!("latex:       {}", evaluated.latexise());
    println!();

    // Hooks the multivector node does not support yet.
    match e.to_sympy() {
        Ok(s) => println!("sympy:       {}", s),
        Err(err) => println!("sympy:       {}", err),
    }
    match e.invert(&Expr::int(0), &a) {
        Ok(roots) => println!("invert:      {:?}", roots),
        Err(err) => println!("invert:      {}", err),
    }
}
