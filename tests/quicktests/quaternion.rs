use exercises::quaternion::Quaternion;

use quickcheck::{Arbitrary, Gen};

/// A quaternion with small integer components so every product is exact.
#[derive(Clone, Copy, Debug)]
struct Exact(Quaternion);

impl Arbitrary for Exact {
    fn arbitrary(g: &mut Gen) -> Self {
        let components: Vec<f64> = (0..4).map(|_| f64::from(i8::arbitrary(g))).collect();
        Exact(Quaternion::new(
            components[0],
            components[1],
            components[2],
            components[3],
        ))
    }
}

#[quickcheck]
fn times_is_associative(p: Exact, q: Exact, r: Exact) -> bool {
    (p.0 * q.0) * r.0 == p.0 * (q.0 * r.0)
}

#[quickcheck]
fn conjugate_reverses_products(p: Exact, q: Exact) -> bool {
    (p.0 * q.0).conjugate() == q.0.conjugate() * p.0.conjugate()
}

#[quickcheck]
fn times_i_twice_negates(q: Exact) -> bool {
    q.0 * Quaternion::I * Quaternion::I == -q.0
}
