use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate unit tests for type-level arithmetic over small ranges of exponents. This
    // makes it much less likely that a mistake in one of the arithmetic impls goes unnoticed.
    let out_dir = env::var("OUT_DIR")?;

    let mut f = File::create(Path::new(&out_dir).join("integer_arithmetic.rs"))?;
    writeln!(f, "#[test]")?;
    writeln!(f, "fn all_sums_and_differences() {{")?;
    for n in -12..=12 {
        for k in -12..=12 {
            writeln!(
                f,
                "    assert_type_eq_all!(Sum<IntOf<{}>, IntOf<{}>>, IntOf<{}>);",
                n,
                k,
                n + k
            )?;
            writeln!(
                f,
                "    assert_type_eq_all!(Difference<IntOf<{}>, IntOf<{}>>, IntOf<{}>);",
                n,
                k,
                n - k
            )?;
        }
    }
    writeln!(f, "}}")?;

    let mut f = File::create(Path::new(&out_dir).join("dimension_arithmetic.rs"))?;
    writeln!(f, "#[test]")?;
    writeln!(f, "fn all_products_and_quotients() {{")?;
    for a in Exponents::new(2) {
        for b in Exponents::new(2) {
            writeln!(
                f,
                "    assert_type_eq_all!(Product<{}, {}>, {});",
                a,
                b,
                a.zip(b, |x, y| x + y)
            )?;
            writeln!(
                f,
                "    assert_type_eq_all!(Quotient<{}, {}>, {});",
                a,
                b,
                a.zip(b, |x, y| x - y)
            )?;
        }
    }
    writeln!(f, "}}")?;

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}

/// A dimension written out with its exponents as constants.
#[derive(Clone, Copy, Debug)]
struct Exponents([i8; 3]);

impl Exponents {
    /// Enumerate the dimensions whose exponents lie in `-bound..=bound` and sum to a multiple of
    /// three. Every exponent value still occurs on every axis, in a third of the combinations.
    fn new(bound: i8) -> impl Iterator<Item = Exponents> {
        let range = move || -bound..=bound;
        range().flat_map(move |d1| {
            range().flat_map(move |d2| {
                range()
                    .filter(move |d3| (d1 + d2 + d3).rem_euclid(3) == 0)
                    .map(move |d3| Exponents([d1, d2, d3]))
            })
        })
    }

    fn zip(self, other: Exponents, f: impl Fn(i8, i8) -> i8) -> Exponents {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;
        Exponents([f(a1, b1), f(a2, b2), f(a3, b3)])
    }
}

impl std::fmt::Display for Exponents {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [d1, d2, d3] = self.0;
        write!(f, "Dim<{}, {}, {}>", d1, d2, d3)
    }
}
