use rational::{gcd, Rational, RationalError};

fn main() -> Result<(), RationalError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let r1: Rational = Rational::new(3, 4);
    let mut r2: Rational = Rational::default();
    println!("r1: {r1}");
    println!("r2: {r2}");

    r2.set_numer(1);
    r2.set_denom(2)?;
    println!("r2: {r2}");

    println!("sum: {}", r1 + r2);
    println!("diff: {}", r1 - r2);

    let r3 = Rational::new(-2, 3);
    println!("r3: {r3}");

    let mut r4 = Rational::new(40, -60);
    println!("r4: {r4}");

    let mut r5 = r4;
    println!("r5: {r5}");

    println!("GCD of 40 and 60: {}", gcd(40, 60));

    if let Err(err) = r5.set_denom(0) {
        println!("r5.set_denom(0): {err}");
    }
    println!("r5: {r5}");

    r4.set_denom(-10)?;
    println!("r4: {r4}");

    println!("r6: {}", r1 + r2);
    println!("r7: {}", r1 - r2);
    println!("r8: {}", 5 + r1);
    println!("r9: {}", r1 + 5);

    let mut r10 = Rational::new(1, 2);
    println!("r10++: {}", r10.post_increment());
    println!("r10: {r10}");
    println!("++r10: {}", r10.increment());
    println!("--r10: {}", r10.decrement());
    println!("r10 < r1: {}", r10 < r1);
    println!("r10 == 3/2: {}", r10 == "3/2".parse::<Rational>()?);

    let mut r11 = r1;
    r11 += r2;
    println!("r11: {r11}");

    Ok(())
}
