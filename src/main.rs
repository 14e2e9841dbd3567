use standard_bigint::dynamic::{BigInt, BigUint};
use standard_bigint::fixed::{I128, U256};

fn main() {
    println!("\n[BigUint]\n");

    let factorial: BigUint = (1..=50_u32).map(BigUint::from).product();
    println!("50! = {}", factorial);
    println!("50! = {:#x}", factorial);
    println!("trailing zero bits: {:?}", factorial.trailing_zeros());

    println!("\n[BigInt]\n");

    let mut x = BigInt::from(2);
    for i in 0..7 {
        x = if i % 3 == 2 { &x * -&x } else { &x * &x };
        println!("{}", x);
    }

    let (quot, rem) = x.div_rem(&BigInt::from(-1_000_000_007));
    println!("{} rem {}", quot, rem);
    println!("{:?}", "0xdead_beef".parse::<BigInt>());
    println!("{:?}", "12a".parse::<BigInt>());

    println!("\n[FixedInt]\n");

    println!("{} + 1 = {}", I128::MAX, I128::MAX + 1);
    println!("{:#x}", I128::from(-1));
    println!("{}", U256::MAX);
    println!("{:?}", U256::ONE.checked_div(U256::ZERO));
    println!("{}", BigInt::from(U256::MAX) + 1);
}
