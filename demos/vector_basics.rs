use vctr::{are_perpendicular, dot_product, unit_vector, vector, Vector};

fn main() -> Result<(), vctr::VError> {
    let a = vector![7.0, 3.0, 9.0, 12.0];
    let b = vector![2.0, 8.0, 4.0, 17.0];

    println!("a + b = {}", a.add(&b)?);
    println!("a - b = {}", a.subtract(&b)?);
    println!("a . b = {}", dot_product(&a, &b)?);
    println!("|a| = {:.4}", a.magnitude());
    println!("a / |a| = {:?}", unit_vector(&a)?);
    println!("perpendicular: {}", are_perpendicular(&vector![1, 0], &vector![0, 1])?);

    // large enough to take the parallel path
    let big: Vector<f64> = (0..100_000).map(|i| i as f64).collect();
    let ones = Vector::filled(big.dimensions(), 1.0);
    println!("sum 0..100000 = {}", dot_product(&big, &ones)?);

    let mut v = vector![1, 2, 3];
    let moved = v.take();
    println!("moved = {moved}, source now has {} dimensions", v.dimensions());

    if let Err(e) = a.add(&vector![1.0]) {
        println!("error: {e}");
    }
    Ok(())
}
