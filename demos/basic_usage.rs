// ============================================================================
// Basic Usage Example
// ============================================================================

use fixed_tuple::prelude::*;

#[cfg(feature = "logging")]
fn init_logging() {
    if let Err(err) = fixed_tuple::logging::init_logging(tracing::Level::DEBUG) {
        eprintln!("logging disabled: {}", err);
    }
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}

fn main() -> Result<(), TupleError> {
    init_logging();

    println!("=== Fixed Tuple Example ===\n");

    // Component-wise arithmetic
    let a = Vector3i32::new([1, 2, 3]);
    let b = Vector3i32::new([3, 2, 1]);
    println!("a       = {}", a);
    println!("b       = {}", b);
    println!("a + b   = {}", a + b);
    println!("a * 10  = {}", a * 10);

    // All-components relations are a partial order
    println!("\n=== Relations ===");
    println!("a < b (all components)   : {}", a.all_lt(&b));
    println!("a > b (all components)   : {}", a.all_gt(&b));
    println!("a <= (3,3,3)             : {}", a.all_le(&Vector3i32::splat(3)));

    // Increment / decrement
    println!("\n=== Steps ===");
    let mut counter = Vector4u64::from_leading(&[10, 20])?;
    let before = counter.post_increment();
    println!("before  = {}", before);
    println!("after   = {}", counter);

    // Indexing policies
    println!("\n=== Indexing ===");
    let mut legacy = Vector2u32::xy(1, 2);
    println!("at_clamped(5) = {}", legacy.at_clamped(5));
    match legacy.at(5) {
        Ok(value) => println!("at(5) = {}", value),
        Err(err) => println!("at(5) failed: {}", err),
    }

    // Checked arithmetic
    println!("\n=== Checked Arithmetic ===");
    let v = Vector2u32::new([5, 5]);
    match v.checked_div(&Vector2u32::new([0, 5])) {
        Ok(result) => println!("v / (0, 5) = {}", result),
        Err(err) => println!("v / (0, 5) failed: {}", err),
    }
    let halved = v.checked_div_scalar(5)?;
    println!("v / 5 = {}", halved);

    // Formatting
    println!("\n=== Formatting ===");
    let wide = Vector6d::new([0.5, 1.25, 2.0, 3.5, 4.75, 6.0]);
    println!("{:.2}", wide);
    let compact = FormatConfig::compact();
    compact.validate()?;
    println!("{}", wide.display_with(&compact));

    Ok(())
}
