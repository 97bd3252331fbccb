//! Print the rating factor catalog as JSON
//!
//! The quoting UI consumes this snapshot to render its "how your
//! premium is built" panels. Loads the CSV tables when present,
//! otherwise the built-in plan.

use rating_engine::RatingFactors;

fn main() {
    env_logger::init();

    let factors = RatingFactors::from_csv().unwrap_or_else(|e| {
        log::warn!("Falling back to built-in rating plan: {}", e);
        RatingFactors::default_pricing()
    });

    let catalog = factors.catalog();
    println!(
        "{}",
        serde_json::to_string_pretty(&catalog).expect("catalog serializes")
    );
}
