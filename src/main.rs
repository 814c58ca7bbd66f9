//! Stadium Billiard entry point
//!
//! Runs one φ-sweep at the right-cap apex and writes the resulting image
//! set as JSON to stdout, for external plotting tools to consume.
//! Optional positional args: `lam samples iterations` (defaults 2 100 5).

use std::f64::consts::FRAC_PI_8;
use std::process::exit;

use stadium_billiard::{ImageSet, SampleMode, Stadium};

fn parse_arg<T: std::str::FromStr>(arg: Option<String>, default: T) -> T {
    match arg {
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("unrecognized argument: {raw}");
                exit(2);
            }
        },
        None => default,
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let lam: f64 = parse_arg(args.next(), 2.0);
    let samples: usize = parse_arg(args.next(), 100);
    let iterations: usize = parse_arg(args.next(), 5);

    let stadium = match Stadium::new(lam) {
        Ok(stadium) => stadium,
        Err(e) => {
            log::error!("{e}");
            exit(1);
        }
    };

    log::info!(
        "sweeping {} phi samples at theta = 0 for {} iterations, lam = {}",
        samples,
        iterations,
        lam
    );

    let image = match ImageSet::sweep_phi(
        &stadium,
        0.0,
        (-FRAC_PI_8, FRAC_PI_8),
        samples,
        iterations,
        SampleMode::EvenlySpaced,
    ) {
        Ok(image) => image,
        Err(e) => {
            log::error!("sweep failed: {e}");
            exit(1);
        }
    };

    log::info!(
        "built {} cross-sections of {} points each",
        image.cross_sections.len(),
        image.samples()
    );

    match serde_json::to_string(&image) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("serialization failed: {e}");
            exit(1);
        }
    }
}
