//! Generates one chunk of stars and prints the planetary system of the
//! first star in it.
//!
//! Run with: cargo run --package asterion --example generate_system

use asterion::{ChunkCoord, Universe};

fn main() {
    let universe = Universe::with_seed(42);

    let stars = universe.generate_chunk(ChunkCoord::new(0, 0));
    println!("chunk (0, 0): {} stars", stars.len());
    for star in stars.iter() {
        println!(
            "  class {} mass {:.3} M_sun lum {:.4} L_sun at ({:.1}, {:.1}) with {} planets",
            star.class_name,
            star.mass,
            star.luminosity,
            star.position.x,
            star.position.y,
            star.planet_count,
        );
    }

    let star = &stars[0];
    println!(
        "\nsystem of star 0 (seed {}):",
        star.system_seed.value()
    );
    let planets = universe
        .generate_system(star)
        .expect("generated star records satisfy the system contract");

    println!(
        "{:>3} {:>10} {:>10} {:>8} {:>9} {:>8} {:>10} {:>9}",
        "#", "a (AU)", "M (M_e)", "R (R_e)", "T (K)", "g (m/s2)", "P (yr)", "type"
    );
    for planet in &planets {
        println!(
            "{:>3} {:>10.3} {:>10.3} {:>8.3} {:>9.1} {:>8.2} {:>10.3} {:>9}",
            planet.order_in_system,
            planet.orbital_distance_au,
            planet.mass_earth,
            planet.radius_earth,
            planet.equilibrium_temperature_k,
            planet.surface_gravity,
            planet.orbital_period_years,
            planet.composition_class,
        );
    }

    let angle = asterion::recompute_planet_position(&planets[0], 365.25)
        .expect("generated planets have positive periods");
    println!("\nplanet 1 after one Earth year: {angle:.1} degrees");
}
