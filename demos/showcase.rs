//! sparkplot showcase.
//!
//! Renders a sine wave in several geometries and a Gaussian bell curve,
//! exercising the box frame, titles, artificial y-ranges and the
//! unstyled output path.
//!
//! Run with `cargo run --example showcase`.

use sparkplot::{render, Config, RenderError};

fn main() -> Result<(), RenderError> {
    println!();
    println!("############################################################");
    println!("#               sparkplot: showcase examples               #");
    println!("############################################################");
    println!();

    // Two cycles of a sine wave.
    let wave: Vec<f64> = (0..=100)
        .map(|i| (i as f64 * 7.2).to_radians().sin())
        .collect();

    let boxed = Config::new().framed(true);

    let chart = render(
        &wave,
        &boxed
            .clone()
            .rows(10)
            .columns(40)
            .title("Showcase: with box, size 40x10"),
    )?;
    println!("{chart}\n");

    let chart = render(
        &wave,
        &boxed
            .clone()
            .rows(3)
            .columns(40)
            .title("Showcase: with box, size 40x3"),
    )?;
    println!("{chart}\n");

    println!("Showcase: without box, size 40x1 (the original 'sparkline')");
    let chart = render(&wave, &Config::new().columns(40))?;
    println!("{chart}\n");

    println!("Showcase: without box, size 80x10");
    let chart = render(&wave, &Config::new().rows(10).columns(80))?;
    println!("{chart}\n");

    let chart = render(
        &wave,
        &boxed
            .clone()
            .rows(10)
            .columns(80)
            .range(-2.0, 4.0)
            .title("Showcase: with box, size 80x10, y-range [-2,4]"),
    )?;
    println!("{chart}\n");

    let chart = render(
        &wave,
        &boxed
            .clone()
            .rows(10)
            .columns(80)
            .range(-0.25, 1.25)
            .styled(false)
            .title("Showcase: with box, size 80x10, no colors"),
    )?;
    println!("{chart}\n");

    let chart = render(
        &gaussian(),
        &Config::new()
            .rows(3)
            .framed(true)
            .styled(false)
            .range(0.0, 0.15)
            .title("Gaussian"),
    )?;
    println!("{chart}");

    Ok(())
}

/// Normal distribution curve with sigma 3, sampled at 21 points.
fn gaussian() -> Vec<f64> {
    let sigma = 3.0_f64;
    (-10..=10)
        .map(|x| {
            let x = x as f64;
            (-x * x / (2.0 * sigma * sigma)).exp()
                / (sigma * (2.0 * std::f64::consts::PI).sqrt())
        })
        .collect()
}
