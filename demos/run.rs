use onedim::algo::Brent;
use onedim::sampling::linspace;
use onedim::{Convergence, Driver, Error, Objective, Solution};

// https://en.wikipedia.org/wiki/Kepler%27s_equation
struct Kepler {
    mean_anomaly: f64,
    eccentricity: f64,
}

impl Objective<f64> for Kepler {
    fn eval(&self, e: f64) -> f64 {
        e - self.eccentricity * e.sin() - self.mean_anomaly
    }
}

fn report(name: &str, solution: Solution<f64>) {
    println!(
        "{:<32} x = {:<22} f(x) = {:<24e} error = {:<12e} iterations = {:<4} {:?}",
        name,
        solution.x(),
        solution.fx(),
        solution.error(),
        solution.iterations(),
        solution.status()
    );
}

fn main() -> Result<(), Error> {
    println!("linspace(0, 1, 10) = {:?}", linspace(0.0, 1.0, 10)?);
    println!();

    let f = |x: f64| 2.0 * x - 3.0;
    let df = |_: f64| 2.0;
    let tolerance = 1e-4;

    report("bisection", onedim::bisection(&f, -10.0, 10.0, tolerance, 50)?);
    report(
        "Newton-Raphson",
        onedim::newton_raphson(&f, &df, -10.0, tolerance, 50)?,
    );
    report("secant", onedim::secant(&f, 1e-6, -10.0, tolerance, 50)?);
    report(
        "inverse quadratic interpolation",
        onedim::inverse_quadratic_interpolation(&f, 1e-6, -10.0, tolerance, 50)?,
    );
    report(
        "Brent's method",
        onedim::brents_method(&f, -10.0, 10.0, tolerance, 50)?,
    );

    let g = |x: f64| x * x / 10.0 - 2.0 * x.sin();

    report(
        "golden-section search",
        onedim::golden_section_search(&g, 0.0, 4.0, tolerance, 50)?,
    );
    report(
        "parabolic interpolation",
        onedim::parabolic_interpolation(&g, 0.0, 1.0, 4.0, tolerance, 50)?,
    );

    if let Err(error) = onedim::bisection(&f, 0.0, 1.0, tolerance, 50) {
        println!("bisection on [0, 1]: {}", error);
    }
    println!();

    let kepler = Kepler {
        mean_anomaly: 1.0,
        eccentricity: 0.5,
    };
    let conv = Convergence::new(1e-10, 100)?;
    let mut driver = Driver::new(&kepler, Brent::new(&kepler, 0.0, 2.0)?, conv);

    while driver.next().is_some() {
        let estimate = driver.estimate();
        println!(
            "iter = {}\tE = {}\terror = {}",
            driver.iter(),
            estimate.x,
            estimate.error
        );
    }

    report("Kepler's equation", driver.solution());

    Ok(())
}
