use criterion::{criterion_group, criterion_main, Criterion};
use onedim::{
    bisection, brents_method, golden_section_search, inverse_quadratic_interpolation,
    newton_raphson, parabolic_interpolation, secant, testing::*,
};

const MAX_ITERS: usize = 1_000;
const TOLERANCE: f64 = 1e-10;
const PERTURBATION: f64 = 1e-6;

fn roots(c: &mut Criterion, name: &str, f: &dyn TestRoots) {
    let (lower, upper) = f.bracket();
    let initial = f.initial();
    let df = |x: f64| f.df(x);

    c.bench_function(&format!("bisection {}", name), |b| {
        b.iter(|| {
            let solution = bisection(f, lower, upper, TOLERANCE, MAX_ITERS).unwrap();
            assert!(solution.is_converged());
        })
    });

    c.bench_function(&format!("Newton-Raphson {}", name), |b| {
        b.iter(|| {
            let solution = newton_raphson(f, &df, initial, TOLERANCE, MAX_ITERS).unwrap();
            assert!(solution.is_converged());
        })
    });

    c.bench_function(&format!("secant {}", name), |b| {
        b.iter(|| {
            let solution = secant(f, PERTURBATION, initial, TOLERANCE, MAX_ITERS).unwrap();
            assert!(solution.is_converged());
        })
    });

    c.bench_function(&format!("inverse quadratic {}", name), |b| {
        b.iter(|| {
            let solution =
                inverse_quadratic_interpolation(f, PERTURBATION, initial, TOLERANCE, MAX_ITERS)
                    .unwrap();
            assert!(solution.is_converged());
        })
    });

    c.bench_function(&format!("Brent {}", name), |b| {
        b.iter(|| {
            let solution = brents_method(f, lower, upper, TOLERANCE, MAX_ITERS).unwrap();
            assert!(solution.is_converged());
        })
    });
}

fn minimum(c: &mut Criterion, name: &str, f: &dyn TestMinimum) {
    let (lower, midpoint, upper) = f.bracket();

    c.bench_function(&format!("golden section {}", name), |b| {
        b.iter(|| {
            let solution = golden_section_search(f, lower, upper, TOLERANCE, MAX_ITERS).unwrap();
            assert!(solution.is_converged());
        })
    });

    c.bench_function(&format!("parabolic {}", name), |b| {
        b.iter(|| {
            parabolic_interpolation(f, lower, midpoint, upper, TOLERANCE, MAX_ITERS).unwrap()
        })
    });
}

fn linear(c: &mut Criterion) {
    roots(c, "linear", &Linear::default());
}

fn cubic(c: &mut Criterion) {
    roots(c, "cubic", &Cubic);
}

fn exponential(c: &mut Criterion) {
    roots(c, "exponential", &Exponential);
}

fn valley(c: &mut Criterion) {
    minimum(c, "valley", &Valley);
}

fn shifted_parabola(c: &mut Criterion) {
    minimum(c, "shifted parabola", &ShiftedParabola);
}

criterion_group!(solvers, linear, cubic, exponential, valley, shifted_parabola);
criterion_main!(solvers);
