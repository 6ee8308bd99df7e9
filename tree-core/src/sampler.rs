use rand::Rng;
use std::f32::consts::TAU;

/// How many rejected samples we tolerate before falling back to the
/// distribution center. The mass outside [0, 1] is the normal tail beyond
/// 5 sigma, so in practice the first draw is almost always accepted.
const MAX_REJECTS: u32 = 1000;

/// Draws an approximately normal value in `(0, 1)`, centered at 0.5 with
/// standard deviation 0.1.
///
/// Uses a Box–Muller transform on two uniform draws (re-drawn if either
/// lands exactly on 0), rescaled by `z / 10 + 0.5`. Samples that fall
/// outside `[0, 1]` are rejected and re-drawn.
///
/// The same sampler drives branch-angle jitter and flower-size jitter.
pub fn gaussian_sample<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    for _ in 0..MAX_REJECTS {
        let mut u: f32 = 0.0;
        while u == 0.0 {
            u = rng.random();
        }
        let mut v: f32 = 0.0;
        while v == 0.0 {
            v = rng.random();
        }
        let z = (-2.0 * u.ln()).sqrt() * (TAU * v).cos();
        let sample = z / 10.0 + 0.5;
        if (0.0..=1.0).contains(&sample) {
            return sample;
        }
    }
    0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn samples_stay_in_open_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let s = gaussian_sample(&mut rng);
            assert!(s > 0.0 && s < 1.0, "sample out of range: {s}");
        }
    }

    #[test]
    fn samples_center_around_half() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 10_000;
        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;
        for _ in 0..n {
            let s = gaussian_sample(&mut rng) as f64;
            sum += s;
            sum_sq += s * s;
        }
        let mean = sum / n as f64;
        let var = sum_sq / n as f64 - mean * mean;

        // Mean 0.5 and sigma 0.1, with generous tolerance for sample noise.
        assert!((mean - 0.5).abs() < 0.01, "mean = {mean}");
        assert!((var.sqrt() - 0.1).abs() < 0.01, "sd = {}", var.sqrt());
    }
}
