//! Grid results must not depend on how the grid is chunked or how many
//! workers process it.

use eva_fit::{FitConfig, fit_block};
use eva_gev::{EstimationMethod, GevParams};
use eva_grid::{GridConfig, fit_grid, return_levels_grid, return_periods_grid};
use eva_return::{InversionConfig, return_levels_block};
use ndarray::{Array3, s};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::Distribution;

const N_TIME: usize = 150;
const N_ROWS: usize = 5;
const N_COLS: usize = 7;

/// A grid whose GEV location grows with the row and whose shape varies with
/// the column. Cell (0, 0) is left all missing.
fn synthetic_grid() -> Array3<f64> {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut data = Array3::from_elem((N_TIME, N_ROWS, N_COLS), f64::NAN);
    for r in 0..N_ROWS {
        for c in 0..N_COLS {
            if (r, c) == (0, 0) {
                continue;
            }
            let shape = -0.2 + 0.06 * c as f64;
            let dist = GevParams::new(shape, 10.0 * (r + 1) as f64, 1.0 + 0.1 * c as f64)
                .unwrap()
                .distribution();
            for t in 0..N_TIME {
                data[[t, r, c]] = dist.sample(&mut rng);
            }
        }
    }
    data
}

fn bits(a: &Array3<f64>) -> Vec<u64> {
    a.iter().map(|v| v.to_bits()).collect()
}

#[test]
fn fit_is_chunk_and_worker_invariant() {
    let data = synthetic_grid();
    let fit = FitConfig::new().with_estimation_method(EstimationMethod::LMoments);
    let reference = fit_block(data.view(), &fit).unwrap();

    let configs = [
        GridConfig::new(),
        GridConfig::new().with_chunks(1, 1),
        GridConfig::new().with_chunks(2, 3).with_n_workers(Some(1)),
        GridConfig::new().with_chunks(4, 2).with_n_workers(Some(3)),
    ];
    for grid in &configs {
        let out = fit_grid(data.view(), &fit, grid).unwrap();
        assert_eq!(bits(&out), bits(&reference), "{grid:?}");
    }
    assert!(reference.slice(s![.., 0, 0]).iter().all(|v| v.is_nan()));
}

#[test]
fn mle_grid_matches_single_block() {
    let data = synthetic_grid();
    let fit = FitConfig::new();
    let reference = fit_block(data.view(), &fit).unwrap();
    let grid = GridConfig::new().with_chunks(2, 2).with_n_workers(Some(2));
    let out = fit_grid(data.view(), &fit, &grid).unwrap();
    assert_eq!(bits(&out), bits(&reference));
}

#[test]
fn inversion_is_chunk_invariant() {
    let data = synthetic_grid();
    let fit = FitConfig::new().with_estimation_method(EstimationMethod::LMoments);
    let params = fit_block(data.view(), &fit).unwrap();

    let inversion = InversionConfig::new().with_omit_above(Some(500.0));
    let periods = [2.0, 10.0, 100.0];
    let reference = return_levels_block(params.view(), &periods, &inversion).unwrap();

    for grid in [GridConfig::new(), GridConfig::new().with_chunks(3, 1)] {
        let levels = return_levels_grid(params.view(), &periods, &inversion, &grid).unwrap();
        assert_eq!(bits(&levels), bits(&reference));

        let back = return_periods_grid(params.view(), &[25.0, 40.0], &inversion, &grid).unwrap();
        assert_eq!(back.dim(), (2, N_ROWS, N_COLS));
        assert!(back.iter().all(|v| v.is_nan() || (*v >= 1.0 && *v <= 500.0)));
    }
}
