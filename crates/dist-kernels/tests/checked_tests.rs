mod common;

use common::{Coordinates, N_INDICES};
use dist_core::DistError;
use dist_kernels::{checked, Batched, Kernels, Vanilla};

#[test]
fn checked_bonds_match_unchecked() {
    let c = Coordinates::<f32>::out_box(51);
    let mut want = c.results();
    let mut got = c.results();
    Batched::bonds_ortho(&c.coords0, &c.coords1, &c.cell, &mut want);
    checked::bonds::<Batched, f32>(&c.coords0, &c.coords1, Some(&c.cell), &mut got).unwrap();
    assert_eq!(got, want);

    Vanilla::bonds(&c.coords0, &c.coords1, &mut want);
    checked::bonds::<Vanilla, f32>(&c.coords0, &c.coords1, None, &mut got).unwrap();
    assert_eq!(got, want);
}

#[test]
fn checked_angles_and_dihedrals_match_unchecked() {
    let c = Coordinates::<f64>::out_box(52);
    let mut want = c.results();
    let mut got = c.results();
    Batched::angles_ortho(&c.coords0, &c.coords1, &c.coords2, &c.cell, &mut want);
    checked::angles::<Batched, f64>(&c.coords0, &c.coords1, &c.coords2, Some(&c.cell), &mut got)
        .unwrap();
    assert_eq!(got, want);

    Batched::dihedrals(&c.coords0, &c.coords1, &c.coords2, &c.coords3, &mut want);
    checked::dihedrals::<Batched, f64>(
        &c.coords0,
        &c.coords1,
        &c.coords2,
        &c.coords3,
        None,
        &mut got,
    )
    .unwrap();
    assert_eq!(got, want);
}

#[test]
fn checked_indexed_match_unchecked() {
    let c = Coordinates::<f64>::out_box(53);
    let k = N_INDICES / 4;
    let mut want = vec![0.0; k];
    let mut got = vec![0.0; k];
    dist_kernels::dihedrals_idx_ortho::<Batched, f64>(&c.coords0, &c.idx, &c.cell, &mut want);
    checked::dihedrals_idx::<Batched, f64>(&c.coords0, &c.idx, Some(&c.cell), &mut got).unwrap();
    assert_eq!(got, want);

    let k = N_INDICES / 2;
    let mut want = vec![0.0; k];
    let mut got = vec![0.0; k];
    dist_kernels::bonds_idx::<Vanilla, f64>(&c.coords0, &c.idx, &mut want);
    checked::bonds_idx::<Vanilla, f64>(&c.coords0, &c.idx, None, &mut got).unwrap();
    assert_eq!(got, want);

    let k = N_INDICES / 3;
    let mut got = vec![0.0; k];
    checked::angles_idx::<Batched, f64>(&c.coords0, &c.idx, Some(&c.cell), &mut got).unwrap();
    assert!(got.iter().all(|a| (0.0..=std::f64::consts::PI).contains(a)));
}

#[test]
fn short_buffers_are_rejected() {
    let c = Coordinates::<f32>::in_box(54);
    let mut out = vec![0.0f32; c.n_results + 1];
    let err = checked::bonds::<Batched, f32>(&c.coords0, &c.coords1, Some(&c.cell), &mut out)
        .unwrap_err();
    assert!(matches!(err, DistError::Mismatch(_)), "{err}");

    let ragged = &c.coords0[..3 * 10 + 2];
    let mut out = vec![0.0f32; 10];
    let err = checked::angles::<Vanilla, f32>(ragged, &c.coords1, &c.coords2, None, &mut out)
        .unwrap_err();
    assert!(matches!(err, DistError::Mismatch(_)), "{err}");
}

#[test]
fn untouched_output_on_error() {
    let c = Coordinates::<f64>::in_box(55);
    let mut out = vec![-1.0; c.n_results + 3];
    assert!(checked::dihedrals::<Batched, f64>(
        &c.coords0, &c.coords1, &c.coords2, &c.coords3, None, &mut out
    )
    .is_err());
    assert!(out.iter().all(|&v| v == -1.0));
}

#[test]
fn index_count_and_range_are_checked() {
    let coords = [0.0f64; 12];
    let mut out = [0.0f64; 2];

    let err = checked::bonds_idx::<Batched, f64>(&coords, &[0, 1, 2], None, &mut out).unwrap_err();
    assert!(matches!(err, DistError::Mismatch(_)), "{err}");

    let err =
        checked::bonds_idx::<Batched, f64>(&coords, &[0, 1, 2, 4], None, &mut out).unwrap_err();
    assert!(matches!(err, DistError::OutOfRange(_)), "{err}");
    assert!(err.to_string().contains("index 4"));

    let mut one = [0.0f64; 1];
    let err =
        checked::angles_idx::<Vanilla, f64>(&coords, &[3, 0, 9], None, &mut one).unwrap_err();
    assert!(matches!(err, DistError::OutOfRange(_)), "{err}");
    checked::angles_idx::<Vanilla, f64>(&coords, &[3, 0, 1], None, &mut one).unwrap();
}

#[test]
fn distance_array_shapes_are_checked() {
    let c = Coordinates::<f32>::in_box(56);
    let reference = &c.coords0[..3 * 4];
    let conf = &c.coords1[..3 * 6];

    let mut out = vec![0.0f32; 24];
    checked::distance_array::<Batched, f32>(reference, conf, Some(&c.cell), &mut out).unwrap();
    let mut wrong = vec![0.0f32; 23];
    let err =
        checked::distance_array::<Batched, f32>(reference, conf, None, &mut wrong).unwrap_err();
    assert!(matches!(err, DistError::Mismatch(_)), "{err}");

    let mut pairs = vec![0.0f32; 6];
    checked::self_distance_array::<Vanilla, f32>(reference, None, &mut pairs).unwrap();
    let mut wrong = vec![0.0f32; 4];
    assert!(checked::self_distance_array::<Vanilla, f32>(reference, None, &mut wrong).is_err());

    let mut none: Vec<f32> = Vec::new();
    checked::self_distance_array::<Batched, f32>(&reference[..3], Some(&c.cell), &mut none)
        .unwrap();
}
