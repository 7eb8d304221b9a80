//! tests for the solver contract
use polyroots::roots::errors::SolverError;
use polyroots::roots::solver::{check_request, PolySolver};

use crate::stub::StubSolver;

type TestResult = Result<(), SolverError>;

#[test]
fn stub_reports_max_degree() {
    let stub = StubSolver::new(10);
    assert_eq!(stub.max_degree(), 10);
}

#[test]
fn stub_reports_max_coefficients() {
    let stub = StubSolver::new(10);
    assert_eq!(stub.max_coefficients(), 11);
}

#[test]
fn max_degree_through_trait_object() {
    let stub = StubSolver::new(10);
    let solver: &dyn PolySolver = &stub;
    assert_eq!(solver.max_degree(), 10);
    assert_eq!(solver.max_coefficients(), 11);
}

#[test]
fn accepts_valid_request() -> TestResult {
    let op = [1.0, 2.0, 3.0, 0.0];
    let (zr, zi) = ([0.0; 3], [0.0; 3]);
    check_request(&op, 2, 3, &zr, &zi)?;
    check_request(&op, 3, 3, &zr, &zi)?;
    Ok(())
}

#[test]
fn degree_above_max() {
    let op = [1.0, 2.0, 3.0];
    let (zr, zi) = ([0.0; 2], [0.0; 2]);
    let err = check_request(&op, 2, 1, &zr, &zi).unwrap_err();

    assert_eq!(err, SolverError::InvalidDegree { degree: 2, max_degree: 1 });
    assert_eq!(err.to_string(), "Requested maximal degree is greater than MAXDEGREE.");
}

#[test]
fn zero_leading_coefficient() {
    let op = [0.0, 1.0, 0.0, 0.0, 0.0, 0.0];
    let (zr, zi) = ([0.0; 5], [0.0; 5]);
    let err = check_request(&op, 5, 10, &zr, &zi).unwrap_err();

    assert_eq!(err, SolverError::ZeroLeadingCoefficient);
    assert_eq!(err.to_string(), "The leading coefficient is zero.");
}

#[test]
fn degree_checked_before_leading_coefficient() {
    let op = [0.0, 1.0, 2.0];
    let (zr, zi) = ([0.0; 2], [0.0; 2]);
    let err = check_request(&op, 2, 1, &zr, &zi).unwrap_err();
    assert!(matches!(err, SolverError::InvalidDegree { .. }));
}

#[test]
fn short_buffers() {
    let (zr, zi) = ([0.0; 3], [0.0; 1]);
    let err = check_request(&[1.0, 2.0], 2, 3, &zr, &zi).unwrap_err();
    assert_eq!(err, SolverError::BufferTooShort { need: 3, got: 2 });

    let err = check_request(&[], 0, 3, &zr, &zi).unwrap_err();
    assert_eq!(err, SolverError::BufferTooShort { need: 1, got: 0 });

    let err = check_request(&[1.0, 2.0, 3.0], 2, 3, &zr, &zi).unwrap_err();
    assert_eq!(err, SolverError::BufferTooShort { need: 2, got: 1 });
}

#[test]
fn degree_zero_needs_no_output() -> TestResult {
    check_request(&[4.0], 0, 0, &[], &[])?;
    Ok(())
}

#[test]
fn stub_raises_contract_errors() {
    let mut stub = StubSolver::new(1);
    let (mut zr, mut zi) = ([0.0; 1], [0.0; 1]);

    let err = stub.rpoly(&[1.0, 2.0, 3.0], 2, &mut zr, &mut zi).unwrap_err();
    assert!(matches!(err, SolverError::InvalidDegree { degree: 2, max_degree: 1 }));

    let err = stub.rpoly(&[0.0, 2.0], 1, &mut zr, &mut zi).unwrap_err();
    assert_eq!(err, SolverError::ZeroLeadingCoefficient);
    assert_eq!(stub.calls, 0);
}
