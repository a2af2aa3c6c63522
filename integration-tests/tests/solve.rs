use approx::assert_relative_eq;
use integration_tests::{PROBLEMS, Problem, load};
use rootline_observers::{ResidualThreshold, TracingObserver};
use rootline_solvers::equation::newton::{self, Config, Reason, Solution};

fn solve(problem: &Problem) -> Solution {
    let equations = problem.parsed().expect("fixture equations should parse");
    let config = Config::new(problem.max_iters, 1e-7).expect("fixture config should be valid");
    let mut observer = TracingObserver::new(problem.name.clone());

    let solution = newton::solve(&equations, &problem.points(), &config, &mut observer)
        .unwrap_or_else(|err| panic!("{}: {err}", problem.name));
    assert_eq!(observer.events(), solution.iters(), "{}", problem.name);
    solution
}

#[test]
fn fixture_problems_match_expectations() {
    let problems = load(PROBLEMS).expect("fixtures should load");
    assert!(!problems.is_empty());

    for problem in &problems {
        let solution = solve(problem);
        let expect = &problem.expect;

        assert_eq!(solution.iters(), expect.iters, "{}", problem.name);

        match (expect.root, solution.root()) {
            (Some([x, y]), Some(root)) => {
                assert_relative_eq!(root.x, x, epsilon = 1e-6);
                assert_relative_eq!(root.y, y, epsilon = 1e-6);
            }
            (None, None) => {}
            (expected, actual) => {
                panic!("{}: expected root {expected:?}, got {actual:?}", problem.name)
            }
        }

        let reason = solution.reason().map(|reason| match reason {
            Reason::DegenerateDerivative { .. } => "degenerate",
            Reason::MaxIters => "max_iters",
            Reason::StoppedByObserver => "stopped",
        });
        assert_eq!(reason, expect.reason.as_deref(), "{}", problem.name);
    }
}

#[test]
fn history_links_consecutive_iterations() {
    for problem in load(PROBLEMS).unwrap() {
        let solution = solve(&problem);
        let records = solution.history.records();

        for pair in records.windows(2) {
            assert_eq!(pair[0].next, pair[1].prev, "{}", problem.name);
            assert_eq!(pair[0].iter + 1, pair[1].iter, "{}", problem.name);
        }
        if let Some(root) = solution.root() {
            assert_eq!(solution.history.last().map(|r| r.next), Some(root));
        }
    }
}

#[test]
fn converged_root_restarts_in_one_iteration() {
    for problem in load(PROBLEMS).unwrap() {
        let Some(root) = solve(&problem).root() else {
            continue;
        };
        let equations = problem.parsed().unwrap();
        let again = newton::solve_unobserved(&equations, &[root, root], &Config::default())
            .unwrap();

        assert!(again.is_converged(), "{}", problem.name);
        assert_eq!(again.iters(), 1, "{}", problem.name);
    }
}

#[test]
fn residual_threshold_stops_before_step_convergence() {
    let problem = load(PROBLEMS)
        .unwrap()
        .into_iter()
        .find(|p| p.name == "golden ratio system")
        .unwrap();
    let equations = problem.parsed().unwrap();

    let solution = newton::solve(
        &equations,
        &problem.points(),
        &Config::default(),
        ResidualThreshold::new(1e-3),
    )
    .unwrap();

    assert_eq!(solution.reason(), Some(Reason::StoppedByObserver));
    let last = solution.history.last().unwrap();
    assert!(last.residuals.max_abs() <= 1e-3);
    assert!(solution.iters() < problem.expect.iters);
}
