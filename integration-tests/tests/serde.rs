use rootline_core::Point;
use rootline_expr::parse_equation;
use rootline_solvers::equation::newton::{self, Config, Solution};
use serde_json::json;

fn solve(texts: &[&str], guesses: &[Point], max_iters: usize) -> Solution {
    let equations: Vec<_> = texts.iter().map(|t| parse_equation(t).unwrap()).collect();
    let config = Config::new(max_iters, 1e-7).unwrap();
    newton::solve_unobserved(&equations, guesses, &config).unwrap()
}

#[test]
fn history_serializes_as_plain_records() {
    let solution = solve(&["x^2 + y^2 + 1"], &[Point::new(1.0, 1.0)], 2);
    let value = serde_json::to_value(&solution.history).unwrap();

    assert_eq!(
        value,
        json!([
            {
                "iter": 1,
                "prev": { "x": 1.0, "y": 1.0 },
                "next": { "x": -0.5, "y": -0.5 },
                "residuals": 3.0
            },
            {
                "iter": 2,
                "prev": { "x": -0.5, "y": -0.5 },
                "next": { "x": 1.0, "y": 1.0 },
                "residuals": 1.5
            }
        ])
    );
}

#[test]
fn pair_residuals_serialize_as_array() {
    let start = Point::new(1.5, 1.5);
    let solution = solve(&["x^2 - y - 1", "y^2 - x - 1"], &[start, start], 1);
    let value = serde_json::to_value(&solution).unwrap();

    assert_eq!(value["history"][0]["residuals"], json!([-0.25, -0.25]));
    assert_eq!(value["outcome"], json!({ "NotFound": { "reason": "MaxIters" } }));
}

#[test]
fn degenerate_reason_names_the_variable() {
    let solution = solve(&["5"], &[Point::new(2.0, 3.0)], 10);
    let value = serde_json::to_value(&solution).unwrap();

    assert_eq!(
        value["outcome"],
        json!({
            "NotFound": {
                "reason": {
                    "DegenerateDerivative": {
                        "at": { "x": 2.0, "y": 3.0 },
                        "variable": "x"
                    }
                }
            }
        })
    );
}

#[test]
fn solution_survives_json() {
    let solution = solve(&["x^2 - 2"], &[Point::new(1.0, 1.0)], 100);
    let text = serde_json::to_string(&solution).unwrap();
    let back: Solution = serde_json::from_str(&text).unwrap();

    assert_eq!(back, solution);
}
