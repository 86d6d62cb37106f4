//! Shortest-route demo — solves the built-in obstacle course and prints the
//! admissible sight lines plus the resolved route.
//!
//! Usage:
//! ```text
//! cargo run --example shortest_route
//! ```

use routis::geometry::Polygon;
use routis::math::Point2;
use routis::router::{RouteOutcome, Router};
use routis::scene::Scene;

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

fn default_obstacles() -> Vec<Vec<Point2>> {
    vec![
        vec![p(22.0, 31.0), p(35.0, 27.0), p(6.0, 8.0)],
        vec![p(40.0, 25.0), p(54.0, 9.0), p(12.0, 7.0)],
        vec![p(44.0, 30.0), p(68.0, 12.0), p(59.0, 8.0), p(42.0, 28.0)],
        vec![p(42.0, 36.0), p(63.0, 36.0), p(89.0, 30.0), p(73.0, 13.0)],
        vec![p(74.0, 37.0), p(95.0, 37.0), p(91.0, 31.0), p(74.0, 35.0)],
    ]
}

fn main() -> routis::Result<()> {
    // Default: WARN for everything, INFO for routis.
    // Override with RUST_LOG env var (e.g. RUST_LOG=routis=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("routis=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut scene = Scene::new(p(30.0, 0.0), p(60.0, 40.0))?;
    for vertices in default_obstacles() {
        scene.add_obstacle(Polygon::new(vertices)?);
    }

    let mut router = Router::new(scene);
    let solution = router.solve()?;

    println!("sight lines ({}):", solution.edges().len());
    for edge in solution.edges() {
        println!(
            "  ({:5.1}, {:5.1}) -- ({:5.1}, {:5.1})",
            edge.a.x, edge.a.y, edge.b.x, edge.b.y
        );
    }

    match solution.outcome() {
        RouteOutcome::Found(route) => {
            println!(
                "route: {} waypoints, length {:.3}",
                route.points().len(),
                route.length()
            );
            for point in route.points() {
                println!("  ({:5.1}, {:5.1})", point.x, point.y);
            }
        }
        RouteOutcome::Unreachable => println!("route: unreachable"),
    }

    Ok(())
}
