use super::SearchReport;
use crate::cli::Cli;
use mazegraph_core::graph::{AlgorithmEvent, SearchOutcome, ShortestPath};
use mazegraph_core::maze::Juncture;

/// Output in human-readable format, one line per event
pub fn output_report(cli: &Cli, report: &SearchReport) {
    if !cli.quiet {
        println!("{} from {} to {}", report.algorithm, report.from, report.to);
    }

    for event in &report.events {
        println!("{}", describe_event(event));
    }

    if cli.quiet {
        return;
    }
    match report.outcome {
        Some(SearchOutcome::Reached) => println!("outcome: reached {}", report.to),
        Some(SearchOutcome::Exhausted) => println!("outcome: {} not reachable", report.to),
        None => {}
    }
}

fn describe_event(event: &AlgorithmEvent<Juncture>) -> String {
    match event {
        AlgorithmEvent::Began { algorithm } => format!("began {}", algorithm),
        AlgorithmEvent::Visited { vertex } => format!("visited {}", vertex),
        AlgorithmEvent::SearchConcluded => "search concluded".to_string(),
        AlgorithmEvent::VertexFinalized { vertex, cost } => {
            format!("finalized {} cost {}", vertex, cost)
        }
        AlgorithmEvent::Completed { path } => match path {
            ShortestPath::Found { vertices, cost } => {
                let route: Vec<String> = vertices.iter().map(|j| j.to_string()).collect();
                format!("completed {} cost {}", route.join(" -> "), cost)
            }
            ShortestPath::Unreachable => "completed unreachable".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazegraph_core::graph::Algorithm;

    #[test]
    fn test_describe_search_events() {
        assert_eq!(
            describe_event(&AlgorithmEvent::Began {
                algorithm: Algorithm::Dfs
            }),
            "began dfs"
        );
        assert_eq!(
            describe_event(&AlgorithmEvent::Visited {
                vertex: Juncture::new(2, 3)
            }),
            "visited (2, 3)"
        );
        assert_eq!(
            describe_event(&AlgorithmEvent::SearchConcluded),
            "search concluded"
        );
    }

    #[test]
    fn test_describe_dijkstra_events() {
        assert_eq!(
            describe_event(&AlgorithmEvent::VertexFinalized {
                vertex: Juncture::new(1, 0),
                cost: 4
            }),
            "finalized (1, 0) cost 4"
        );
        assert_eq!(
            describe_event(&AlgorithmEvent::Completed {
                path: ShortestPath::Found {
                    vertices: vec![Juncture::new(0, 0), Juncture::new(1, 0)],
                    cost: 4
                }
            }),
            "completed (0, 0) -> (1, 0) cost 4"
        );
        assert_eq!(
            describe_event(&AlgorithmEvent::Completed {
                path: ShortestPath::Unreachable
            }),
            "completed unreachable"
        );
    }
}
