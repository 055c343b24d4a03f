use mazegraph_core::format::OutputFormat;
use mazegraph_core::graph::Algorithm;
use mazegraph_core::maze::Juncture;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse algorithm name from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse juncture from "X,Y"
pub fn parse_juncture(s: &str) -> std::result::Result<Juncture, String> {
    s.parse::<Juncture>().map_err(|e| e.to_string())
}
