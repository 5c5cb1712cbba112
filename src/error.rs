use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ChainspectError {
    #[error("Vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    #[diagnostic(
        code(chainspect::vertex_out_of_range),
        help("Vertices are numbered from 0 to vertex_count - 1")
    )]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("Cannot parse '{raw}' as a directed edge")]
    #[diagnostic(
        code(chainspect::edge_parse_error),
        help("Write edges as FROM,TO using zero-based vertex numbers, for example 0,1")
    )]
    EdgeParse { raw: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(chainspect::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(chainspect::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),
}
