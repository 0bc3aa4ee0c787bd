use std::fs;

use log::debug;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, multispace0, not_line_ending, space1};
use nom::combinator::map_res;
use nom::sequence::{pair, preceded};

use crate::color::VertexId;
use crate::error::InstanceError;
use crate::graph::Graph;


/// reads a DIMACS instance file
pub fn read_from_file(filename:&str) -> Result<Graph, InstanceError> {
    let content = fs::read_to_string(filename)?;
    let graph = read_from_str(&content)?;
    debug!("read {}: {} vertices, {} edges", filename, graph.nb_vertices(), graph.nb_edges());
    Ok(graph)
}

/**
reads a DIMACS instance (`p edge n m` or `p col n m` header, `e a b` edges, 1-based ids).
Comments (`c ...`) may appear anywhere between lines.

The header may count each edge once or twice.
*/
pub fn read_from_str(content:&str) -> Result<Graph, InstanceError> {
    let content = content.replace("\r", "");
    let (s, _) = skip_comments(&content).map_err(parse_error)?;
    let (mut s, (n, m)) = read_header(s).map_err(parse_error)?;
    let mut graph = Graph::new(n);
    let mut nb_edges = 0;
    loop {
        s = skip_comments(s).map_err(parse_error)?.0;
        match read_edge(s) {
            Ok((remaining, (a, b))) => {
                s = remaining;
                let u = to_vertex(a, n)?;
                let v = to_vertex(b, n)?;
                if u == v { return Err(InstanceError::SelfLoop(u)); }
                if graph.has_edge(u, v) {
                    return Err(InstanceError::DuplicateEdge(u.min(v), u.max(v)));
                }
                graph.add_edge(u, v);
                nb_edges += 1;
            },
            Err(_) => break,
        }
    }
    let rest = s.trim();
    if !rest.is_empty() {
        let line = rest.lines().next().unwrap_or(rest);
        return Err(InstanceError::Parse(format!("unexpected line \"{}\"", line)));
    }
    if nb_edges != m && 2*nb_edges != m {
        return Err(InstanceError::EdgeCountMismatch { expected: m, found: nb_edges });
    }
    Ok(graph)
}

/// converts a DIMACS id (1-based) to a vertex id
fn to_vertex(id:usize, n:usize) -> Result<VertexId, InstanceError> {
    if id == 0 || id > n {
        Err(InstanceError::VertexOutOfRange { vertex: id, n })
    } else {
        Ok(id-1)
    }
}

fn parse_error(e:nom::Err<nom::error::Error<&str>>) -> InstanceError {
    InstanceError::Parse(e.to_string())
}

/// skips a single comment, returns its content
fn skip_comment(s:&str) -> IResult<&str, &str> {
    preceded(multispace0, preceded(char('c'), not_line_ending))(s)
}

/// skips all comments
pub fn skip_comments(s:&str) -> IResult<&str, Vec<&str>> {
    nom::multi::many0(skip_comment)(s)
}

/// reads a non-negative integer
fn read_integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, str::parse::<usize>)(s)
}

/// reads two numbers separated by spaces
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    pair(preceded(space1, read_integer), preceded(space1, read_integer))(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(
        multispace0,
        preceded(alt((tag("p edge"), tag("p col"))), read_two_integers)
    )(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(multispace0, preceded(char('e'), read_two_integers))(s)
}

/** writes a string encoding the solution: each line corresponds to a color */
pub fn solution_to_string(solution:&[Vec<VertexId>]) -> String {
    let mut res = String::default();
    for e in solution {
        for v in e {
            res += format!("{} ", v).as_str();
        }
        res += "\n";
    }
    res
}

/** writes a solution into a file. each line corresponds to a color. */
pub fn write_solution(filename:&str, solution:&[Vec<VertexId>]) -> Result<(), InstanceError> {
    fs::write(filename, solution_to_string(solution))?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    const PETERSEN:&str = "c Petersen graph\n\
        p edge 10 15\n\
        e 1 2\ne 2 3\ne 3 4\ne 4 5\ne 5 1\n\
        c spokes\n\
        e 1 6\ne 2 7\ne 3 8\ne 4 9\ne 5 10\n\
        e 6 8\ne 8 10\ne 10 7\ne 7 9\ne 9 6\n";

    #[test]
    fn test_read_comments() {
        let s = "c this is a test comment\nc another one\np edge 2 1\ne 1 2";
        assert_eq!(
            skip_comments(s),
            Ok((
                "\np edge 2 1\ne 1 2",
                vec![" this is a test comment", " another one"]
            ))
        );
    }

    #[test]
    fn test_read_header() {
        let s = "p edge 2 1\ne 1 2";
        assert_eq!(read_header(s), Ok(("\ne 1 2", (2,1))));
    }

    #[test]
    fn test_read_header_col() {
        let s = "\np col 2 1\ne 1 2";
        assert_eq!(read_header(s).unwrap().1, (2,1));
    }

    #[test]
    fn test_read_edge() {
        let s = "e 1 2\n";
        assert_eq!(read_edge(s), Ok(("\n", (1,2))));
        assert!(read_edge("x 1 2").is_err());
    }

    #[test]
    fn test_read_petersen() {
        let g = read_from_str(PETERSEN).unwrap();
        assert_eq!(g.nb_vertices(), 10);
        assert_eq!(g.nb_edges(), 15);
        assert!(g.has_edge(0, 5));
        assert!(g.has_edge(9, 6));
        assert!(g.active_vertices().all(|v| g.degree(v) == 3));
    }

    #[test]
    fn test_read_windows_line_endings() {
        let g = read_from_str("p edge 3 2\r\ne 1 2\r\ne 2 3\r\n").unwrap();
        assert_eq!(g.edges(), vec![(0,1),(1,2)]);
    }

    #[test]
    fn test_double_counted_header() {
        let g = read_from_str("p edge 3 4\ne 1 2\ne 2 3\n").unwrap();
        assert_eq!(g.nb_edges(), 2);
    }

    #[test]
    fn test_invalid_instances() {
        assert!(matches!(
            read_from_str("p edge 3 1\ne 1 4\n"),
            Err(InstanceError::VertexOutOfRange { vertex: 4, n: 3 })
        ));
        assert!(matches!(
            read_from_str("p edge 3 1\ne 0 1\n"),
            Err(InstanceError::VertexOutOfRange { vertex: 0, n: 3 })
        ));
        assert!(matches!(
            read_from_str("p edge 3 1\ne 2 2\n"),
            Err(InstanceError::SelfLoop(1))
        ));
        assert!(matches!(
            read_from_str("p edge 3 2\ne 1 2\ne 2 1\n"),
            Err(InstanceError::DuplicateEdge(0,1))
        ));
        assert!(matches!(
            read_from_str("p edge 3 3\ne 1 2\n"),
            Err(InstanceError::EdgeCountMismatch { expected: 3, found: 1 })
        ));
        assert!(matches!(read_from_str("e 1 2\n"), Err(InstanceError::Parse(_))));
        assert!(matches!(
            read_from_str("p edge 3 1\ne 1 2\nfoo\n"),
            Err(InstanceError::Parse(_))
        ));
    }

    #[test]
    fn test_solution_to_string() {
        let sol = vec![vec![0,2], vec![1]];
        assert_eq!(solution_to_string(&sol), "0 2 \n1 \n");
    }
}
