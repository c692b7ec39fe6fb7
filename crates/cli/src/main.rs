use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::fmt::SubscriberBuilder;

use quickhull2d::parse::parse_points;
use quickhull2d::{convex_hull, Point};

#[derive(Parser)]
#[command(name = "qhull")]
#[command(about = "Quickhull convex hull over 2D point lists")]
struct Cmd {
    /// Input file with one `x y` pair per line; reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let text = read_input(cmd.input.as_deref())?;
    for line in hull_report(&text)? {
        println!("{line}");
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

/// Parse the point list, compute the hull, and render one `x y` line per
/// hull vertex.
fn hull_report(text: &str) -> Result<Vec<String>> {
    let points = parse_points(text)?;
    tracing::info!(points = points.len(), "parsed input");
    let hull = convex_hull(&points)?;
    tracing::info!(vertices = hull.len(), "hull computed");
    Ok(hull
        .iter()
        .map(|p: &Point| format!("{} {}", p.x, p.y))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn report_lists_each_hull_vertex_once() {
        let text = "0 0\n4 0\n4 4\n0 4\n2 2\n";
        let mut lines = hull_report(text).unwrap();
        lines.sort();
        assert_eq!(lines, vec!["0 0", "0 4", "4 0", "4 4"]);
    }

    #[test]
    fn malformed_input_fails() {
        assert!(hull_report("0 0\nnope 1\n1 1\n").is_err());
    }

    #[test]
    fn too_few_points_fails() {
        assert!(hull_report("0 0\n1 1\n").is_err());
    }

    #[test]
    fn reads_points_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "0 0\n3 0\n1 2\n").unwrap();
        let text = read_input(Some(file.path())).unwrap();
        assert_eq!(hull_report(&text).unwrap().len(), 3);
    }
}
