//! Rendering one case in the usual judge input layout

use crate::config::{CaseRecipe, GeneratorConfig};
use crate::generators::{
    gen_array, gen_connected_directed_graph, gen_tree, get_leaves, sample, Edge,
};
use crate::graph::RootedTree;
use crate::Result;
use rand::Rng;
use std::fmt::Display;
use std::io::Write;

fn write_values<T: Display, W: Write + ?Sized>(out: &mut W, values: &[T]) -> Result<()> {
    let line: Vec<String> = values.iter().map(ToString::to_string).collect();
    writeln!(out, "{}", line.join(" "))?;
    Ok(())
}

fn write_edges<W: Write + ?Sized>(out: &mut W, edges: &[Edge], shift: usize) -> Result<()> {
    for &(u, v) in edges {
        writeln!(out, "{} {}", u + shift, v + shift)?;
    }
    Ok(())
}

fn log_tree_shape(n: usize, edges: &[Edge]) -> Result<()> {
    let leaves = get_leaves(edges)?;
    let height = RootedTree::from_edges(n, edges, 0)?.height();
    tracing::debug!(nodes = n, leaves = leaves.count, height, "generated tree");
    Ok(())
}

/// Draw one case from the configured recipe and write it to `out`
///
/// - array / sample: count line, then the values on one line
/// - tree: `n`, then `n - 1` lines `u v`
/// - connected graph: `n m s`, then `m` lines `u v`
pub fn write_case<R, W>(config: &GeneratorConfig, rng: &mut R, out: &mut W) -> Result<()>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    let shift = usize::from(config.one_indexed);

    match &config.recipe {
        CaseRecipe::Array { n, min, max, skew } => {
            let values = gen_array(rng, *n, *min, *max, *skew);
            writeln!(out, "{n}")?;
            write_values(out, &values)?;
        }
        CaseRecipe::Tree { n, skew } => {
            let edges = gen_tree(rng, *n, *skew);
            if *n > 0 && tracing::enabled!(tracing::Level::DEBUG) {
                log_tree_shape(*n, &edges)?;
            }
            writeln!(out, "{n}")?;
            write_edges(out, &edges, shift)?;
        }
        CaseRecipe::ConnectedGraph { n, m, skew } => {
            let graph = gen_connected_directed_graph(rng, *n, *m, *skew)?;
            writeln!(out, "{n} {m} {}", graph.start + shift)?;
            write_edges(out, &graph.edges, shift)?;
        }
        CaseRecipe::Sample { values, num } => {
            let picked = sample(rng, values.as_slice(), *num)?;
            writeln!(out, "{num}")?;
            write_values(out, &picked)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded;

    fn render(config: &GeneratorConfig, seed: u64) -> String {
        let mut out = Vec::new();
        write_case(config, &mut seeded(seed), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_array_layout() {
        let text = render(&GeneratorConfig::for_array(4, 7, 7), 1);
        assert_eq!(text, "4\n7 7 7 7\n");
    }

    #[test]
    fn test_tree_layout_one_indexed() {
        let text = render(&GeneratorConfig::for_tree(5), 2);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "5");
        assert_eq!(lines.len(), 5);
        for line in &lines[1..] {
            let ids: Vec<usize> = line.split(' ').map(|s| s.parse().unwrap()).collect();
            assert!(ids.iter().all(|&id| (1..=5).contains(&id)));
        }
    }

    #[test]
    fn test_tree_output_ignores_log_level() {
        let config = GeneratorConfig::for_tree(40);
        let quiet = render(&config, 6);

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        let verbose = tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(tracing::Level::DEBUG));
            render(&config, 6)
        });

        assert_eq!(quiet, verbose);
    }

    #[test]
    fn test_graph_layout_zero_indexed() {
        let mut config = GeneratorConfig::for_graph(3, 4);
        config.one_indexed = false;
        let text = render(&config, 3);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);

        let header: Vec<usize> = lines[0].split(' ').map(|s| s.parse().unwrap()).collect();
        assert_eq!(&header[..2], &[3, 4]);
        assert!(header[2] < 3);
    }

    #[test]
    fn test_sample_layout() {
        let config = GeneratorConfig::new(CaseRecipe::Sample { values: vec![9, 9, 9], num: 2 });
        assert_eq!(render(&config, 4), "2\n9 9\n");
    }

    #[test]
    fn test_same_seed_same_case() {
        let config = GeneratorConfig::for_graph(20, 40);
        assert_eq!(render(&config, 5), render(&config, 5));
    }
}
