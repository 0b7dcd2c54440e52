//! The end-to-end idiom graph pipeline.
//!
//! Load -> sample -> index -> merge -> (top-N) -> enumerate.

use std::path::Path;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::bucket::CharBuckets;
use crate::chain::{
    ChainGraph, ProgressObserver, merge_beginnings, merge_endings, truncate_to_top,
};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::idiom::{Idiom, IdiomLoader};

/// Counts gathered while the pipeline runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSummary {
    /// Distinct idioms loaded from the input.
    pub loaded: usize,
    /// Idioms kept after sampling, when sampling was enabled.
    pub sampled: Option<usize>,
    /// Distinct first characters.
    pub first_characters: usize,
    /// Distinct last characters.
    pub last_characters: usize,
    /// First characters left after the top-N restriction.
    pub remaining_first_characters: Option<usize>,
    /// Last characters left after the top-N restriction.
    pub remaining_last_characters: Option<usize>,
    /// Character nodes in the graph.
    pub character_nodes: usize,
    /// Enumerated links.
    pub links: usize,
}

/// Result of a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub graph: ChainGraph,
    pub summary: PipelineSummary,
}

/// Turns idiom lines into a chain graph.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with the given configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Pipeline { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Build the random source for sampling: seeded when configured,
    /// otherwise seeded from the operating system.
    pub fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Run on raw lines.
    pub fn run_lines<I, S, R, P>(&self, lines: I, rng: &mut R, progress: &mut P) -> PipelineOutput
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: Rng + ?Sized,
        P: ProgressObserver + ?Sized,
    {
        let idioms = self.loader().load_lines(lines);
        info!("A total of {} idioms are loaded", idioms.len());
        self.run(idioms, rng, progress)
    }

    /// Run on the idiom file at `path`.
    pub fn run_path<R, P>(&self, path: &Path, rng: &mut R, progress: &mut P) -> Result<PipelineOutput>
    where
        R: Rng + ?Sized,
        P: ProgressObserver + ?Sized,
    {
        let idioms = self.loader().load_path(path)?;
        Ok(self.run(idioms, rng, progress))
    }

    /// Run on an already loaded, deduplicated idiom set.
    pub fn run<R, P>(&self, idioms: Vec<Idiom>, rng: &mut R, progress: &mut P) -> PipelineOutput
    where
        R: Rng + ?Sized,
        P: ProgressObserver + ?Sized,
    {
        let mut summary = PipelineSummary {
            loaded: idioms.len(),
            ..PipelineSummary::default()
        };

        let idioms = self.loader().sample(idioms, rng);
        if idioms.len() < summary.loaded {
            summary.sampled = Some(idioms.len());
        }

        let buckets = CharBuckets::index(&idioms);
        let limit = self.config.limit_num_idioms_each_node;
        // Both rules read the unmerged key sets; merging never changes keys.
        let mut endings = merge_endings(&buckets.endings, limit);
        let mut beginnings = merge_beginnings(&buckets.beginnings, limit);
        summary.first_characters = beginnings.len();
        summary.last_characters = endings.len();
        info!("A total of {} first-characters are processed", beginnings.len());
        info!("A total of {} last-characters are processed", endings.len());

        if let Some(n) = self.config.top_char_nodes() {
            beginnings = truncate_to_top(&beginnings, n);
            endings = truncate_to_top(&endings, n);
            summary.remaining_first_characters = Some(beginnings.len());
            summary.remaining_last_characters = Some(endings.len());
            info!("A total of {} first-characters remained", beginnings.len());
            info!("A total of {} last-characters remained", endings.len());
        }

        let graph = ChainGraph::build(&beginnings, &endings, progress);
        summary.character_nodes = graph.characters().len();
        summary.links = graph.link_count();

        PipelineOutput { graph, summary }
    }

    fn loader(&self) -> IdiomLoader {
        IdiomLoader::new(self.config.limit_num_idioms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{CountingProgress, NoProgress};

    fn unsampled() -> Pipeline {
        Pipeline::new(PipelineConfig {
            limit_num_idioms: -1,
            ..PipelineConfig::default()
        })
    }

    #[test]
    fn test_chain_example() {
        let pipeline = unsampled();
        let mut rng = StdRng::seed_from_u64(0);
        let output = pipeline.run_lines(
            ["一心一意", "意气风发", "发财致富", "富贵荣华"],
            &mut rng,
            &mut NoProgress,
        );

        assert_eq!(output.summary.loaded, 4);
        assert_eq!(output.summary.sampled, None);
        assert_eq!(output.summary.first_characters, 4);
        assert_eq!(output.summary.last_characters, 4);
        assert_eq!(output.summary.links, 3);
        assert_eq!(output.graph.characters(), &["发", "富", "意"]);

        let labels: Vec<(String, &str, String)> = output
            .graph
            .links()
            .iter()
            .map(|l| (l.ending.label(), l.character.as_str(), l.beginning.label()))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("意气风发".to_string(), "发", "发财致富".to_string()),
                ("发财致富".to_string(), "富", "富贵荣华".to_string()),
                ("一心一意".to_string(), "意", "意气风发".to_string()),
            ]
        );
    }

    #[test]
    fn test_sampling_summary() {
        let pipeline = Pipeline::new(PipelineConfig {
            limit_num_idioms: 2,
            seed: Some(3),
            ..PipelineConfig::default()
        });
        let mut rng = pipeline.rng();
        let output = pipeline.run_lines(
            ["一心一意", "意气风发", "发财致富", "富贵荣华"],
            &mut rng,
            &mut NoProgress,
        );

        assert_eq!(output.summary.loaded, 4);
        assert_eq!(output.summary.sampled, Some(2));
    }

    #[test]
    fn test_top_n_summary() {
        let pipeline = Pipeline::new(PipelineConfig {
            limit_num_idioms: 0,
            limit_char_nodes: 1,
            ..PipelineConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(0);
        let mut progress = CountingProgress::default();
        let output = pipeline.run_lines(
            ["一心一意", "一马当先", "意气风发", "先发制人"],
            &mut rng,
            &mut progress,
        );

        assert_eq!(output.summary.remaining_first_characters, Some(1));
        assert_eq!(output.summary.remaining_last_characters, Some(1));
        assert_eq!(progress.total, Some(output.summary.links));
    }

    #[test]
    fn test_empty_input() {
        let pipeline = Pipeline::default();
        let mut rng = StdRng::seed_from_u64(0);
        let output = pipeline.run_lines(Vec::<String>::new(), &mut rng, &mut NoProgress);

        assert_eq!(output.summary.loaded, 0);
        assert!(output.graph.is_empty());
    }
}
